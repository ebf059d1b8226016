use socialnetwork::form::FormModel;

#[allow(dead_code)]
#[derive(FormModel)]
struct DemoForm(String);

fn main() {}
