use socialnetwork::form::{FieldLens, FormModel};

#[derive(Clone, socialnetwork::form::FormModel)]
struct LoginForm {
    email_text: String,
    remember_me: bool,
}

fn main() {
    let fields = LoginForm::fields();
    let mut model = LoginForm {
        email_text: "a@example.com".to_string(),
        remember_me: false,
    };
    fields.email_text().set(&mut model, "b@example.com".to_string());
    fields.remember_me().set(&mut model, true);
    assert_eq!(fields.email_text().key().as_str(), "email_text");
    assert_eq!(fields.email_text().get(&model), "b@example.com");
    assert!(*fields.remember_me().get(&model));
    let _: LoginFormEmailTextLens = fields.email_text();
}
