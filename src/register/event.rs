/// Actions the user can perform on the registration screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegisterEvent {
    EnteredUsername(String),
    EnteredEmail(String),
    EnteredPassword(String),
    TogglePasswordVisibility,
    /// Submit: validates every field and may mark the form valid.
    Register,
}
