use crate::config::RegistrationConfig;
use crate::form::{FieldKey, FieldLens, FormModel, ValidationError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UsernameError {
    FieldEmpty,
    InputTooShort,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EmailError {
    FieldEmpty,
    InvalidEmail,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PasswordError {
    FieldEmpty,
    InputTooShort,
    InvalidPassword,
}

const FIELD_EMPTY_MESSAGE: &str = "This field can't be empty";
const INPUT_TOO_SHORT_MESSAGE: &str = "The input is too short";

impl ValidationError for UsernameError {
    fn message(&self) -> String {
        match self {
            Self::FieldEmpty => FIELD_EMPTY_MESSAGE,
            Self::InputTooShort => INPUT_TOO_SHORT_MESSAGE,
        }
        .to_string()
    }
}

impl ValidationError for EmailError {
    fn message(&self) -> String {
        match self {
            Self::FieldEmpty => FIELD_EMPTY_MESSAGE,
            Self::InvalidEmail => "This is not a valid email",
        }
        .to_string()
    }
}

impl ValidationError for PasswordError {
    fn message(&self) -> String {
        match self {
            Self::FieldEmpty => FIELD_EMPTY_MESSAGE,
            Self::InputTooShort => INPUT_TOO_SHORT_MESSAGE,
            Self::InvalidPassword => {
                "The password needs to contain at least one uppercase letter and number"
            }
        }
        .to_string()
    }
}

/// UI state of one registration screen session.
///
/// Errors stay `None` until the first submit. `is_form_valid` is only ever
/// raised by a submit that found no errors; later edits and failing submits
/// leave it untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq, FormModel)]
pub struct RegisterState {
    pub username_text: String,
    pub email_text: String,
    pub password_text: String,
    pub is_password_visible: bool,
    pub username_error: Option<UsernameError>,
    pub email_error: Option<EmailError>,
    pub password_error: Option<PasswordError>,
    pub is_form_valid: bool,
}

impl RegisterState {
    pub fn has_errors(&self) -> bool {
        self.username_error.is_some()
            || self.email_error.is_some()
            || self.password_error.is_some()
    }

    /// Key of the first text field, in validation order, that holds an error.
    pub fn first_error_field(&self) -> Option<FieldKey> {
        let fields = Self::fields();
        if self.username_error.is_some() {
            Some(fields.username_text().key())
        } else if self.email_error.is_some() {
            Some(fields.email_text().key())
        } else if self.password_error.is_some() {
            Some(fields.password_text().key())
        } else {
            None
        }
    }

    /// Message for the error shown under the text field with `key`.
    ///
    /// Too-short errors name the minimum length from `config`.
    pub fn error_message(&self, key: FieldKey, config: &RegistrationConfig) -> Option<String> {
        let fields = Self::fields();
        if key == fields.username_text().key() {
            self.username_error.map(|error| match error {
                UsernameError::InputTooShort => too_short_message(config.min_username_length),
                other => other.message(),
            })
        } else if key == fields.email_text().key() {
            self.email_error.map(|error| error.message())
        } else if key == fields.password_text().key() {
            self.password_error.map(|error| match error {
                PasswordError::InputTooShort => too_short_message(config.min_password_length),
                other => other.message(),
            })
        } else {
            None
        }
    }
}

fn too_short_message(min_length: usize) -> String {
    format!("{INPUT_TOO_SHORT_MESSAGE}, it needs at least {min_length} characters")
}
