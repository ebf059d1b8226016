use unicode_general_category::{GeneralCategory, get_general_category};

use crate::config::RegistrationConfig;
use crate::form::{FieldKey, FormModel, apply_validator};

use super::email::is_valid_email;
use super::event::RegisterEvent;
use super::state::{EmailError, PasswordError, RegisterState, UsernameError};

pub fn validate_username(text: &str, config: &RegistrationConfig) -> Result<(), UsernameError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UsernameError::FieldEmpty);
    }
    if input_length(trimmed) < config.min_username_length {
        return Err(UsernameError::InputTooShort);
    }
    Ok(())
}

pub fn validate_email(text: &str) -> Result<(), EmailError> {
    if text.trim().is_empty() {
        return Err(EmailError::FieldEmpty);
    }
    if !is_valid_email(text) {
        return Err(EmailError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(text: &str, config: &RegistrationConfig) -> Result<(), PasswordError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PasswordError::FieldEmpty);
    }
    if input_length(trimmed) < config.min_password_length {
        return Err(PasswordError::InputTooShort);
    }
    let has_uppercase = text.chars().any(char::is_uppercase);
    let has_digit = text.chars().any(is_decimal_digit);
    if !has_uppercase || !has_digit {
        return Err(PasswordError::InvalidPassword);
    }
    Ok(())
}

/// Length as the text fields report it: UTF-16 code units, so characters
/// outside the BMP count twice.
fn input_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Decimal digits in any script (category `Nd`). Fractions, superscripts and
/// letter-like numerals do not count.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Pure reducer over registration screen events.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RegistrationFormValidator {
    config: RegistrationConfig,
}

impl RegistrationFormValidator {
    pub fn new(config: RegistrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    pub fn reduce(&self, mut state: RegisterState, event: RegisterEvent) -> RegisterState {
        match event {
            RegisterEvent::EnteredUsername(value) => state.username_text = value,
            RegisterEvent::EnteredEmail(value) => state.email_text = value,
            RegisterEvent::EnteredPassword(value) => state.password_text = value,
            RegisterEvent::TogglePasswordVisibility => {
                state.is_password_visible = !state.is_password_visible;
            }
            RegisterEvent::Register => self.submit(&mut state),
        }
        state
    }

    fn submit(&self, state: &mut RegisterState) {
        let fields = RegisterState::fields();
        let config = self.config;

        // Every field runs, even after an earlier one failed.
        let username_ok = apply_validator(
            state,
            fields.username_text(),
            fields.username_error(),
            &|_: &RegisterState, text: &String| validate_username(text, &config),
        );
        let email_ok = apply_validator(
            state,
            fields.email_text(),
            fields.email_error(),
            &|_: &RegisterState, text: &String| validate_email(text),
        );
        let password_ok = apply_validator(
            state,
            fields.password_text(),
            fields.password_error(),
            &|_: &RegisterState, text: &String| validate_password(text, &config),
        );

        if username_ok && email_ok && password_ok {
            state.is_form_valid = true;
        }
        tracing::debug!(
            valid = state.is_form_valid,
            first_error = ?state.first_error_field(),
            "registration submitted"
        );
    }
}

/// One registration screen session: owns the state and feeds events through
/// [`RegistrationFormValidator::reduce`].
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    validator: RegistrationFormValidator,
    state: RegisterState,
}

impl RegisterForm {
    pub fn new(config: RegistrationConfig) -> Self {
        Self {
            validator: RegistrationFormValidator::new(config),
            state: RegisterState::default(),
        }
    }

    pub fn state(&self) -> &RegisterState {
        &self.state
    }

    /// Message for the text field with `key`, using this session's thresholds.
    pub fn error_message(&self, key: FieldKey) -> Option<String> {
        self.state.error_message(key, self.validator.config())
    }

    pub fn on_event(&mut self, event: RegisterEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = self.validator.reduce(state, event);
    }

    /// Dispatches [`RegisterEvent::Register`] and reports whether the caller
    /// may move on past the registration screen.
    pub fn submit(&mut self) -> bool {
        self.on_event(RegisterEvent::Register);
        self.state.is_form_valid
    }
}
