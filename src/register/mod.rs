mod email;
mod event;
mod state;
mod validator;


pub use email::is_valid_email;
pub use event::RegisterEvent;
pub use state::{EmailError, PasswordError, RegisterState, UsernameError};
pub use validator::{
    RegisterForm, RegistrationFormValidator, validate_email, validate_password, validate_username,
};
