pub mod config;
pub mod form;
pub mod register;

pub use config::{ConfigError, RegistrationConfig};
pub use register::{
    EmailError, PasswordError, RegisterEvent, RegisterForm, RegisterState,
    RegistrationFormValidator, UsernameError,
};
