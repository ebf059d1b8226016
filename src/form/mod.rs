mod field;
mod validation;

pub use field::{FieldKey, FieldLens, FormModel};
pub use socialnetwork_form_derive::FormModel;
pub use validation::{FieldValidator, ValidationError, apply_validator};
