use super::field::FieldLens;

pub trait ValidationError: Clone + PartialEq {
    fn message(&self) -> String;
}

pub trait FieldValidator<T, L, E>
where
    L: FieldLens<T>,
    E: ValidationError,
{
    fn validate(&self, model: &T, value: &L::Value) -> Result<(), E>;
}

impl<T, L, E, F> FieldValidator<T, L, E> for F
where
    L: FieldLens<T>,
    E: ValidationError,
    F: Fn(&T, &L::Value) -> Result<(), E>,
{
    fn validate(&self, model: &T, value: &L::Value) -> Result<(), E> {
        (self)(model, value)
    }
}

/// Runs `validator` against the value behind `source` and stores the outcome
/// in the error slot behind `target`, clearing it when the value passes.
///
/// Returns `true` when the field passed.
pub fn apply_validator<T, S, R, E, V>(
    model: &mut T,
    source: S,
    target: R,
    validator: &V,
) -> bool
where
    S: FieldLens<T>,
    R: FieldLens<T, Value = Option<E>>,
    E: ValidationError,
    V: FieldValidator<T, S, E>,
{
    let current: &T = model;
    let outcome = validator.validate(current, source.get(current)).err();
    if let Some(error) = &outcome {
        tracing::debug!(
            field = %source.key(),
            error = %error.message(),
            "field failed validation"
        );
    }
    let passed = outcome.is_none();
    target.set(model, outcome);
    passed
}
