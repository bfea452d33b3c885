//! Bridge between `validator` derive output and [`CoreError`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}

/// Run the derived validation rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}
