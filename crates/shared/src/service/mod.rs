pub mod academic;
pub mod announcement;
pub mod auth;
pub mod tuition;

use crate::errors::{ServiceError, format_validation_errors};
use validator::Validate;

pub(crate) fn validate<T: Validate>(req: &T) -> Result<(), ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))
}
