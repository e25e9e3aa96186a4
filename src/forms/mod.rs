//! Request bodies accepted by the lead routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod lead;

#[derive(Debug, Error)]
/// Errors that can occur when processing a lead payload.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("name cannot be empty")]
    InvalidName,

    #[error("email cannot be empty")]
    InvalidEmail,

    #[error("phone cannot be empty")]
    InvalidPhoneNumber,
}
