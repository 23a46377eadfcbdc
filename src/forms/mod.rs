//! Form definitions backing lead create and edit dialogs.

use thiserror::Error;
use validator::ValidationErrors;

pub mod lead;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid company name")]
    InvalidCompanyName,
}
