use thiserror::Error;

use crate::api::errors::ApiError;
use crate::forms::FormError;
use crate::store::tracker::OperationKind;

pub mod export;
pub mod leads;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// An operation reached the API and failed; `message` is what the
    /// dashboard shows.
    #[error("{operation} failed: {message}")]
    Rejected {
        operation: OperationKind,
        message: String,
        #[source]
        source: ApiError,
    },

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Export error: {0}")]
    Export(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Message suitable for display, if this error came from the API.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            ServiceError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<csv::Error> for ServiceError {
    fn from(err: csv::Error) -> Self {
        ServiceError::Export(err.to_string())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Export(err.to_string())
    }
}
