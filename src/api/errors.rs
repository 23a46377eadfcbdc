use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Lead not found")]
    NotFound { message: Option<String> },

    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Invalid request parameters: {0}")]
    Encode(String),

    #[error("Invalid API url: {0}")]
    Url(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message } | ApiError::Status { message, .. } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_html_form::ser::Error> for ApiError {
    fn from(err: serde_html_form::ser::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_server_errors_carry_a_message() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Email already taken".into()),
        };
        assert_eq!(err.server_message(), Some("Email already taken"));

        let err = ApiError::NotFound {
            message: Some(String::new()),
        };
        assert_eq!(err.server_message(), None);

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.server_message(), None);
    }
}
