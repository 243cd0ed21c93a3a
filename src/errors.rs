use axum::http::StatusCode;
use thiserror::Error;

/// Rejected submissions. The HTML forms swallow these; the JSON API reports them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },
    #[error("task text must not be empty")]
    EmptyTaskText,
    #[error("setup has already been completed")]
    SetupAlreadyComplete,
    #[error("setup has not been completed yet")]
    SetupIncomplete,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingRequiredField { .. } | ValidationError::EmptyTaskText => {
                Self::unprocessable(err.to_string())
            }
            ValidationError::SetupAlreadyComplete | ValidationError::SetupIncomplete => {
                Self::conflict(err.to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
