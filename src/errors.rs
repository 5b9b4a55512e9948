use axum::http::StatusCode;

/// Failures of habit collection operations.
#[derive(Debug, thiserror::Error)]
pub enum HabitError {
    #[error("habit name must not be empty")]
    EmptyName,

    #[error("habit {0} not found")]
    NotFound(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("duplicate habit id {0}")]
    DuplicateId(String),

    #[error("import payload must be a JSON array of habits")]
    NotAnArray,

    #[error("malformed import payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<HabitError> for AppError {
    fn from(err: HabitError) -> Self {
        match err {
            HabitError::NotFound(_) => Self::not_found(err.to_string()),
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
