use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MealError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Database could not be reached; callers may retry.
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("could not store meal: {0}")]
    Unprocessable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl MealError {
    pub fn status(&self) -> StatusCode {
        match self {
            MealError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MealError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            MealError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MealError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Connection-level failures become `Unavailable`, everything else goes to `other`.
    pub fn from_sqlx(err: sqlx::Error, other: fn(String) -> MealError) -> MealError {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => MealError::Unavailable(err.to_string()),
            err => other(err.to_string()),
        }
    }
}

/// Malformed bodies (bad JSON, missing `rating`, wrong content type) are invalid input too.
impl From<JsonRejection> for MealError {
    fn from(rejection: JsonRejection) -> Self {
        MealError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for MealError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
