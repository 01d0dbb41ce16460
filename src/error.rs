use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failure while recording or announcing a submission.
///
/// Malformed input is not an error: it is replaced by a sentinel record
/// before it reaches the pipeline. A body that could not be read at all
/// (over the size limit, aborted upload) is.
#[derive(Debug)]
pub enum IntakeError {
    Body { status: StatusCode, message: String },
    Persistence(String),
    Notification(String),
}

impl IntakeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::Body { status, .. } => *status,
            IntakeError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            IntakeError::Notification(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Body { message, .. } => write!(f, "{message}"),
            IntakeError::Persistence(msg) => write!(f, "{msg}"),
            IntakeError::Notification(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for IntakeError {}

impl From<sqlx::Error> for IntakeError {
    fn from(err: sqlx::Error) -> Self {
        IntakeError::Persistence(format!("Database error: {err}"))
    }
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
