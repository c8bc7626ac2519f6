use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Errors surfaced by the store and the HTTP handlers.
#[derive(Debug, Display)]
pub enum AppError {
    /// Rejected input: bad date range, empty name, unknown employee, bad month.
    #[display(fmt = "{}", _0)]
    Validation(String),

    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(_) => None,
            AppError::Database(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(message) => {
                HttpResponse::BadRequest().json(json!({ "message": message }))
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                HttpResponse::InternalServerError().json(json!({
                    "message": "Something went wrong, Contact with system admin"
                }))
            }
        }
    }
}
