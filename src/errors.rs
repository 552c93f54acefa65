use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::Serialize;
use tracing::error;

/// Error body returned by JSON endpoints (bulk delete in particular).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Service-level errors raised by the services and surfaced by handlers.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::DatabaseError(_) | ServiceError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message suitable for the wire. Internal failures are logged in full
    /// and replaced with a generic message so raw error text never reaches
    /// the client.
    pub fn response_message(&self) -> String {
        match self {
            ServiceError::InvalidInput(msg) => msg.clone(),
            ServiceError::NotFound(msg) => msg.clone(),
            ServiceError::DatabaseError(err) => {
                error!("database error: {err}");
                "Internal server error.".to_string()
            }
            ServiceError::InternalError(detail) => {
                error!("internal error: {detail}");
                "Internal server error.".to_string()
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.response_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<tera::Error> for ServiceError {
    fn from(err: tera::Error) -> Self {
        ServiceError::InternalError(format!("template rendering failed: {err}"))
    }
}
