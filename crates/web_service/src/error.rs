use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use list_store::StoreError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Backstop error type for request handlers.
///
/// Validation failures and missing lists/todos are answered explicitly in
/// the controllers (form re-render, flash-and-redirect); anything reaching
/// this type is an unexpected failure rendered as a JSON error body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(StoreError::SessionNotFound)
            | AppError::Store(StoreError::ListNotFound)
            | AppError::Store(StoreError::TodoNotFound) => StatusCode::NOT_FOUND,
            AppError::Store(StoreError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(StoreError::SerializationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: "api_error".to_string(),
            },
        };
        HttpResponse::build(status_code).json(error_response)
    }
}
