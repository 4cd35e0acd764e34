use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::models::error::GenerationError;
use crate::responses::ErrorResponse;
use crate::storage::StorageError;

#[derive(Debug)]
pub enum AppError {
    Generation(GenerationError),
    BadRequest(String),
    InvalidBody(String),
    InvalidFilename(String),
    NotFound(String),
    Io(std::io::Error),
    Blocking(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Generation(e) => e.code(),
            AppError::BadRequest(_) => "BadRequest",
            AppError::InvalidBody(_) => "InvalidRequestBody",
            AppError::InvalidFilename(_) => "InvalidFilename",
            AppError::NotFound(_) => "NotFound",
            AppError::Io(_) => "StorageError",
            AppError::Blocking(_) => "InternalError",
        }
    }

    /// Which instruction failed, for per-slide generation errors.
    fn details(&self) -> Option<serde_json::Value> {
        let AppError::Generation(e) = self else {
            return None;
        };
        match e {
            GenerationError::UnknownSlideMethod { index, method }
            | GenerationError::MalformedTable { index, method, .. }
            | GenerationError::SlideRender { index, method, .. } => {
                Some(serde_json::json!({ "index": index, "method": method }))
            }
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Generation(e) => write!(f, "{e}"),
            AppError::BadRequest(msg) => write!(f, "{msg}"),
            AppError::InvalidBody(msg) => write!(f, "Invalid request body: {msg}"),
            AppError::InvalidFilename(msg) => write!(f, "Invalid filename: {msg}"),
            AppError::NotFound(name) => write!(f, "Presentation not found: {name}"),
            AppError::Io(e) => write!(f, "Storage error: {e}"),
            AppError::Blocking(e) => write!(f, "Worker error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Generation(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) | AppError::InvalidBody(_) | AppError::InvalidFilename(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{self}");
        } else {
            log::error!("Request rejected ({}): {self}", status.as_u16());
        }
        HttpResponse::build(status).json(ErrorResponse {
            details: self.details(),
            ..ErrorResponse::new(self.code(), self.to_string())
        })
    }
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidFilename(msg) => AppError::InvalidFilename(msg),
            StorageError::NotFound(name) => AppError::NotFound(name),
            StorageError::Io(e) => AppError::Io(e),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Blocking(e.to_string())
    }
}
