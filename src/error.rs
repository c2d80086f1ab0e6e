use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::directory::DirectoryError;
use crate::models::ErrorDetail;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(value: DirectoryError) -> Self {
        match value {
            DirectoryError::ActivityNotFound => ApiError::NotFound(value.to_string()),
            DirectoryError::AlreadySignedUp
            | DirectoryError::NotSignedUp
            | DirectoryError::ActivityFull => ApiError::BadRequest(value.to_string()),
        }
    }
}
