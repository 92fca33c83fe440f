use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Request-level failures and the status code each one maps to
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
  #[error("Content-Type must be application/json")]
  UnsupportedMediaType,
  #[error("{0}")]
  BadRequest(&'static str),
  #[error("Key not found")]
  NotFound,
  #[error("{0}")]
  Internal(&'static str),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
  }
}
