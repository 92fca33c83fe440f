use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::info;

use crate::protocol::error::ApiError;
use crate::store::Store;

/// `GET /objects/{key}`: return the stored payload exactly as it was written
pub async fn get_object(
  State(store): State<Arc<Store>>,
  Path(key): Path<String>,
) -> Result<Response, ApiError> {
  if key.is_empty() {
    return Err(ApiError::BadRequest("Key cannot be empty"));
  }

  let value = store.get(&key).ok_or(ApiError::NotFound)?;

  info!("Retrieved key: {}", key);
  Ok(([(header::CONTENT_TYPE, "application/json")], value.into_bytes()).into_response())
}
