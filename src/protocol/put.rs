use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{error, info};

use crate::encoding::Payload;
use crate::protocol::error::ApiError;
use crate::store::Store;

/// Body of `PUT /objects`
#[derive(Debug, Deserialize, PartialEq)]
pub struct PutRequest {
  pub key: String,
  pub value: Payload,
}

impl PutRequest {
  /// Validate headers and decode the request body
  pub fn parse(headers: &HeaderMap, body: &[u8]) -> Result<Self, ApiError> {
    if !is_json(headers) {
      return Err(ApiError::UnsupportedMediaType);
    }

    let req: PutRequest =
      serde_json::from_slice(body).map_err(|_| ApiError::BadRequest("Invalid JSON format"))?;

    if req.key.is_empty() {
      return Err(ApiError::BadRequest("Key cannot be empty"));
    }

    Ok(req)
  }
}

/// Media type must be `application/json`; parameters such as charset are ignored
fn is_json(headers: &HeaderMap) -> bool {
  headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split(';').next())
    .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// `PUT /objects`: store the value, then persist the whole snapshot before
/// answering.
pub async fn put_object(
  State(store): State<Arc<Store>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<StatusCode, ApiError> {
  let PutRequest { key, value } = PutRequest::parse(&headers, &body)?;

  store.put(key.clone(), value);

  let saver = Arc::clone(&store);
  match tokio::task::spawn_blocking(move || saver.save()).await {
    Ok(Ok(())) => {}
    Ok(Err(e)) => {
      error!("Error saving data: {}", e);
      return Err(ApiError::Internal("Failed to persist data"));
    }
    Err(e) => {
      error!("Save task failed: {}", e);
      return Err(ApiError::Internal("Failed to persist data"));
    }
  }

  info!("Stored key: {}", key);
  Ok(StatusCode::OK)
}
