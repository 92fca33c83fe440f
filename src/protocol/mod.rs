//! HTTP protocol implementation
//!
//! Translates HTTP requests into store calls and store outcomes into
//! responses:
//!
//! - `PUT /objects` with `{"key": ..., "value": ...}` stores and persists a value
//! - `GET /objects/{key}` returns the stored value

pub mod error;
pub mod get;
pub mod put;

use std::sync::Arc;

use axum::{routing, Router};
use tower_http::trace::{
  DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::store::Store;

pub use error::ApiError;
pub use put::PutRequest;

/// Build the application router over a shared store
pub fn router(store: Arc<Store>) -> Router {
  Router::new()
    .route("/objects", routing::put(put::put_object))
    .route("/objects/:key", routing::get(get::get_object))
    .with_state(store)
    .layer(
      TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
