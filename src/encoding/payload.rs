//! Opaque JSON payloads

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;

/// An already-serialized JSON document.
///
/// The store never looks inside a payload. Its text is kept exactly as it was
/// received and is written back out verbatim, both into the snapshot file and
/// into responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Box<RawValue>);

impl Payload {
  /// Wrap a well-formed JSON document without re-encoding it
  pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
    serde_json::from_slice::<Box<RawValue>>(bytes)
      .map(Payload)
      .map_err(DecodeError::InvalidJson)
  }

  /// The payload text as received
  pub fn as_str(&self) -> &str {
    self.0.get()
  }

  pub fn as_bytes(&self) -> &[u8] {
    self.as_str().as_bytes()
  }

  pub fn into_bytes(self) -> Vec<u8> {
    self.as_bytes().to_vec()
  }
}

impl PartialEq for Payload {
  fn eq(&self, other: &Self) -> bool {
    self.as_str() == other.as_str()
  }
}

impl Eq for Payload {}

/// Errors that can occur while wrapping a payload
#[derive(Debug, Error)]
pub enum DecodeError {
  /// Input is not a single well-formed JSON document
  #[error("invalid JSON payload: {0}")]
  InvalidJson(#[source] serde_json::Error),
}
