use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info};

use crate::encoding::Payload;

/// Errors raised by the store.
///
/// Only `CreateDir` is fatal; the rest are reported per call and leave the
/// in-memory mapping usable.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("failed to create data directory {}: {source}", .path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to open data file {}: {source}", .path.display())]
  Open { path: PathBuf, source: io::Error },

  #[error("failed to read data file {}: {source}", .path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to decode data: {0}")]
  Decode(#[source] serde_json::Error),

  #[error("failed to encode data: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("failed to create data file {}: {source}", .path.display())]
  Create { path: PathBuf, source: io::Error },

  #[error("failed to write data file {}: {source}", .path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// In-memory key-value store backed by a single JSON snapshot file
pub struct Store {
  data: RwLock<HashMap<String, Payload>>,
  path: PathBuf,
}

impl Store {
  /// Create an empty store persisted at `path`.
  ///
  /// The parent directory is created if it does not exist yet. Nothing is
  /// read from disk until [`Store::load`] is called.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
    let path = path.into();
    if let Some(dir) = path.parent() {
      fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
        path: dir.to_path_buf(),
        source,
      })?;
    }

    Ok(Self {
      data: RwLock::new(HashMap::new()),
      path,
    })
  }

  /// Path of the backing snapshot file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Set a key to the given value, replacing any previous value
  pub fn put(&self, key: String, value: Payload) {
    let mut data = self.data.write();
    data.insert(key, value);
  }

  /// Get the value for a key
  pub fn get(&self, key: &str) -> Option<Payload> {
    let data = self.data.read();
    data.get(key).cloned()
  }

  /// Number of keys currently held
  pub fn count(&self) -> usize {
    self.data.read().len()
  }

  /// Replace the mapping with the contents of the snapshot file.
  ///
  /// A missing or zero-length file is a fresh start, not an error. On a
  /// decode error the mapping is left as it was.
  pub fn load(&self) -> Result<(), StoreError> {
    let mut data = self.data.write();

    let mut file = match File::open(&self.path) {
      Ok(file) => file,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        info!(path = %self.path.display(), "No existing data file found, starting fresh");
        return Ok(());
      }
      Err(source) => {
        return Err(StoreError::Open {
          path: self.path.clone(),
          source,
        });
      }
    };

    let len = file
      .metadata()
      .map_err(|source| StoreError::Read {
        path: self.path.clone(),
        source,
      })?
      .len();
    if len == 0 {
      info!(path = %self.path.display(), "Data file is empty, starting fresh");
      return Ok(());
    }

    let mut bytes = Vec::with_capacity(len as usize);
    file
      .read_to_end(&mut bytes)
      .map_err(|source| StoreError::Read {
        path: self.path.clone(),
        source,
      })?;

    let loaded: HashMap<String, Payload> =
      serde_json::from_slice(&bytes).map_err(StoreError::Decode)?;
    *data = loaded;

    info!("Loaded {} keys from storage", data.len());
    Ok(())
  }

  /// Write the whole mapping to the snapshot file, overwriting it.
  ///
  /// Holds shared access for the duration of the write, so puts wait for the
  /// save to finish while gets proceed.
  pub fn save(&self) -> Result<(), StoreError> {
    let data = self.data.read();

    let mut encoded = serde_json::to_vec_pretty(&*data).map_err(StoreError::Encode)?;
    encoded.push(b'\n');

    let file = File::create(&self.path).map_err(|source| StoreError::Create {
      path: self.path.clone(),
      source,
    })?;
    let mut writer = BufWriter::new(file);
    writer
      .write_all(&encoded)
      .and_then(|_| writer.flush())
      .map_err(|source| StoreError::Write {
        path: self.path.clone(),
        source,
      })?;

    debug!(keys = data.len(), bytes = encoded.len(), "Saved snapshot");
    Ok(())
  }
}
