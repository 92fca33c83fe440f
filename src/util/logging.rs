//! Tracing subscriber setup

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. When a log file is
/// configured, output is appended to it without ANSI colors; otherwise it goes
/// to stdout.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(true)
    .with_thread_ids(true);

  let result = match &config.file {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
      builder
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init()
    }
    None => builder.try_init(),
  };

  result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
