use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use kvstore::config::Config;
use kvstore::server::{self, Server};
use kvstore::store::Store;
use kvstore::util::logging;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "kvstore", version, about = "Durable key-value store over HTTP")]
struct Args {
  /// TOML configuration file
  #[arg(long)]
  config: Option<String>,

  /// Listening address, overrides the config file
  #[arg(long, value_name = "IP:PORT")]
  addr: Option<String>,

  /// Snapshot file, overrides the config file
  #[arg(long, env = "DATA_PATH")]
  data_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  let mut config = match &args.config {
    Some(path) => Config::from_file(path)?,
    None => Config::default(),
  };
  if let Some(addr) = args.addr {
    config.server_addr = addr;
  }
  if let Some(data_path) = args.data_path {
    config.data_path = data_path;
  }

  logging::init(&config.log)?;

  info!("Starting kvstore {}", env!("CARGO_PKG_VERSION"));
  info!("Using data path: {}", config.data_path.display());

  let store = Store::open(&config.data_path).context("Failed to initialize store")?;
  if let Err(e) = store.load() {
    warn!("Failed to load existing data: {}", e);
  }

  let server = Server::bind(&config.server_addr, Arc::new(store))
    .await
    .with_context(|| format!("Failed to bind {}", config.server_addr))?;
  info!("Server listening on: {}", server.local_addr());

  server.run(server::shutdown_signal()).await?;

  Ok(())
}
