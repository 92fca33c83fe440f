use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::protocol;
use crate::store::Store;

/// HTTP server over a shared store
pub struct Server {
  listener: TcpListener,
  local_addr: SocketAddr,
  store: Arc<Store>,
}

impl Server {
  /// Bind the listener; the store should already be loaded
  pub async fn bind(addr: &str, store: Arc<Store>) -> std::io::Result<Self> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("HTTP server bound to {}", local_addr);

    Ok(Self {
      listener,
      local_addr,
      store,
    })
  }

  /// Get local listening address
  pub fn local_addr(&self) -> SocketAddr {
    self.local_addr
  }

  /// Serve requests until `shutdown` resolves, then drain in-flight requests
  pub async fn run<F>(self, shutdown: F) -> std::io::Result<()>
  where
    F: Future<Output = ()> + Send + 'static,
  {
    info!(
      "Server started, listening on {} with {} keys",
      self.local_addr,
      self.store.count()
    );

    let app = protocol::router(self.store);
    axum::serve(self.listener, app)
      .with_graceful_shutdown(shutdown)
      .await?;

    info!("Server stopped");
    Ok(())
  }
}

/// Resolves on Ctrl-C. If the signal handler cannot be installed, never
/// resolves.
pub async fn shutdown_signal() {
  match tokio::signal::ctrl_c().await {
    Ok(()) => info!("Shutdown signal received"),
    Err(e) => {
      error!("Failed to listen for shutdown signal: {}", e);
      std::future::pending::<()>().await
    }
  }
}
