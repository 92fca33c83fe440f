//! A durable key-value store served over HTTP.
//!
//! Values are opaque JSON documents kept in memory and persisted as a single
//! snapshot file after every write.

pub mod config;
pub mod encoding;
pub mod protocol;
pub mod server;
pub mod store;
pub mod util;

pub use encoding::Payload;
pub use server::Server;
pub use store::{Store, StoreError};
