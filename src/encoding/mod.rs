//! Value encoding for storage
//!
//! Values are kept in the exact serialized form the client sent; this module
//! provides the wrapper type the store passes around.

pub mod payload;

pub use payload::{DecodeError, Payload};
