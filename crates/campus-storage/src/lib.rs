//! Durable client-local storage for the Campus client.
//!
//! This crate is the Rust counterpart of the browser's localStorage: an
//! opaque key/value store that survives restarts. It provides:
//! - the [`ClientStorage`] trait for storage backends
//! - a JSON-file backend ([`FileStorage`])
//! - [`SessionVault`], the high-level API for session persistence

mod file;
mod keys;
mod session;
mod traits;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use session::{SessionMeta, SessionVault};
pub use traits::ClientStorage;

use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific storage error
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
