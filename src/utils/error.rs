//! Error types for the Breezy browser shell
//!
//! The error surface of the coordination layer is deliberately narrow:
//! policy rejections and user cancellations are ordinary control flow, and
//! engine-level failures (unreachable host, TLS, render crash) are surfaced
//! by the engine's own UI. What remains is startup configuration.

use thiserror::Error;

/// Main error type for Breezy operations
#[derive(Debug, Error)]
pub enum BreezyError {
    /// I/O errors (configuration file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience Result type for Breezy operations
pub type Result<T> = std::result::Result<T, BreezyError>;
