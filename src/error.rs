//! Unified error handling for the latency sender.

use thiserror::Error;

/// Main error type for sender operations
#[derive(Debug, Error)]
pub enum PinglatError {
    /// I/O related errors (report writing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid middleware configuration (bad locator, bad option value)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any failure surfaced by the middleware collaborator
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias using PinglatError
pub type PinglatResult<T> = Result<T, PinglatError>;
