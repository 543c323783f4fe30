//! Daemon error types.

use thiserror::Error;

/// Errors that can stop the daemon from starting.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The listener could not be bound or the server failed.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Type alias for daemon results.
pub type DaemonResult<T> = Result<T, DaemonError>;
