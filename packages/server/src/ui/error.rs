//! Error types for the broadcast server.

use thiserror::Error;

/// Server-level errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Accepting kept failing; the listener is considered unusable
    #[error("Listener failed after {failures} consecutive accept errors: {source}")]
    ListenerFailed {
        failures: u32,
        #[source]
        source: std::io::Error,
    },

    /// The song source could not be initialized
    #[error("Failed to initialize song source: {0}")]
    SongSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
