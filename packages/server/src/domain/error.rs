//! Domain errors.

use std::time::Duration;

use thiserror::Error;

/// A failed attempt to deliver a payload to one subscriber.
///
/// Every variant means the same thing to the broadcaster: close the handle
/// and drop it from the registry.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The peer shut down its side of the connection
    #[error("peer closed the connection")]
    PeerClosed,

    /// The transport was already closed locally
    #[error("transport is closed")]
    Closed,

    /// The write did not complete in time
    #[error("send timed out after {0:?}")]
    Timeout(Duration),

    /// Write error, broken pipe, connection reset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
