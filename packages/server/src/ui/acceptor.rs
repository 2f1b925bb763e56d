//! Connection intake loop.

use std::{sync::Arc, time::Duration};

use tokio::net::TcpListener;

use crate::{
    domain::ClientHandle, infrastructure::transport::TcpTransport,
    usecase::RegisterSubscriberUseCase,
};

use super::error::ServerError;

/// Consecutive accept errors after which the listener is treated as unusable.
pub const MAX_CONSECUTIVE_ACCEPT_FAILURES: u32 = 64;

/// Pause after a failed accept, e.g. while out of file descriptors.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

/// Tracks consecutive accept failures.
#[derive(Debug)]
pub struct AcceptFailures {
    consecutive: u32,
    limit: u32,
}

impl AcceptFailures {
    pub fn new(limit: u32) -> Self {
        Self {
            consecutive: 0,
            limit,
        }
    }

    /// Record one failure. Returns `true` once the limit is reached.
    pub fn record(&mut self) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive >= self.limit
    }

    /// A successful accept clears the streak.
    pub fn reset(&mut self) {
        self.consecutive = 0;
    }

    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }
}

/// Accept connections forever, registering each one as a subscriber.
///
/// A single failed accept is logged and the loop continues. Only a run of
/// [`MAX_CONSECUTIVE_ACCEPT_FAILURES`] failures ends the loop, with
/// [`ServerError::ListenerFailed`].
pub async fn run_acceptor(
    listener: &TcpListener,
    register: &RegisterSubscriberUseCase,
    send_timeout: Duration,
) -> Result<(), ServerError> {
    let mut failures = AcceptFailures::new(MAX_CONSECUTIVE_ACCEPT_FAILURES);

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                failures.reset();
                let transport = Arc::new(TcpTransport::new(stream, send_timeout));
                register.execute(ClientHandle::new(peer, transport)).await;
            }
            Err(e) => {
                tracing::error!("Failed to accept connection: {}", e);
                if failures.record() {
                    return Err(ServerError::ListenerFailed {
                        failures: failures.consecutive(),
                        source: e,
                    });
                }
                tokio::time::sleep(ACCEPT_BACKOFF).await;
            }
        }
    }
}
