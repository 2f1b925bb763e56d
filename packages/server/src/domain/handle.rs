//! 購読者ハンドル
//!
//! 接続 1 本につき 1 つの `ClientHandle` が作られます。クローンは同じ
//! 送信路を共有します。

use std::{fmt, net::SocketAddr, sync::Arc};

use uuid::Uuid;

use super::{DeliveryError, Transport};

/// Stable identity of a handle, used for removal matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(Uuid);

impl HandleId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A live connection to one subscriber.
#[derive(Clone)]
pub struct ClientHandle {
    id: HandleId,
    peer: SocketAddr,
    transport: Arc<dyn Transport>,
}

impl ClientHandle {
    /// Wrap a transport with a freshly generated id.
    pub fn new(peer: SocketAddr, transport: Arc<dyn Transport>) -> Self {
        Self {
            id: HandleId::generate(),
            peer,
            transport,
        }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Send one payload to this subscriber.
    pub async fn deliver(&self, payload: &[u8]) -> Result<(), DeliveryError> {
        self.transport.send(payload).await
    }

    /// Close the connection.
    pub async fn close(&self) {
        self.transport.close().await;
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("id", &self.id)
            .field("peer", &self.peer)
            .finish_non_exhaustive()
    }
}
