//! ConnectionRegistry trait 定義
//!
//! 接続中の購読者ハンドルの集合。Acceptor が追加し、Broadcaster が
//! スナップショットを取り、送信失敗時に削除します。

use async_trait::async_trait;

use super::{ClientHandle, HandleId};

/// Concurrency-safe set of connected subscribers.
///
/// Each operation is atomic with respect to the others: a snapshot never
/// observes a half-applied add or remove.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Register a handle and return the new subscriber count.
    ///
    /// A handle whose id is already registered is not added twice.
    async fn add(&self, handle: ClientHandle) -> usize;

    /// Point-in-time copy of the registered handles, in registration order.
    async fn snapshot(&self) -> Vec<ClientHandle>;

    /// Remove a handle. Returns `false` if it was not registered.
    async fn remove(&self, id: HandleId) -> bool;

    /// Number of registered handles.
    async fn count(&self) -> usize;

    /// Remove and return every registered handle.
    async fn drain(&self) -> Vec<ClientHandle>;
}
