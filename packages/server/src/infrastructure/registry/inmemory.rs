//! InMemory ConnectionRegistry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! 登録順を保つため `Vec` をストレージとして使用します。
//!
//! ロックは各操作の間だけ保持され、ネットワーク送信中に保持されることは
//! ありません。呼び出し側はスナップショット（コピー）だけを受け取ります。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ClientHandle, ConnectionRegistry, HandleId};

/// インメモリ ConnectionRegistry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// 接続中のハンドル（登録順）
    handles: Mutex<Vec<ClientHandle>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい空の InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn add(&self, handle: ClientHandle) -> usize {
        let mut handles = self.handles.lock().await;
        if handles.iter().any(|h| h.id() == handle.id()) {
            tracing::debug!("Handle {} already registered, ignoring", handle.id());
        } else {
            tracing::debug!("Handle {} ({}) registered", handle.id(), handle.peer());
            handles.push(handle);
        }
        handles.len()
    }

    async fn snapshot(&self) -> Vec<ClientHandle> {
        let handles = self.handles.lock().await;
        handles.clone()
    }

    async fn remove(&self, id: HandleId) -> bool {
        let mut handles = self.handles.lock().await;
        let before = handles.len();
        handles.retain(|h| h.id() != id);
        let removed = handles.len() != before;
        if removed {
            tracing::debug!("Handle {} unregistered", id);
        }
        removed
    }

    async fn count(&self) -> usize {
        let handles = self.handles.lock().await;
        handles.len()
    }

    async fn drain(&self) -> Vec<ClientHandle> {
        let mut handles = self.handles.lock().await;
        std::mem::take(&mut *handles)
    }
}
