//! UseCase: 全接続の切断処理（シャットダウン時）

use std::sync::Arc;

use crate::domain::ConnectionRegistry;

/// 全購読者切断のユースケース
pub struct DisconnectAllUseCase {
    /// Registry（接続中ハンドルの集合）
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectAllUseCase {
    /// 新しい DisconnectAllUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Registry を空にし、取り出した全ハンドルの接続を閉じる
    ///
    /// # Returns
    ///
    /// 閉じたハンドルの数
    pub async fn execute(&self) -> usize {
        let handles = self.registry.drain().await;
        let closed = handles.len();
        for handle in handles {
            handle.close().await;
            tracing::debug!("Closed subscriber {}", handle.peer());
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ClientHandle, MockTransport},
        infrastructure::registry::InMemoryConnectionRegistry,
    };

    #[tokio::test]
    async fn test_disconnect_all_closes_every_handle() {
        // テスト項目: 登録済みの全ハンドルが閉じられ、Registry が空になる
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        for port in [50001u16, 50002, 50003] {
            let mut transport = MockTransport::new();
            transport.expect_close().times(1).returning(|| ());
            let peer = format!("127.0.0.1:{}", port).parse().unwrap();
            registry
                .add(ClientHandle::new(peer, Arc::new(transport)))
                .await;
        }
        let usecase = DisconnectAllUseCase::new(registry.clone());

        // when (操作):
        let closed = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(closed, 3);
        assert_eq!(registry.count().await, 0);
    }

    #[tokio::test]
    async fn test_disconnect_all_on_empty_registry() {
        // テスト項目: Registry が空でもエラーにならない
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = DisconnectAllUseCase::new(registry);

        // when (操作):
        let closed = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(closed, 0);
    }
}
