//! UseCase: 購読者登録処理

use std::sync::Arc;

use crate::domain::{ClientHandle, ConnectionRegistry};

/// 購読者登録のユースケース
pub struct RegisterSubscriberUseCase {
    /// Registry（接続中ハンドルの集合）
    registry: Arc<dyn ConnectionRegistry>,
}

impl RegisterSubscriberUseCase {
    /// 新しい RegisterSubscriberUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 購読者を登録し、登録後の購読者数を返す
    ///
    /// 登録されたハンドルは次の tick から配信対象になります。
    pub async fn execute(&self, handle: ClientHandle) -> usize {
        let peer = handle.peer();
        let total = self.registry.add(handle).await;
        tracing::info!("New subscriber {} (total={})", peer, total);
        total
    }
}
