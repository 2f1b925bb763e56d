//! Transport trait 定義
//!
//! 購読者 1 人分の送信路。TCP 実装は Infrastructure 層にあります。

use async_trait::async_trait;

use super::DeliveryError;

/// One subscriber's outbound byte stream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Write the whole payload or fail.
    async fn send(&self, payload: &[u8]) -> Result<(), DeliveryError>;

    /// Close the underlying connection. Closing twice is a no-op.
    async fn close(&self);
}
