//! SongSource trait 定義
//!
//! 外部の曲検索 API の抽象。失敗は全て「結果なし」として扱います。

use async_trait::async_trait;
use songcast_shared::protocol::SongRecord;

/// Looks up one song for a genre term.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SongSource: Send + Sync {
    /// Returns `None` on timeout, transport error, malformed response or an
    /// empty result set. Callers skip the tick in every case.
    async fn fetch(&self, category: &str) -> Option<SongRecord>;
}
