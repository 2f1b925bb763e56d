//! UseCase: 曲のブロードキャスト処理（1 tick 分）
//!
//! ## 処理の流れ
//!
//! 1. ジャンルをランダムに選ぶ
//! 2. SongSource で曲を検索する（結果なしならこの tick は送信しない）
//! 3. Registry のスナップショットを取る
//! 4. スナップショットの順に各ハンドルへ送信する
//!    - 失敗したハンドルは閉じて Registry から削除し、残りへの送信を続ける
//!
//! 送信はスナップショットに対して行うため、送信中に接続・切断が起きても
//! Registry のロックを待つことはありません。tick 間の待機はこのユースケースの
//! 責務ではなく、`ui::broadcaster` が行います。

use std::sync::Arc;

use rand::seq::SliceRandom;
use songcast_shared::genre::default_genres;

use crate::domain::{ConnectionRegistry, SongSource};

/// Result of fanning one payload out to a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutReport {
    /// Handles that accepted the payload
    pub delivered: usize,
    /// Handles whose send failed and were removed
    pub dropped: usize,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The song source returned no result; nothing was sent
    Skipped { category: String },
    /// A record was fanned out
    Delivered {
        category: String,
        report: FanOutReport,
    },
}

/// 曲ブロードキャストのユースケース
pub struct BroadcastSongUseCase {
    /// Registry（接続中ハンドルの集合）
    registry: Arc<dyn ConnectionRegistry>,
    /// SongSource（曲検索の抽象化）
    song_source: Arc<dyn SongSource>,
    /// 検索に使うジャンルの語彙
    categories: Vec<String>,
}

impl BroadcastSongUseCase {
    /// 新しい BroadcastSongUseCase を作成
    ///
    /// `categories` が空の場合は既定のジャンル語彙を使います。
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        song_source: Arc<dyn SongSource>,
        categories: Vec<String>,
    ) -> Self {
        let categories = if categories.is_empty() {
            default_genres()
        } else {
            categories
        };
        Self {
            registry,
            song_source,
            categories,
        }
    }

    /// 1 tick を実行
    pub async fn execute(&self) -> TickOutcome {
        let category = self.pick_category();

        let Some(song) = self.song_source.fetch(&category).await else {
            tracing::info!("No song found for '{}', skipping this tick", category);
            return TickOutcome::Skipped { category };
        };

        let payload = song.to_wire();
        let report = self.fan_out(payload.as_bytes()).await;
        tracing::info!(
            "Broadcast '{} – {}' ({}) to {} subscriber(s), dropped {}",
            song.title,
            song.artist,
            category,
            report.delivered,
            report.dropped
        );

        TickOutcome::Delivered { category, report }
    }

    /// スナップショット中の全ハンドルに payload を送信
    ///
    /// 各ハンドルへの送信は高々 1 回です。失敗したハンドルは閉じて Registry
    /// から削除し、以降の tick では送信対象になりません。
    pub async fn fan_out(&self, payload: &[u8]) -> FanOutReport {
        let mut report = FanOutReport::default();

        for handle in self.registry.snapshot().await {
            match handle.deliver(payload).await {
                Ok(()) => {
                    report.delivered += 1;
                    tracing::debug!(
                        "Sent to {}: {}",
                        handle.peer(),
                        String::from_utf8_lossy(payload)
                    );
                }
                Err(e) => {
                    report.dropped += 1;
                    tracing::warn!("Subscriber {} disconnected: {}", handle.peer(), e);
                    handle.close().await;
                    self.registry.remove(handle.id()).await;
                }
            }
        }

        report
    }

    /// 語彙から一様ランダムにジャンルを選ぶ
    fn pick_category(&self) -> String {
        self.categories
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}
