//! UseCase 層
//!
//! - `register_subscriber`: 受け付けた接続を Registry に登録
//! - `broadcast_song`: 1 tick 分の曲検索とファンアウト
//! - `disconnect_all`: シャットダウン時に全接続を閉じる

mod broadcast_song;
mod disconnect_all;
mod register_subscriber;

pub use broadcast_song::{BroadcastSongUseCase, FanOutReport, TickOutcome};
pub use disconnect_all::DisconnectAllUseCase;
pub use register_subscriber::RegisterSubscriberUseCase;
