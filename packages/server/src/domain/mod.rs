//! ドメイン層
//!
//! - `handle`: 購読者の接続を表す `ClientHandle` と識別子 `HandleId`
//! - `registry`: 接続中ハンドルの集合を扱う `ConnectionRegistry` trait
//! - `song_source`: 曲検索の抽象 `SongSource` trait
//! - `transport`: 送信路の抽象 `Transport` trait
//! - `error`: ドメインエラー
//!
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

mod error;
mod handle;
mod registry;
mod song_source;
mod transport;

pub use error::DeliveryError;
pub use handle::{ClientHandle, HandleId};
pub use registry::ConnectionRegistry;
pub use song_source::SongSource;
pub use transport::Transport;

#[cfg(test)]
pub use song_source::MockSongSource;
#[cfg(test)]
pub use transport::MockTransport;
