//! SongSource の実装
//!
//! - `deezer`: Deezer 検索 API を使った実装

pub mod deezer;

pub use deezer::{DEEZER_SEARCH_URL, DeezerSongSource, SEARCH_RESULT_LIMIT};
