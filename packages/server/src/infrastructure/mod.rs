//! Infrastructure 層
//!
//! ドメイン層の trait の具体的な実装を提供します。
//!
//! - `registry`: インメモリの接続レジストリ
//! - `transport`: TCP 送信路
//! - `song_source`: Deezer 検索 API アダプタ

pub mod registry;
pub mod song_source;
pub mod transport;
