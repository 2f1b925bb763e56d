//! Transport の実装
//!
//! - `tcp`: tokio の `TcpStream` を使った実装

pub mod tcp;

pub use tcp::TcpTransport;
