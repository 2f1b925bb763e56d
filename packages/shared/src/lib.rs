//! Shared building blocks for the songcast server and client.
//!
//! - `protocol`: the newline-delimited song record exchanged over TCP
//! - `genre`: the fixed vocabulary of search terms
//! - `logger`: tracing subscriber setup
//! - `time`: clock abstraction and timestamp formatting

pub mod genre;
pub mod logger;
pub mod protocol;
pub mod time;
