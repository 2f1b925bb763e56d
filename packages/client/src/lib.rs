//! Terminal client for the songcast broadcast server.
//!
//! Connects over TCP, reassembles each broadcast record from the byte stream
//! and prints it, marking songs of the user's favorite genre.

pub mod assembler;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod prompt;
pub mod runner;
pub mod session;

pub use runner::run_client;
