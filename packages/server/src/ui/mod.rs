//! Broadcast server runtime.
//!
//! Composes the acceptor and the broadcaster around a shared registry.

mod acceptor;
mod broadcaster;
mod config;
mod error;
mod server;
mod signal;

pub use acceptor::{AcceptFailures, MAX_CONSECUTIVE_ACCEPT_FAILURES, run_acceptor};
pub use broadcaster::run_broadcaster;
pub use config::ServerConfig;
pub use error::ServerError;
pub use server::Server;
pub use signal::shutdown_signal;
