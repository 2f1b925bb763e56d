//! Song broadcast server library.
//!
//! Periodically looks up a song and fans it out to every connected TCP
//! subscriber, dropping subscribers whose connection has failed.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
