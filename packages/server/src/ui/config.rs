//! Server configuration.

use std::time::Duration;

use songcast_shared::genre::default_genres;

use crate::infrastructure::song_source::DEEZER_SEARCH_URL;

/// Runtime settings for [`Server`](super::Server).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    pub port: u16,
    /// Wait between broadcast ticks
    pub interval: Duration,
    /// Upper bound on one song lookup
    pub fetch_timeout: Duration,
    /// Upper bound on one write to one subscriber
    pub send_timeout: Duration,
    /// Song search endpoint
    pub api_url: String,
    /// Genre vocabulary the broadcaster picks from
    pub genres: Vec<String>,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 12345;
    pub const DEFAULT_INTERVAL_SECS: u64 = 10;
    pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;
    pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 5;

    /// `host:port` string to bind to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            interval: Duration::from_secs(Self::DEFAULT_INTERVAL_SECS),
            fetch_timeout: Duration::from_secs(Self::DEFAULT_FETCH_TIMEOUT_SECS),
            send_timeout: Duration::from_secs(Self::DEFAULT_SEND_TIMEOUT_SECS),
            api_url: DEEZER_SEARCH_URL.to_string(),
            genres: default_genres(),
        }
    }
}
