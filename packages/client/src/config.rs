//! Client configuration.

use std::time::Duration;

/// Runtime settings for one client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server host
    pub host: String,
    pub port: u16,
    /// Genre marked as favorite (compared case-insensitively)
    pub favorite_genre: String,
    /// Hide songs of other genres instead of just not marking them
    pub only_favorites: bool,
    /// Silence after which buffered bytes are treated as one complete record
    pub quiet_period: Duration,
}

impl ClientConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 12345;
    pub const DEFAULT_QUIET_PERIOD_MS: u64 = 250;

    /// `host:port` of the server
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            favorite_genre: crate::prompt::DEFAULT_FAVORITE_GENRE.to_string(),
            only_favorites: false,
            quiet_period: Duration::from_millis(Self::DEFAULT_QUIET_PERIOD_MS),
        }
    }
}
