//! Error types for the songcast client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connecting to the server failed
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Reading from an established connection failed
    #[error("Connection lost: {0}")]
    ReadFailed(String),

    /// The server closed the connection
    #[error("Server closed the connection")]
    Disconnected,

    /// Every reconnection attempt failed
    #[error("Failed to reconnect after {0} attempts")]
    ReconnectExhausted(u32),

    /// The user did not pick a favorite genre
    #[error("No favorite genre chosen")]
    NoFavoriteGenre,

    /// The interactive prompt could not be shown
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl ClientError {
    /// Whether the session had reached the server before failing.
    pub fn had_connected(&self) -> bool {
        matches!(self, Self::ReadFailed(_) | Self::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_had_connected_distinguishes_connect_failures() {
        // テスト項目: 接続後の切断と接続失敗が区別される
        // given (前提条件):
        let lost = [
            ClientError::Disconnected,
            ClientError::ReadFailed("reset".to_string()),
        ];
        let never_connected = ClientError::ConnectionError("refused".to_string());

        // when (操作):
        // then (期待する結果):
        assert!(lost.iter().all(ClientError::had_connected));
        assert!(!never_connected.had_connected());
    }
}
