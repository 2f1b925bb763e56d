//! Song broadcast server.
//!
//! Every interval, looks up a random song for a random genre and pushes it to
//! every connected TCP client as `"<title> – <artist>\n<genre>\n<link>"`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin songcast-server
//! cargo run --bin songcast-server -- --host 127.0.0.1 --port 12345 --interval-secs 5
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;

use songcast_server::{
    infrastructure::{registry::InMemoryConnectionRegistry, song_source::DeezerSongSource},
    ui::{Server, ServerConfig, ServerError},
};
use songcast_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "songcast-server")]
#[command(about = "Broadcasts a random song to every connected client at a fixed interval", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Seconds between broadcast ticks (at least 1)
    #[arg(
        short = 'i',
        long,
        default_value_t = ServerConfig::DEFAULT_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_secs: u64,

    /// Timeout for one song lookup, in seconds
    #[arg(long, default_value_t = ServerConfig::DEFAULT_FETCH_TIMEOUT_SECS)]
    fetch_timeout_secs: u64,

    /// Timeout for one write to one client, in seconds
    #[arg(long, default_value_t = ServerConfig::DEFAULT_SEND_TIMEOUT_SECS)]
    send_timeout_secs: u64,

    /// Song search endpoint
    #[arg(long, default_value = songcast_server::infrastructure::song_source::DEEZER_SEARCH_URL)]
    api_url: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            interval: Duration::from_secs(args.interval_secs),
            fetch_timeout: Duration::from_secs(args.fetch_timeout_secs),
            send_timeout: Duration::from_secs(args.send_timeout_secs),
            api_url: args.api_url,
            ..Self::default()
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    // 1. Registry (in-memory)
    let registry = Arc::new(InMemoryConnectionRegistry::new());

    // 2. SongSource (Deezer search API)
    let song_source = Arc::new(
        DeezerSongSource::new(config.api_url.clone(), config.fetch_timeout)
            .map_err(|e| ServerError::SongSource(e.to_string()))?,
    );

    // 3. Server
    Server::new(config, registry, song_source).run().await
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_reject_zero_interval() {
        // テスト項目: 0 秒の配信間隔は受け付けない
        // given (前提条件):
        let argv = ["songcast-server", "--interval-secs", "0"];

        // when (操作):
        let result = Args::try_parse_from(argv);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_args_convert_to_config() {
        // テスト項目: 引数が ServerConfig に変換される
        // given (前提条件):
        let argv = ["songcast-server", "-H", "127.0.0.1", "-p", "4000", "-i", "3"];

        // when (操作):
        let config = ServerConfig::from(Args::try_parse_from(argv).unwrap());

        // then (期待する結果):
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
        assert_eq!(config.interval, Duration::from_secs(3));
        assert_eq!(config.send_timeout, Duration::from_secs(5));
    }
}
