//! Terminal client for the song broadcast server.
//!
//! Connects to the server over TCP and prints every song it broadcasts.
//! Songs of the favorite genre are marked; with `--only-favorites` the others
//! are not shown. Without `--favorite-genre` the client asks for one.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin songcast-client
//! cargo run --bin songcast-client -- --favorite-genre jazz --only-favorites
//! ```

use std::time::Duration;

use clap::Parser;

use songcast_client::{
    config::ClientConfig, error::ClientError, prompt::ask_favorite_genre, run_client,
};
use songcast_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "songcast-client")]
#[command(about = "Shows the songs broadcast by a songcast server", long_about = None)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = ClientConfig::DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(short = 'p', long, default_value_t = ClientConfig::DEFAULT_PORT)]
    port: u16,

    /// Favorite genre (asked interactively when omitted)
    #[arg(short = 'g', long)]
    favorite_genre: Option<String>,

    /// Only show songs of the favorite genre
    #[arg(long)]
    only_favorites: bool,

    /// Milliseconds of silence that end a record
    #[arg(long, default_value_t = ClientConfig::DEFAULT_QUIET_PERIOD_MS)]
    quiet_ms: u64,
}

async fn resolve_favorite_genre(given: Option<String>) -> Result<String, ClientError> {
    match given.map(|genre| genre.trim().to_string()) {
        Some(genre) if !genre.is_empty() => Ok(genre),
        Some(_) => Err(ClientError::NoFavoriteGenre),
        None => tokio::task::spawn_blocking(ask_favorite_genre)
            .await
            .map_err(|e| ClientError::Prompt(e.to_string()))?,
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let favorite_genre = match resolve_favorite_genre(args.favorite_genre).await {
        Ok(genre) => genre,
        Err(ClientError::NoFavoriteGenre) => {
            println!("No favorite genre chosen. Exiting.");
            return;
        }
        Err(e) => {
            tracing::error!("Client error: {}", e);
            std::process::exit(1);
        }
    };

    let config = ClientConfig {
        host: args.host,
        port: args.port,
        favorite_genre,
        only_favorites: args.only_favorites,
        quiet_period: Duration::from_millis(args.quiet_ms),
    };

    // Run the client
    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
