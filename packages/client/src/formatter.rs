//! Message formatting utilities for client display.

use songcast_shared::{protocol::SongPayload, time::timestamp_to_clock_label};

use crate::domain::Verdict;

const RULE: &str = "------------------------------------------------------------";

/// Song formatter for client display
pub struct SongFormatter;

impl SongFormatter {
    /// Format the banner shown after connecting
    pub fn format_connected(server_addr: &str, favorite_genre: &str) -> String {
        format!(
            "\nConnected to {}. Favorite genre: {}\nWaiting for the next song... (Ctrl+C to exit)\n",
            server_addr, favorite_genre
        )
    }

    /// Format a received song
    ///
    /// # Arguments
    ///
    /// * `payload` - The parsed record
    /// * `verdict` - Favorite-genre verdict for the record
    /// * `received_at` - Unix timestamp when the record was received (milliseconds)
    pub fn format_now_playing(payload: &SongPayload, verdict: Verdict, received_at: i64) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "Now playing ({}): {}\n",
            timestamp_to_clock_label(received_at),
            payload.info
        ));
        if !payload.genre.is_empty() {
            output.push_str(&format!("Genre: {}\n", payload.genre));
        }
        if let Some(link) = payload.web_link() {
            output.push_str(&format!("Link: {}\n", link));
        }
        if verdict == Verdict::Favorite {
            output.push_str("♥ matches your favorite genre\n");
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format the genre question shown when no favorite was given
    pub fn format_genre_prompt(genres: &[&str]) -> String {
        format!("Choose your favorite genre:\n{}\n", genres.join(", "))
    }
}
