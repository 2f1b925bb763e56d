//! Interactive favorite-genre prompt.

use rustyline::{DefaultEditor, error::ReadlineError};
use songcast_shared::genre::GENRES;

use crate::{error::ClientError, formatter::SongFormatter};

/// Genre pre-filled in the prompt
pub const DEFAULT_FAVORITE_GENRE: &str = "rock";

/// Ask the user for a favorite genre on the terminal.
///
/// Blocks on stdin; call it from a blocking context. An empty answer,
/// Ctrl+C or Ctrl+D yields [`ClientError::NoFavoriteGenre`].
pub fn ask_favorite_genre() -> Result<String, ClientError> {
    let mut rl = DefaultEditor::new().map_err(|e| ClientError::Prompt(e.to_string()))?;

    print!("{}", SongFormatter::format_genre_prompt(&GENRES));

    match rl.readline_with_initial("favorite genre> ", (DEFAULT_FAVORITE_GENRE, "")) {
        Ok(line) => normalize_answer(&line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            Err(ClientError::NoFavoriteGenre)
        }
        Err(e) => Err(ClientError::Prompt(e.to_string())),
    }
}

/// Trim the answer; an empty answer means no favorite was chosen.
fn normalize_answer(line: &str) -> Result<String, ClientError> {
    let genre = line.trim();
    if genre.is_empty() {
        Err(ClientError::NoFavoriteGenre)
    } else {
        Ok(genre.to_string())
    }
}
