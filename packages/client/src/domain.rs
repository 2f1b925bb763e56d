//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use songcast_shared::{genre::genre_matches, protocol::SongPayload};

/// How a received song relates to the user's favorite genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Same genre as the favorite: show and mark it
    Favorite,
    /// Other genre: show it unmarked
    Other,
    /// Other genre while only favorites are shown: do not display
    Hidden,
}

/// Client-local genre filter over the stream of received songs.
///
/// Never waits for a matching song; every received song gets a verdict
/// immediately.
#[derive(Debug, Clone)]
pub struct FavoriteFilter {
    favorite: String,
    only_favorites: bool,
}

impl FavoriteFilter {
    pub fn new(favorite: impl Into<String>, only_favorites: bool) -> Self {
        Self {
            favorite: favorite.into(),
            only_favorites,
        }
    }

    pub fn classify(&self, payload: &SongPayload) -> Verdict {
        if !payload.genre.is_empty() && genre_matches(&payload.genre, &self.favorite) {
            Verdict::Favorite
        } else if self.only_favorites {
            Verdict::Hidden
        } else {
            Verdict::Other
        }
    }
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `current_attempt` - The number of failed attempts so far
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(current_attempt: u32, max_attempts: u32) -> bool {
    current_attempt < max_attempts
}

/// Failed attempts counted after a session ended.
///
/// A session that had reached the server starts a new series, so only
/// back-to-back failures count toward the reconnection limit.
pub fn failed_attempts_after(previous: u32, session_had_connected: bool) -> u32 {
    if session_had_connected {
        1
    } else {
        previous.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(genre: &str) -> SongPayload {
        SongPayload::parse(&format!("Song – Artist\n{}\nhttp://example.com", genre))
    }

    #[test]
    fn test_matching_genre_is_favorite() {
        // テスト項目: 好きなジャンルと一致する曲は Favorite と判定される
        // given (前提条件):
        let filter = FavoriteFilter::new("Jazz", false);

        // when (操作):
        let verdict = filter.classify(&payload("jazz"));

        // then (期待する結果):
        assert_eq!(verdict, Verdict::Favorite);
    }

    #[test]
    fn test_other_genre_is_shown_unmarked() {
        // テスト項目: 一致しないジャンルの曲は Other と判定される
        // given (前提条件):
        let filter = FavoriteFilter::new("jazz", false);

        // when (操作):
        let verdict = filter.classify(&payload("rock"));

        // then (期待する結果):
        assert_eq!(verdict, Verdict::Other);
    }

    #[test]
    fn test_other_genre_is_hidden_with_only_favorites() {
        // テスト項目: only_favorites のとき、一致しないジャンルの曲は Hidden になる
        // given (前提条件):
        let filter = FavoriteFilter::new("jazz", true);

        // when (操作):
        let verdict = filter.classify(&payload("rock"));

        // then (期待する結果):
        assert_eq!(verdict, Verdict::Hidden);
    }

    #[test]
    fn test_payload_without_genre_never_matches() {
        // テスト項目: ジャンルの無いペイロードは好きなジャンルと一致しない
        // given (前提条件):
        let filter = FavoriteFilter::new("", false);
        let two_fields = SongPayload::parse("Song – Artist\nhttp://example.com");

        // when (操作):
        let verdict = filter.classify(&two_fields);

        // then (期待する結果):
        assert_eq!(verdict, Verdict::Other);
    }

    #[test]
    fn test_should_attempt_reconnect_within_limit() {
        // テスト項目: 再接続回数が上限未満の場合、再接続すべきと判定される
        // given (前提条件):
        let current_attempt = 3;

        // when (操作):
        let result = should_attempt_reconnect(current_attempt, 5);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_attempt_reconnect_at_limit() {
        // テスト項目: 再接続回数が上限に達した場合、再接続すべきではないと判定される
        // given (前提条件):
        let current_attempt = 5;

        // when (操作):
        let result = should_attempt_reconnect(current_attempt, 5);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_failed_attempts_reset_after_connected_session() {
        // テスト項目: 接続できたセッションの後は失敗回数が数え直される
        // given (前提条件):
        let previous = 4;

        // when (操作):
        let after_connected = failed_attempts_after(previous, true);
        let after_refused = failed_attempts_after(previous, false);

        // then (期待する結果):
        assert_eq!(after_connected, 1);
        assert_eq!(after_refused, 5);
    }

    #[test]
    fn test_repeated_server_restarts_never_exhaust_reconnects() {
        // テスト項目: 接続と切断を何度繰り返しても再接続の上限に達しない
        // given (前提条件):
        let mut failed = 0;

        // when (操作):
        for _ in 0..20 {
            failed = failed_attempts_after(failed, true);
        }

        // then (期待する結果):
        assert!(should_attempt_reconnect(failed, 5));
    }
}
