//! Wire format for song records.
//!
//! The server writes one record per broadcast tick as raw UTF-8 text:
//!
//! ```text
//! <title> – <artist>\n<category>\n<link>
//! ```
//!
//! There is no length prefix and no trailing newline. `link` may be empty.
//! Receivers must accept payloads with one, two or three fields; the last
//! field present is taken as the link.

use std::fmt;

/// Placeholder used when the song source omits a title or artist.
pub const UNKNOWN: &str = "Unknown";

/// Separator between title and artist on the first line.
pub const TITLE_ARTIST_SEPARATOR: &str = " – ";

/// One song as broadcast by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    /// Genre term used for the lookup
    pub category: String,
    /// May be empty
    pub link: String,
}

impl SongRecord {
    /// Build a record, substituting [`UNKNOWN`] for missing title/artist and
    /// an empty string for a missing link.
    pub fn new(
        title: Option<String>,
        artist: Option<String>,
        category: impl Into<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| UNKNOWN.to_string()),
            artist: artist.unwrap_or_else(|| UNKNOWN.to_string()),
            category: category.into(),
            link: link.unwrap_or_default(),
        }
    }

    /// Serialize to the wire form.
    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SongRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}\n{}\n{}",
            self.title, TITLE_ARTIST_SEPARATOR, self.artist, self.category, self.link
        )
    }
}

/// A record as understood by a receiving client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPayload {
    /// First line, usually `"<title> – <artist>"`
    pub info: String,
    /// Trimmed, lowercased genre; empty when the payload has no genre line
    pub genre: String,
    /// Trimmed last field; `None` for single-field payloads
    pub link: Option<String>,
}

impl SongPayload {
    /// Parse a received payload. Never fails: malformed input degrades to a
    /// payload carrying the whole text as `info`.
    pub fn parse(text: &str) -> Self {
        let parts: Vec<&str> = text.split('\n').collect();
        match parts.as_slice() {
            [info, genre, link, ..] => Self {
                info: info.to_string(),
                genre: genre.trim().to_lowercase(),
                link: Some(link.trim().to_string()),
            },
            [info, link] => Self {
                info: info.to_string(),
                genre: String::new(),
                link: Some(link.trim().to_string()),
            },
            _ => Self {
                info: text.to_string(),
                genre: String::new(),
                link: None,
            },
        }
    }

    /// The link, only if it looks like a web URI.
    pub fn web_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .filter(|link| link.starts_with("http"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_record_wire_format() {
        // テスト項目: SongRecord が "title – artist\ncategory\nlink" 形式で直列化される
        // given (前提条件):
        let record = SongRecord::new(
            Some("A".to_string()),
            Some("B".to_string()),
            "jazz",
            Some("http://x".to_string()),
        );

        // when (操作):
        let wire = record.to_wire();

        // then (期待する結果):
        assert_eq!(wire, "A – B\njazz\nhttp://x");
    }

    #[test]
    fn test_song_record_defaults_for_missing_fields() {
        // テスト項目: 欠けたフィールドはデフォルト値で補われる
        // given (前提条件):

        // when (操作):
        let record = SongRecord::new(None, None, "metal", None);

        // then (期待する結果):
        assert_eq!(record.title, "Unknown");
        assert_eq!(record.artist, "Unknown");
        assert_eq!(record.link, "");
        assert_eq!(record.to_wire(), "Unknown – Unknown\nmetal\n");
    }

    #[test]
    fn test_serialized_record_parses_back_on_client() {
        // テスト項目: 直列化したレコードをクライアント側で解析すると同じフィールドが得られる
        // given (前提条件):
        let record = SongRecord::new(
            Some("Song".to_string()),
            Some("Artist".to_string()),
            "rock",
            Some("http://example.com".to_string()),
        );

        // when (操作):
        let payload = SongPayload::parse(&record.to_wire());

        // then (期待する結果):
        assert_eq!(payload.info, "Song – Artist");
        assert_eq!(payload.genre, "rock");
        assert_eq!(payload.link.as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_parse_two_field_payload() {
        // テスト項目: 2 フィールドのペイロードはジャンル無しとして解析される
        // given (前提条件):
        let text = "Song – Artist\nhttp://example.com";

        // when (操作):
        let payload = SongPayload::parse(text);

        // then (期待する結果):
        assert_eq!(payload.info, "Song – Artist");
        assert_eq!(payload.genre, "");
        assert_eq!(payload.link.as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_parse_single_field_payload() {
        // テスト項目: 1 フィールドのペイロードは info のみとして解析される
        // given (前提条件):
        let text = "just some text";

        // when (操作):
        let payload = SongPayload::parse(text);

        // then (期待する結果):
        assert_eq!(payload.info, "just some text");
        assert_eq!(payload.genre, "");
        assert_eq!(payload.link, None);
        assert_eq!(payload.web_link(), None);
    }

    #[test]
    fn test_parse_normalizes_genre_and_link() {
        // テスト項目: ジャンルは小文字化・トリムされ、リンクはトリムされる
        // given (前提条件):
        let text = "X – Y\n  Hip Hop \n https://example.com/track/1 ";

        // when (操作):
        let payload = SongPayload::parse(text);

        // then (期待する結果):
        assert_eq!(payload.genre, "hip hop");
        assert_eq!(payload.web_link(), Some("https://example.com/track/1"));
    }

    #[test]
    fn test_web_link_rejects_non_http_link() {
        // テスト項目: http で始まらないリンクは表示対象にならない
        // given (前提条件):
        let payload = SongPayload::parse("X – Y\nrock\n");

        // when (操作):
        let link = payload.web_link();

        // then (期待する結果):
        assert_eq!(payload.link.as_deref(), Some(""));
        assert_eq!(link, None);
    }
}
