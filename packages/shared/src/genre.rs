//! Genre vocabulary used as search terms by the broadcaster.

/// Search terms the broadcaster picks from before each lookup.
///
/// Clients show the same list when asking for a favorite genre.
pub const GENRES: [&str; 14] = [
    "rock",
    "pop",
    "classical",
    "latin",
    "jazz",
    "blues",
    "reggaeton",
    "electronic",
    "hip hop",
    "indie",
    "metal",
    "country",
    "salsa",
    "trap",
];

/// Owned copy of [`GENRES`], convenient for config structs.
pub fn default_genres() -> Vec<String> {
    GENRES.iter().map(|genre| genre.to_string()).collect()
}

/// Case-insensitive, whitespace-tolerant genre comparison.
pub fn genre_matches(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
