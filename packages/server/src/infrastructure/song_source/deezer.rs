//! Deezer 検索 API を使った SongSource 実装
//!
//! `GET {api_url}?q={category}&limit=25` を 1 回だけ呼び出し、結果の中から
//! ランダムに 1 曲を選びます。タイムアウト・HTTP エラー・不正なボディ・
//! 空の結果は全て `None` になります。

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::Deserialize;
use songcast_shared::protocol::SongRecord;

use crate::domain::SongSource;

/// Public Deezer search endpoint
pub const DEEZER_SEARCH_URL: &str = "https://api.deezer.com/search";

/// Number of results requested, and the pool a track is picked from
pub const SEARCH_RESULT_LIMIT: usize = 25;

/// Search response body. Error bodies have no `data` field.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Track {
    title: Option<String>,
    artist: Option<Artist>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Artist {
    name: Option<String>,
}

impl Track {
    fn into_record(self, category: &str) -> SongRecord {
        SongRecord::new(
            self.title,
            self.artist.and_then(|artist| artist.name),
            category,
            self.link,
        )
    }
}

/// SongSource backed by the Deezer search API.
pub struct DeezerSongSource {
    client: reqwest::Client,
    api_url: String,
}

impl DeezerSongSource {
    /// Create a source for `api_url` whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. no TLS backend).
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    async fn search(&self, category: &str) -> Result<Vec<Track>, reqwest::Error> {
        let limit = SEARCH_RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", category), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body: SearchResponse = response.json().await?;
        Ok(body.data)
    }
}

#[async_trait]
impl SongSource for DeezerSongSource {
    async fn fetch(&self, category: &str) -> Option<SongRecord> {
        match self.search(category).await {
            Ok(tracks) => {
                let track = pick_track(tracks);
                if track.is_none() {
                    tracing::debug!("No results for '{}'", category);
                }
                track.map(|track| track.into_record(category))
            }
            Err(e) => {
                tracing::warn!("Song lookup for '{}' failed: {}", category, e);
                None
            }
        }
    }
}

/// Pick one track uniformly at random from the first [`SEARCH_RESULT_LIMIT`] results.
fn pick_track(mut tracks: Vec<Track>) -> Option<Track> {
    tracks.truncate(SEARCH_RESULT_LIMIT);
    if tracks.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..tracks.len());
    Some(tracks.swap_remove(index))
}
