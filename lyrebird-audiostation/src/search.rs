use serde::{Deserialize, Serialize};

use crate::{Album, Artist, Client, ClientResult, Endpoint, Song, song::SONG_ADDITIONAL};

/// The results of a search. Each list is independent and may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchResult {
    /// The matching songs.
    pub songs: Vec<Song>,
    /// The matching albums.
    pub albums: Vec<Album>,
    /// The matching artists.
    pub artists: Vec<Artist>,
}
impl SearchResult {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty() && self.albums.is_empty() && self.artists.is_empty()
    }
}

/// Search-related functionality.
impl Client {
    /// Search songs, albums and artists for `keyword`.
    pub async fn search(&self, keyword: impl Into<String>) -> ClientResult<SearchResult> {
        let result: Option<SearchResult> = self
            .request(
                Endpoint::Search,
                "list",
                &[
                    ("keyword", keyword.into()),
                    ("library", "all".to_string()),
                    ("additional", SONG_ADDITIONAL.to_string()),
                ],
                "Search failed",
            )
            .await?;
        Ok(result.unwrap_or_default())
    }
}
