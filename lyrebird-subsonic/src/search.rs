use serde::{Deserialize, Serialize};

use crate::{AlbumID3, ArtistID3, Child, Client, ClientResult};

/// A request to the `search3` endpoint.
#[derive(Debug, Clone, Default)]
pub struct Search3Request {
    /// The search query.
    pub query: String,
    /// The maximum number of artists to return.
    pub artist_count: Option<u32>,
    /// The search result offset for artists. Used for paging.
    pub artist_offset: Option<u32>,
    /// The maximum number of albums to return.
    pub album_count: Option<u32>,
    /// The search result offset for albums. Used for paging.
    pub album_offset: Option<u32>,
    /// The maximum number of songs to return.
    pub song_count: Option<u32>,
    /// The search result offset for songs. Used for paging.
    pub song_offset: Option<u32>,
    /// The ID of the music folder to return results from.
    pub music_folder_id: Option<String>,
}
impl Search3Request {
    /// Search for `query`, capping each kind of result independently.
    pub fn new(query: impl Into<String>, artist_count: u32, album_count: u32, song_count: u32) -> Self {
        Self {
            query: query.into(),
            artist_count: Some(artist_count),
            album_count: Some(album_count),
            song_count: Some(song_count),
            ..Default::default()
        }
    }

    fn parameters(&self) -> Vec<(&'static str, String)> {
        let mut parameters = vec![("query", self.query.clone())];
        let optional = [
            ("artistCount", self.artist_count),
            ("artistOffset", self.artist_offset),
            ("albumCount", self.album_count),
            ("albumOffset", self.album_offset),
            ("songCount", self.song_count),
            ("songOffset", self.song_offset),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                parameters.push((key, value.to_string()));
            }
        }
        if let Some(music_folder_id) = &self.music_folder_id {
            parameters.push(("musicFolderId", music_folder_id.clone()));
        }
        parameters
    }
}

/// A response from the `search3` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Search3Response {
    /// The artists found.
    #[serde(default)]
    pub artist: Vec<ArtistID3>,
    /// The albums found.
    #[serde(default)]
    pub album: Vec<AlbumID3>,
    /// The songs found.
    #[serde(default)]
    pub song: Vec<Child>,
}
impl Search3Response {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.artist.is_empty() && self.album.is_empty() && self.song.is_empty()
    }
}

/// Search-related functionality.
impl Client {
    /// Search artists, albums and songs.
    ///
    /// A successful response without a `searchResult3` is treated as no
    /// matches.
    pub async fn search3(&self, request: &Search3Request) -> ClientResult<Search3Response> {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Search3ApiResponse {
            #[serde(default)]
            search_result_3: Search3Response,
        }

        Ok(self
            .request::<Search3ApiResponse>("search3", &request.parameters())
            .await?
            .search_result_3)
    }
}
