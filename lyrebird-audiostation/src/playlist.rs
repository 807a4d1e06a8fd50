use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult, Endpoint, Song};

/// A playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Playlist {
    /// The playlist ID, e.g. `playlist_personal_normal/3`.
    pub id: String,
    /// The playlist name.
    pub name: String,
    /// `personal` or `shared`.
    pub library: String,
    /// `normal` or `smart`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Member songs, present only when fetched with [`Client::get_playlist`].
    pub additional: PlaylistAdditional,
}
impl Playlist {
    /// The member songs, in playlist order.
    pub fn songs(&self) -> &[Song] {
        &self.additional.songs
    }
}

/// Optional playlist details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaylistAdditional {
    /// The member songs, in playlist order.
    pub songs: Vec<Song>,
    /// The total number of member songs.
    pub songs_total: u32,
}

#[derive(Deserialize)]
struct PlaylistList {
    #[serde(default)]
    playlists: Vec<Playlist>,
}

/// Playlist-related endpoints.
impl Client {
    /// Get all playlists, personal and shared.
    pub async fn get_playlists(&self) -> ClientResult<Vec<Playlist>> {
        let list: PlaylistList = self
            .request(
                Endpoint::Playlist,
                "list",
                &[("library", "all".to_string())],
                "Failed to load playlists",
            )
            .await?;
        Ok(list.playlists)
    }

    /// Get a playlist with its songs.
    pub async fn get_playlist(&self, id: impl Into<String>) -> ClientResult<Playlist> {
        let list: PlaylistList = self
            .request(
                Endpoint::Playlist,
                "getinfo",
                &[
                    ("id", id.into()),
                    ("library", "all".to_string()),
                    ("additional", "songs_song_tag,songs_song_audio".to_string()),
                ],
                "Failed to load playlist",
            )
            .await?;
        list.playlists
            .into_iter()
            .next()
            .ok_or(ClientError::MissingData("playlists"))
    }
}
