use serde::{Deserialize, Serialize};

use crate::{Child, Client, ClientError, ClientResult};

/// A playlist, without its entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Playlist {
    /// The playlist ID.
    pub id: String,
    /// The playlist name.
    pub name: String,
    /// The playlist comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The user who owns the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Whether other users can see the playlist.
    pub public: bool,
    /// The number of entries.
    pub song_count: u32,
    /// The total duration in seconds.
    pub duration: u32,
    /// When the playlist was created.
    pub created: String,
    /// When the playlist was last changed.
    pub changed: String,
    /// The playlist cover art ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
}

/// A playlist with its entries, in playlist order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistWithSongs {
    /// The playlist metadata.
    #[serde(flatten)]
    pub playlist: Playlist,
    /// The entries.
    #[serde(default)]
    pub entry: Vec<Child>,
}

/// Playlist-related endpoints.
impl Client {
    /// Get all playlists visible to the user.
    pub async fn get_playlists(&self) -> ClientResult<Vec<Playlist>> {
        #[derive(Deserialize)]
        struct Playlists {
            #[serde(default)]
            playlist: Vec<Playlist>,
        }

        #[derive(Deserialize)]
        struct PlaylistsResponse {
            playlists: Option<Playlists>,
        }

        Ok(self
            .request::<PlaylistsResponse>("getPlaylists", &[])
            .await?
            .playlists
            .ok_or(ClientError::MissingData("playlists"))?
            .playlist)
    }

    /// Get a playlist along with its entries.
    pub async fn get_playlist(&self, id: impl Into<String>) -> ClientResult<PlaylistWithSongs> {
        #[derive(Deserialize)]
        struct PlaylistResponse {
            playlist: Option<PlaylistWithSongs>,
        }

        self.request::<PlaylistResponse>("getPlaylist", &[("id", id.into())])
            .await?
            .playlist
            .ok_or(ClientError::MissingData("playlist"))
    }
}
