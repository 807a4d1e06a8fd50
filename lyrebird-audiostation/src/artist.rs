use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult, Endpoint};

/// An artist in the AudioStation library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Artist {
    /// The artist ID, if the server sends one.
    pub id: String,
    /// The artist name.
    pub name: String,
    /// The number of albums, or 0 if the server does not report it.
    pub album_count: u32,
}

#[derive(Deserialize)]
struct ArtistList {
    #[serde(default)]
    artists: Vec<Artist>,
}

/// Artist-related endpoints.
impl Client {
    /// Get a page of artists.
    pub async fn get_artists(&self, limit: u32, offset: u32) -> ClientResult<Vec<Artist>> {
        let list: ArtistList = self
            .request(
                Endpoint::Artist,
                "list",
                &[
                    ("library", "all".to_string()),
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                ],
                "Failed to load artists",
            )
            .await?;
        Ok(list.artists)
    }

    /// Get a single artist by name.
    pub async fn get_artist(&self, name: impl Into<String>) -> ClientResult<Artist> {
        let name = name.into();
        let list: ArtistList = self
            .request(
                Endpoint::Artist,
                "list",
                &[("library", "all".to_string()), ("keyword", name.clone())],
                "Failed to load artist",
            )
            .await?;
        list.artists
            .into_iter()
            .find(|artist| artist.name == name)
            .ok_or(ClientError::MissingData("artists"))
    }
}
