use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult, Endpoint};

/// An album in the AudioStation library.
///
/// AudioStation identifies albums by name and album artist; `id` is only
/// filled in by servers that send one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Album {
    /// The album ID, if the server sends one.
    pub id: String,
    /// The album name.
    pub name: String,
    /// The album artist tag.
    pub album_artist: String,
    /// The track artist tag, for single-artist albums.
    pub artist: String,
    /// The artist the server suggests for display.
    pub display_artist: String,
    /// The release year, or 0.
    pub year: u32,
    /// The total duration in seconds, or 0 if the server does not report it.
    pub duration: u32,
}
impl Album {
    /// The best available artist name for display.
    pub fn artist_name(&self) -> &str {
        [&self.display_artist, &self.album_artist, &self.artist]
            .into_iter()
            .find(|name| !name.is_empty())
            .map_or("", |name| name.as_str())
    }
}

#[derive(Deserialize)]
struct AlbumList {
    #[serde(default)]
    albums: Vec<Album>,
}

/// Album-related endpoints.
impl Client {
    /// Get a page of albums, sorted by name.
    pub async fn get_albums(&self, limit: u32, offset: u32) -> ClientResult<Vec<Album>> {
        let list: AlbumList = self
            .request(
                Endpoint::Album,
                "list",
                &[
                    ("library", "all".to_string()),
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                    ("sort_by", "name".to_string()),
                    ("sort_direction", "ASC".to_string()),
                ],
                "Failed to load albums",
            )
            .await?;
        Ok(list.albums)
    }

    /// Get a single album by its name and album artist.
    pub async fn get_album(
        &self,
        name: impl Into<String>,
        album_artist: impl Into<String>,
    ) -> ClientResult<Album> {
        let name = name.into();
        let album_artist = album_artist.into();

        let list: AlbumList = self
            .request(
                Endpoint::Album,
                "list",
                &[
                    ("library", "all".to_string()),
                    ("album", name.clone()),
                    ("album_artist", album_artist.clone()),
                ],
                "Failed to load album",
            )
            .await?;

        // The server filters loosely, so pick the exact match.
        list.albums
            .into_iter()
            .find(|album| album.name == name && album.album_artist == album_artist)
            .ok_or(ClientError::MissingData("albums"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_name_fallbacks() {
        let mut album = Album {
            artist: "Track Artist".to_string(),
            ..Default::default()
        };
        assert_eq!(album.artist_name(), "Track Artist");

        album.album_artist = "Album Artist".to_string();
        assert_eq!(album.artist_name(), "Album Artist");

        album.display_artist = "Display".to_string();
        assert_eq!(album.artist_name(), "Display");

        assert_eq!(Album::default().artist_name(), "");
    }
}
