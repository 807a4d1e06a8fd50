use serde::{Deserialize, Serialize};

use crate::{AlbumID3, Client, ClientError, ClientResult};

/// An artist with ID3 metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistID3 {
    /// The id of the artist.
    pub id: String,
    /// The name of the artist.
    pub name: String,
    /// The cover art of the artist.
    pub cover_art: Option<String>,
    /// The artist image url.
    pub artist_image_url: Option<String>,
    /// The album count of the artist.
    pub album_count: u32,
    /// The date the artist was starred. [ISO 8601]
    pub starred: Option<String>,
    /// The artist MusicBrainzID.
    pub music_brainz_id: Option<String>,
    /// The artist sort name.
    pub sort_name: Option<String>,
}

/// An artist along with their albums.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistWithAlbumsID3 {
    /// The artist metadata.
    #[serde(flatten)]
    pub artist: ArtistID3,
    /// The artist's albums.
    #[serde(default)]
    pub album: Vec<AlbumID3>,
}

/// Artist-related endpoints.
impl Client {
    /// Get every artist in the library, flattened across the server's
    /// alphabetical index.
    pub async fn get_artists(&self) -> ClientResult<Vec<ArtistID3>> {
        #[derive(Deserialize)]
        struct Index {
            #[serde(default)]
            artist: Vec<ArtistID3>,
        }

        #[derive(Deserialize)]
        struct Artists {
            #[serde(default)]
            index: Vec<Index>,
        }

        #[derive(Deserialize)]
        struct ArtistsResponse {
            artists: Option<Artists>,
        }

        Ok(self
            .request::<ArtistsResponse>("getArtists", &[])
            .await?
            .artists
            .ok_or(ClientError::MissingData("artists"))?
            .index
            .into_iter()
            .flat_map(|index| index.artist)
            .collect())
    }

    /// Get a specific artist with their albums.
    pub async fn get_artist(&self, id: impl Into<String>) -> ClientResult<ArtistWithAlbumsID3> {
        #[derive(Deserialize)]
        struct ArtistResponse {
            artist: Option<ArtistWithAlbumsID3>,
        }

        self.request::<ArtistResponse>("getArtist", &[("id", id.into())])
            .await?
            .artist
            .ok_or(ClientError::MissingData("artist"))
    }
}
