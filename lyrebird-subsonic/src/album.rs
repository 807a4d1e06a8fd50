use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult, song::Child};

/// Represents an album with ID3 metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AlbumID3 {
    /// The album ID
    pub id: String,
    /// The album name
    pub name: String,
    /// The album artist name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// The album artist ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    /// The album cover art ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    /// The number of songs in the album
    pub song_count: u32,
    /// The total duration of the album in seconds
    pub duration: u32,
    /// The number of times the album has been played
    pub play_count: u64,
    /// The creation date of the album
    pub created: String,
    /// The date the album was starred by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<String>,
    /// The release year of the album, or 0 if unknown
    pub year: i32,
    /// The genre of the album
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Represents an album with ID3 metadata and songs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumWithSongsID3 {
    /// The album metadata
    #[serde(flatten)]
    pub album: AlbumID3,
    /// The songs in the album, in server order
    #[serde(default)]
    pub song: Vec<Child>,
}

/// The type of album list to get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumListType {
    /// A random list of albums.
    Random,
    /// The newest albums.
    Newest,
    /// The highest rated albums.
    Highest,
    /// The most frequently played albums.
    Frequent,
    /// The most recently played albums.
    Recent,
    /// The starred albums.
    Starred,
    /// The albums sorted alphabetically by name.
    AlphabeticalByName,
    /// The albums sorted alphabetically by artist.
    AlphabeticalByArtist,
}
impl AlbumListType {
    fn as_str(&self) -> &'static str {
        match self {
            AlbumListType::Random => "random",
            AlbumListType::Newest => "newest",
            AlbumListType::Highest => "highest",
            AlbumListType::Frequent => "frequent",
            AlbumListType::Recent => "recent",
            AlbumListType::Starred => "starred",
            AlbumListType::AlphabeticalByName => "alphabeticalByName",
            AlbumListType::AlphabeticalByArtist => "alphabeticalByArtist",
        }
    }
}

/// Album-related endpoints.
impl Client {
    /// Get a list of albums, organised by ID3 tags.
    ///
    /// Size has a maximum of 500.
    pub async fn get_album_list_2(
        &self,
        ty: AlbumListType,
        size: Option<usize>,
        offset: Option<usize>,
    ) -> ClientResult<Vec<AlbumID3>> {
        let mut parameters = vec![("type", ty.as_str().to_string())];
        if let Some(size) = size {
            parameters.push(("size", size.to_string()));
        }
        if let Some(offset) = offset {
            parameters.push(("offset", offset.to_string()));
        }

        #[derive(Deserialize, Default)]
        struct AlbumList2 {
            #[serde(default)]
            album: Vec<AlbumID3>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct AlbumList2Response {
            album_list_2: Option<AlbumList2>,
        }

        Ok(self
            .request::<AlbumList2Response>("getAlbumList2", &parameters)
            .await?
            .album_list_2
            .ok_or(ClientError::MissingData("albumList2"))?
            .album)
    }

    /// Get a specific album with its songs.
    pub async fn get_album(&self, id: impl Into<String>) -> ClientResult<AlbumWithSongsID3> {
        #[derive(Deserialize)]
        struct AlbumResponse {
            album: Option<AlbumWithSongsID3>,
        }

        self.request::<AlbumResponse>("getAlbum", &[("id", id.into())])
            .await?
            .album
            .ok_or(ClientError::MissingData("album"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_missing_numbers_default_to_zero() {
        let album: AlbumWithSongsID3 = serde_json::from_str(
            r#"{"id":"al-1","name":"Blue Train","artist":"John Coltrane"}"#,
        )
        .unwrap();
        assert_eq!(album.album.id, "al-1");
        assert_eq!(album.album.duration, 0);
        assert_eq!(album.album.song_count, 0);
        assert_eq!(album.album.year, 0);
        assert!(album.song.is_empty());
    }

    #[test]
    fn test_album_list_type_names() {
        assert_eq!(AlbumListType::AlphabeticalByArtist.as_str(), "alphabeticalByArtist");
        assert_eq!(AlbumListType::Newest.as_str(), "newest");
    }
}
