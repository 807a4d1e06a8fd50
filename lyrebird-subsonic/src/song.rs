use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult, Search3Request};

/// Represents a child item (file or directory) in the Subsonic API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Child {
    /// The unique identifier
    pub id: String,
    /// The ID of the parent directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Whether this is a directory
    pub is_dir: bool,
    /// The title of the item
    pub title: String,
    /// The album name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// The artist name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// The track number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,
    /// The release year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The genre
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// The cover art ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    /// The file size in bytes
    pub size: u64,
    /// The content type (MIME)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// The file suffix (extension)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// The duration in seconds
    pub duration: u32,
    /// The bitrate in kbps
    pub bit_rate: u32,
    /// The path of the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The number of times the item has been played
    pub play_count: u64,
    /// The disc number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<u32>,
    /// The creation date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// When the item was starred by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<String>,
    /// The album ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    /// The artist ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    /// The media type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}
impl Child {
    /// The track number, or 0 if the server did not provide one.
    pub fn track_number(&self) -> u32 {
        self.track.unwrap_or(0)
    }
}

/// Sort songs by ascending track number, treating a missing track as 0.
///
/// The sort is stable, so songs sharing a track number keep server order.
pub fn sort_by_track(songs: &mut [Child]) {
    songs.sort_by_key(Child::track_number);
}

/// Song-related endpoints.
impl Client {
    /// Get a page of songs from the whole library.
    pub async fn get_songs(&self, count: u32, offset: u32) -> ClientResult<Vec<Child>> {
        Ok(self
            .search3(&Search3Request {
                query: String::new(),
                artist_count: Some(0),
                album_count: Some(0),
                song_count: Some(count),
                song_offset: Some(offset),
                ..Default::default()
            })
            .await?
            .song)
    }

    /// Get the songs of an album, ordered by track number.
    pub async fn get_album_songs(&self, album_id: impl Into<String>) -> ClientResult<Vec<Child>> {
        let mut songs = self.get_album(album_id).await?.song;
        sort_by_track(&mut songs);
        Ok(songs)
    }

    /// Get every song by an artist, album by album.
    ///
    /// Albums are fetched one after another; each album's songs are in
    /// track order.
    pub async fn get_artist_songs(&self, artist_id: impl Into<String>) -> ClientResult<Vec<Child>> {
        let artist = self.get_artist(artist_id).await?;

        let mut songs = vec![];
        for album in artist.album {
            songs.extend(self.get_album_songs(album.id).await?);
        }
        Ok(songs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, track: Option<u32>) -> Child {
        Child {
            id: id.to_string(),
            track,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_by_track_treats_missing_as_zero() {
        let mut songs = vec![
            song("c", Some(3)),
            song("a", Some(1)),
            song("none", None),
            song("b", Some(2)),
            song("a2", Some(1)),
        ];
        sort_by_track(&mut songs);

        let ids: Vec<_> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["none", "a", "a2", "b", "c"]);
        assert!(songs.windows(2).all(|w| w[0].track_number() <= w[1].track_number()));
    }

    #[test]
    fn test_media_type_uses_wire_name() {
        let child: Child =
            serde_json::from_str(r#"{"id":"1","title":"Song","type":"music"}"#).unwrap();
        assert_eq!(child.media_type.as_deref(), Some("music"));
        assert_eq!(child.duration, 0);
        assert!(!child.is_dir);
    }
}
