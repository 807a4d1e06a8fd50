use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult, Endpoint};

/// The `additional` fields requested for every song.
pub(crate) const SONG_ADDITIONAL: &str = "song_tag,song_audio";

/// How many entries to ask for when a call should return everything.
pub(crate) const FULL_LIST_LIMIT: u32 = 100_000;

/// A song in the AudioStation library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Song {
    /// The song ID, e.g. `music_1234`.
    pub id: String,
    /// The song title.
    pub title: String,
    /// The path of the file on the NAS.
    pub path: String,
    /// The item type, usually `file`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tag and audio details, present when requested.
    pub additional: SongAdditional,
}
impl Song {
    /// The track number, or 0 if untagged.
    pub fn track(&self) -> u32 {
        self.additional.song_tag.track
    }

    /// The duration in seconds, or 0 if unknown.
    pub fn duration(&self) -> u32 {
        self.additional.song_audio.duration
    }

    /// The track artist.
    pub fn artist(&self) -> &str {
        &self.additional.song_tag.artist
    }

    /// The album name.
    pub fn album(&self) -> &str {
        &self.additional.song_tag.album
    }
}

/// Optional song details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SongAdditional {
    /// Tag metadata.
    pub song_tag: SongTag,
    /// Audio stream properties.
    pub song_audio: SongAudio,
}

/// Tag metadata of a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SongTag {
    /// The album name.
    pub album: String,
    /// The album artist.
    pub album_artist: String,
    /// The track artist.
    pub artist: String,
    /// The composer.
    pub composer: String,
    /// The comment tag.
    pub comment: String,
    /// The genre.
    pub genre: String,
    /// The disc number, or 0.
    pub disc: u32,
    /// The track number, or 0.
    pub track: u32,
    /// The release year, or 0.
    pub year: u32,
}

/// Audio properties of a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SongAudio {
    /// Bitrate in bits per second.
    pub bitrate: u32,
    /// Number of channels.
    pub channel: u32,
    /// The codec, e.g. `flac`.
    pub codec: String,
    /// The container format.
    pub container: String,
    /// Duration in seconds.
    pub duration: u32,
    /// File size in bytes.
    pub filesize: u64,
    /// Sample rate in Hz.
    pub frequency: u32,
}

/// A page of songs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SongList {
    /// The songs on this page.
    pub songs: Vec<Song>,
    /// The number of songs matching the request across all pages.
    pub total: u32,
    /// The offset of this page.
    pub offset: u32,
}

/// Sort songs by ascending track number; untagged songs count as track 0.
///
/// The sort is stable.
pub fn sort_by_track(songs: &mut [Song]) {
    songs.sort_by_key(Song::track);
}

/// Song-related endpoints.
impl Client {
    /// Get a page of songs from the whole library.
    pub async fn get_songs(&self, limit: u32, offset: u32) -> ClientResult<SongList> {
        self.list_songs(
            vec![
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
            "Failed to load songs",
        )
        .await
    }

    /// Get a single song.
    pub async fn get_song(&self, id: impl Into<String>) -> ClientResult<Song> {
        let list: SongList = self
            .request(
                Endpoint::Song,
                "getinfo",
                &[
                    ("id", id.into()),
                    ("additional", SONG_ADDITIONAL.to_string()),
                ],
                "Failed to load song",
            )
            .await?;
        list.songs
            .into_iter()
            .next()
            .ok_or(ClientError::MissingData("songs"))
    }

    /// Get the songs of an album, ordered by track number.
    pub async fn get_album_songs(
        &self,
        album: impl Into<String>,
        album_artist: impl Into<String>,
    ) -> ClientResult<Vec<Song>> {
        let mut songs = self
            .list_songs(
                vec![
                    ("album", album.into()),
                    ("album_artist", album_artist.into()),
                    ("limit", FULL_LIST_LIMIT.to_string()),
                ],
                "Failed to load album songs",
            )
            .await?
            .songs;
        sort_by_track(&mut songs);
        Ok(songs)
    }

    /// Get every song by an artist.
    pub async fn get_artist_songs(&self, artist: impl Into<String>) -> ClientResult<Vec<Song>> {
        Ok(self
            .list_songs(
                vec![
                    ("artist", artist.into()),
                    ("limit", FULL_LIST_LIMIT.to_string()),
                ],
                "Failed to load artist songs",
            )
            .await?
            .songs)
    }

    async fn list_songs(
        &self,
        mut parameters: Vec<(&str, String)>,
        fallback: &str,
    ) -> ClientResult<SongList> {
        parameters.push(("library", "all".to_string()));
        parameters.push(("additional", SONG_ADDITIONAL.to_string()));
        self.request(Endpoint::Song, "list", &parameters, fallback)
            .await
    }
}
