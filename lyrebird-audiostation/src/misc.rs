use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult, Endpoint};

/// The AudioStation package installed on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerInfo {
    /// The package build number.
    pub version: u32,
    /// The human-readable package version.
    pub version_string: String,
    /// Whether the NAS has a `music` shared folder.
    pub has_music_share: bool,
    /// Whether the library is still being indexed.
    pub importing: bool,
    /// What the logged-in user may do.
    pub privilege: Privilege,
}

/// Per-user AudioStation privileges.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Privilege {
    /// May edit playlists.
    pub playlist_edit: bool,
    /// May control remote players.
    pub remote_player: bool,
    /// May share songs.
    pub sharing: bool,
    /// May edit tags.
    pub tag_edit: bool,
    /// May browse UPnP servers.
    pub upnp_browse: bool,
}

/// A playback device the NAS can stream to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RemotePlayer {
    /// The player ID.
    pub id: String,
    /// The player name.
    pub name: String,
    /// The player type, e.g. `upnp` or `airplay`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the player groups several devices.
    pub is_multiple: bool,
    /// Whether the player needs a password.
    pub password_protected: bool,
    /// Whether the player can seek.
    pub support_seek: bool,
    /// Whether the player's volume can be set.
    pub support_set_volume: bool,
}

/// Server information, remote players, and media URLs.
impl Client {
    /// Get information about the AudioStation package.
    pub async fn get_info(&self) -> ClientResult<ServerInfo> {
        self.request(Endpoint::Info, "getinfo", &[], "Failed to load server info")
            .await
    }

    /// Get the remote players attached to the NAS.
    pub async fn get_remote_players(&self) -> ClientResult<Vec<RemotePlayer>> {
        #[derive(Deserialize)]
        struct Players {
            #[serde(default)]
            players: Vec<RemotePlayer>,
        }

        let players: Players = self
            .request(
                Endpoint::RemotePlayer,
                "list",
                &[],
                "Failed to load remote players",
            )
            .await?;
        Ok(players.players)
    }

    /// The URL to stream a song from, or `None` without a session.
    pub fn stream_url(&self, id: impl Into<String>) -> Option<String> {
        self.session_url(Endpoint::Stream, "stream", &[("id", id.into())])
    }

    /// The URL of a song's cover art, or `None` without a session.
    pub fn cover_art_url(&self, id: impl Into<String>, size: Option<usize>) -> Option<String> {
        let mut parameters = vec![("id", id.into())];
        if let Some(size) = size {
            parameters.push(("size", size.to_string()));
        }
        self.session_url(Endpoint::Cover, "getsongcover", &parameters)
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;

    #[test]
    fn test_urls_require_session() {
        let client = Client::new("nas.local:5001", "admin", "pw").unwrap();
        assert_eq!(client.stream_url("music_1"), None);
        assert_eq!(client.cover_art_url("music_1", Some(300)), None);
    }

    #[test]
    fn test_urls_carry_session() {
        let mut client = Client::new("nas.local:5001", "admin", "pw").unwrap();
        client.sid = Some("s1d".to_string());

        assert_eq!(
            client.stream_url("music_1").as_deref(),
            Some(
                "https://nas.local:5001/webapi/AudioStation/stream.cgi\
                 ?api=SYNO.AudioStation.Stream&version=2&method=stream&id=music_1&_sid=s1d"
            )
        );
        assert_eq!(
            client.cover_art_url("music_1", Some(300)).as_deref(),
            Some(
                "https://nas.local:5001/webapi/AudioStation/cover.cgi\
                 ?api=SYNO.AudioStation.Cover&version=3&method=getsongcover&id=music_1&size=300&_sid=s1d"
            )
        );
    }

    #[test]
    fn test_url_parameters_are_escaped() {
        let mut client = Client::new("nas.local", "admin", "pw").unwrap();
        client.sid = Some("s1d".to_string());

        let url = client.stream_url("music a&b").unwrap();
        assert!(url.contains("id=music+a%26b"));
    }
}
