/// A CGI endpoint of the AudioStation web API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Session login and logout.
    Auth,
    /// Server version and privileges.
    Info,
    /// Songs.
    Song,
    /// Albums.
    Album,
    /// Artists.
    Artist,
    /// Playlists.
    Playlist,
    /// Remote (DLNA/AirPlay) players attached to the NAS.
    RemotePlayer,
    /// Cover art images.
    Cover,
    /// Audio streams.
    Stream,
    /// Free-text search.
    Search,
}

/// The query key that names the operation being invoked.
///
/// The server does not accept the same key on every endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `method=<operation>`
    Method,
    /// `action=<operation>`
    Action,
}
impl Selector {
    /// The query key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::Method => "method",
            Selector::Action => "action",
        }
    }
}

/// How parameters are sent to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    /// A GET with parameters in the query string.
    Get,
    /// A POST with an `application/x-www-form-urlencoded` body.
    PostForm,
}

/// Everything needed to address an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Path below `/webapi/`.
    pub path: &'static str,
    /// The `api` parameter.
    pub api: &'static str,
    /// The `version` parameter.
    pub version: u32,
    /// The operation selector key.
    pub selector: Selector,
    /// How parameters are sent.
    pub request_method: RequestMethod,
}

impl Endpoint {
    /// The fixed wire details of this endpoint. These track the API versions
    /// the server exposes and must not be unified.
    pub const fn descriptor(self) -> Descriptor {
        use RequestMethod::*;
        use Selector::*;

        let (path, api, version, selector, request_method) = match self {
            Endpoint::Auth => ("auth.cgi", "SYNO.API.Auth", 3, Method, Get),
            Endpoint::Info => ("AudioStation/info.cgi", "SYNO.AudioStation.Info", 1, Method, Get),
            Endpoint::Song => ("AudioStation/song.cgi", "SYNO.AudioStation.Song", 1, Method, PostForm),
            Endpoint::Album => ("AudioStation/album.cgi", "SYNO.AudioStation.Album", 1, Method, PostForm),
            Endpoint::Artist => ("AudioStation/artist.cgi", "SYNO.AudioStation.Artist", 1, Method, PostForm),
            Endpoint::Playlist => ("AudioStation/playlist.cgi", "SYNO.AudioStation.Playlist", 1, Method, Get),
            Endpoint::RemotePlayer => (
                "AudioStation/remote_player.cgi",
                "SYNO.AudioStation.RemotePlayer",
                1,
                Action,
                Get,
            ),
            Endpoint::Cover => ("AudioStation/cover.cgi", "SYNO.AudioStation.Cover", 3, Method, Get),
            Endpoint::Stream => ("AudioStation/stream.cgi", "SYNO.AudioStation.Stream", 2, Method, Get),
            Endpoint::Search => ("AudioStation/search.cgi", "SYNO.AudioStation.Search", 1, Method, PostForm),
        };

        Descriptor {
            path,
            api,
            version,
            selector,
            request_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_table() {
        assert_eq!(Endpoint::RemotePlayer.descriptor().selector, Selector::Action);
        for endpoint in [
            Endpoint::Auth,
            Endpoint::Info,
            Endpoint::Song,
            Endpoint::Album,
            Endpoint::Artist,
            Endpoint::Playlist,
            Endpoint::Cover,
            Endpoint::Stream,
            Endpoint::Search,
        ] {
            assert_eq!(endpoint.descriptor().selector, Selector::Method, "{endpoint:?}");
        }
    }

    #[test]
    fn test_request_methods() {
        assert_eq!(Endpoint::Auth.descriptor().request_method, RequestMethod::Get);
        assert_eq!(Endpoint::Song.descriptor().request_method, RequestMethod::PostForm);
        assert_eq!(Endpoint::Search.descriptor().request_method, RequestMethod::PostForm);
        assert_eq!(Endpoint::Playlist.descriptor().request_method, RequestMethod::Get);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Auth.descriptor().path, "auth.cgi");
        assert_eq!(Endpoint::Stream.descriptor().path, "AudioStation/stream.cgi");
    }
}
