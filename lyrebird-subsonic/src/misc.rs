use serde::de::IgnoredAny;

use crate::{Client, ClientResult};

/// Miscellaneous endpoints.
impl Client {
    /// Ping the server and verify the connection.
    ///
    /// Updates the connectivity flag: set on success, cleared on any error.
    pub async fn ping(&self) -> ClientResult<()> {
        match self.request::<IgnoredAny>("ping", &[]).await {
            Ok(_) => {
                self.connectivity.set(true);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("subsonic ping failed: {e}");
                self.connectivity.set(false);
                Err(e)
            }
        }
    }

    /// The URL to stream a song from, or `None` if the client is not configured.
    pub fn stream_url(&self, id: impl Into<String>) -> Option<String> {
        self.authenticated_url("stream", &[("id", id.into())])
    }

    /// The URL of a cover art image, or `None` if the client is not configured.
    pub fn cover_art_url(&self, id: impl Into<String>, size: Option<usize>) -> Option<String> {
        let mut parameters = vec![("id", id.into())];
        if let Some(size) = size {
            parameters.push(("size", size.to_string()));
        }
        self.authenticated_url("getCoverArt", &parameters)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;

    use crate::Client;

    #[test]
    fn test_urls_require_configuration() {
        let client = Client::new("", "", "", "lyrebird").unwrap();
        assert_eq!(client.stream_url("tr-1"), None);
        assert_eq!(client.cover_art_url("al-1", Some(300)), None);
    }

    #[test]
    fn test_stream_url_carries_auth() {
        let client = Client::new("music.example/", "alice", "sesame", "lyrebird").unwrap();
        let url = Url::parse(&client.stream_url("tr-1").unwrap()).unwrap();
        assert_eq!(url.as_str().split('?').next(), Some("https://music.example/rest/stream"));

        let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["id"], "tr-1");
        assert_eq!(pairs["u"], "alice");
        assert_eq!(pairs["v"], Client::API_VERSION);
        assert_eq!(pairs["c"], "lyrebird");
        assert_eq!(pairs["f"], "json");
        let expected = data_encoding::HEXLOWER
            .encode(&md5::compute(format!("sesame{}", pairs["s"])).0);
        assert_eq!(pairs["t"], expected);
    }

    #[test]
    fn test_cover_art_url_size_is_optional() {
        let client = Client::new("https://music.example", "alice", "sesame", "lyrebird").unwrap();
        let with_size = client.cover_art_url("al-1", Some(300)).unwrap();
        let without_size = client.cover_art_url("al-1", None).unwrap();
        assert!(with_size.contains("/rest/getCoverArt?"));
        assert!(with_size.contains("size=300"));
        assert!(!without_size.contains("size="));
    }
}
