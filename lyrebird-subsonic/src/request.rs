use rand::{Rng as _, distr::Alphanumeric};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{Client, ClientError, ClientResult};

/// Making requests to the Subsonic API.
impl Client {
    /// The number of characters in each request's salt.
    pub const SALT_LENGTH: usize = 8;

    /// Make a request to the Subsonic API. `T` must contain a field corresponding to
    /// the actual value you want from the endpoint: that is, for `getAlbum`,
    /// `T` should be `{ album: Option<AlbumWithSongsID3> }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not valid.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<T> {
        let bytes = self.request_raw(endpoint, parameters).await?;
        parse_response::<T>(endpoint, &bytes)
    }

    pub(crate) async fn request_raw(
        &self,
        endpoint: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<Vec<u8>> {
        if !self.has_credentials() {
            return Err(ClientError::NotConfigured);
        }

        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(endpoint, "subsonic request");

        let response = self
            .client
            .get(url)
            .query(&self.auth_parameters())
            .query(parameters)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::HttpStatus(response.status().as_u16()));
        }

        Ok(response.bytes().await?.into())
    }

    /// Build a URL for `endpoint` with fresh authentication parameters and
    /// `parameters` attached, without sending anything.
    pub(crate) fn authenticated_url(
        &self,
        endpoint: &str,
        parameters: &[(&str, String)],
    ) -> Option<String> {
        if !self.has_credentials() {
            return None;
        }

        let mut url = self.endpoint_url(endpoint).ok()?;
        url.query_pairs_mut()
            .extend_pairs(self.auth_parameters())
            .extend_pairs(parameters);
        Some(url.into())
    }

    fn endpoint_url(&self, endpoint: &str) -> ClientResult<Url> {
        let url = format!("{}/rest/{endpoint}", self.settings.address);
        Url::parse(&url).map_err(|_| ClientError::InvalidAddress(self.settings.address.clone()))
    }

    fn auth_parameters(&self) -> [(&'static str, String); 6] {
        let (salt, token) = generate_salt_and_token(&self.settings.password);
        [
            ("u", self.settings.username.clone()),
            ("t", token),
            ("s", salt),
            ("v", Self::API_VERSION.to_string()),
            ("c", self.client_id.clone()),
            ("f", "json".to_string()),
        ]
    }
}

pub(crate) fn parse_response<T: DeserializeOwned>(endpoint: &str, bytes: &[u8]) -> ClientResult<T> {
    let response: Response = serde_json::from_slice(bytes)?;
    let response = response.subsonic_response;

    if response.status == ResponseStatus::Failed {
        let (code, message) = match response.error {
            Some(error) => (error.code, error.message),
            None => (0, None),
        };
        return Err(ClientError::Api {
            code,
            message: message.unwrap_or_else(|| format!("{endpoint} request failed")),
        });
    }

    Ok(serde_json::from_value(serde_json::Value::Object(
        response.body,
    ))?)
}

pub(crate) fn generate_salt_and_token(password: &str) -> (String, String) {
    let salt: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(Client::SALT_LENGTH)
        .map(char::from)
        .collect();

    let token = md5::compute(format!("{password}{salt}")).0;
    let token = data_encoding::HEXLOWER.encode(&token);

    (salt, token)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Response {
    subsonic_response: SubsonicResponse,
}

#[derive(Debug, Deserialize)]
struct SubsonicResponse {
    status: ResponseStatus,
    error: Option<ResponseError>,

    // Endpoint-specific payload, decoded once the status is known.
    #[serde(flatten)]
    body: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum ResponseStatus {
    Ok,
    Failed,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    #[serde(default)]
    code: i32,
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Pong {}

    #[test]
    fn test_token_is_md5_of_password_and_salt() {
        let (salt, token) = generate_salt_and_token("sesame");
        assert_eq!(salt.len(), Client::SALT_LENGTH);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));

        let expected = data_encoding::HEXLOWER.encode(&md5::compute(format!("sesame{salt}")).0);
        assert_eq!(token, expected);
    }

    #[test]
    fn test_salts_differ_between_calls() {
        let (first, _) = generate_salt_and_token("sesame");
        let (second, _) = generate_salt_and_token("sesame");
        assert_ne!(first, second);
    }

    #[test]
    fn test_known_token() {
        // Example from the Subsonic API documentation.
        let token = md5::compute("sesamec19b2d").0;
        assert_eq!(
            data_encoding::HEXLOWER.encode(&token),
            "26719a1196d2a940705a59634eb18eab"
        );
    }

    #[test]
    fn test_failed_response_uses_server_message() {
        let body = br#"{"subsonic-response":{"status":"failed","version":"1.16.1",
            "error":{"code":70,"message":"Album not found"}}}"#;
        match parse_response::<Pong>("getAlbum", body) {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, 70);
                assert_eq!(message, "Album not found");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_response_without_message_uses_fallback() {
        let body = br#"{"subsonic-response":{"status":"failed","version":"1.16.1",
            "error":{"code":10}}}"#;
        match parse_response::<Pong>("getPlaylists", body) {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, 10);
                assert_eq!(message, "getPlaylists request failed");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_response_without_code_keeps_message() {
        let body = br#"{"subsonic-response":{"status":"failed","version":"1.16.1",
            "error":{"message":"Session expired"}}}"#;
        match parse_response::<Pong>("getAlbum", body) {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, 0);
                assert_eq!(message, "Session expired");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_envelope_is_invalid_response() {
        assert!(matches!(
            parse_response::<Pong>("ping", b"<html>nope</html>"),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
