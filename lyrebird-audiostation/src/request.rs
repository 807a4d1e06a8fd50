use reqwest::{StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{Client, ClientError, ClientResult, Endpoint, RequestMethod};

/// Making requests to the AudioStation API.
impl Client {
    /// Invoke `operation` on `endpoint` with the current session and decode
    /// the envelope's `data` into `T`.
    ///
    /// If the server reports a failure without a message, `fallback` is used
    /// as the error message. If `data` is absent, `T` must accept `null`
    /// (e.g. an `Option`) or [`ClientError::MissingData`] is returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        operation: &str,
        parameters: &[(&str, String)],
        fallback: &str,
    ) -> ClientResult<T> {
        let sid = self.sid.as_deref().ok_or(ClientError::NotAuthenticated)?;
        let bytes = self
            .request_raw(endpoint, operation, parameters, Some(sid))
            .await?;
        parse_response(&bytes, fallback)
    }

    /// Send a request and return the raw response body.
    pub(crate) async fn request_raw(
        &self,
        endpoint: Endpoint,
        operation: &str,
        parameters: &[(&str, String)],
        sid: Option<&str>,
    ) -> ClientResult<Vec<u8>> {
        if !self.settings.is_configured() {
            return Err(ClientError::NotConfigured);
        }

        let descriptor = endpoint.descriptor();
        let url = self.endpoint_url(endpoint)?;

        let mut all_parameters = vec![
            ("api", descriptor.api.to_string()),
            ("version", descriptor.version.to_string()),
            (descriptor.selector.as_str(), operation.to_string()),
        ];
        all_parameters.extend(parameters.iter().cloned());
        if let Some(sid) = sid {
            all_parameters.push(("_sid", sid.to_string()));
        }

        tracing::debug!(
            api = descriptor.api,
            operation,
            method = ?descriptor.request_method,
            "audiostation request"
        );

        let request = match descriptor.request_method {
            RequestMethod::Get => self.client.get(url).query(&all_parameters),
            RequestMethod::PostForm => self.client.post(url).form(&all_parameters),
        };
        let response = request.send().await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::HttpStatus(response.status().as_u16()));
        }

        Ok(response.bytes().await?.into())
    }

    /// Build a URL that carries the session, without sending anything.
    pub(crate) fn session_url(
        &self,
        endpoint: Endpoint,
        operation: &str,
        parameters: &[(&str, String)],
    ) -> Option<String> {
        let sid = self.sid.as_deref()?;
        let descriptor = endpoint.descriptor();

        let mut url = self.endpoint_url(endpoint).ok()?;
        url.query_pairs_mut()
            .append_pair("api", descriptor.api)
            .append_pair("version", &descriptor.version.to_string())
            .append_pair(descriptor.selector.as_str(), operation)
            .extend_pairs(parameters)
            .append_pair("_sid", sid);
        Some(url.into())
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> ClientResult<Url> {
        let url = format!("{}/webapi/{}", self.settings.address, endpoint.descriptor().path);
        Url::parse(&url).map_err(|_| ClientError::InvalidAddress(self.settings.address.clone()))
    }
}

/// The envelope every AudioStation response is wrapped in.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<ResponseError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseError {
    pub code: Option<i32>,
    pub message: Option<String>,
}

pub(crate) fn parse_response<T: DeserializeOwned>(bytes: &[u8], fallback: &str) -> ClientResult<T> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;

    if !envelope.success {
        let (code, message) = match envelope.error {
            Some(error) => (error.code, error.message),
            None => (None, None),
        };
        return Err(ClientError::Api {
            code,
            message: message.unwrap_or_else(|| fallback.to_string()),
        });
    }

    match envelope.data {
        Some(data) => Ok(serde_json::from_value(data)?),
        None => serde_json::from_value(serde_json::Value::Null)
            .map_err(|_| ClientError::MissingData("data")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Total {
        total: u32,
    }

    #[test]
    fn test_success_decodes_data() {
        let total: Total =
            parse_response(br#"{"success":true,"data":{"total":3}}"#, "fallback").unwrap();
        assert_eq!(total.total, 3);
    }

    #[test]
    fn test_missing_data() {
        assert!(matches!(
            parse_response::<Total>(br#"{"success":true}"#, "fallback"),
            Err(ClientError::MissingData("data"))
        ));
        let lenient: Option<Total> = parse_response(br#"{"success":true}"#, "fallback").unwrap();
        assert!(lenient.is_none());
    }

    #[test]
    fn test_failure_uses_server_message() {
        match parse_response::<Total>(
            br#"{"success":false,"error":{"code":105,"message":"Permission denied"}}"#,
            "Failed to load songs",
        ) {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, Some(105));
                assert_eq!(message, "Permission denied");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        match parse_response::<Total>(br#"{"success":false,"error":{"code":101}}"#, "Failed to load songs") {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, Some(101));
                assert_eq!(message, "Failed to load songs");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        match parse_response::<Total>(br#"{"success":false}"#, "Failed to load albums") {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, None);
                assert_eq!(message, "Failed to load albums");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_code_keeps_message() {
        match parse_response::<Total>(
            br#"{"success":false,"error":{"message":"Session expired"}}"#,
            "Failed to load songs",
        ) {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, None);
                assert_eq!(message, "Session expired");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_mismatch_is_invalid_response() {
        assert!(matches!(
            parse_response::<Total>(br#"{"success":true,"data":{"total":"many"}}"#, "fallback"),
            Err(ClientError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_response::<Total>(b"not json", "fallback"),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
