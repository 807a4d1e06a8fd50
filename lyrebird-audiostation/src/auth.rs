use serde::Deserialize;

use crate::{Client, ClientError, ClientResult, Endpoint, request::Envelope};

const SESSION: &str = "AudioStation";

/// Session management.
impl Client {
    /// Log in and store the session ID.
    ///
    /// The account and password travel as plain query parameters; only the
    /// transport (HTTPS) protects them. On any failure the previous session
    /// is discarded and the connectivity flag is cleared.
    pub async fn login(&mut self) -> ClientResult<()> {
        match self.request_sid().await {
            Ok(sid) => {
                tracing::info!(username = %self.settings.username, "logged in to audiostation");
                self.sid = Some(sid);
                self.connectivity.set(true);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("audiostation login failed: {e}");
                self.sid = None;
                self.connectivity.set(false);
                Err(e)
            }
        }
    }

    /// Log out, always discarding the local session.
    ///
    /// The server is told on a best-effort basis; failures to reach it are
    /// logged and otherwise ignored.
    pub async fn logout(&mut self) {
        if let Some(sid) = self.sid.take() {
            let result = self
                .request_raw(
                    Endpoint::Auth,
                    "logout",
                    &[("session", SESSION.to_string())],
                    Some(&sid),
                )
                .await;
            match result {
                Ok(_) => tracing::info!("logged out of audiostation"),
                Err(e) => tracing::warn!("audiostation logout failed, clearing session anyway: {e}"),
            }
        }
        self.connectivity.set(false);
    }

    /// Check the server is reachable by logging in again.
    pub async fn ping(&mut self) -> ClientResult<()> {
        self.login().await
    }

    async fn request_sid(&self) -> ClientResult<String> {
        let bytes = self
            .request_raw(
                Endpoint::Auth,
                "login",
                &[
                    ("account", self.settings.username.clone()),
                    ("passwd", self.settings.password.clone()),
                    ("session", SESSION.to_string()),
                    ("format", "sid".to_string()),
                ],
                None,
            )
            .await?;
        parse_login_response(&bytes)
    }
}

fn parse_login_response(bytes: &[u8]) -> ClientResult<String> {
    #[derive(Deserialize)]
    struct LoginData {
        sid: Option<String>,
    }

    let envelope: Envelope = serde_json::from_slice(bytes)?;
    if envelope.success {
        let data: Option<LoginData> = envelope.data.map(serde_json::from_value).transpose()?;
        return data
            .and_then(|data| data.sid)
            .filter(|sid| !sid.is_empty())
            .ok_or(ClientError::MissingData("sid"));
    }

    match envelope.error {
        Some(error) => {
            let code = error.code.unwrap_or_default();
            Err(ClientError::AuthenticationFailed {
                code,
                message: error.message.unwrap_or_else(|| {
                    describe_auth_error(code)
                        .unwrap_or("Authentication failed")
                        .to_string()
                }),
            })
        }
        None => Err(ClientError::InvalidResponse(serde::de::Error::custom(
            "login failed without an error object",
        ))),
    }
}

/// A description of a `SYNO.API.Auth` error code.
fn describe_auth_error(code: i32) -> Option<&'static str> {
    Some(match code {
        400 => "No such account or incorrect password",
        401 => "Account disabled",
        402 => "Permission denied",
        403 => "2-step verification code required",
        404 => "Failed to authenticate 2-step verification code",
        406 => "2-step verification must be enabled",
        407 => "Blocked IP source",
        408 => "Expired password cannot be changed",
        409 => "Password expired",
        410 => "Password must be changed",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success() {
        let sid = parse_login_response(br#"{"success":true,"data":{"sid":"abc123"}}"#).unwrap();
        assert_eq!(sid, "abc123");
    }

    #[test]
    fn test_login_success_without_sid() {
        assert!(matches!(
            parse_login_response(br#"{"success":true,"data":{}}"#),
            Err(ClientError::MissingData("sid"))
        ));
        assert!(matches!(
            parse_login_response(br#"{"success":true}"#),
            Err(ClientError::MissingData("sid"))
        ));
    }

    #[test]
    fn test_login_failure_carries_code_and_message() {
        match parse_login_response(
            br#"{"success":false,"error":{"code":400,"message":"bad creds"}}"#,
        ) {
            Err(ClientError::AuthenticationFailed { code, message }) => {
                assert_eq!(code, 400);
                assert_eq!(message, "bad creds");
            }
            other => panic!("expected authentication failure, got {other:?}"),
        }
    }

    #[test]
    fn test_login_failure_describes_known_code() {
        match parse_login_response(br#"{"success":false,"error":{"code":407}}"#) {
            Err(ClientError::AuthenticationFailed { code, message }) => {
                assert_eq!(code, 407);
                assert_eq!(message, "Blocked IP source");
            }
            other => panic!("expected authentication failure, got {other:?}"),
        }
    }

    #[test]
    fn test_login_failure_without_code() {
        match parse_login_response(br#"{"success":false,"error":{}}"#) {
            Err(ClientError::AuthenticationFailed { code, message }) => {
                assert_eq!(code, 0);
                assert_eq!(message, "Authentication failed");
            }
            other => panic!("expected authentication failure, got {other:?}"),
        }
    }

    #[test]
    fn test_login_failure_without_error_is_invalid() {
        assert!(matches!(
            parse_login_response(br#"{"success":false}"#),
            Err(ClientError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_login_response(b"<html>502</html>"),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
