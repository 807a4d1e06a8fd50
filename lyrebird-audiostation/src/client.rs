use std::time::Duration;

use lyrebird_shared::{
    Connectivity, MemorySettingsStore, SettingsError, SettingsStore,
    config::{ServerSettings, SettingsKeys},
};

#[derive(Debug)]
/// An error that can occur when interacting with the client.
pub enum ClientError {
    /// The configured address cannot form a valid URL.
    InvalidAddress(String),
    /// The request could not be sent or the response could not be read.
    Network(reqwest::Error),
    /// The server responded with a status other than 200.
    HttpStatus(u16),
    /// The server rejected the login.
    AuthenticationFailed {
        /// The Synology error code.
        code: i32,
        /// The server's message, or a description of the code.
        message: String,
    },
    /// The server reported a failure.
    Api {
        /// The Synology error code, if one was sent.
        code: Option<i32>,
        /// The server's message, or a fallback describing the operation.
        message: String,
    },
    /// A successful response did not contain the expected payload.
    MissingData(&'static str),
    /// The response could not be decoded.
    InvalidResponse(serde_json::Error),
    /// No address and username have been configured.
    NotConfigured,
    /// The operation needs a session, but [`Client::login`] has not succeeded.
    NotAuthenticated,
    /// The settings could not be persisted.
    Settings(SettingsError),
}
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::InvalidAddress(address) => write!(f, "Invalid server address: {address}"),
            ClientError::Network(e) => write!(f, "Network error: {e}"),
            ClientError::HttpStatus(code) => write!(f, "Server returned HTTP status {code}"),
            ClientError::AuthenticationFailed { code, message } => {
                write!(f, "Authentication failed ({code}): {message}")
            }
            ClientError::Api { code, message } => {
                write!(f, "AudioStation error")?;
                if let Some(code) = code {
                    write!(f, " {code}")?;
                }
                write!(f, ": {message}")
            }
            ClientError::MissingData(field) => write!(f, "Response is missing `{field}`"),
            ClientError::InvalidResponse(e) => write!(f, "Invalid response: {e}"),
            ClientError::NotConfigured => write!(f, "Server is not configured"),
            ClientError::NotAuthenticated => write!(f, "Not logged in"),
            ClientError::Settings(e) => write!(f, "{e}"),
        }
    }
}
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Network(e) => Some(e),
            ClientError::InvalidResponse(e) => Some(e),
            ClientError::Settings(e) => Some(e),
            _ => None,
        }
    }
}
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e)
    }
}
impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::InvalidResponse(e)
    }
}
impl From<SettingsError> for ClientError {
    fn from(e: SettingsError) -> Self {
        ClientError::Settings(e)
    }
}
/// A result type for the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// A client for the AudioStation API.
pub struct Client {
    pub(crate) settings: ServerSettings,
    pub(crate) sid: Option<String>,
    pub(crate) client: reqwest::Client,
    pub(crate) connectivity: Connectivity,
    store: Box<dyn SettingsStore>,
}
impl Client {
    /// How long a single request may take before it fails.
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    /// The keys the client's settings are persisted under.
    pub const SETTINGS_KEYS: SettingsKeys = SettingsKeys {
        address: "audiostation.address",
        username: "audiostation.username",
        password: "audiostation.password",
    };

    /// Create a client whose settings are loaded from, and persisted to, `store`.
    pub fn from_store(store: Box<dyn SettingsStore>) -> ClientResult<Self> {
        let settings = ServerSettings::load(store.as_ref(), &Self::SETTINGS_KEYS);
        Ok(Self {
            settings,
            sid: None,
            client: reqwest::Client::builder().timeout(Self::TIMEOUT).build()?,
            connectivity: Connectivity::new(),
            store,
        })
    }

    /// Create a client with in-memory settings.
    pub fn new(
        base_url: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ClientResult<Self> {
        let mut client = Self::from_store(Box::new(MemorySettingsStore::default()))?;
        client.configure(base_url, username, password)?;
        Ok(client)
    }

    /// Replace the server settings and persist them immediately.
    ///
    /// Any existing session belongs to the old settings and is dropped.
    pub fn configure(
        &mut self,
        address: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ClientResult<()> {
        self.settings = ServerSettings::new(address, username, password);
        self.sid = None;
        self.connectivity.set(false);
        self.settings
            .save(self.store.as_mut(), &Self::SETTINGS_KEYS)?;
        tracing::info!(address = %self.settings.address, "configured audiostation server");
        Ok(())
    }

    /// The active settings.
    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    /// The normalized server address.
    pub fn address(&self) -> &str {
        &self.settings.address
    }

    /// The configured username.
    pub fn username(&self) -> &str {
        &self.settings.username
    }

    /// The configured password.
    pub fn password(&self) -> &str {
        &self.settings.password
    }

    /// The current session ID, if logged in.
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    /// The connectivity flag, updated by [`Client::login`], [`Client::ping`]
    /// and [`Client::logout`].
    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }
}
