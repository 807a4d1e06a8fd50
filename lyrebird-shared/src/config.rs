//! Server connection settings and the keys they are persisted under.
use serde::{Deserialize, Serialize};

use crate::{SettingsError, SettingsStore};

/// The fixed key names a client stores its settings under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsKeys {
    /// Key for the server address.
    pub address: &'static str,
    /// Key for the username.
    pub username: &'static str,
    /// Key for the password.
    pub password: &'static str,
}

/// Connection settings for a single server.
///
/// The password is persisted as plain text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    /// The normalized base address, e.g. `https://nas.local:5001`.
    pub address: String,
    /// The account name.
    pub username: String,
    /// The account password.
    pub password: String,
}
impl ServerSettings {
    /// Build settings from raw user input, normalizing the address.
    pub fn new(
        address: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            address: normalize_address(address.as_ref()),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read the settings from `store`. Missing values are empty.
    pub fn load(store: &dyn SettingsStore, keys: &SettingsKeys) -> Self {
        Self {
            address: store.get(keys.address).unwrap_or_default(),
            username: store.get(keys.username).unwrap_or_default(),
            password: store.get(keys.password).unwrap_or_default(),
        }
    }

    /// Write all three values to `store`.
    pub fn save(
        &self,
        store: &mut dyn SettingsStore,
        keys: &SettingsKeys,
    ) -> Result<(), SettingsError> {
        store.set(keys.address, &self.address)?;
        store.set(keys.username, &self.username)?;
        store.set(keys.password, &self.password)?;
        Ok(())
    }

    /// Whether an address and username have been provided.
    pub fn is_configured(&self) -> bool {
        !self.address.is_empty() && !self.username.is_empty()
    }
}

/// Normalize a user-entered server address.
///
/// Whitespace is trimmed, `https://` is prepended if no HTTP scheme is
/// present, and trailing slashes are removed. Empty input stays empty.
pub fn normalize_address(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_ascii_lowercase();
    let mut address = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    while address.ends_with('/') {
        address.pop();
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySettingsStore;

    const KEYS: SettingsKeys = SettingsKeys {
        address: "test.address",
        username: "test.username",
        password: "test.password",
    };

    #[test]
    fn test_normalize_address() {
        assert_eq!(normalize_address("example.com"), "https://example.com");
        assert_eq!(normalize_address("http://x/"), "http://x");
        assert_eq!(normalize_address("  nas.local:5001  "), "https://nas.local:5001");
        assert_eq!(normalize_address("HTTPS://Nas.Local//"), "HTTPS://Nas.Local");
        assert_eq!(
            normalize_address("https://host/music/"),
            "https://host/music"
        );
        assert_eq!(normalize_address("   "), "");
    }

    #[test]
    fn test_load_missing_values_are_empty() {
        let store = MemorySettingsStore::default();
        assert_eq!(ServerSettings::load(&store, &KEYS), ServerSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemorySettingsStore::default();
        let settings = ServerSettings::new("example.com/", "alice", "hunter2");
        settings.save(&mut store, &KEYS).unwrap();

        assert_eq!(store.get("test.address").as_deref(), Some("https://example.com"));
        assert_eq!(ServerSettings::load(&store, &KEYS), settings);
        assert!(settings.is_configured());
    }
}
