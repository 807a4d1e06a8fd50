use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

#[derive(Debug)]
/// An error that can occur when reading or writing settings.
pub enum SettingsError {
    /// The settings file could not be read or written.
    Io(std::io::Error),
    /// The settings file is not valid TOML.
    Parse(toml::de::Error),
    /// The settings could not be serialized.
    Serialize(toml::ser::Error),
}
impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "Settings parse error: {e}"),
            SettingsError::Serialize(e) => write!(f, "Settings serialization error: {e}"),
        }
    }
}
impl std::error::Error for SettingsError {}
impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}
impl From<toml::de::Error> for SettingsError {
    fn from(e: toml::de::Error) -> Self {
        SettingsError::Parse(e)
    }
}
impl From<toml::ser::Error> for SettingsError {
    fn from(e: toml::ser::Error) -> Self {
        SettingsError::Serialize(e)
    }
}

/// Durable string key-value storage for client settings.
///
/// Implementations must persist every `set` before returning.
pub trait SettingsStore: Send {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, persisting it immediately.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// A settings store that lives only in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}
impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A settings store backed by a flat TOML table on disk.
#[derive(Debug)]
pub struct TomlSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}
impl TomlSettingsStore {
    /// The default settings filename, relative to the working directory.
    pub const FILENAME: &str = "settings.toml";

    /// Open the store at `path`. A missing file is treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no settings file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// The file this store writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), SettingsError> {
        std::fs::write(&self.path, toml::to_string(&self.values)?)?;
        tracing::debug!("saved settings to {}", self.path.display());
        Ok(())
    }
}
impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}
