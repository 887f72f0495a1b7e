use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Credentials stored on disk.
///
/// Example TOML:
/// WEATHER_API_KEY = "0123456789abcdef"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Credentials {
    #[serde(
        rename = "WEATHER_API_KEY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    weather_api_key: Option<String>,
}

impl Credentials {
    /// Returns the stored API key, or `MissingKey` if the entry is absent.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.weather_api_key.as_deref().ok_or(ConfigError::MissingKey)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.weather_api_key = Some(api_key);
    }

    /// Load credentials from the platform config directory.
    ///
    /// A missing file is `MissingResource`; unlike a missing key this means
    /// the tool has never been configured on this machine.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingResource { path: path.to_path_buf() });
        }

        let contents = fs::read_to_string(path)?;
        let credentials: Credentials = toml::from_str(&contents)?;

        log::debug!("loaded credentials from {}", path.display());
        Ok(credentials)
    }

    /// Like `load`, but a missing file yields empty credentials. Used by
    /// the configure flow, which creates the file on first run.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(credentials) => Ok(credentials),
            Err(ConfigError::MissingResource { .. }) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Convenience for callers that only need the key: load, then extract.
    pub fn load_api_key() -> Result<String, ConfigError> {
        let credentials = Self::load()?;
        let key = credentials.api_key()?;
        Ok(key.to_owned())
    }

    /// Save credentials to the platform config directory, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml)?;

        log::debug!("saved credentials to {}", path.display());
        Ok(())
    }

    /// Path to the credentials file.
    pub fn file_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join("keys.toml"))
    }
}
