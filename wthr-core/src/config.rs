use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// OpenWeather credentials section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OpenWeatherSecrets {
    pub api_key: String,

    /// Endpoint override; the public OpenWeather endpoint is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Credentials file stored on disk.
///
/// Example TOML:
/// ```toml
/// [openweather]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Secrets {
    pub openweather: Option<OpenWeatherSecrets>,
}

impl Secrets {
    /// API key for OpenWeather, or a configuration error with a hint.
    pub fn api_key(&self) -> Result<&str> {
        self.openweather
            .as_ref()
            .map(|ow| ow.api_key.trim())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: run `wthr --configure` and enter your API key."
                )
            })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.openweather.as_ref().and_then(|ow| ow.base_url.as_deref())
    }

    /// Set or replace the API key, keeping any endpoint override.
    pub fn set_api_key(&mut self, api_key: String) {
        match self.openweather.as_mut() {
            Some(ow) => ow.api_key = api_key,
            None => {
                self.openweather = Some(OpenWeatherSecrets { api_key, base_url: None });
            }
        }
    }

    /// Load secrets from `path`, or return an empty default if the file doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No secrets file, using empty configuration");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read secrets file: {}", path.display()))?;

        let secrets: Secrets = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse secrets file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded secrets file");
        Ok(secrets)
    }

    /// Save secrets to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize secrets to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write secrets file: {}", path.display()))?;

        Ok(())
    }

    /// Default location of the secrets file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wthr", "wthr")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("secrets.toml"))
    }
}
