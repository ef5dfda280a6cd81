//! Session configuration (layered: code > env > config file).
//!
//! A [`KonnectConfig`] is owned by the caller and handed to
//! [`Resolver::from_config`](crate::generation::Resolver::from_config);
//! nothing here is process-global.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{KonnectError, Result};
use crate::types::Credential;

pub const DEFAULT_PRIMARY_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SECONDARY_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SECONDARY_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Credentials and endpoints for one session.
#[derive(Clone)]
pub struct KonnectConfig {
    primary_key: Credential,
    secondary_key: Credential,
    primary_base_url: String,
    secondary_base_url: String,
    secondary_model: String,
    temperature: f64,
    timeout: Duration,
}

impl fmt::Debug for KonnectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KonnectConfig")
            .field("primary_key", &self.primary_key)
            .field("secondary_key", &self.secondary_key)
            .field("primary_base_url", &self.primary_base_url)
            .field("secondary_base_url", &self.secondary_base_url)
            .field("secondary_model", &self.secondary_model)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for KonnectConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    primary_api_key: Option<Credential>,
    secondary_api_key: Option<Credential>,
    primary_base_url: Option<String>,
    secondary_base_url: Option<String>,
    secondary_model: Option<String>,
    temperature: Option<f64>,
    timeout_secs: Option<u64>,
}

impl KonnectConfig {
    /// Defaults with no credentials.
    pub fn new() -> Self {
        Self {
            primary_key: Credential::empty(),
            secondary_key: Credential::empty(),
            primary_base_url: DEFAULT_PRIMARY_BASE_URL.to_string(),
            secondary_base_url: DEFAULT_SECONDARY_BASE_URL.to_string(),
            secondary_model: DEFAULT_SECONDARY_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Defaults overlaid with environment variables (a `.env` file is
    /// loaded first if present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let mut config = Self::new();
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Full layered load: config file, then environment.
    ///
    /// An explicit `path` must exist. Without one, the platform config
    /// directory is consulted and a missing file is skipped.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let mut config = Self::new();

        match path {
            Some(path) => config.apply_file(path)?,
            None => {
                if let Some(default) = default_config_path().filter(|p| p.exists()) {
                    config.apply_file(&default)?;
                }
            }
        }

        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Overlay values from a TOML file.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "loading config file");
        let raw = std::fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&raw)?;

        if let Some(key) = file.primary_api_key {
            self.primary_key = key;
        }
        if let Some(key) = file.secondary_api_key {
            self.secondary_key = key;
        }
        if let Some(url) = file.primary_base_url {
            self.primary_base_url = url;
        }
        if let Some(url) = file.secondary_base_url {
            self.secondary_base_url = url;
        }
        if let Some(model) = file.secondary_model {
            self.secondary_model = model;
        }
        if let Some(temperature) = file.temperature {
            self.temperature = temperature;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = timeout_from_secs(secs)?;
        }
        Ok(())
    }

    /// Overlay values from an environment lookup.
    ///
    /// `GEMINI_API_KEY` wins over `GOOGLE_API_KEY` when both are set.
    /// Blank values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        for var in ["GOOGLE_API_KEY", "GEMINI_API_KEY"] {
            if let Some(key) = lookup(var) {
                self.primary_key = Credential::new(key);
            }
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.secondary_key = Credential::new(key);
        }
        if let Some(url) = lookup("GEMINI_BASE_URL") {
            self.primary_base_url = url;
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.secondary_base_url = url;
        }
        if let Some(model) = lookup("KONNECT_SECONDARY_MODEL") {
            self.secondary_model = model;
        }
        if let Some(raw) = lookup("KONNECT_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                KonnectError::Configuration(format!(
                    "KONNECT_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            self.timeout = timeout_from_secs(secs)?;
        }
        Ok(())
    }

    pub fn with_primary_key(mut self, key: impl Into<Credential>) -> Self {
        self.primary_key = key.into();
        self
    }

    pub fn with_secondary_key(mut self, key: impl Into<Credential>) -> Self {
        self.secondary_key = key.into();
        self
    }

    pub fn with_primary_base_url(mut self, url: impl Into<String>) -> Self {
        self.primary_base_url = url.into();
        self
    }

    pub fn with_secondary_base_url(mut self, url: impl Into<String>) -> Self {
        self.secondary_base_url = url.into();
        self
    }

    pub fn with_secondary_model(mut self, model: impl Into<String>) -> Self {
        self.secondary_model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// A zero duration falls back to [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if timeout.is_zero() {
            warn!("zero timeout requested, using the default");
            self.timeout = DEFAULT_TIMEOUT;
        } else {
            self.timeout = timeout;
        }
        self
    }

    pub fn primary_key(&self) -> &Credential {
        &self.primary_key
    }

    pub fn secondary_key(&self) -> &Credential {
        &self.secondary_key
    }

    pub fn primary_base_url(&self) -> &str {
        &self.primary_base_url
    }

    pub fn secondary_base_url(&self) -> &str {
        &self.secondary_base_url
    }

    pub fn secondary_model(&self) -> &str {
        &self.secondary_model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// `<platform config dir>/konnectops/config.toml`, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "konnectops")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(KonnectError::Configuration(
            "timeout must be at least one second".into(),
        ));
    }
    Ok(Duration::from_secs(secs))
}
