use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::utils::Timezone;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// IANA zone name, `utc` or `local`; unset means local
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Config {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(content)?)
    }

    /// Reads `path`, failing on I/O or parse errors.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file is missing or
    /// cannot be used.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolves the configured zone, defaulting to local time.
    pub fn timezone(&self) -> Result<Timezone> {
        Timezone::parse(self.timezone.as_deref())
    }
}
