//! Configuration loaded from `~/.config/profile-lens/config.toml`.
//!
//! Every key is optional:
//!
//! ```toml
//! [layout]
//! y_tolerance = 3.0
//! column_gap_threshold = 50.0
//!
//! [sections]
//! location_max_tokens = 2
//!
//! [sections.headings]
//! summary = ["Summary", "Zusammenfassung"]
//!
//! [model]
//! backend = "ollama"        # or "openrouter"
//! model = "phi"
//! max_attempts = 2
//! ```
//!
//! `OPENROUTER_API_KEY`, `PROFILE_LENS_BACKEND` and `PROFILE_LENS_MODEL`
//! override the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::{BackendKind, ModelConfig};
use crate::layout::LayoutConfig;
use crate::sections::SegmentConfig;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub sections: SegmentConfig,
    pub model: ModelConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is used and a missing file means defaults. Environment
    /// overrides are applied in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let path = config_path();
                if path.exists() {
                    Self::read(&path)?
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            Self::from_toml(&content).with_context(|| format!("invalid TOML in {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Apply environment overrides read through `var`.
    ///
    /// Empty values are ignored. An unknown backend name is ignored too, so a
    /// typo never silently switches to a paid backend.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("OPENROUTER_API_KEY") {
            self.model.api_key = Some(key);
        }
        if let Some(model) = var("PROFILE_LENS_MODEL") {
            self.model.model = Some(model);
        }
        if let Some(backend) = var("PROFILE_LENS_BACKEND") {
            match backend.parse::<BackendKind>() {
                Ok(kind) => self.model.backend = kind,
                Err(e) => warn!("Ignoring PROFILE_LENS_BACKEND: {e}"),
            }
        }
    }
}

/// Return the path to the default config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("profile-lens")
        .join("config.toml")
}
