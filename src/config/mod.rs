use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checks::CheckId;
use crate::error::{IrLintError, Result};

/// Name of the configuration file discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = ".ir-lint.toml";

/// Tool configuration: which files to pick up and which checks to run.
/// The key vocabulary and the order table are fixed and deliberately have
/// no configuration surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default: DefaultConfig,
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultConfig {
    /// File extensions to lint.
    pub extensions: Vec<String>,
    /// Check names to deactivate (see `CheckId` names).
    pub disabled: Vec<String>,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["ir".to_string()],
            disabled: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    /// Glob patterns for paths to skip.
    pub patterns: Vec<String>,
}

impl Config {
    /// Load from `.ir-lint.toml` in the working directory, falling back to
    /// defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| IrLintError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns an error on an unknown check name, an invalid exclude glob,
    /// or an empty extension list.
    pub fn validate(&self) -> Result<()> {
        for name in &self.default.disabled {
            name.parse::<CheckId>().map_err(IrLintError::Config)?;
        }
        for pattern in &self.exclude.patterns {
            globset::Glob::new(pattern).map_err(|source| IrLintError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }
        if self.default.extensions.is_empty() {
            return Err(IrLintError::Config(
                "at least one extension must be configured".to_string(),
            ));
        }
        Ok(())
    }

    /// The deactivated check identities. Assumes a validated config;
    /// unparseable names are ignored here.
    #[must_use]
    pub fn disabled_checks(&self) -> Vec<CheckId> {
        self.default
            .disabled
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
