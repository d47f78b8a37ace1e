//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (everything unset; the AWS SDK resolves the rest)
//! 2. Config file: `--config <FILE>`, else `$XDG_CONFIG_HOME/spot-interrupter/spot-interrupter.toml`
//! 3. Environment variables: `SPOT_INTERRUPTER_*` prefix
//! 4. CLI flags (applied by the caller via [`Settings::merge_with`])

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for spot-interrupter.
///
/// Unset values fall through to the standard AWS resolution chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// AWS region (default: SDK resolution, e.g. `AWS_REGION`)
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    /// FIS endpoint override (e.g. LocalStack)
    pub endpoint_url: Option<String>,
    /// IAM role FIS assumes when running created templates
    pub fis_role_arn: Option<String>,
}

/// Get the XDG config directory for spot-interrupter.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "spot-interrupter").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("spot-interrupter.toml"))
}

/// Load a TOML file into Settings.
fn load_file(path: &Path) -> Result<Settings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Merge overlay onto self (base): overlay wins where set.
    pub fn merge_with(&self, overlay: &Settings) -> Self {
        Self {
            region: overlay.region.clone().or_else(|| self.region.clone()),
            profile: overlay.profile.clone().or_else(|| self.profile.clone()),
            endpoint_url: overlay
                .endpoint_url
                .clone()
                .or_else(|| self.endpoint_url.clone()),
            fis_role_arn: overlay
                .fis_role_arn
                .clone()
                .or_else(|| self.fis_role_arn.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist. When `None`, the
    ///   global config file is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                current = current.merge_with(&load_file(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        current = current.merge_with(&load_file(&global_path)?);
                    }
                }
            }
        }

        current = Self::apply_env_overrides(current)?;
        debug!("Settings::load: {:?}", current);
        Ok(current)
    }

    /// Apply SPOT_INTERRUPTER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SPOT_INTERRUPTER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("region") {
            settings.region = Some(val);
        }
        if let Ok(val) = config.get_string("profile") {
            settings.profile = Some(val);
        }
        if let Ok(val) = config.get_string("endpoint_url") {
            settings.endpoint_url = Some(val);
        }
        if let Ok(val) = config.get_string("fis_role_arn") {
            settings.fis_role_arn = Some(val);
        }

        Ok(settings)
    }

    /// Render settings as TOML (for display).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {e}"),
        })
    }
}
