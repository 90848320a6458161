//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/comptree/comptree.toml`
//! 3. Local config: `<dir>/.comptree.toml` (the scanned directory)
//! 4. Environment variables: `COMPTREE_*` prefix, `__` between sections
//!    (e.g. `COMPTREE_RENDER__STEP=4`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult, ScanOptions};
use crate::domain::RenderOptions;

/// Outline rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Indent marker repeated per depth unit
    pub marker: char,
    /// Depth increment per tree level
    pub step: usize,
    /// Depth of the root line
    pub start_depth: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let opts = RenderOptions::default();
        Self {
            marker: opts.marker,
            step: opts.step,
            start_depth: 1,
        }
    }
}

/// Directory scan settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanSettings {
    pub include_hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Raw settings for intermediate parsing; `None` means "not specified here".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: RawRenderSettings,
    pub scan: RawScanSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub marker: Option<char>,
    pub step: Option<usize>,
    pub start_depth: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawScanSettings {
    pub include_hidden: Option<bool>,
    pub max_depth: Option<usize>,
}

/// Unified configuration for comptree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
    pub scan: ScanSettings,
}

/// Get the XDG config directory for comptree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "comptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("comptree.toml"))
}

/// Get the path to the local config file inside a scanned directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".comptree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Largest accepted `render.step`.
pub const MAX_STEP: usize = 64;

/// Largest accepted `render.start_depth`.
pub const MAX_START_DEPTH: usize = 1024;

/// Read `key` from the env source; `None` if unset, error if unparsable.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> ApplicationResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("environment override {}: {}", key, e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render: RenderSettings {
                marker: overlay.render.marker.unwrap_or(self.render.marker),
                step: overlay.render.step.unwrap_or(self.render.step),
                start_depth: overlay.render.start_depth.unwrap_or(self.render.start_depth),
            },
            scan: ScanSettings {
                include_hidden: overlay
                    .scan
                    .include_hidden
                    .unwrap_or(self.scan.include_hidden),
                max_depth: overlay.scan.max_depth.or(self.scan.max_depth),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory whose `.comptree.toml` is merged in
    pub fn load(local_dir: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply COMPTREE_* environment variables as explicit overrides.
    ///
    /// `COMPTREE_RENDER__STEP=4` sets `render.step`. A variable that is set
    /// but does not parse is a config error, never silently skipped.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("COMPTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<String>(&config, "render.marker")? {
            let mut chars = val.chars();
            settings.render.marker = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ApplicationError::Config {
                        message: format!("render.marker must be a single character, got {:?}", val),
                    })
                }
            };
        }
        if let Some(val) = env_value(&config, "render.step")? {
            settings.render.step = val;
        }
        if let Some(val) = env_value(&config, "render.start_depth")? {
            settings.render.start_depth = val;
        }
        if let Some(val) = env_value(&config, "scan.include_hidden")? {
            settings.scan.include_hidden = val;
        }
        if let Some(val) = env_value(&config, "scan.max_depth")? {
            settings.scan.max_depth = Some(val);
        }

        Ok(settings)
    }

    /// Reject settings that would break the one-line-per-node outline.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.render.step == 0 || self.render.step > MAX_STEP {
            return Err(ApplicationError::Config {
                message: format!(
                    "render.step must be between 1 and {}, got {}",
                    MAX_STEP, self.render.step
                ),
            });
        }
        if self.render.start_depth > MAX_START_DEPTH {
            return Err(ApplicationError::Config {
                message: format!(
                    "render.start_depth must be at most {}, got {}",
                    MAX_START_DEPTH, self.render.start_depth
                ),
            });
        }
        if self.render.marker.is_control() {
            return Err(ApplicationError::Config {
                message: format!("render.marker must be printable, got {:?}", self.render.marker),
            });
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            marker: self.render.marker,
            step: self.render.step,
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            include_hidden: self.scan.include_hidden,
            max_depth: self.scan.max_depth,
        }
    }

    /// Serialize the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
