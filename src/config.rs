//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/labkit/labkit.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `LABKIT_*` prefix, `__` between sections

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// How the tree demo renders its trees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// `(value left right)` with `.` for absent children
    #[default]
    Sexpr,
    /// Box-drawing layout
    Box,
}

impl fmt::Display for TreeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeStyle::Sexpr => f.write_str("sexpr"),
            TreeStyle::Box => f.write_str("box"),
        }
    }
}

/// Magic-square generator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MagicConfig {
    /// Order of the generated square (odd)
    pub order: usize,
    /// Width each cell is right-aligned to
    pub cell_width: usize,
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self {
            order: 5,
            cell_width: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeConfig {
    pub style: TreeStyle,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub magic: RawMagicConfig,
    pub tree: RawTreeConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawMagicConfig {
    pub order: Option<usize>,
    pub cell_width: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawTreeConfig {
    pub style: Option<TreeStyle>,
}

/// Unified configuration for labkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub magic: MagicConfig,
    pub tree: TreeConfig,
}

/// Get the XDG config directory for labkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "labkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("labkit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    parse_raw_settings(&content, path)
}

fn parse_raw_settings(content: &str, path: &Path) -> Result<RawSettings, ApplicationError> {
    toml::from_str(content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            magic: MagicConfig {
                order: overlay.magic.order.unwrap_or(self.magic.order),
                cell_width: overlay.magic.cell_width.unwrap_or(self.magic.cell_width),
            },
            tree: TreeConfig {
                style: overlay.tree.style.unwrap_or(self.tree.style),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply LABKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("LABKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<usize>(&config, "magic.order")? {
            settings.magic.order = val;
        }
        if let Some(val) = env_value::<usize>(&config, "magic.cell_width")? {
            settings.magic.cell_width = val;
        }
        if let Some(val) = env_value::<TreeStyle>(&config, "tree.style")? {
            settings.tree.style = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# labkit configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/labkit/labkit.toml
#   Explicit: labkit --config <file>
#   Env:      LABKIT_* environment variables, e.g. LABKIT_MAGIC__ORDER=7

[magic]
# Order of the generated square, must be odd
# order = 5

# Width each cell is right-aligned to
# cell_width = 3

[tree]
# "sexpr" for (value left right), "box" for a drawn tree
# style = "sexpr"
"#
        .to_string()
    }
}

/// A variable that is not set is `None`; one that does not parse is an error.
fn env_value<T: DeserializeOwned>(
    config: &Config,
    key: &str,
) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
