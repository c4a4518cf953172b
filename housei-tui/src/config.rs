//! Configuration loading for the HOUSEI TUI.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use crate::layout::Breakpoints;
use housei_core::ReferencePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Catalog JSON to load instead of the built-in mock catalog.
    pub catalog_path: Option<PathBuf>,
    pub reference_policy: ReferencePolicy,
    pub tick_rate_ms: u64,
    pub log_path: PathBuf,
    /// `EnvFilter` directives; `RUST_LOG` wins when set.
    pub log_filter: Option<String>,
    pub theme: ThemeConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Nominal pixel width of one terminal column.
    pub cell_width_px: u16,
    pub mobile_below_px: u32,
    pub desktop_from_px: u32,
}

impl LayoutConfig {
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            mobile_below: self.mobile_below_px,
            desktop_from: self.desktop_from_px,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or HOUSEI_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TuiConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "catalog_path",
                    reason: "must not be empty when set".to_string(),
                });
            }
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "log_filter",
                    reason: "must not be empty when set".to_string(),
                });
            }
        }
        if self.theme.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "blueprint" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'blueprint' is supported".to_string(),
            });
        }
        if self.layout.cell_width_px == 0 {
            return Err(ConfigError::InvalidValue {
                field: "layout.cell_width_px",
                reason: "must be > 0".to_string(),
            });
        }
        if self.layout.mobile_below_px == 0 {
            return Err(ConfigError::InvalidValue {
                field: "layout.mobile_below_px",
                reason: "must be > 0".to_string(),
            });
        }
        if self.layout.desktop_from_px < self.layout.mobile_below_px {
            return Err(ConfigError::InvalidValue {
                field: "layout.desktop_from_px",
                reason: "must be >= mobile_below_px".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("HOUSEI_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
