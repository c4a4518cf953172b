//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to `log_path`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "housei_tui=info,housei_core=info,warn";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid log filter: {0}")]
    Filter(String),
    #[error("Failed to init subscriber: {0}")]
    Init(String),
}

/// Resolve the filter: `RUST_LOG`, then the configured directives, then the
/// built-in default.
pub fn build_filter(configured: Option<&str>) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER))
        .map_err(|e| LoggingError::Filter(e.to_string()))
}

pub fn init(log_path: &Path, configured_filter: Option<&str>) -> Result<(), LoggingError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| LoggingError::Open {
                path: log_path.display().to_string(),
                source,
            })?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|source| LoggingError::Open {
            path: log_path.display().to_string(),
            source,
        })?;

    let env_filter = build_filter(configured_filter)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}
