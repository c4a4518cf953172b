//! Error types for the TUI.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use housei_core::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
}
