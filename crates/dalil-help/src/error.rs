//! Error types for the help sections

use thiserror::Error;

/// Result type for help operations
pub type Result<T> = std::result::Result<T, HelpError>;

/// Errors from the host-facing surface.
///
/// Navigation and rendering are total and never produce these.
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Unknown documentation tab: {0}")]
    UnknownNestedTab(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] dalil_i18n::CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),
}
