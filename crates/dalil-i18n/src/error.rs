//! Error types for catalog construction

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while parsing identifiers or loading catalog data.
///
/// Lookups themselves never fail; these only surface when a catalog is
/// assembled from authored data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown translation key: {0}")]
    UnknownKey(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
