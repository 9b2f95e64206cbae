//! Errors from loading and processing a request document.

use crate::domain::CatalogueError;
use crate::router::ConfigError;

/// Errors that can occur before any stat request is answered.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Reading the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base requests do not form a consistent catalogue
    #[error("invalid base requests: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The routing settings cannot produce a route graph
    #[error("invalid routing settings: {0}")]
    Config(#[from] ConfigError),

    /// Route requests were made without routing settings
    #[error("route requests need routing_settings")]
    MissingRoutingSettings,
}
