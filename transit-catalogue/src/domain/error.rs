//! Catalogue ingestion errors.
//!
//! These are raised while a catalogue is being built. Queries against a
//! finished catalogue never fail; they report absence with `Option` instead.

/// Errors raised while populating a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop with this name has already been added
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A bus with this name has already been added
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// A distance or bus referenced a stop that has not been added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A bus was declared without any stops
    #[error("bus {0} has no stops")]
    EmptyRoute(String),
}
