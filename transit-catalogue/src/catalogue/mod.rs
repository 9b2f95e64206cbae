//! In-memory transit catalogue.
//!
//! Records are collected by a [`CatalogueBuilder`] and frozen into an
//! immutable [`Catalogue`] that answers name lookups, per-bus statistics,
//! per-stop bus membership and name-ordered enumeration.

mod builder;
mod distances;
mod query;
mod stats;
mod store;

pub use builder::CatalogueBuilder;
pub use distances::DistanceTable;
pub use query::Catalogue;
pub use stats::BusStats;
pub use store::EntityStore;
