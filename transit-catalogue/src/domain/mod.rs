//! Domain types for the transit catalogue.
//!
//! Stops and buses are identified by stable integer identities issued by the
//! entity store. Names are only used at the edges: ingestion and queries.

mod bus;
mod coords;
mod error;
mod stop;

pub use bus::{Bus, BusId, RouteKind};
pub use coords::Coordinates;
pub use error::CatalogueError;
pub use stop::{Stop, StopId};
