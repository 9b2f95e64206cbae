//! Fastest-itinerary routing over the catalogue.
//!
//! The catalogue is converted once into a directed graph whose edges are
//! either a fixed wait at a stop or a ride on one bus across one or more
//! stops. Queries run a shortest-path search over that fixed graph.

mod builder;
mod config;
mod graph;
mod itinerary;
mod search;

#[cfg(test)]
mod search_tests;

pub use builder::{RouteGraphBuilder, TransitGraph};
pub use config::{ConfigError, RoutingSettings};
pub use graph::{Edge, EdgeId, EdgeKind, RouteGraph, VertexId};
pub use itinerary::{Itinerary, ItineraryItem};
pub use search::{RouteError, RouteProvider, TransportRouter};
