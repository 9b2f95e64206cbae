//! Shortest-path queries over the route graph.
//!
//! Searches run Dijkstra from the origin's waiting vertex to the
//! destination's waiting vertex. Search state is allocated per call, so
//! one router can serve any number of concurrent queries.

use ordered_float::OrderedFloat;
use pathfinding::directed::dijkstra::dijkstra;
use tracing::trace;

use crate::catalogue::Catalogue;
use crate::domain::StopId;

use super::builder::{RouteGraphBuilder, TransitGraph};
use super::config::{ConfigError, RoutingSettings};
use super::graph::{EdgeId, EdgeKind, VertexId};
use super::itinerary::{Itinerary, ItineraryItem};

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The named stop is not in the catalogue
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Both stops exist but no sequence of buses connects them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },
}

/// Anything that can answer fastest-itinerary queries by stop name.
///
/// This abstraction lets request handling run against a plain router or a
/// memoizing wrapper.
pub trait RouteProvider {
    fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError>;
}

/// The edges of a shortest path and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RoutePath {
    pub(crate) edges: Vec<EdgeId>,
    /// Minutes.
    pub(crate) total_time: f64,
}

/// Answers fastest-itinerary queries for a fixed catalogue.
///
/// The graph is built once in [`TransportRouter::new`] and never changes
/// afterwards.
#[derive(Debug)]
pub struct TransportRouter<'a> {
    catalogue: &'a Catalogue,
    settings: RoutingSettings,
    graph: TransitGraph,
}

impl<'a> TransportRouter<'a> {
    /// Build the route graph for `catalogue`.
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> Result<Self, ConfigError> {
        let graph = RouteGraphBuilder::new(catalogue, settings.clone())?.build();
        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub(crate) fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Fastest itinerary between two named stops.
    ///
    /// Identical origin and destination yield an empty itinerary with zero
    /// total time.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        let from_id = self.stop_id(from)?;
        let to_id = self.stop_id(to)?;
        self.find_route_between(from_id, to_id)
    }

    /// Fastest itinerary between two stops of this router's catalogue.
    pub(crate) fn find_route_between(&self, from: StopId, to: StopId) -> Result<Itinerary, RouteError> {
        let path = self.find_path(from, to)?;
        let itinerary = self.itinerary(&path);
        trace!(
            from = from.index(),
            to = to.index(),
            items = itinerary.items.len(),
            rides = itinerary.ride_count(),
            total_time = itinerary.total_time,
            "route found"
        );
        Ok(itinerary)
    }

    /// Shortest path between the waiting vertices of two stops.
    pub(crate) fn find_path(&self, from: StopId, to: StopId) -> Result<RoutePath, RouteError> {
        let unreachable = || RouteError::Unreachable {
            from: self.catalogue.stop_name(from).to_string(),
            to: self.catalogue.stop_name(to).to_string(),
        };

        let start = self.graph().waiting_vertex(from).ok_or_else(unreachable)?;
        let goal = self.graph().waiting_vertex(to).ok_or_else(unreachable)?;
        let graph = self.graph().graph();

        let (vertices, cost) = dijkstra(
            &start,
            move |&vertex| {
                graph
                    .outgoing(vertex)
                    .iter()
                    .filter_map(move |&id| graph.edge(id))
                    .map(|edge| (edge.to, OrderedFloat(edge.weight)))
            },
            |&vertex| vertex == goal,
        )
        .ok_or_else(unreachable)?;

        let edges = vertices
            .windows(2)
            .map(|pair| self.cheapest_edge(pair[0], pair[1]))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(unreachable)?;

        Ok(RoutePath {
            edges,
            total_time: cost.into_inner(),
        })
    }

    /// Cheapest edge from `from` to `to`; the lowest id wins ties.
    fn cheapest_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let graph = self.graph().graph();
        graph
            .outgoing(from)
            .iter()
            .filter_map(|&id| graph.edge(id).map(|edge| (id, edge)))
            .filter(|(_, edge)| edge.to == to)
            .min_by_key(|(id, edge)| (OrderedFloat(edge.weight), *id))
            .map(|(id, _)| id)
    }

    fn itinerary(&self, path: &RoutePath) -> Itinerary {
        let graph = self.graph().graph();
        let mut items = Vec::with_capacity(path.edges.len());
        let mut total_time = 0.0;

        for edge in path.edges.iter().filter_map(|&id| graph.edge(id)) {
            total_time += edge.weight;
            items.push(match edge.kind {
                EdgeKind::Wait { stop } => ItineraryItem::Wait {
                    stop_name: self.catalogue.stop_name(stop).to_string(),
                    time: edge.weight,
                },
                EdgeKind::Ride { bus, span_count } => ItineraryItem::Bus {
                    bus: self.catalogue.bus_name(bus).to_string(),
                    span_count,
                    time: edge.weight,
                },
            });
        }

        Itinerary { items, total_time }
    }

    /// Resolve a stop name to its identity.
    pub fn stop_id(&self, name: &str) -> Result<StopId, RouteError> {
        self.catalogue
            .find_stop(name)
            .map(|stop| stop.id())
            .ok_or_else(|| RouteError::UnknownStop(name.to_string()))
    }
}

impl RouteProvider for TransportRouter<'_> {
    fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        TransportRouter::find_route(self, from, to)
    }
}
