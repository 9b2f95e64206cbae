//! Conversion of a catalogue into a time-weighted route graph.
//!
//! Each stop owns two vertices: a waiting vertex where journeys arrive and
//! depart, and a boarded vertex reached after paying the wait time. Ride
//! edges leave boarded vertices and land on waiting vertices, so every
//! change of bus pays the wait again.

use tracing::{debug, trace};

use crate::catalogue::Catalogue;
use crate::domain::StopId;

use super::config::{ConfigError, RoutingSettings};
use super::graph::{Edge, EdgeKind, RouteGraph, VertexId};

/// A route graph together with the stop-to-vertex numbering used to build it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitGraph {
    graph: RouteGraph,
    /// Waiting vertex of each stop, indexed by `StopId`.
    waiting: Vec<Option<VertexId>>,
}

impl TransitGraph {
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// The vertex where journeys to or from `stop` begin and end.
    pub fn waiting_vertex(&self, stop: StopId) -> Option<VertexId> {
        self.waiting.get(stop.index()).copied().flatten()
    }

    /// The vertex reached after waiting at `stop`.
    pub fn boarded_vertex(&self, stop: StopId) -> Option<VertexId> {
        self.waiting_vertex(stop).map(|v| v + 1)
    }
}

/// Builds a [`TransitGraph`] from a finished catalogue.
pub struct RouteGraphBuilder<'a> {
    catalogue: &'a Catalogue,
    settings: RoutingSettings,
}

impl<'a> RouteGraphBuilder<'a> {
    /// Create a builder, rejecting settings that would produce invalid weights.
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            catalogue,
            settings,
        })
    }

    /// Build the graph.
    ///
    /// Vertices are numbered by stop name order and edges are added bus by
    /// bus in name order, so an unchanged catalogue always yields an
    /// identical graph.
    pub fn build(&self) -> TransitGraph {
        let stop_count = self.catalogue.stop_count();
        let mut transit = TransitGraph {
            graph: RouteGraph::with_vertex_count(stop_count * 2),
            waiting: vec![None; stop_count],
        };
        for (position, stop) in self.catalogue.sorted_stops().enumerate() {
            transit.waiting[stop.id().index()] = Some(position * 2);
        }

        for stop in self.catalogue.sorted_stops() {
            let (Some(wait), Some(board)) = (
                transit.waiting_vertex(stop.id()),
                transit.boarded_vertex(stop.id()),
            ) else {
                continue;
            };
            transit.graph.add_edge(Edge {
                from: wait,
                to: board,
                weight: self.settings.wait_minutes(),
                kind: EdgeKind::Wait { stop: stop.id() },
            });
        }

        let wait_edges = transit.graph.edge_count();

        for bus in self.catalogue.sorted_buses() {
            let stops = bus.stops();
            trace!(
                bus = bus.name(),
                roundtrip = bus.is_roundtrip(),
                stops = stops.len(),
                "adding ride edges"
            );
            for i in 0..stops.len() {
                let Some(board) = transit.boarded_vertex(stops[i]) else {
                    continue;
                };

                let mut meters: u64 = 0;
                for j in (i + 1)..stops.len() {
                    meters += u64::from(self.catalogue.distance(stops[j - 1], stops[j]));
                    let Some(alight) = transit.waiting_vertex(stops[j]) else {
                        continue;
                    };

                    transit.graph.add_edge(Edge {
                        from: board,
                        to: alight,
                        weight: self.settings.ride_minutes(meters as f64),
                        kind: EdgeKind::Ride {
                            bus: bus.id(),
                            span_count: j - i,
                        },
                    });
                }
            }
        }

        debug!(
            vertices = transit.graph.vertex_count(),
            wait_edges,
            ride_edges = transit.graph.edge_count() - wait_edges,
            "route graph built"
        );

        transit
    }
}
