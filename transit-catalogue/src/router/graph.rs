//! Directed weighted graph over stop vertices.

use crate::domain::{BusId, StopId};

/// Index of a vertex in a [`RouteGraph`].
pub type VertexId = usize;

/// Index of an edge in a [`RouteGraph`], in insertion order.
pub type EdgeId = usize;

/// What travelling along an edge means to a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Waiting at a stop before boarding.
    Wait { stop: StopId },
    /// Riding one bus across `span_count` consecutive stops without changing.
    Ride { bus: BusId, span_count: usize },
}

impl EdgeKind {
    /// Stops travelled along the edge; zero for waits.
    pub fn span_count(&self) -> usize {
        match self {
            EdgeKind::Wait { .. } => 0,
            EdgeKind::Ride { span_count, .. } => *span_count,
        }
    }
}

/// A weighted, tagged edge. Weights are minutes and never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub kind: EdgeKind,
}

/// Adjacency-list graph. Edges are never removed once added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl RouteGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// The vertex set grows if either endpoint is beyond the current range.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let needed = edge.from.max(edge.to) + 1;
        if needed > self.incidence.len() {
            self.incidence.resize_with(needed, Vec::new);
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        match self.incidence.get(vertex) {
            Some(ids) => ids.as_slice(),
            None => &[],
        }
    }
}
