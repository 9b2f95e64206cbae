//! Bus routes and their materialized stop sequences.

use super::StopId;

/// Stable identity of a bus, issued by the entity store in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub(crate) usize);

impl BusId {
    /// Position of this bus in the store's backing storage.
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a bus drives the stops it was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// The declared stops are driven exactly as listed.
    Roundtrip,
    /// The declared stops are driven out, then back in reverse.
    OutAndBack,
}

impl RouteKind {
    pub fn from_roundtrip_flag(is_roundtrip: bool) -> Self {
        if is_roundtrip {
            RouteKind::Roundtrip
        } else {
            RouteKind::OutAndBack
        }
    }

    pub fn is_roundtrip(self) -> bool {
        self == RouteKind::Roundtrip
    }

    /// Expand declared stops into the sequence actually driven.
    ///
    /// Out-and-back routes append the reverse leg without repeating the
    /// turnaround stop, so `[A, B, C]` becomes `[A, B, C, B, A]`.
    /// Roundtrip routes are returned unchanged.
    pub fn materialize<T: Clone>(self, declared: &[T]) -> Vec<T> {
        match self {
            RouteKind::Roundtrip => declared.to_vec(),
            RouteKind::OutAndBack => {
                let mut driven = Vec::with_capacity(declared.len() * 2);
                driven.extend_from_slice(declared);
                driven.extend(declared.iter().rev().skip(1).cloned());
                driven
            }
        }
    }
}

/// A named bus and the stops it visits, in driving order.
///
/// # Invariants
///
/// - `stops` is non-empty
/// - `stops` is already materialized for `kind` (see [`RouteKind::materialize`])
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    id: BusId,
    name: String,
    stops: Vec<StopId>,
    kind: RouteKind,
}

impl Bus {
    pub(crate) fn new(id: BusId, name: String, stops: Vec<StopId>, kind: RouteKind) -> Self {
        Self {
            id,
            name,
            stops,
            kind,
        }
    }

    pub fn id(&self) -> BusId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The materialized stop sequence, including any revisits.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn is_roundtrip(&self) -> bool {
        self.kind.is_roundtrip()
    }
}
