//! Stop records and their identities.

use super::Coordinates;

/// Stable identity of a stop, issued by the entity store in insertion order.
///
/// Identities are never reused, so they can key any derived index
/// (distances, graph vertices, reverse lookups) for the life of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

impl StopId {
    /// Position of this stop in the store's backing storage.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named stop at a fixed geographic position.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    id: StopId,
    name: String,
    coordinates: Coordinates,
}

impl Stop {
    pub(crate) fn new(id: StopId, name: String, coordinates: Coordinates) -> Self {
        Self {
            id,
            name,
            coordinates,
        }
    }

    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
