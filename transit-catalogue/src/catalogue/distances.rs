//! Measured road distances between stops.
//!
//! Distances are directional: the road from A to B may be longer than the
//! road back. Only the pairs supplied at ingestion are stored; lookups fall
//! back to the reverse pair and then to zero.

use std::collections::HashMap;

use crate::domain::StopId;

/// Road distances in meters, keyed by ordered stop pair.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    meters: HashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance for exactly `from -> to`, replacing any earlier value.
    ///
    /// The reverse direction is left untouched.
    pub fn insert(&mut self, from: StopId, to: StopId, meters: u32) {
        self.meters.insert((from, to), meters);
    }

    /// The distance stored for exactly `from -> to`, if any.
    pub fn get_exact(&self, from: StopId, to: StopId) -> Option<u32> {
        self.meters.get(&(from, to)).copied()
    }

    /// Resolve the road distance from `from` to `to`.
    ///
    /// Tries `from -> to`, then `to -> from`, and yields 0 when neither
    /// direction was supplied.
    pub fn resolve(&self, from: StopId, to: StopId) -> u32 {
        self.get_exact(from, to)
            .or_else(|| self.get_exact(to, from))
            .unwrap_or(0)
    }

    /// Number of ordered pairs stored.
    pub fn len(&self) -> usize {
        self.meters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }
}
