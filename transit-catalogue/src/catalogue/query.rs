//! The read-only transit catalogue.

use std::collections::{BTreeSet, HashSet};

use crate::domain::{Bus, BusId, Stop, StopId};

use super::distances::DistanceTable;
use super::stats::BusStats;
use super::store::EntityStore;

/// An immutable snapshot of stops, buses and road distances.
///
/// Produced by [`CatalogueBuilder::build`](super::CatalogueBuilder::build).
/// Every lookup reports a missing name with `None` rather than a filler value.
#[derive(Debug, Default)]
pub struct Catalogue {
    pub(super) store: EntityStore,
    pub(super) distances: DistanceTable,
    /// Buses serving each stop, indexed by `StopId`.
    pub(super) stop_buses: Vec<BTreeSet<BusId>>,
    /// Distinct stops of each bus, indexed by `BusId`.
    pub(super) unique_stops: Vec<HashSet<StopId>>,
}

impl Catalogue {
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.store.find_stop(name)
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.store.find_bus(name)
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.store.stop(id)
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.store.bus(id)
    }

    pub(crate) fn stop_name(&self, id: StopId) -> &str {
        self.store.stop_name(id)
    }

    pub(crate) fn bus_name(&self, id: BusId) -> &str {
        self.store.bus_name(id)
    }

    /// Road distance from `from` to `to` in meters.
    ///
    /// Falls back to the reverse direction, then to 0, when the exact pair
    /// was never supplied.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances.resolve(from, to)
    }

    /// Names of the buses serving a stop, in ascending order.
    ///
    /// Returns `None` if the stop does not exist, and an empty list if it
    /// exists but no bus calls there.
    pub fn buses_for_stop(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.store.stop_id(name)?;
        let mut names: Vec<&str> = self
            .stop_buses
            .get(id.index())
            .into_iter()
            .flatten()
            .filter_map(|bus| self.store.bus(*bus))
            .map(Bus::name)
            .collect();
        names.sort_unstable();
        Some(names)
    }

    /// Route statistics for a bus, or `None` for an unknown name.
    pub fn bus_info(&self, name: &str) -> Option<BusStats> {
        let bus = self.store.find_bus(name)?;

        let mut route_length = 0.0;
        let mut geo_length = 0.0;
        for pair in bus.stops().windows(2) {
            let (from, to) = (pair[0], pair[1]);
            route_length += f64::from(self.distance(from, to));
            if let (Some(a), Some(b)) = (self.store.stop(from), self.store.stop(to)) {
                geo_length += a.coordinates().distance_to(&b.coordinates());
            }
        }

        let unique_stop_count = self
            .unique_stops
            .get(bus.id().index())
            .map_or(0, HashSet::len);

        Some(BusStats {
            stop_count: bus.stops().len(),
            unique_stop_count,
            route_length,
            geo_length,
        })
    }

    /// All stops in ascending name order.
    pub fn sorted_stops(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.store.sorted_stops()
    }

    /// All buses in ascending name order.
    pub fn sorted_buses(&self) -> impl Iterator<Item = &Bus> + '_ {
        self.store.sorted_buses()
    }

    pub fn stop_count(&self) -> usize {
        self.store.stop_count()
    }

    pub fn bus_count(&self) -> usize {
        self.store.bus_count()
    }
}
