//! Append-only storage for stop and bus records.

use std::collections::BTreeMap;

use crate::domain::{Bus, BusId, CatalogueError, Coordinates, RouteKind, Stop, StopId};

/// Owns every stop and bus record and issues their identities.
///
/// Records are never moved out, replaced or removed once inserted, so an
/// identity handed out by the store stays valid for as long as the store
/// lives. Name indexes are ordered, which makes name-sorted enumeration free.
#[derive(Debug, Default)]
pub struct EntityStore {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stops_by_name: BTreeMap<String, StopId>,
    buses_by_name: BTreeMap<String, BusId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stop, rejecting a name that is already taken.
    pub fn insert_stop(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        if self.stops_by_name.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_string()));
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(id, name.to_string(), coordinates));
        self.stops_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Insert a bus over an already materialized stop sequence.
    pub fn insert_bus(
        &mut self,
        name: &str,
        stops: Vec<StopId>,
        kind: RouteKind,
    ) -> Result<BusId, CatalogueError> {
        if self.buses_by_name.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }
        if stops.is_empty() {
            return Err(CatalogueError::EmptyRoute(name.to_string()));
        }

        let id = BusId(self.buses.len());
        self.buses.push(Bus::new(id, name.to_string(), stops, kind));
        self.buses_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.index())
    }

    /// Name of a stop issued by this store.
    ///
    /// # Panics
    ///
    /// If `id` was issued by a different store.
    pub(crate) fn stop_name(&self, id: StopId) -> &str {
        self.stops[id.index()].name()
    }

    /// Name of a bus issued by this store.
    ///
    /// # Panics
    ///
    /// If `id` was issued by a different store.
    pub(crate) fn bus_name(&self, id: BusId) -> &str {
        self.buses[id.index()].name()
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stops_by_name.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.buses_by_name.get(name).copied()
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).and_then(|id| self.stop(id))
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).and_then(|id| self.bus(id))
    }

    /// Stops in ascending name order.
    pub fn sorted_stops(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.stops_by_name
            .values()
            .map(move |id| &self.stops[id.index()])
    }

    /// Buses in ascending name order.
    pub fn sorted_buses(&self) -> impl Iterator<Item = &Bus> + '_ {
        self.buses_by_name
            .values()
            .map(move |id| &self.buses[id.index()])
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}
