//! Write-once ingestion phase for the catalogue.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace};

use crate::domain::{BusId, CatalogueError, Coordinates, RouteKind, StopId};

use super::query::Catalogue;

/// Collects stops, distances and buses, then freezes them into a [`Catalogue`].
///
/// Distances and buses refer to stops by name, so every stop they mention
/// must have been added first; otherwise the call fails with
/// [`CatalogueError::UnknownStop`] and the builder is left unchanged.
///
/// # Examples
///
/// ```
/// use transit_catalogue::catalogue::CatalogueBuilder;
/// use transit_catalogue::domain::{Coordinates, RouteKind};
///
/// let mut builder = CatalogueBuilder::new();
/// builder.add_stop("A", Coordinates::new(55.6, 37.2)).unwrap();
/// builder.add_stop("B", Coordinates::new(55.59, 37.21)).unwrap();
/// builder.add_distance("A", "B", 1200).unwrap();
/// builder.add_bus("14", &["A", "B"], RouteKind::OutAndBack).unwrap();
///
/// let catalogue = builder.build();
/// assert_eq!(catalogue.bus_info("14").unwrap().stop_count, 3);
/// ```
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    inner: Catalogue,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop. Stop names must be unique.
    pub fn add_stop(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let id = self.inner.store.insert_stop(name, coordinates)?;
        self.inner.stop_buses.push(BTreeSet::new());
        trace!(stop = name, id = id.index(), "added stop");
        Ok(id)
    }

    /// Set the road distance for exactly `from -> to`.
    ///
    /// A later call for the same ordered pair replaces the earlier value.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), CatalogueError> {
        let from_id = self.resolve_stop(from)?;
        let to_id = self.resolve_stop(to)?;
        self.inner.distances.insert(from_id, to_id, meters);
        Ok(())
    }

    /// Add a bus over the stops it was declared with.
    ///
    /// Out-and-back routes are expanded to their driven sequence here, once.
    /// Every stop on the route records the bus in its reverse index.
    pub fn add_bus(
        &mut self,
        name: &str,
        stops: &[&str],
        kind: RouteKind,
    ) -> Result<BusId, CatalogueError> {
        let declared = stops
            .iter()
            .map(|stop| self.resolve_stop(stop))
            .collect::<Result<Vec<_>, _>>()?;
        let driven = kind.materialize(&declared);

        let id = self.inner.store.insert_bus(name, driven.clone(), kind)?;

        let mut unique = HashSet::with_capacity(driven.len());
        for stop in &driven {
            unique.insert(*stop);
            if let Some(buses) = self.inner.stop_buses.get_mut(stop.index()) {
                buses.insert(id);
            }
        }
        self.inner.unique_stops.push(unique);

        trace!(
            bus = name,
            id = id.index(),
            stops = driven.len(),
            roundtrip = kind.is_roundtrip(),
            "added bus"
        );
        Ok(id)
    }

    /// Freeze the collected records into a read-only catalogue.
    pub fn build(self) -> Catalogue {
        debug!(
            stops = self.inner.stop_count(),
            buses = self.inner.bus_count(),
            distances = self.inner.distances.len(),
            "catalogue built"
        );
        self.inner
    }

    fn resolve_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.inner
            .store
            .stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}
