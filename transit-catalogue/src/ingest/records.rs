//! Typed ingestion records.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::catalogue::{Catalogue, CatalogueBuilder};
use crate::domain::{CatalogueError, Coordinates, RouteKind};

/// One entry of the `base_requests` batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRecord),
    Bus(BusRecord),
}

/// A stop definition with the road distances measured from it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Meters from this stop to each named neighbour.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// A bus definition as declared, before out-and-back expansion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRecord {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// Populate a catalogue from a batch of records.
///
/// Records may appear in any order in the batch. They are applied in three
/// passes: every stop, then every road distance, then every bus, so that
/// distances and buses can always resolve the stops they mention.
pub fn load_catalogue(records: &[BaseRequest]) -> Result<Catalogue, CatalogueError> {
    let mut builder = CatalogueBuilder::new();

    let stops: Vec<&StopRecord> = records
        .iter()
        .filter_map(|record| match record {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        })
        .collect();
    let buses: Vec<&BusRecord> = records
        .iter()
        .filter_map(|record| match record {
            BaseRequest::Bus(bus) => Some(bus),
            BaseRequest::Stop(_) => None,
        })
        .collect();

    for stop in &stops {
        builder.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude))?;
    }

    for stop in &stops {
        for (to, meters) in &stop.road_distances {
            builder.add_distance(&stop.name, to, *meters)?;
        }
    }

    for bus in &buses {
        let names: Vec<&str> = bus.stops.iter().map(String::as_str).collect();
        builder.add_bus(
            &bus.name,
            &names,
            RouteKind::from_roundtrip_flag(bus.is_roundtrip),
        )?;
    }

    debug!(stops = stops.len(), buses = buses.len(), "ingested base requests");
    Ok(builder.build())
}
