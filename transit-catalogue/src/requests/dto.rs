//! Data transfer objects for stat requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalogue::BusStats;
use crate::router::{Itinerary, ItineraryItem};

/// Error message reported for every unanswerable request.
pub const NOT_FOUND: &str = "not found";

/// A query against the catalogue.
///
/// Request types other than `Stop`, `Bus` and `Route` (for example `Map`)
/// parse as [`StatRequest::Unsupported`] so the rest of a batch is still
/// answered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RequestRepr")]
pub enum StatRequest {
    /// Buses serving a stop
    Stop { id: i64, name: String },

    /// Statistics of a bus route
    Bus { id: i64, name: String },

    /// Fastest itinerary between two stops
    Route { id: i64, from: String, to: String },

    /// A request type this crate does not answer
    Unsupported { id: i64, kind: String },
}

impl StatRequest {
    /// The caller-assigned id echoed back as `request_id`.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Stop { id, .. }
            | StatRequest::Bus { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Unsupported { id, .. } => *id,
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum KnownRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Route { id: i64, from: String, to: String },
}

#[derive(Deserialize)]
struct OtherRequest {
    id: i64,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequestRepr {
    Known(KnownRequest),
    Other(OtherRequest),
}

impl TryFrom<RequestRepr> for StatRequest {
    type Error = String;

    fn try_from(repr: RequestRepr) -> Result<Self, Self::Error> {
        match repr {
            RequestRepr::Known(KnownRequest::Stop { id, name }) => Ok(StatRequest::Stop { id, name }),
            RequestRepr::Known(KnownRequest::Bus { id, name }) => Ok(StatRequest::Bus { id, name }),
            RequestRepr::Known(KnownRequest::Route { id, from, to }) => {
                Ok(StatRequest::Route { id, from, to })
            }
            // A known type that only matched the fallback is missing fields.
            RequestRepr::Other(OtherRequest { id, kind }) => match kind.as_str() {
                "Stop" | "Bus" | "Route" => Err(format!("malformed {kind} request {id}")),
                _ => Ok(StatRequest::Unsupported { id, kind }),
            },
        }
    }
}

/// Answer to a [`StatRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Stop(StopResponse),
    Bus(BusResponse),
    Route(RouteResponse),
    NotFound(NotFoundResponse),
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound(NotFoundResponse {
            request_id,
            error_message: NOT_FOUND.to_string(),
        })
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Stop(r) => r.request_id,
            StatResponse::Bus(r) => r.request_id,
            StatResponse::Route(r) => r.request_id,
            StatResponse::NotFound(r) => r.request_id,
        }
    }
}

/// Buses serving a stop, in name order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub buses: Vec<String>,
    pub request_id: i64,
}

/// Route statistics of a bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub curvature: f64,
    pub request_id: i64,
    pub route_length: f64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl BusResponse {
    pub fn new(request_id: i64, stats: &BusStats) -> Self {
        Self {
            curvature: stats.curvature(),
            request_id,
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

/// Fastest itinerary between two stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    pub fn new(request_id: i64, itinerary: &Itinerary) -> Self {
        Self {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.items.iter().map(RouteItem::from).collect(),
        }
    }
}

/// One step of a route response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&ItineraryItem> for RouteItem {
    fn from(item: &ItineraryItem) -> Self {
        match item {
            ItineraryItem::Wait { stop_name, time } => RouteItem::Wait {
                stop_name: stop_name.clone(),
                time: *time,
            },
            ItineraryItem::Bus {
                bus,
                span_count,
                time,
            } => RouteItem::Bus {
                bus: bus.clone(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

/// Reported when a stop, bus or route does not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub request_id: i64,
    pub error_message: String,
}
