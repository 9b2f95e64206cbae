//! Passenger-facing itineraries reconstructed from graph paths.

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryItem {
    /// Wait at a stop for the next bus.
    Wait { stop_name: String, time: f64 },
    /// Ride a bus for `span_count` stops.
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryItem {
    /// Minutes spent on this step.
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } | ItineraryItem::Bus { time, .. } => *time,
        }
    }
}

/// The fastest way between two stops, as alternating waits and rides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    pub items: Vec<ItineraryItem>,
    /// Sum of all item times (minutes).
    pub total_time: f64,
}

impl Itinerary {
    /// An itinerary with no steps, used when origin and destination coincide.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, ItineraryItem::Bus { .. }))
            .count()
    }
}
