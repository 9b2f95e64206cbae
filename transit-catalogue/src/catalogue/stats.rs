//! Derived per-bus statistics.

/// Statistics for one bus, derived on demand from its materialized route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stops on the driven route, counting revisits.
    pub stop_count: usize,

    /// Distinct stops the bus visits.
    pub unique_stop_count: usize,

    /// Sum of resolved road distances between consecutive stops (meters).
    pub route_length: f64,

    /// Sum of great-circle distances between consecutive stops (meters).
    pub geo_length: f64,
}

impl BusStats {
    /// Ratio of road distance to straight-line distance.
    ///
    /// A route whose stops all share one position has no straight-line
    /// length; its curvature is reported as 1.
    pub fn curvature(&self) -> f64 {
        if self.geo_length > 0.0 {
            self.route_length / self.geo_length
        } else {
            1.0
        }
    }
}
