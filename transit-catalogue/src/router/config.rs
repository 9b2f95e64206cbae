//! Routing configuration for the route graph.

use serde::Deserialize;

/// Meters in a kilometer.
const METERS_PER_KM: f64 = 1000.0;

/// Minutes in an hour.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Error returned for routing settings that cannot produce a valid graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Velocity must be a finite, positive number of km/h
    #[error("invalid bus velocity: {0} km/h")]
    InvalidVelocity(f64),
}

/// Parameters for converting the catalogue into a time-weighted graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting for a bus at each boarding (minutes).
    pub bus_wait_time: u32,

    /// Average bus speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time and velocity.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that the settings yield non-negative, finite edge weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(ConfigError::InvalidVelocity(self.bus_velocity));
        }
        Ok(())
    }

    /// Returns the wait time in minutes.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Returns the velocity in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * METERS_PER_KM / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `meters` at the configured velocity.
    pub fn ride_minutes(&self, meters: f64) -> f64 {
        meters / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}
