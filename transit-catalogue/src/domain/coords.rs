//! Geographic coordinates and great-circle distance.

use geo::{Distance, HaversineMeasure, Point};

/// Sphere used for great-circle lengths, radius 6371 km.
const EARTH: HaversineMeasure = HaversineMeasure::new(6_371_000.0);

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.611087, 37.20829);
    /// assert_eq!(a.distance_to(&a), 0.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        EARTH.distance(self.to_point(), other.to_point())
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}
