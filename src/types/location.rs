use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Bounds are checked by whatever collects the coordinate, not here.
///
/// # Examples
///
/// ```
/// use weather_outlook::LatLon;
///
/// let tbilisi = LatLon(41.711033, 44.758182);
/// assert_eq!(tbilisi.0, 41.711033); // Latitude
/// assert_eq!(tbilisi.1, 44.758182); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}
