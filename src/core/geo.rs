use crate::core::vector::Vector2;
use serde::{Deserialize, Serialize};

/// A point in the Mercator pixel plane
pub type PixelPoint = Vector2;

/// Represents a geographical coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Clamps latitude to [-90, 90] and wraps longitude with a floored modulo of 180.
    ///
    /// The modulo is deliberately 180 rather than 360: a longitude of -10 becomes 170.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.latitude.clamp(-90.0, 90.0),
            self.longitude.rem_euclid(180.0),
        )
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// geo-types orders coordinates as (x = longitude, y = latitude)
impl From<GeoCoordinate> for geo_types::Coord<f64> {
    fn from(coordinate: GeoCoordinate) -> Self {
        geo_types::coord! { x: coordinate.longitude, y: coordinate.latitude }
    }
}

impl From<geo_types::Coord<f64>> for GeoCoordinate {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<geo_types::Point<f64>> for GeoCoordinate {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::from(point.0)
    }
}

/// Angular extent of a viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl GeoSpan {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

impl Default for GeoSpan {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A visible region: center coordinate plus span
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoRegion {
    pub center: GeoCoordinate,
    pub span: GeoSpan,
}

impl GeoRegion {
    pub fn new(center: GeoCoordinate, span: GeoSpan) -> Self {
        Self { center, span }
    }

    /// Western edge of the region
    pub fn west(&self) -> f64 {
        self.center.longitude - self.span.longitude_delta / 2.0
    }
}

/// Size of a viewport in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scales both dimensions by `factor`
    pub fn scaled(&self, factor: f64) -> PixelSize {
        PixelSize::new(self.width * factor, self.height * factor)
    }

    /// True when both dimensions are positive finite numbers
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn to_vector(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }
}

impl Default for PixelSize {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
