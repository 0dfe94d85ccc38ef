//! # mercator-zoom
//!
//! Zoom levels for map views that only understand regions.
//!
//! Native map views are usually driven by a center coordinate plus a span in
//! degrees. This library converts between that representation and a
//! tile-style zoom level by way of a virtual Mercator pixel plane, and wraps a
//! native view so its zoom level can be read and set directly.

pub mod core;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{InputPolicy, MapViewOptions},
    geo::{GeoCoordinate, GeoRegion, GeoSpan, PixelPoint, PixelSize},
    map::{HeadlessMapView, MapView, NativeMapView},
    vector::Vector2,
    viewport::{region_for_zoom, span_for_zoom, zoom_for_region},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid zoom level: {0}")]
    InvalidZoom(String),

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Error type alias for convenience
pub type Error = MapError;
