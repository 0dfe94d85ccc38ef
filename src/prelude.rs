//! Prelude module for common mercator-zoom types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mercator_zoom::prelude::*;`

pub use crate::core::{
    config::{InputPolicy, MapViewOptions},
    constants::{MAX_ZOOM_LEVEL, MERCATOR_OFFSET, MERCATOR_RADIUS},
    geo::{GeoCoordinate, GeoRegion, GeoSpan, PixelPoint, PixelSize},
    map::{HeadlessMapView, MapView, NativeMapView},
    projection::{
        latitude_to_pixel_y, longitude_to_pixel_x, pixel_x_to_longitude, pixel_y_to_latitude,
    },
    vector::Vector2,
    viewport::{region_for_zoom, span_for_zoom, zoom_for_region, PixelBand},
};

pub use crate::{Error as MapError, Result};
