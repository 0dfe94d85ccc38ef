//! Engine-wide constants for the Mercator pixel space.
//! Keeping them in a single place makes the projection and zoom math agree on one world size.

/// Half the width of the projected world in Mercator pixels at the reference zoom.
pub const MERCATOR_OFFSET: f64 = 268_435_456.0;

/// Radius of the projected world in Mercator pixels.
pub const MERCATOR_RADIUS: f64 = MERCATOR_OFFSET / std::f64::consts::PI;

/// Full height (and width) of the Mercator pixel plane.
pub const MERCATOR_EXTENT: f64 = MERCATOR_OFFSET * 2.0;

/// Zoom at which one viewport pixel covers exactly one Mercator pixel.
pub const REFERENCE_ZOOM_LEVEL: f64 = 20.0;

/// Write paths clamp larger zoom levels to this ceiling.
pub const MAX_ZOOM_LEVEL: f64 = 18.0;
