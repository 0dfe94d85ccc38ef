//! Conversions between geographic degrees and the Mercator pixel plane.
//!
//! The plane is `MERCATOR_EXTENT` pixels on each side at the reference zoom.
//! Every forward conversion snaps to the nearest whole pixel and every inverse
//! conversion snaps its input first, so round trips are only pixel-accurate.
//! None of these functions reject input; out-of-range degrees simply project
//! off the plane.

use crate::core::constants::{MERCATOR_EXTENT, MERCATOR_OFFSET, MERCATOR_RADIUS};
use crate::core::geo::{GeoCoordinate, PixelPoint};
use std::f64::consts::PI;

/// Projects a longitude to a pixel-space x coordinate
pub fn longitude_to_pixel_x(longitude: f64) -> f64 {
    (MERCATOR_OFFSET + MERCATOR_RADIUS * longitude * PI / 180.0).round()
}

/// Projects a latitude to a pixel-space y coordinate.
///
/// The poles map onto the plane edges exactly; the general formula is singular there.
pub fn latitude_to_pixel_y(latitude: f64) -> f64 {
    if latitude == 90.0 {
        0.0
    } else if latitude == -90.0 {
        MERCATOR_EXTENT
    } else {
        let sin_lat = (latitude * PI / 180.0).sin();
        (MERCATOR_OFFSET - MERCATOR_RADIUS * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / 2.0)
            .round()
    }
}

pub fn pixel_x_to_longitude(pixel_x: f64) -> f64 {
    ((pixel_x.round() - MERCATOR_OFFSET) / MERCATOR_RADIUS) * 180.0 / PI
}

pub fn pixel_y_to_latitude(pixel_y: f64) -> f64 {
    let exponent = (pixel_y.round() - MERCATOR_OFFSET) / MERCATOR_RADIUS;
    (PI / 2.0 - 2.0 * exponent.exp().atan()) * 180.0 / PI
}

/// Projects a coordinate onto the pixel plane
pub fn coordinate_to_pixel(coordinate: &GeoCoordinate) -> PixelPoint {
    PixelPoint::new(
        longitude_to_pixel_x(coordinate.longitude),
        latitude_to_pixel_y(coordinate.latitude),
    )
}

/// Maps a pixel-plane point back to a coordinate
pub fn pixel_to_coordinate(point: &PixelPoint) -> GeoCoordinate {
    GeoCoordinate::new(pixel_y_to_latitude(point.y), pixel_x_to_longitude(point.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Web Mercator's northern limit in degrees
    const MAX_MERCATOR_LATITUDE: f64 = 85.05112877980659;

    #[test]
    fn test_pole_fixed_points() {
        assert_eq!(latitude_to_pixel_y(90.0), 0.0);
        assert_eq!(latitude_to_pixel_y(-90.0), MERCATOR_EXTENT);
        assert_eq!(latitude_to_pixel_y(-90.0), 536_870_912.0);
    }

    #[test]
    fn test_equator_maps_to_offset() {
        assert_eq!(latitude_to_pixel_y(0.0), MERCATOR_OFFSET);
        assert_eq!(latitude_to_pixel_y(0.0), 268_435_456.0);
        assert!(pixel_y_to_latitude(MERCATOR_OFFSET).abs() < 1e-12);
    }

    #[test]
    fn test_longitude_projection() {
        assert_eq!(longitude_to_pixel_x(0.0), MERCATOR_OFFSET);
        assert_eq!(longitude_to_pixel_x(30.0), 313_174_699.0);
        assert_eq!(longitude_to_pixel_x(180.0), MERCATOR_EXTENT);
        assert_eq!(longitude_to_pixel_x(-180.0), 0.0);
    }

    #[test]
    fn test_longitude_round_trip() {
        let lng = pixel_x_to_longitude(longitude_to_pixel_x(30.0));
        assert!((lng - 30.0).abs() < 1e-4, "lng={}", lng);

        let lng = pixel_x_to_longitude(313_174_656.0);
        assert!((lng - 30.0).abs() < 1e-4, "lng={}", lng);
    }

    #[test]
    fn test_plane_edges_map_to_mercator_limit() {
        assert!((pixel_y_to_latitude(0.0) - MAX_MERCATOR_LATITUDE).abs() < 1e-5);
        assert!((pixel_y_to_latitude(MERCATOR_EXTENT) + MAX_MERCATOR_LATITUDE).abs() < 1e-5);
    }

    #[test]
    fn test_inverse_rounds_its_input() {
        assert_eq!(pixel_x_to_longitude(313_174_698.6), pixel_x_to_longitude(313_174_699.0));
        assert_eq!(pixel_y_to_latitude(1000.4), pixel_y_to_latitude(1000.0));
    }

    #[test]
    fn test_out_of_range_inputs_are_not_rejected() {
        // sin(180 deg) is a hair above zero, so this lands on the equator row
        assert_eq!(latitude_to_pixel_y(180.0), MERCATOR_OFFSET);
        assert!(longitude_to_pixel_x(540.0).is_finite());
        assert!(pixel_y_to_latitude(-1e9).is_finite());
    }

    #[test]
    fn test_coordinate_round_trip() {
        let coord = GeoCoordinate::new(56.0, 10.0);
        let back = pixel_to_coordinate(&coordinate_to_pixel(&coord));

        assert!((back.latitude - coord.latitude).abs() < 1e-5);
        assert!((back.longitude - coord.longitude).abs() < 1e-5);
    }
}
