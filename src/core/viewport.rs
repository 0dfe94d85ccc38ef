use crate::core::constants::{MERCATOR_EXTENT, REFERENCE_ZOOM_LEVEL};
use crate::core::geo::{GeoCoordinate, GeoRegion, GeoSpan, PixelPoint, PixelSize};
use crate::core::projection::{
    coordinate_to_pixel, longitude_to_pixel_x, pixel_x_to_longitude, pixel_y_to_latitude,
};

/// Vertical extent of a viewport in the Mercator pixel plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBand {
    /// Northern edge (smaller y)
    pub top: f64,
    /// Southern edge (larger y)
    pub bottom: f64,
    /// Set when the band was pulled back onto the plane
    pub clipped: bool,
}

impl PixelBand {
    pub fn midpoint(&self) -> f64 {
        (self.bottom + self.top) / 2.0
    }

    /// Latitude span covered by the band
    pub fn latitude_delta(&self) -> f64 {
        -(pixel_y_to_latitude(self.bottom) - pixel_y_to_latitude(self.top))
    }
}

/// Number of Mercator pixels covered by one viewport pixel at `zoom_level`
pub fn zoom_scale(zoom_level: f64) -> f64 {
    2_f64.powf(REFERENCE_ZOOM_LEVEL - zoom_level)
}

/// Inverse of [`zoom_scale`]
pub fn zoom_for_scale(zoom_scale: f64) -> f64 {
    REFERENCE_ZOOM_LEVEL - zoom_scale.log2()
}

/// Size of the viewport once projected into Mercator pixels
fn scaled_viewport(viewport_size: &PixelSize, zoom_level: f64) -> PixelSize {
    viewport_size.scaled(zoom_scale(zoom_level))
}

/// Longitude delta between the left edge and `left + scaled_width`
fn longitude_delta(left_pixel_x: f64, scaled_width: f64) -> f64 {
    let min_lng = pixel_x_to_longitude(left_pixel_x);
    let max_lng = pixel_x_to_longitude(left_pixel_x + scaled_width);
    max_lng - min_lng
}

/// Computes the span a viewport covers when centered on `center` at `zoom_level`.
///
/// The center is trusted as given: no clamping and no pole handling happen here.
pub fn span_for_zoom(
    viewport_size: &PixelSize,
    center: &GeoCoordinate,
    zoom_level: f64,
) -> GeoSpan {
    let center_pixel = coordinate_to_pixel(center);
    let scaled = scaled_viewport(viewport_size, zoom_level);

    let top_left = center_pixel - scaled.to_vector() / 2.0;

    let longitude_delta = longitude_delta(top_left.x, scaled.width);

    // pixel y grows southward while latitude grows northward
    let min_lat = pixel_y_to_latitude(top_left.y);
    let max_lat = pixel_y_to_latitude(top_left.y + scaled.height);
    let latitude_delta = -(max_lat - min_lat);

    GeoSpan::new(latitude_delta, longitude_delta)
}

/// Vertical band for a viewport of `scaled_height` Mercator pixels centered on `center_y`.
///
/// If the band starts below the southern edge of the plane it is re-anchored so
/// that its bottom sits on the edge and its top one full height north of `center_y`.
/// Latitudes south of about -85.05 project past the edge, and for them the
/// re-anchored top can still lie south of the bottom, giving an inverted band.
pub fn vertical_band(center_y: f64, scaled_height: f64) -> PixelBand {
    let top = center_y - scaled_height / 2.0;
    let bottom = center_y + scaled_height / 2.0;

    if top > MERCATOR_EXTENT {
        log::trace!(
            "viewport band [{}, {}] lies past the plane edge, clipping",
            top,
            bottom
        );
        PixelBand {
            top: center_y - scaled_height,
            bottom: MERCATOR_EXTENT,
            clipped: true,
        }
    } else {
        PixelBand {
            top,
            bottom,
            clipped: false,
        }
    }
}

/// Computes the region a viewport shows for `center` at `zoom_level`, guarding the poles.
///
/// The center latitude is clamped to [-90, 90] and the longitude wrapped with a
/// floored modulo of 180 before projecting. When the vertical band has to be
/// clipped, the region center is moved to the middle of the clipped band.
///
/// On that clipped path the latitude delta comes out negative whenever the
/// center is far enough south that the band stays inverted.
pub fn region_for_zoom(
    viewport_size: &PixelSize,
    center: &GeoCoordinate,
    zoom_level: f64,
) -> GeoRegion {
    let center = center.normalized();
    let center_pixel: PixelPoint = coordinate_to_pixel(&center);
    let scaled = scaled_viewport(viewport_size, zoom_level);

    let left_pixel_x = center_pixel.x - scaled.width / 2.0;
    let longitude_delta = longitude_delta(left_pixel_x, scaled.width);

    let band = vertical_band(center_pixel.y, scaled.height);
    let span = GeoSpan::new(band.latitude_delta(), longitude_delta);

    let mut region = GeoRegion::new(center, span);
    if band.clipped {
        region.center.latitude = pixel_y_to_latitude(band.midpoint());
    }

    region
}

/// Derives the zoom level at which `region` fills a viewport of `viewport_size`.
///
/// Only the horizontal extent is used: the distance from the center to the
/// western edge is projected, doubled, and compared to the viewport width.
pub fn zoom_for_region(viewport_size: &PixelSize, region: &GeoRegion) -> f64 {
    let center_pixel_x = longitude_to_pixel_x(region.center.longitude);
    let top_left_pixel_x = longitude_to_pixel_x(region.west());

    let scaled_map_width = (center_pixel_x - top_left_pixel_x) * 2.0;
    zoom_for_scale(scaled_map_width / viewport_size.width)
}
