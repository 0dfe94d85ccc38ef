use crate::{
    core::{
        config::MapViewOptions,
        constants::MAX_ZOOM_LEVEL,
        geo::{GeoCoordinate, GeoRegion, PixelSize},
        viewport::{region_for_zoom, span_for_zoom, zoom_for_region},
    },
    MapError, Result,
};

/// The native map view the zoom facade drives.
///
/// Implementations own the actual view state; the facade only reads the current
/// region and bounds and writes new regions back.
pub trait NativeMapView {
    /// Region currently shown by the view
    fn region(&self) -> GeoRegion;

    /// Size of the view in pixels
    fn bounds_size(&self) -> PixelSize;

    /// Replaces the shown region
    fn set_region(&mut self, region: GeoRegion, animated: bool);
}

impl<V: NativeMapView + ?Sized> NativeMapView for &mut V {
    fn region(&self) -> GeoRegion {
        (**self).region()
    }

    fn bounds_size(&self) -> PixelSize {
        (**self).bounds_size()
    }

    fn set_region(&mut self, region: GeoRegion, animated: bool) {
        (**self).set_region(region, animated)
    }
}

impl<V: NativeMapView + ?Sized> NativeMapView for Box<V> {
    fn region(&self) -> GeoRegion {
        (**self).region()
    }

    fn bounds_size(&self) -> PixelSize {
        (**self).bounds_size()
    }

    fn set_region(&mut self, region: GeoRegion, animated: bool) {
        (**self).set_region(region, animated)
    }
}

/// In-memory map view with fixed bounds, for headless use and tests
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessMapView {
    region: GeoRegion,
    size: PixelSize,
    last_animated: Option<bool>,
    update_count: usize,
}

impl HeadlessMapView {
    pub fn new(size: PixelSize) -> Self {
        Self::with_region(size, GeoRegion::default())
    }

    pub fn with_region(size: PixelSize, region: GeoRegion) -> Self {
        Self {
            region,
            size,
            last_animated: None,
            update_count: 0,
        }
    }

    /// Animation flag of the most recent update, if any
    pub fn last_animated(&self) -> Option<bool> {
        self.last_animated
    }

    pub fn update_count(&self) -> usize {
        self.update_count
    }

    pub fn set_size(&mut self, size: PixelSize) {
        self.size = size;
    }
}

impl NativeMapView for HeadlessMapView {
    fn region(&self) -> GeoRegion {
        self.region
    }

    fn bounds_size(&self) -> PixelSize {
        self.size
    }

    fn set_region(&mut self, region: GeoRegion, animated: bool) {
        self.region = region;
        self.last_animated = Some(animated);
        self.update_count += 1;
    }
}

/// Zoom-level accessors over a native map view.
///
/// The zoom level is never stored: it is derived from the view's current region
/// each time it is read.
#[derive(Debug, Clone)]
pub struct MapView<V> {
    view: V,
    options: MapViewOptions,
}

impl<V: NativeMapView> MapView<V> {
    pub fn new(view: V) -> Self {
        Self::with_options(view, MapViewOptions::default())
    }

    pub fn with_options(view: V, options: MapViewOptions) -> Self {
        Self { view, options }
    }

    /// Centers the view on `center` at `zoom_level`.
    ///
    /// Zoom levels above [`MAX_ZOOM_LEVEL`] are clamped; lower bounds are not enforced.
    pub fn set_center_coordinates(
        &mut self,
        center: GeoCoordinate,
        zoom_level: f64,
        animated: bool,
    ) -> Result<()> {
        self.check_coordinate(&center)?;
        self.check_zoom(zoom_level)?;
        let size = self.checked_bounds_size()?;

        let zoom_level = zoom_level.min(MAX_ZOOM_LEVEL);
        let span = span_for_zoom(&size, &center, zoom_level);
        let region = GeoRegion::new(center, span);

        log::debug!(
            "setting region center ({:.6}, {:.6}) span ({:.6}, {:.6}) at zoom {}",
            center.latitude,
            center.longitude,
            span.latitude_delta,
            span.longitude_delta,
            zoom_level
        );
        self.view.set_region(region, animated);
        Ok(())
    }

    pub fn set_map_lat_lon(
        &mut self,
        latitude: f64,
        longitude: f64,
        zoom_level: f64,
        animated: bool,
    ) -> Result<()> {
        self.set_center_coordinates(GeoCoordinate::new(latitude, longitude), zoom_level, animated)
    }

    /// Current zoom level, derived from the shown region and the view width
    pub fn zoom_level(&self) -> f64 {
        zoom_for_region(&self.view.bounds_size(), &self.view.region())
    }

    /// Changes the zoom level while keeping the current center
    pub fn set_zoom_level(&mut self, zoom_level: f64, animated: bool) -> Result<()> {
        let center = self.view.region().center;
        self.set_center_coordinates(center, zoom_level, animated)
    }

    /// Pole-aware region for `center` at `zoom_level`, sized to this view.
    ///
    /// The view is left untouched.
    pub fn region_for_zoom(&self, center: GeoCoordinate, zoom_level: f64) -> Result<GeoRegion> {
        self.check_coordinate(&center)?;
        self.check_zoom(zoom_level)?;
        let size = self.checked_bounds_size()?;

        Ok(region_for_zoom(&size, &center, zoom_level))
    }

    pub fn region(&self) -> GeoRegion {
        self.view.region()
    }

    /// Shows `region` as given, without deriving a span from a zoom level
    pub fn set_region(&mut self, region: GeoRegion, animated: bool) -> Result<()> {
        self.check_coordinate(&region.center)?;
        self.view.set_region(region, animated);
        Ok(())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_inner(self) -> V {
        self.view
    }

    pub fn options(&self) -> &MapViewOptions {
        &self.options
    }

    fn check_coordinate(&self, center: &GeoCoordinate) -> Result<()> {
        if self.options.is_strict() && !center.is_finite() {
            log::warn!("rejecting non-finite coordinate {:?}", center);
            return Err(MapError::InvalidCoordinates(format!(
                "latitude {} / longitude {} must be finite",
                center.latitude, center.longitude
            )));
        }
        Ok(())
    }

    fn check_zoom(&self, zoom_level: f64) -> Result<()> {
        if self.options.is_strict() && !zoom_level.is_finite() {
            log::warn!("rejecting non-finite zoom level {}", zoom_level);
            return Err(MapError::InvalidZoom(format!(
                "zoom level {} must be finite",
                zoom_level
            )));
        }
        Ok(())
    }

    fn checked_bounds_size(&self) -> Result<PixelSize> {
        let size = self.view.bounds_size();
        if self.options.is_strict() && !size.is_drawable() {
            log::warn!("rejecting view bounds {:?}", size);
            return Err(MapError::InvalidViewport(format!(
                "view bounds {}x{} are not drawable",
                size.width, size.height
            )));
        }
        Ok(size)
    }
}
