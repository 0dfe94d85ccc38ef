use mercator_zoom::prelude::*;

/// Drives the zoom facade against an in-memory view, without any native map
fn main() -> mercator_zoom::Result<()> {
    env_logger::init(); // Initialize logging

    println!("Mercator zoom headless example");
    println!("==============================");

    let size = PixelSize::new(320.0, 480.0);
    let initial = GeoRegion::new(GeoCoordinate::new(56.0, 10.6), GeoSpan::new(3.1, 3.1));
    let mut map = MapView::new(HeadlessMapView::with_region(size, initial));

    println!("View {}x{} px", size.width, size.height);
    println!("Initial zoom level: {:.4}", map.zoom_level());

    let locations = [
        ("Copenhagen", GeoCoordinate::new(55.6761, 12.5683), 11.0),
        ("London", GeoCoordinate::new(51.5074, -0.1278), 10.0),
        ("Tokyo", GeoCoordinate::new(35.6762, 139.6503), 12.0),
    ];

    for (name, center, zoom) in locations {
        map.set_center_coordinates(center, zoom, false)?;
        let region = map.region();
        println!(
            "{:<10} zoom {:>4.1} -> span {:.5} x {:.5} deg, reads back as {:.4}",
            name,
            zoom,
            region.span.latitude_delta,
            region.span.longitude_delta,
            map.zoom_level()
        );
    }

    map.set_zoom_level(50.0, true)?;
    println!("Requested zoom 50, clamped to {:.4}", map.zoom_level());

    let polar = map.region_for_zoom(GeoCoordinate::new(89.5, 200.0), 3.0)?;
    println!(
        "Pole-aware region: center ({:.4}, {:.4}) span ({:.4}, {:.4})",
        polar.center.latitude,
        polar.center.longitude,
        polar.span.latitude_delta,
        polar.span.longitude_delta
    );

    Ok(())
}
