//! Meteorological station siting surfaces, squared to grid north.

use crate::{
    components::{Attributes, Field, ReferencePoint, SurfaceFeature, SurfaceKind},
    systems::geometry,
    utils::{
        point_at_distance_bearing, Point2D, SafeguardError, MET_BUFFER_SIDE, MET_ENCLOSURE_SIDE,
        MET_OBSTACLE_BUFFER,
    },
};

fn square(centre: &Point2D, side: f64) -> Vec<Point2D> {
    let h = side / 2.0;
    [(h, h), (h, -h), (-h, -h), (-h, h)]
        .iter()
        .map(|&(de, dn)| Point2D::new(centre.easting + de, centre.northing + dn))
        .collect()
}

/// Square of side `side` grown outward by `buffer`, with quarter-circle corners.
fn rounded_square(centre: &Point2D, side: f64, buffer: f64, segments: usize) -> Vec<Point2D> {
    let quarter = (segments / 4).max(2);
    let step = 90.0 / quarter as f64;
    square(centre, side)
        .iter()
        .enumerate()
        .flat_map(|(k, corner)| {
            let start = 90.0 * k as f64;
            (0..=quarter).map(move |i| point_at_distance_bearing(corner, buffer, start + i as f64 * step))
        })
        .collect()
}

pub fn generate_met_surfaces(
    station: &ReferencePoint,
    segments: usize,
) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let centre = station.location;
    let zones = [
        ("Enclosure", square(&centre, MET_ENCLOSURE_SIDE), MET_ENCLOSURE_SIDE),
        ("Buffer Zone", square(&centre, MET_BUFFER_SIDE), MET_BUFFER_SIDE),
        (
            "Obstacle Buffer",
            rounded_square(&centre, MET_ENCLOSURE_SIDE, MET_OBSTACLE_BUFFER, segments),
            MET_OBSTACLE_BUFFER,
        ),
    ];

    zones
        .into_iter()
        .map(|(zone, ring, length)| {
            let polygon = geometry::ring_polygon(&ring, &format!("MET {zone}"))?;
            let attributes = Attributes::new()
                .text(Field::Zone, zone)
                .real(Field::ElevM, station.elevation)
                .real(Field::LenM, length);
            Ok(SurfaceFeature::new(
                SurfaceKind::MetStation,
                geometry::to_multi(polygon),
                attributes,
            ))
        })
        .collect()
}
