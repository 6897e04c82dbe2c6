//! Contour bands: the part of a sloping surface between two successive
//! contour elevations, drawn as a polygon whose outer edge is the contour.

use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    systems::{approach::approach_stations, geometry, RunwayModel, Station},
    utils::{lerp, SafeguardError, CONTOUR_INTERVAL, DISTANCE_EPSILON},
};

/// Multiples of `interval` strictly above `base`, up to and including `top`.
pub fn contour_levels(base: f64, top: f64, interval: f64) -> Vec<f64> {
    let mut levels = Vec::new();
    if interval.is_nan() || interval <= 0.0 || !base.is_finite() || !top.is_finite() {
        return levels;
    }
    let mut level = (base / interval).floor() * interval + interval;
    while level <= top + DISTANCE_EPSILON {
        levels.push(level);
        level += interval;
    }
    levels
}

/// Distance along the funnel at which it reaches `elevation`, with the index
/// of the section it falls in.
fn along_at_elevation(stations: &[Station], elevation: f64) -> Option<(f64, usize)> {
    stations.windows(2).enumerate().find_map(|(n, pair)| {
        let (a, b) = (pair[0], pair[1]);
        if b.elevation > a.elevation && elevation > a.elevation && elevation <= b.elevation {
            let t = (elevation - a.elevation) / (b.elevation - a.elevation);
            Some((a.along + t * (b.along - a.along), n))
        } else {
            None
        }
    })
}

fn half_width_at(stations: &[Station], along: f64) -> f64 {
    stations
        .windows(2)
        .find(|pair| along <= pair[1].along)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            lerp(a.half_width, b.half_width, (along - a.along) / (b.along - a.along))
        })
        .or_else(|| stations.last().map(|s| s.half_width))
        .unwrap_or(0.0)
}

/// Approach contour bands for one end, from the inner edge up to the highest
/// whole contour the funnel reaches. Level sections carry no contours.
pub fn generate_approach_contours(
    model: &RunwayModel,
    end: usize,
) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let surfaces = model.surfaces[end];
    let frame = model.frame(end);
    let stations = approach_stations(surfaces, frame.elevation);
    let (first, last) = match (stations.first(), stations.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(Vec::new()),
    };

    let mut features = Vec::new();
    let mut inner = first.along;
    for level in contour_levels(first.elevation, last.elevation, CONTOUR_INTERVAL) {
        let Some((outer, section)) = along_at_elevation(&stations, level) else {
            break;
        };

        let mut alongs = vec![inner];
        alongs.extend(
            stations
                .iter()
                .map(|s| s.along)
                .filter(|&a| a > inner + DISTANCE_EPSILON && a < outer - DISTANCE_EPSILON),
        );
        alongs.push(outer);

        let mut ring: Vec<_> = alongs
            .iter()
            .map(|&a| frame.point(a, half_width_at(&stations, a)))
            .collect();
        ring.extend(
            alongs
                .iter()
                .rev()
                .map(|&a| frame.point(a, -half_width_at(&stations, a))),
        );
        let description = format!("Contour {level:.0} m");
        let polygon = geometry::ring_polygon(
            &ring,
            &format!("{} approach {}", frame.designator, description),
        )?;

        let attributes = Attributes::new()
            .text(Field::RwyName, model.name.clone())
            .text(Field::EndDesig, frame.designator.clone())
            .text(Field::SectionDesc, description)
            .real(Field::ElevM, level)
            .real(Field::HeightAgl, level - frame.elevation)
            .text(Field::RefMos, surfaces.approach[section].ref_mos.clone())
            .real(Field::LenM, outer - inner)
            .real(Field::OriginOffset, inner);
        features.push(SurfaceFeature::new(
            SurfaceKind::ApproachContour,
            geometry::to_multi(polygon),
            attributes,
        ));
        inner = outer;
    }
    Ok(features)
}
