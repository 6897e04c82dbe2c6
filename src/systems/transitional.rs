//! Transitional surfaces rising from the strip and approach edges to the
//! inner horizontal surface.

use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    systems::{approach::approach_stations, geometry, RunwayModel, Station},
    utils::{Point2D, SafeguardError, Side, DISTANCE_EPSILON},
};

/// Lateral sign in an end frame mapped to the side seen by a pilot landing on
/// that end. Positive lateral is left looking outward, so right on approach.
pub(crate) fn landing_side(sign: f64) -> Side {
    if sign > 0.0 {
        Side::Right
    } else {
        Side::Left
    }
}

/// Horizontal run needed to climb from `elevation` to `top` at `slope_perc`.
fn run_to(top: f64, elevation: f64, slope_perc: f64) -> f64 {
    ((top - elevation) / (slope_perc / 100.0)).max(0.0)
}

/// Approach stations up to the point where the approach surface meets `top`.
fn stations_below(stations: &[Station], top: f64) -> Vec<Station> {
    let mut kept = Vec::new();
    let first = match stations.first() {
        Some(first) => *first,
        None => return kept,
    };
    kept.push(first);
    for pair in stations.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.elevation >= top {
            break;
        }
        if b.elevation >= top {
            let t = (top - a.elevation) / (b.elevation - a.elevation);
            kept.push(Station {
                along: a.along + t * (b.along - a.along),
                half_width: a.half_width + t * (b.half_width - a.half_width),
                elevation: top,
            });
            break;
        }
        kept.push(b);
    }
    kept
}

struct Piece {
    description: String,
    side: Side,
    points: Vec<Point2D>,
    base_elevation: f64,
}

fn strip_pieces(model: &RunwayModel, top: f64, slope: f64) -> Vec<Piece> {
    let p = model.primary;
    let f = RunwayModel::far(p);
    let frame = model.frame(p);
    let (near_end, far_end) = (model.surfaces[p], model.surfaces[f]);

    let near_along = near_end.strip_extension;
    let far_along = -(model.length + far_end.strip_extension);
    let near_z = model.centreline_elevation(p, near_along);
    let far_z = model.centreline_elevation(p, far_along);
    let near_run = run_to(top, near_z, slope);
    let far_run = run_to(top, far_z, slope);
    if near_run < DISTANCE_EPSILON && far_run < DISTANCE_EPSILON {
        return Vec::new();
    }

    [1.0, -1.0]
        .into_iter()
        .map(|sign| {
            let near_hw = near_end.strip_half_width;
            let far_hw = far_end.strip_half_width;
            Piece {
                description: "Strip".to_string(),
                side: landing_side(sign),
                points: vec![
                    frame.point(near_along, sign * near_hw),
                    frame.point(far_along, sign * far_hw),
                    frame.point(far_along, sign * (far_hw + far_run)),
                    frame.point(near_along, sign * (near_hw + near_run)),
                ],
                base_elevation: near_z.min(far_z),
            }
        })
        .collect()
}

fn approach_pieces(model: &RunwayModel, end: usize, top: f64, slope: f64) -> Vec<Piece> {
    let frame = model.frame(end);
    let stations = stations_below(&approach_stations(model.surfaces[end], frame.elevation), top);
    if stations.len() < 2 {
        return Vec::new();
    }

    [1.0, -1.0]
        .into_iter()
        .map(|sign| {
            let mut points: Vec<Point2D> = stations
                .iter()
                .map(|s| frame.point(s.along, sign * s.half_width))
                .collect();
            points.extend(stations.iter().rev().map(|s| {
                frame.point(
                    s.along,
                    sign * (s.half_width + run_to(top, s.elevation, slope)),
                )
            }));
            Piece {
                description: format!("Approach {}", frame.designator),
                side: landing_side(sign),
                points,
                base_elevation: stations[0].elevation,
            }
        })
        .collect()
}

/// Transitional surfaces for both sides of a runway. `top` is the inner
/// horizontal surface elevation.
pub fn generate_transitional(
    model: &RunwayModel,
    top: f64,
) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let params = &model.surfaces[model.primary].transitional;
    let slope = params.slope_perc;

    let mut pieces = strip_pieces(model, top, slope);
    for end in [model.primary, RunwayModel::far(model.primary)] {
        pieces.extend(approach_pieces(model, end, top, slope));
    }

    pieces
        .into_iter()
        .map(|piece| {
            let polygon = geometry::ring_polygon(
                &piece.points,
                &format!("{} transitional {} {}", model.name, piece.description, piece.side.code()),
            )?;
            let attributes = Attributes::new()
                .text(Field::RwyName, model.name.clone())
                .text(Field::SectionDesc, piece.description)
                .text(Field::Side, piece.side.code())
                .real(Field::ElevM, top)
                .real(Field::HeightAgl, top - piece.base_elevation)
                .real(Field::SlopePerc, slope)
                .text(Field::RefMos, params.ref_mos.clone());
            Ok(SurfaceFeature::new(
                SurfaceKind::Transitional,
                geometry::to_multi(polygon),
                attributes,
            ))
        })
        .collect()
}
