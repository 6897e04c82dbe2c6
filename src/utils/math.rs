use nalgebra::{Rotation2, Vector2};
use std::f64::consts::PI;

use crate::utils::{
    constants::DISTANCE_EPSILON,
    errors::SafeguardError,
    types::{Point2D, Side},
};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap a bearing into [0, 360)
#[inline]
pub fn normalize_bearing(bearing: f64) -> f64 {
    let wrapped = bearing.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[inline]
pub fn reciprocal_bearing(bearing: f64) -> f64 {
    normalize_bearing(bearing + 180.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Unit vector (east, north) for a grid bearing.
pub fn bearing_to_unit(bearing_deg: f64) -> Vector2<f64> {
    let b = deg_to_rad(bearing_deg);
    Vector2::new(b.sin(), b.cos())
}

pub fn distance(a: &Point2D, b: &Point2D) -> f64 {
    (b.to_vector() - a.to_vector()).norm()
}

/// Grid bearing from `a` to `b`, clockwise from north, in [0, 360).
pub fn bearing_between(a: &Point2D, b: &Point2D) -> Result<f64, SafeguardError> {
    let delta = b.to_vector() - a.to_vector();
    if delta.norm() < DISTANCE_EPSILON {
        return Err(SafeguardError::degenerate(format!(
            "cannot take a bearing between coincident points {a} and {b}"
        )));
    }
    Ok(normalize_bearing(rad_to_deg(delta.x.atan2(delta.y))))
}

pub fn point_at_distance_bearing(origin: &Point2D, distance: f64, bearing_deg: f64) -> Point2D {
    origin.translate(&(bearing_to_unit(bearing_deg) * distance))
}

/// Offset `point` sideways from a line running along `bearing_deg`.
pub fn perpendicular_offset(point: &Point2D, bearing_deg: f64, distance: f64, side: Side) -> Point2D {
    let perpendicular = match side {
        Side::Left => bearing_deg - 90.0,
        Side::Right => bearing_deg + 90.0,
    };
    point_at_distance_bearing(point, distance, perpendicular)
}

/// Rotate `point` clockwise (compass sense) about `centre`.
pub fn rotate_about(point: &Point2D, centre: &Point2D, clockwise_deg: f64) -> Point2D {
    let rotation = Rotation2::new(-deg_to_rad(clockwise_deg));
    let rotated = rotation * (point.to_vector() - centre.to_vector());
    centre.translate(&rotated)
}
