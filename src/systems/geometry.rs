//! Polygon construction shared by the surface generators.

use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};

use crate::utils::{
    distance, point_at_distance_bearing, Point2D, SafeguardError, AREA_EPSILON, DISTANCE_EPSILON,
};

fn close_enough(a: &Point2D, b: &Point2D) -> bool {
    distance(a, b) < DISTANCE_EPSILON
}

/// Drop repeated vertices, including a closing vertex equal to the first.
fn dedup_ring(points: &[Point2D]) -> Vec<Point2D> {
    let mut ring: Vec<Point2D> = Vec::with_capacity(points.len());
    for p in points {
        if ring.last().map_or(true, |last| !close_enough(last, p)) {
            ring.push(*p);
        }
    }
    while ring.len() > 1 && close_enough(&ring[0], &ring[ring.len() - 1]) {
        ring.pop();
    }
    ring
}

fn line_string(points: &[Point2D]) -> LineString<f64> {
    LineString::from(points.iter().map(|p| Coord::from(*p)).collect::<Vec<_>>())
}

/// Closed polygon from an open vertex list. Rings that collapse to fewer than
/// three vertices or enclose no area are rejected.
pub fn ring_polygon(points: &[Point2D], what: &str) -> Result<Polygon<f64>, SafeguardError> {
    let ring = dedup_ring(points);
    if ring.len() < 3 {
        return Err(SafeguardError::degenerate(format!(
            "{what}: ring has {} distinct vertices",
            ring.len()
        )));
    }
    let polygon = Polygon::new(line_string(&ring), vec![]);
    if polygon.unsigned_area() < AREA_EPSILON {
        return Err(SafeguardError::degenerate(format!("{what}: zero-area polygon")));
    }
    Ok(polygon)
}

/// Vertices of a regular polygon inscribed in a circle, clockwise from north.
pub fn circle_points(centre: &Point2D, radius: f64, segments: usize) -> Vec<Point2D> {
    let step = 360.0 / segments as f64;
    (0..segments)
        .map(|i| point_at_distance_bearing(centre, radius, i as f64 * step))
        .collect()
}

pub fn disc(
    centre: &Point2D,
    radius: f64,
    segments: usize,
    what: &str,
) -> Result<Polygon<f64>, SafeguardError> {
    if radius.is_nan() || radius <= 0.0 {
        return Err(SafeguardError::degenerate(format!("{what}: radius {radius}")));
    }
    ring_polygon(&circle_points(centre, radius, segments), what)
}

/// Ring between two concentric circles. An inner radius of zero gives a disc.
pub fn annulus(
    centre: &Point2D,
    outer: f64,
    inner: f64,
    segments: usize,
    what: &str,
) -> Result<Polygon<f64>, SafeguardError> {
    if inner <= 0.0 {
        return disc(centre, outer, segments, what);
    }
    if inner >= outer {
        return Err(SafeguardError::degenerate(format!(
            "{what}: inner radius {inner} is not inside outer radius {outer}"
        )));
    }
    let exterior = disc(centre, outer, segments, what)?;
    let mut hole = circle_points(centre, inner, segments);
    hole.reverse();
    Ok(Polygon::new(exterior.exterior().clone(), vec![line_string(&hole)]))
}

pub fn to_multi(polygon: Polygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon])
}

/// Union of every part, folded left to right.
pub fn union_all(parts: &[MultiPolygon<f64>]) -> MultiPolygon<f64> {
    let mut iter = parts.iter();
    let first = match iter.next() {
        Some(first) => first.clone(),
        None => return MultiPolygon::new(Vec::new()),
    };
    iter.fold(first, |acc, part| acc.union(part))
}
