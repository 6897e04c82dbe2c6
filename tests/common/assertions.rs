use approx::assert_relative_eq;
use geo::{Area, Centroid};
use safeguarding::{Field, GenerationResult, Point2D, SurfaceFeature};

/// Assert that two points coincide within `epsilon` metres
#[track_caller]
pub fn assert_point_eq(actual: &Point2D, expected: &Point2D, epsilon: f64) {
    assert_relative_eq!(actual.easting, expected.easting, epsilon = epsilon);
    assert_relative_eq!(actual.northing, expected.northing, epsilon = epsilon);
}

/// Assert that every ring of every feature is closed and finite
#[track_caller]
pub fn assert_rings_closed(result: &GenerationResult) {
    for layer in &result.layers {
        for feature in &layer.features {
            for polygon in &feature.geometry {
                let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
                for ring in rings {
                    assert!(ring.is_closed(), "{} has an open ring", layer.name);
                    assert!(ring.0.len() >= 4, "{} has a ring with too few vertices", layer.name);
                    assert!(
                        ring.coords().all(|c| c.x.is_finite() && c.y.is_finite()),
                        "{} has non-finite coordinates",
                        layer.name
                    );
                }
            }
        }
    }
}

/// Assert that every feature carries only the fields of its layer schema
#[track_caller]
pub fn assert_layers_conform(result: &GenerationResult) {
    for layer in &result.layers {
        for feature in &layer.features {
            assert!(layer.conforms(feature), "feature does not fit layer {}", layer.name);
        }
    }
}

fn label(feature: &SurfaceFeature, field: Field) -> String {
    feature.attributes.get_text(field).unwrap_or_default().to_string()
}

fn footprint(features: &[SurfaceFeature]) -> Vec<(String, f64, f64, f64)> {
    let mut keyed: Vec<_> = features
        .iter()
        .map(|f| {
            let key = format!(
                "{}|{}|{}",
                label(f, Field::EndDesig),
                label(f, Field::SectionDesc),
                label(f, Field::Side)
            );
            let centroid = f.geometry.centroid().expect("empty geometry");
            (key, f.geometry.unsigned_area(), centroid.x(), centroid.y())
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed
}

/// Assert that two feature lists describe the same set of polygons, matched by
/// end designator, section and side
#[track_caller]
pub fn assert_feature_sets_match(actual: &[SurfaceFeature], expected: &[SurfaceFeature]) {
    let actual = footprint(actual);
    let expected = footprint(expected);
    assert_eq!(actual.len(), expected.len(), "feature counts differ");
    for (a, e) in actual.iter().zip(&expected) {
        assert_eq!(a.0, e.0);
        assert_relative_eq!(a.1, e.1, max_relative = 1e-9, epsilon = 1e-6);
        assert_relative_eq!(a.2, e.2, epsilon = 1e-6);
        assert_relative_eq!(a.3, e.3, epsilon = 1e-6);
    }
}
