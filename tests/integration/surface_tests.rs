use approx::assert_relative_eq;
use geo::{Area, Centroid, Contains};
use safeguarding::{
    config::IhsShape,
    resources::{CnsStandards, OlsStandards},
    systems::{
        generate_approach, generate_approach_contours, generate_facility_zones, generate_strip,
        generate_takeoff, generate_transitional, hull_of_circles, RunwayModel,
    },
    utils::distance,
    Facility, Field, GenerationOptions, Point2D, RunwayType, SurfaceKind,
};

use crate::common::{
    assert_point_eq, create_test_end, create_test_input, create_test_options,
    create_test_precision_runway, create_test_runway,
};

#[test]
fn test_strip_covers_runway_and_extensions() {
    let runway = create_test_runway();
    let model = RunwayModel::build(&runway).unwrap();
    let strip = generate_strip(&model).unwrap();

    let expected = (model.length + 120.0) * 280.0;
    assert_relative_eq!(strip.area(), expected, max_relative = 1e-9);
    assert_relative_eq!(strip.attributes.get_real(Field::ElevM).unwrap(), 50.0);

    let centroid = strip.geometry.centroid().unwrap();
    assert_point_eq(
        &Point2D::new(centroid.x(), centroid.y()),
        &Point2D::new(1985.0, 1173.5),
        1e-6,
    );
}

#[test]
fn test_approach_starts_at_origin_offset() {
    let runway = create_test_runway();
    let model = RunwayModel::build(&runway).unwrap();
    let outcome = generate_approach(&model, 0).unwrap();
    assert!(outcome.mismatch.is_none());
    assert_relative_eq!(outcome.outer_width, 4780.0, epsilon = 1e-9);

    let first = &outcome.features[0];
    assert_eq!(first.attributes.get_text(Field::SectionDesc), Some("Section 1"));
    assert_relative_eq!(first.attributes.get_real(Field::HeightAgl).unwrap(), 60.0, epsilon = 1e-9);

    // Inner edge is 60 m outward of the 09 threshold, away from 27.
    let frame = model.frame(0);
    let inner_mid = frame.point(60.0, 0.0);
    assert_relative_eq!(distance(&inner_mid, &runway.ends[0].threshold), 60.0, epsilon = 1e-9);
    assert!(
        distance(&inner_mid, &runway.ends[1].threshold)
            > distance(&runway.ends[0].threshold, &runway.ends[1].threshold)
    );
}

#[test]
fn test_takeoff_starts_beyond_far_threshold_and_clearway() {
    let mut runway = create_test_runway();
    runway.ends[1].clearway_m = 150.0;
    let model = RunwayModel::build(&runway).unwrap();

    let tocs = generate_takeoff(&model, 0).unwrap().unwrap();
    assert_eq!(tocs.attributes.get_text(Field::EndDesig), Some("09"));
    assert_relative_eq!(tocs.attributes.get_real(Field::OriginOffset).unwrap(), 210.0);
    assert_relative_eq!(tocs.attributes.get_real(Field::OuterwM).unwrap(), 1800.0);
    assert_relative_eq!(tocs.attributes.get_real(Field::ElevM).unwrap(), 52.0 + 300.0);

    // Hexagon: divergence to 1800 m over 6480 m, then parallel.
    let divergence = 6480.0;
    let expected = divergence * (180.0 + 1800.0) / 2.0 + (15000.0 - divergence) * 1800.0;
    assert_relative_eq!(tocs.area(), expected, max_relative = 1e-9);

    let frame = model.frame(1);
    let polygon = &tocs.geometry.0[0];
    assert!(polygon.contains(&geo::Coord::from(frame.point(220.0, 0.0))));
    assert!(!polygon.contains(&geo::Coord::from(frame.point(200.0, 0.0))));
}

#[test]
fn test_short_takeoff_stays_trapezoidal() {
    let mut runway = create_test_runway();
    for end in runway.ends.iter_mut() {
        if let Some(tocs) = end.surfaces.as_mut().and_then(|s| s.takeoff.as_mut()) {
            tocs.length_m = 2000.0;
        }
    }
    let model = RunwayModel::build(&runway).unwrap();
    let tocs = generate_takeoff(&model, 1).unwrap().unwrap();
    let outer = 180.0 + 2.0 * 2000.0 * 0.125;
    assert_relative_eq!(tocs.attributes.get_real(Field::OuterwM).unwrap(), outer);
    assert_relative_eq!(tocs.area(), 2000.0 * (180.0 + outer) / 2.0, max_relative = 1e-9);
}

#[test]
fn test_transitional_reaches_inner_horizontal() {
    let runway = create_test_runway();
    let model = RunwayModel::build(&runway).unwrap();
    let top = 95.0;
    let features = generate_transitional(&model, top).unwrap();

    // Strip and two approaches, each with both sides.
    assert_eq!(features.len(), 6);
    for feature in &features {
        assert_eq!(feature.kind, SurfaceKind::Transitional);
        assert_relative_eq!(feature.attributes.get_real(Field::ElevM).unwrap(), top);
        assert!(feature.area() > 0.0);
    }

    let strip_left = features
        .iter()
        .find(|f| {
            f.attributes.get_text(Field::SectionDesc) == Some("Strip")
                && f.attributes.get_text(Field::Side) == Some("L")
        })
        .unwrap();
    // 09 threshold at 48 m, 27 at 52 m: the surface widens toward 09.
    let near_run = (top - 48.0) / 0.143;
    let far_run = (top - 52.0) / 0.143;
    let expected = (model.length + 120.0) * (near_run + far_run) / 2.0;
    assert_relative_eq!(strip_left.area(), expected, max_relative = 1e-9);
}

#[test]
fn test_transitional_sides_are_mirrored() {
    let runway = create_test_runway();
    let model = RunwayModel::build(&runway).unwrap();
    let features = generate_transitional(&model, 95.0).unwrap();
    let area = |desc: &str, side: &str| {
        features
            .iter()
            .find(|f| {
                f.attributes.get_text(Field::SectionDesc) == Some(desc)
                    && f.attributes.get_text(Field::Side) == Some(side)
            })
            .map(|f| f.area())
            .unwrap()
    };
    assert_relative_eq!(area("Approach 09", "L"), area("Approach 09", "R"), max_relative = 1e-9);
    assert_relative_eq!(area("Strip", "L"), area("Strip", "R"), max_relative = 1e-9);
}

#[test]
fn test_precision_end_has_inner_approach() {
    let mut input = create_test_input();
    input.runways[0].ends[0] = create_test_end(
        "09",
        input.runways[0].ends[0].threshold,
        48.0,
        3,
        RunwayType::PrecisionCatI,
    );
    let result = safeguarding::generate(&input, &create_test_options()).unwrap();
    let inner = result.layer(SurfaceKind::InnerApproach).unwrap();
    assert_eq!(inner.len(), 1);
    assert_relative_eq!(inner.features[0].area(), 900.0 * 120.0, max_relative = 1e-9);
}

#[test]
fn test_cns_donut_zone_has_hole() {
    let cns = CnsStandards::default();
    let spec = cns
        .facilities
        .iter()
        .find(|f| f.zones.iter().any(|z| z.inner_radius_m > 0.0))
        .expect("a donut zone in the table");
    let facility = Facility::new("D1", spec.name.clone(), Point2D::new(0.0, 0.0));
    let features = generate_facility_zones(&facility, &cns, 72).unwrap();
    assert_eq!(features.len(), spec.zones.len());
    assert!(features
        .iter()
        .any(|f| f.geometry.0[0].interiors().len() == 1));
}

#[test]
fn test_zone_less_facility_is_unsupported() {
    let facility = Facility::new("G1", "GP", Point2D::new(0.0, 0.0));
    assert!(generate_facility_zones(&facility, &CnsStandards::default(), 36).is_err());
}

#[test]
fn test_strip_hull_encloses_strip_ends() {
    let input = create_test_input();
    let options = GenerationOptions {
        ihs_shape: IhsShape::StripHull,
        ..create_test_options()
    };
    let result = safeguarding::generate(&input, &options).unwrap();
    let ihs = &result.layer(SurfaceKind::InnerHorizontal).unwrap().features[0];
    let conical = &result.layer(SurfaceKind::Conical).unwrap().features[0];
    assert_eq!(ihs.attributes.get_text(Field::SectionDesc), Some("Strip Hull"));

    let runway = &input.runways[0];
    for end in &runway.ends {
        assert!(ihs.geometry.contains(&geo::Coord::from(end.threshold)));
        assert!(!conical.geometry.contains(&geo::Coord::from(end.threshold)));
    }

    // The conical fills the hull grown by its horizontal extent, less the IHS.
    let ols = OlsStandards::default();
    let radius = ols
        .inner_horizontal(3, RunwayType::NonPrecision)
        .unwrap()
        .radius_m;
    let params = ols.conical(3, RunwayType::NonPrecision).unwrap();
    let extent = params.height_extent_m / (params.slope_perc / 100.0);
    let model = RunwayModel::build(runway).unwrap();
    let strip_ends: Vec<Point2D> = (0..2)
        .map(|i| model.frame(i).point(model.surfaces[i].strip_extension, 0.0))
        .collect();
    let outer = hull_of_circles(&strip_ends, radius + extent, options.circle_segments, "outer")
        .unwrap();
    assert_relative_eq!(
        conical.area() + ihs.area(),
        outer.unsigned_area(),
        max_relative = 1e-6
    );
}

#[test]
fn test_conical_contours_tile_the_conical() {
    let result = safeguarding::generate(&create_test_input(), &create_test_options()).unwrap();
    let conical = &result.layer(SurfaceKind::Conical).unwrap().features[0];
    let contours = result.layer(SurfaceKind::ConicalContour).unwrap();

    // IHS at 95 m, conical top at 170 m
    let levels: Vec<f64> = contours
        .features
        .iter()
        .map(|f| f.attributes.get_real(Field::ElevM).unwrap())
        .collect();
    assert_eq!(levels, vec![100.0, 110.0, 120.0, 130.0, 140.0, 150.0, 160.0, 170.0]);
    assert_eq!(
        contours.features[0].attributes.get_real(Field::InnerRadiusM),
        Some(4000.0)
    );

    let total: f64 = contours.features.iter().map(|f| f.area()).sum();
    assert_relative_eq!(total, conical.area(), max_relative = 1e-6);
}

#[test]
fn test_approach_contours_follow_the_slope() {
    let runway = create_test_runway();
    let model = RunwayModel::build(&runway).unwrap();
    let contours = generate_approach_contours(&model, 0).unwrap();

    // 09 threshold at 48 m on a 2% first section
    let first = &contours[0];
    assert_eq!(first.attributes.get_text(Field::SectionDesc), Some("Contour 50 m"));
    assert_relative_eq!(first.attributes.get_real(Field::LenM).unwrap(), 100.0, epsilon = 1e-9);
    assert_relative_eq!(first.attributes.get_real(Field::OriginOffset).unwrap(), 60.0);
    for pair in contours.windows(2) {
        let a = pair[0].attributes.get_real(Field::ElevM).unwrap();
        let b = pair[1].attributes.get_real(Field::ElevM).unwrap();
        assert_relative_eq!(b - a, 10.0, epsilon = 1e-9);
    }

    // The bands never reach past the sloping sections
    let sloped: f64 = generate_approach(&model, 0)
        .unwrap()
        .features
        .iter()
        .filter(|f| f.attributes.get_real(Field::SlopePerc).unwrap_or(0.0) > 0.0)
        .map(|f| f.area())
        .sum();
    let banded: f64 = contours.iter().map(|f| f.area()).sum();
    assert!(banded <= sloped * (1.0 + 1e-9));
}

#[test]
fn test_guideline_and_physical_layers() {
    let mut input = create_test_input();
    input.runways.push(create_test_precision_runway());
    let result = safeguarding::generate(&input, &create_test_options()).unwrap();

    let count = |kind: SurfaceKind| result.layer(kind).map_or(0, |l| l.len());
    assert_eq!(count(SurfaceKind::Windshear), 4);
    assert_eq!(count(SurfaceKind::PublicSafety), 4);
    assert_eq!(count(SurfaceKind::LightingControl), 8);
    assert_eq!(count(SurfaceKind::TaxiwaySeparation), 2);
    // Only the precision runway ends
    assert_eq!(count(SurfaceKind::RadioAltimeter), 2);

    let physical = result.layer(SurfaceKind::Physical).unwrap();
    let sections = |desc: &str| {
        physical
            .features
            .iter()
            .filter(|f| f.attributes.get_text(Field::SectionDesc) == Some(desc))
            .count()
    };
    assert_eq!(sections("Runway Pavement"), 2);
    assert_eq!(sections("Runway Shoulder"), 4);
    assert_eq!(sections("Graded Strip"), 2);
    assert_eq!(sections("RESA"), 4);

    let without = safeguarding::generate(
        &input,
        &GenerationOptions {
            include_guidelines: false,
            include_physical: false,
            include_contours: false,
            ..create_test_options()
        },
    )
    .unwrap();
    for kind in [
        SurfaceKind::Windshear,
        SurfaceKind::LightingControl,
        SurfaceKind::PublicSafety,
        SurfaceKind::RadioAltimeter,
        SurfaceKind::TaxiwaySeparation,
        SurfaceKind::Physical,
        SurfaceKind::ApproachContour,
        SurfaceKind::ConicalContour,
    ] {
        assert!(without.layer(kind).is_none(), "{kind}");
    }
    assert!(without.layer(SurfaceKind::Conical).is_some());
}

#[test]
fn test_met_and_wildlife_layers() {
    let result = safeguarding::generate(&create_test_input(), &create_test_options()).unwrap();
    let met = result.layer(SurfaceKind::MetStation).unwrap();
    let zones: Vec<_> = met
        .features
        .iter()
        .filter_map(|f| f.attributes.get_text(Field::Zone))
        .collect();
    assert_eq!(zones, vec!["Enclosure", "Buffer Zone", "Obstacle Buffer"]);

    let wildlife = result.layer(SurfaceKind::WildlifeZone).unwrap();
    assert_eq!(wildlife.len(), 3);

    let without = safeguarding::generate(
        &create_test_input(),
        &GenerationOptions {
            include_met: false,
            include_wildlife: false,
            ..create_test_options()
        },
    )
    .unwrap();
    assert!(without.layer(SurfaceKind::MetStation).is_none());
    assert!(without.layer(SurfaceKind::WildlifeZone).is_none());
}
