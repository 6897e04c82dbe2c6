use approx::assert_relative_eq;
use geo::{Area, Contains};
use pretty_assertions::assert_eq;
use safeguarding::{
    components::ReferencePoint, generate, systems::geometry, EntityRef, ErrorKind, Facility,
    Field, GenerationOptions, Point2D, RunwayType, SafeguardError, SurfaceKind,
};

use crate::common::{
    assert_feature_sets_match, assert_layers_conform, assert_rings_closed, create_test_input,
    create_test_options, create_test_precision_runway,
};

#[test]
fn test_full_generation_produces_every_layer() {
    let mut input = create_test_input();
    input.runways.push(create_test_precision_runway());
    let result = generate(&input, &create_test_options()).unwrap();

    for kind in SurfaceKind::ALL {
        assert!(result.layer(kind).is_some(), "missing layer {kind}");
    }
    assert_eq!(result.layers[0].name, "YTST OLS Runway Strip");
    assert_rings_closed(&result);
    assert_layers_conform(&result);
}

#[test]
fn test_reversed_thresholds_give_same_surfaces() {
    let mut input = create_test_input();
    input.runways.push(create_test_precision_runway());
    let mut reversed = input.clone();
    reversed.runways = input.runways.iter().map(|r| r.reversed()).collect();

    let options = create_test_options();
    let forward = generate(&input, &options).unwrap();
    let backward = generate(&reversed, &options).unwrap();

    for kind in [
        SurfaceKind::Strip,
        SurfaceKind::Approach,
        SurfaceKind::ApproachContour,
        SurfaceKind::InnerApproach,
        SurfaceKind::TakeOffClimb,
        SurfaceKind::Transitional,
        SurfaceKind::InnerHorizontal,
        SurfaceKind::Conical,
        SurfaceKind::Windshear,
        SurfaceKind::LightingControl,
        SurfaceKind::PublicSafety,
        SurfaceKind::RadioAltimeter,
        SurfaceKind::TaxiwaySeparation,
        SurfaceKind::Physical,
    ] {
        let a = forward.layer(kind).unwrap();
        let b = backward.layer(kind).unwrap();
        assert_feature_sets_match(&b.features, &a.features);
    }

    let name = |r: &safeguarding::GenerationResult| {
        r.layers[0].features[0]
            .attributes
            .get_text(Field::RwyName)
            .map(str::to_string)
    };
    assert_eq!(name(&forward), Some("09/27".to_string()));
    assert_eq!(name(&backward), name(&forward));
}

#[test]
fn test_approach_outer_width_follows_divergence() {
    let input = create_test_input();
    let result = generate(&input, &create_test_options()).unwrap();
    let approach = result.layer(SurfaceKind::Approach).unwrap();

    let sections: Vec<_> = approach
        .features
        .iter()
        .filter(|f| f.attributes.get_text(Field::EndDesig) == Some("09"))
        .collect();
    assert_eq!(sections.len(), 3);

    let total_len: f64 = sections
        .iter()
        .map(|f| f.attributes.get_real(Field::LenM).unwrap())
        .sum();
    let inner = sections[0].attributes.get_real(Field::InnerwM).unwrap();
    let outer = sections[2].attributes.get_real(Field::OuterwM).unwrap();
    assert_relative_eq!(outer, inner + 2.0 * total_len * 15.0 / 100.0, epsilon = 1e-9);
    assert_eq!(
        sections[2].attributes.get_text(Field::SectionDesc),
        Some("Horizontal")
    );
}

#[test]
fn test_declared_outer_width_mismatch_warns() {
    let mut input = create_test_input();
    input.runways[0].ends[0].surfaces.as_mut().unwrap().declared_outer_width = Some(4000.0);
    let result = generate(&input, &create_test_options()).unwrap();

    let warning = result
        .warnings
        .iter()
        .find(|w| w.kind == ErrorKind::InconsistentParameter)
        .expect("mismatch warning");
    assert_eq!(
        warning.entity,
        EntityRef::RunwayEnd {
            runway: "09/27".to_string(),
            designator: "09".to_string()
        }
    );
    // The computed width is still used.
    let approach = result.layer(SurfaceKind::Approach).unwrap();
    let widest = approach
        .features
        .iter()
        .filter_map(|f| f.attributes.get_real(Field::OuterwM))
        .fold(0.0, f64::max);
    assert_relative_eq!(widest, 4780.0, epsilon = 1e-9);
}

#[test]
fn test_dissolving_identical_runways_keeps_union_area() {
    let single = create_test_input();
    let mut doubled = single.clone();
    doubled.runways.push(single.runways[0].clone());

    let options = GenerationOptions {
        dissolve: true,
        ..create_test_options()
    };
    let separate = generate(&single, &create_test_options()).unwrap();
    let merged = generate(&doubled, &options).unwrap();

    for kind in [SurfaceKind::Strip, SurfaceKind::Approach, SurfaceKind::TakeOffClimb] {
        let layer = merged.layer(kind).unwrap();
        assert_eq!(layer.len(), 1, "{kind}");

        let parts: Vec<_> = separate
            .layer(kind)
            .unwrap()
            .features
            .iter()
            .map(|f| f.geometry.clone())
            .collect();
        let expected = geometry::union_all(&parts).unsigned_area();
        assert_relative_eq!(layer.features[0].area(), expected, max_relative = 1e-6);
    }
}

#[test]
fn test_unknown_facility_becomes_warning() {
    let mut input = create_test_input();
    input
        .facilities
        .push(Facility::new("LH1", "Lighthouse", Point2D::new(500.0, 500.0)));
    let result = generate(&input, &create_test_options()).unwrap();

    let warning = result
        .warnings
        .iter()
        .find(|w| w.kind == ErrorKind::UnsupportedFacilityType)
        .expect("unsupported facility warning");
    assert_eq!(
        warning.entity,
        EntityRef::Facility {
            index: 2,
            id: "LH1".to_string()
        }
    );

    let cns = result.layer(SurfaceKind::CnsZone).unwrap();
    let ids: Vec<_> = cns
        .features
        .iter()
        .filter_map(|f| f.attributes.get_text(Field::FacilityId))
        .collect();
    assert!(!ids.contains(&"LH1"));
    assert!(ids.contains(&"NDB1"));
    assert!(ids.contains(&"VOR1"));
}

#[test]
fn test_horizontal_radius_overrides() {
    let input = create_test_input();
    let options = GenerationOptions {
        inner_radius_km: Some(4.0),
        outer_radius_km: Some(15.0),
        ..create_test_options()
    };
    let result = generate(&input, &options).unwrap();
    assert_relative_eq!(result.reference_elevation_datum, 50.0);

    let arp = Point2D::new(1000.0, 1000.0);
    let ihs = &result.layer(SurfaceKind::InnerHorizontal).unwrap().features[0];
    let ohs = &result.layer(SurfaceKind::OuterHorizontal).unwrap().features[0];
    assert_relative_eq!(ihs.attributes.get_real(Field::ElevM).unwrap(), 95.0);
    assert_relative_eq!(ohs.attributes.get_real(Field::ElevM).unwrap(), 200.0);

    for coord in ihs.geometry.0[0].exterior().coords() {
        let radius = safeguarding::utils::distance(&arp, &Point2D::from(*coord));
        assert_relative_eq!(radius, 4000.0, epsilon = 1e-6);
        assert!(ohs.geometry.0[0].contains(coord));
    }
}

#[test]
fn test_generation_is_deterministic() {
    let mut input = create_test_input();
    input.runways.push(create_test_precision_runway());
    let options = create_test_options();

    let first = generate(&input, &options).unwrap();
    let second = generate(&input, &options).unwrap();
    assert_eq!(first.layers, second.layers);
    assert_eq!(first.warnings, second.warnings);

    let parallel = generate(
        &input,
        &GenerationOptions {
            parallel: true,
            ..options
        },
    )
    .unwrap();
    assert_eq!(parallel.layers, first.layers);
}

#[test]
fn test_zero_strip_width_fails_validation() {
    let mut input = create_test_input();
    input.runways[0].ends[1].surfaces.as_mut().unwrap().strip_half_width = 0.0;
    match generate(&input, &create_test_options()) {
        Err(SafeguardError::Validation(problems)) => {
            assert!(problems.iter().any(|p| p.contains("strip half-width")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_zero_length_runway_fails_validation() {
    let mut input = create_test_input();
    input.runways[0].ends[1].threshold = input.runways[0].ends[0].threshold;
    assert!(matches!(
        generate(&input, &create_test_options()),
        Err(SafeguardError::Validation(_))
    ));
}

#[test]
fn test_too_few_circle_segments_fails_validation() {
    let options = GenerationOptions {
        circle_segments: 3,
        ..create_test_options()
    };
    match generate(&create_test_input(), &options) {
        Err(SafeguardError::Validation(problems)) => {
            assert!(problems.iter().any(|p| p.contains("circle_segments")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_zero_valued_optional_parameters_are_omitted() {
    let mut input = create_test_input();
    input.runways.push(create_test_precision_runway());
    let precision = &mut input.runways[1];
    precision.arc_letter = None;
    precision.width_m = Some(0.0);
    precision.shoulder_m = Some(0.0);
    if let Some(inner) = precision.ends[0].surfaces.as_mut().unwrap().inner_approach.as_mut() {
        inner.width_m = 0.0;
    }
    if let Some(tocs) = precision.ends[1].surfaces.as_mut().unwrap().takeoff.as_mut() {
        tocs.length_m = 0.0;
    }
    input.runways[0].shoulder_m = Some(0.0);
    let result = generate(&input, &create_test_options()).unwrap();
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);

    let ends = |kind: SurfaceKind| -> Vec<&str> {
        result
            .layer(kind)
            .unwrap()
            .features
            .iter()
            .filter_map(|f| f.attributes.get_text(Field::EndDesig))
            .collect()
    };
    assert_eq!(ends(SurfaceKind::InnerApproach), vec!["34"]);
    assert!(!ends(SurfaceKind::TakeOffClimb).contains(&"34"));
    assert!(ends(SurfaceKind::TakeOffClimb).contains(&"16"));

    // Zero clearway: take-off climb starts at the tabulated offset
    let tocs = result
        .layer(SurfaceKind::TakeOffClimb)
        .unwrap()
        .features
        .iter()
        .find(|f| f.attributes.get_text(Field::EndDesig) == Some("09"))
        .unwrap();
    assert_relative_eq!(tocs.attributes.get_real(Field::OriginOffset).unwrap(), 60.0);

    let taxiway = result.layer(SurfaceKind::TaxiwaySeparation).unwrap();
    assert_eq!(taxiway.len(), 1);

    // Zero width and shoulders leave only graded strips, plus RESAs off 09/27
    let physical: Vec<_> = result
        .layer(SurfaceKind::Physical)
        .unwrap()
        .features
        .iter()
        .map(|f| {
            (
                f.attributes.get_text(Field::RwyName).unwrap(),
                f.attributes.get_text(Field::SectionDesc).unwrap(),
            )
        })
        .collect();
    assert_eq!(
        physical,
        vec![
            ("09/27", "Runway Pavement"),
            ("09/27", "Graded Strip"),
            ("09/27", "RESA"),
            ("09/27", "RESA"),
            ("16/34", "Graded Strip"),
        ]
    );
}

#[test]
fn test_unresolved_end_is_reported_and_skipped() {
    let mut input = create_test_input();
    let mut odd = create_test_precision_runway();
    odd.arc_number = 1;
    for end in odd.ends.iter_mut() {
        end.runway_type = RunwayType::PrecisionCatIIIII;
        end.surfaces = None;
    }
    input.runways.push(odd);
    let result = generate(&input, &create_test_options()).unwrap();

    let missing: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.kind == ErrorKind::MissingStandard)
        .filter(|w| matches!(w.entity, EntityRef::RunwayEnd { .. }))
        .map(|w| w.entity.clone())
        .collect();
    assert_eq!(
        missing,
        vec![
            EntityRef::RunwayEnd {
                runway: "16/34".to_string(),
                designator: "16".to_string()
            },
            EntityRef::RunwayEnd {
                runway: "16/34".to_string(),
                designator: "34".to_string()
            },
        ]
    );
    let strips = result.layer(SurfaceKind::Strip).unwrap();
    assert_eq!(strips.len(), 1);
    assert_eq!(
        strips.features[0].attributes.get_text(Field::RwyName),
        Some("09/27")
    );
}

#[test]
fn test_engine_fills_unresolved_ends_from_its_tables() {
    let mut input = create_test_input();
    for end in input.runways[0].ends.iter_mut() {
        end.surfaces = None;
    }
    let resolved = generate(&create_test_input(), &create_test_options()).unwrap();
    let result = generate(&input, &create_test_options()).unwrap();
    assert!(result.warnings.is_empty());
    assert_eq!(result.layers, resolved.layers);
}

#[test]
fn test_missing_arp_fails_validation() {
    let mut input = create_test_input();
    input.aerodrome.arp = None;
    assert!(matches!(
        generate(&input, &create_test_options()),
        Err(SafeguardError::Validation(_))
    ));
}

#[test]
fn test_designator_mismatch_is_reported() {
    let mut input = create_test_input();
    input.runways[0].ends[1].designator = "25".to_string();
    let result = generate(&input, &create_test_options()).unwrap();
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == ErrorKind::DesignatorMismatch));
    assert!(result.layer(SurfaceKind::Strip).is_some());
}

#[test]
fn test_aerodrome_without_runways_uses_overrides() {
    let mut input = create_test_input();
    input.runways.clear();
    input.aerodrome.arp = Some(ReferencePoint::new(0.0, 0.0, 12.3));
    let options = GenerationOptions {
        inner_radius_km: Some(2.0),
        ..create_test_options()
    };
    let result = generate(&input, &options).unwrap();
    assert_relative_eq!(result.reference_elevation_datum, 12.0);
    assert!(result.layer(SurfaceKind::InnerHorizontal).is_some());
    assert!(result.layer(SurfaceKind::Conical).is_none());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == ErrorKind::MissingStandard));
}
