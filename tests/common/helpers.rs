use safeguarding::{
    resources::OlsStandards, Aerodrome, Facility, GenerationOptions, Point2D, ReferencePoint,
    Runway, RunwayEnd, RunwayType, SafeguardingInput,
};

/// Creates a runway end with table surfaces for the given classification
pub fn create_test_end(
    designator: &str,
    threshold: Point2D,
    elevation: f64,
    code: u8,
    runway_type: RunwayType,
) -> RunwayEnd {
    let surfaces = OlsStandards::default()
        .end_surfaces(code, runway_type)
        .expect("table entry");
    RunwayEnd {
        designator: designator.to_string(),
        threshold,
        elevation,
        runway_type,
        clearway_m: 0.0,
        displaced_m: 0.0,
        surfaces: Some(surfaces),
    }
}

/// Creates a code 3C non-precision runway 09/27, 2000 m long, on a skewed heading
pub fn create_test_runway() -> Runway {
    Runway {
        name: None,
        arc_number: 3,
        arc_letter: Some('C'),
        width_m: Some(45.0),
        shoulder_m: Some(7.5),
        ends: [
            create_test_end(
                "09",
                Point2D::new(1000.0, 1000.0),
                48.0,
                3,
                RunwayType::NonPrecision,
            ),
            create_test_end(
                "27",
                Point2D::new(2970.0, 1347.0),
                52.0,
                3,
                RunwayType::NonPrecision,
            ),
        ],
    }
}

/// Creates a code 4E precision runway 16/34 crossing the test runway
pub fn create_test_precision_runway() -> Runway {
    Runway {
        name: None,
        arc_number: 4,
        arc_letter: Some('E'),
        width_m: Some(45.0),
        shoulder_m: Some(7.5),
        ends: [
            create_test_end(
                "16",
                Point2D::new(1800.0, 2600.0),
                50.0,
                4,
                RunwayType::PrecisionCatI,
            ),
            create_test_end(
                "34",
                Point2D::new(2300.0, -400.0),
                46.0,
                4,
                RunwayType::PrecisionCatI,
            ),
        ],
    }
}

pub fn create_test_aerodrome() -> Aerodrome {
    Aerodrome {
        icao: Some("YTST".to_string()),
        arp: Some(ReferencePoint::new(1000.0, 1000.0, 50.0)),
        met: Some(ReferencePoint::new(2500.0, 600.0, 49.0)),
    }
}

pub fn create_test_input() -> SafeguardingInput {
    SafeguardingInput {
        aerodrome: create_test_aerodrome(),
        runways: vec![create_test_runway()],
        facilities: vec![
            Facility::new("NDB1", "NDB", Point2D::new(4000.0, 2500.0)).with_elevation(55.0),
            Facility::new("VOR1", "VOR", Point2D::new(-1500.0, 400.0)).with_elevation(60.0),
        ],
    }
}

pub fn create_test_options() -> GenerationOptions {
    GenerationOptions {
        circle_segments: 36,
        ..GenerationOptions::default()
    }
}
