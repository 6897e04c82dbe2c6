// Geometric tolerances
pub const DISTANCE_EPSILON: f64 = 1e-6; // m
pub const AREA_EPSILON: f64 = 1e-6; // m^2
pub const WIDTH_CHECK_TOLERANCE: f64 = 0.01; // m, declared vs computed outer width

pub const DEFAULT_CIRCLE_SEGMENTS: usize = 72;
pub const MIN_CIRCLE_SEGMENTS: usize = 8;

// Reference elevation datum
pub const RED_ARP_TOLERANCE: f64 = 3.0; // m
pub const RED_ROUNDING_STEP: f64 = 0.5; // m

// Airport-wide horizontal surfaces
pub const IHS_HEIGHT_ABOVE_RED: f64 = 45.0; // m
pub const OHS_HEIGHT_ABOVE_RED: f64 = 150.0; // m
pub const CONICAL_SLOPE_PERC: f64 = 5.0;

// MET station (Guideline G style site)
pub const MET_ENCLOSURE_SIDE: f64 = 16.0; // m
pub const MET_BUFFER_SIDE: f64 = 30.0; // m
pub const MET_OBSTACLE_BUFFER: f64 = 80.0; // m

// Wildlife management zones (km from ARP)
pub const WILDLIFE_ZONE_A_KM: f64 = 3.0;
pub const WILDLIFE_ZONE_B_KM: f64 = 8.0;
pub const WILDLIFE_ZONE_C_KM: f64 = 13.0;

pub const AIRPORT_WIDE: &str = "Airport Wide";

// Height interval between approach and conical contour bands
pub const CONTOUR_INTERVAL: f64 = 10.0; // m

// Windshear assessment zone (NASF Guideline B)
pub const WINDSHEAR_FAR_EDGE_OFFSET: f64 = 500.0; // m inside the threshold
pub const WINDSHEAR_ZONE_LENGTH: f64 = 1400.0; // m
pub const WINDSHEAR_HALF_WIDTH: f64 = 1200.0; // m

// Lighting control zones (NASF Guideline E): zone, extension beyond each threshold, half-width
pub const LIGHTING_ZONES: [(&str, f64, f64); 4] = [
    ("A", 1000.0, 300.0),
    ("B", 2000.0, 450.0),
    ("C", 3000.0, 600.0),
    ("D", 4500.0, 750.0),
];

// Public safety area trapezoid (NASF Guideline I)
pub const PSA_LENGTH: f64 = 1000.0; // m
pub const PSA_INNER_WIDTH: f64 = 350.0; // m
pub const PSA_OUTER_WIDTH: f64 = 250.0; // m

// Radio altimeter operating area
pub const RAOA_LENGTH: f64 = 300.0; // m
pub const RAOA_WIDTH: f64 = 120.0; // m

// Taxiway separation line length as a multiple of runway length
pub const TAXIWAY_SEPARATION_LENGTH_FACTOR: f64 = 1.5;

// Runway width below which the narrower graded strip applies
pub const NARROW_RUNWAY_WIDTH: f64 = 45.0; // m
