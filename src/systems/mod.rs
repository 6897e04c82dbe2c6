pub mod approach;
pub mod assembler;
pub mod contours;
pub mod facility;
pub mod geometry;
pub mod guidelines;
pub mod horizontal;
pub mod inner_approach;
pub mod met;
pub mod physical;
pub mod raoa;
pub mod runway_model;
pub mod strip;
pub mod takeoff;
pub mod taxiway;
pub mod transitional;
pub mod wildlife;

pub use approach::{approach_stations, generate_approach, ApproachOutcome, Station};
pub use assembler::assemble;
pub use contours::{contour_levels, generate_approach_contours};
pub use facility::generate_facility_zones;
pub use guidelines::{generate_lighting_zones, generate_public_safety, generate_windshear};
pub use horizontal::{
    generate_horizontal, governing_classification, hull_of_circles, reference_elevation_datum,
    HorizontalOutcome,
};
pub use inner_approach::generate_inner_approach;
pub use met::generate_met_surfaces;
pub use physical::{generate_graded_strip, generate_pavement, generate_resa};
pub use raoa::generate_raoa;
pub use runway_model::{EndFrame, RunwayModel};
pub use strip::{generate_strip, strip_polygon};
pub use takeoff::generate_takeoff;
pub use taxiway::generate_taxiway_separation;
pub use transitional::generate_transitional;
pub use wildlife::generate_wildlife_zones;
