//! Airport safeguarding surfaces: obstacle limitation surfaces, CNS building
//! restricted areas, MET station siting and wildlife management zones, built
//! as planar polygons from runway and facility descriptions.

pub mod components;
pub mod config;
pub mod engine;
pub mod resources;
pub mod sink;
pub mod systems;
pub mod utils;

pub use components::{
    Aerodrome, Facility, Field, Layer, ReferencePoint, Runway, RunwayEnd, RunwayType,
    SafeguardingInput, SurfaceFeature, SurfaceKind,
};
pub use config::{GenerationOptions, InputConfig, OutputFormat, OutputMode};
pub use engine::{generate, EntityRef, GenerationResult, GenerationWarning, SurfaceEngine};
pub use resources::Standards;
pub use sink::{LayerSink, MemorySink};
pub use utils::{ErrorKind, Point2D, SafeguardError};
