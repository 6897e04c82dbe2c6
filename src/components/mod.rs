pub mod aerodrome;
pub mod facility;
pub mod layer;
pub mod runway;
pub mod surface;

pub use aerodrome::{Aerodrome, ReferencePoint, SafeguardingInput};
pub use facility::Facility;
pub use layer::{schema_for, Field, FieldType, Layer};
pub use runway::{Designator, EndSurfaces, Runway, RunwayEnd, RunwayType};
pub use surface::{AttributeValue, Attributes, SurfaceFeature, SurfaceKind};
