pub mod standards;

pub use standards::{
    ApproachSection, CnsStandards, ConicalParams, FacilitySpec, GradedStripParams,
    HorizontalParams, InnerApproachParams, OlsStandards, ResaParams, Standards, StripParams,
    TakeoffParams, TaxiwaySeparationParams, TransitionalParams, ZoneShape, ZoneSpec,
};
