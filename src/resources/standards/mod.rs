pub mod cns;
pub mod ols;

pub use cns::{CnsStandards, FacilitySpec, ZoneShape, ZoneSpec};
pub use ols::{
    ApproachParams, ApproachSection, Classified, ConicalParams, GradedStripParams,
    HorizontalParams, InnerApproachParams, OlsStandards, ResaParams, StripParams,
    TakeoffParams, TaxiwaySeparationParams, TransitionalParams,
};

use serde::{Deserialize, Serialize};

/// Every lookup table the generators consult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standards {
    #[serde(default)]
    pub ols: OlsStandards,
    #[serde(default)]
    pub cns: CnsStandards,
}
