use serde::{Deserialize, Serialize};

use crate::utils::Point2D;

/// A communication, navigation or surveillance installation.
///
/// `facility_type` is resolved against the CNS standards table at generation
/// time, so an unrecognized type only affects this facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub facility_type: String,
    pub location: Point2D,
    #[serde(default)]
    pub elevation: f64,
}

impl Facility {
    pub fn new(id: impl Into<String>, facility_type: impl Into<String>, location: Point2D) -> Self {
        Self {
            id: id.into(),
            facility_type: facility_type.into(),
            location,
            elevation: 0.0,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }
}
