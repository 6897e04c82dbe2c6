use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    components::ReferencePoint,
    config::{builders::number, errors::ConfigError},
};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ReferencePointBuilder {
    pub easting: Option<f64>,
    pub northing: Option<f64>,
    pub elevation: Option<f64>,
}

impl ReferencePointBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn easting(mut self, easting: f64) -> Self {
        self.easting = Some(easting);
        self
    }

    pub fn northing(mut self, northing: f64) -> Self {
        self.northing = Some(northing);
        self
    }

    pub fn elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            easting: number(value, "easting")?,
            northing: number(value, "northing")?,
            elevation: number(value, "elevation")?,
        })
    }

    /// `what` names the point in error messages, e.g. "arp".
    pub fn build(self, what: &str) -> Result<ReferencePoint, ConfigError> {
        let easting = self
            .easting
            .ok_or_else(|| ConfigError::MissingRequired(format!("{what}.easting")))?;
        let northing = self
            .northing
            .ok_or_else(|| ConfigError::MissingRequired(format!("{what}.northing")))?;
        let elevation = self
            .elevation
            .ok_or_else(|| ConfigError::MissingRequired(format!("{what}.elevation")))?;
        Ok(ReferencePoint::new(easting, northing, elevation))
    }
}
