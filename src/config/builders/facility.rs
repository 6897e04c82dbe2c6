use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    components::Facility,
    config::{
        builders::{number, text},
        errors::ConfigError,
    },
    utils::Point2D,
};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct FacilityBuilder {
    pub id: Option<String>,
    pub facility_type: Option<String>,
    pub easting: Option<f64>,
    pub northing: Option<f64>,
    pub elevation: Option<f64>,
}

impl FacilityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn facility_type(mut self, facility_type: impl Into<String>) -> Self {
        self.facility_type = Some(facility_type.into());
        self
    }

    pub fn location(mut self, easting: f64, northing: f64) -> Self {
        self.easting = Some(easting);
        self.northing = Some(northing);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            id: text(value, "id")?,
            facility_type: text(value, "type")?,
            easting: number(value, "easting")?,
            northing: number(value, "northing")?,
            elevation: number(value, "elevation")?,
        })
    }

    /// `index` is used for the id when none is given.
    pub fn build(self, index: usize) -> Result<Facility, ConfigError> {
        let id = self.id.unwrap_or_else(|| format!("CNS_{}", index + 1));
        let facility_type = self
            .facility_type
            .ok_or_else(|| ConfigError::MissingRequired(format!("facility {id}: type")))?;
        let easting = self
            .easting
            .ok_or_else(|| ConfigError::MissingRequired(format!("facility {id}: easting")))?;
        let northing = self
            .northing
            .ok_or_else(|| ConfigError::MissingRequired(format!("facility {id}: northing")))?;

        Ok(Facility {
            id,
            facility_type,
            location: Point2D::new(easting, northing),
            elevation: self.elevation.unwrap_or(0.0),
        })
    }
}
