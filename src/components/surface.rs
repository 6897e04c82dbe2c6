use geo::{Area, MultiPolygon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::components::Field;

/// Surface type tag. Declaration order is output layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Strip,
    Approach,
    ApproachContour,
    InnerApproach,
    TakeOffClimb,
    Transitional,
    InnerHorizontal,
    Conical,
    ConicalContour,
    OuterHorizontal,
    CnsZone,
    MetStation,
    WildlifeZone,
    Windshear,
    LightingControl,
    PublicSafety,
    RadioAltimeter,
    TaxiwaySeparation,
    Physical,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 19] = [
        SurfaceKind::Strip,
        SurfaceKind::Approach,
        SurfaceKind::ApproachContour,
        SurfaceKind::InnerApproach,
        SurfaceKind::TakeOffClimb,
        SurfaceKind::Transitional,
        SurfaceKind::InnerHorizontal,
        SurfaceKind::Conical,
        SurfaceKind::ConicalContour,
        SurfaceKind::OuterHorizontal,
        SurfaceKind::CnsZone,
        SurfaceKind::MetStation,
        SurfaceKind::WildlifeZone,
        SurfaceKind::Windshear,
        SurfaceKind::LightingControl,
        SurfaceKind::PublicSafety,
        SurfaceKind::RadioAltimeter,
        SurfaceKind::TaxiwaySeparation,
        SurfaceKind::Physical,
    ];

    /// Value written to the `surface` attribute.
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceKind::Strip => "Strip",
            SurfaceKind::Approach => "Approach",
            SurfaceKind::ApproachContour => "Approach Contour",
            SurfaceKind::InnerApproach => "InnerApproach",
            SurfaceKind::TakeOffClimb => "TOCS",
            SurfaceKind::Transitional => "Transitional",
            SurfaceKind::InnerHorizontal => "IHS",
            SurfaceKind::Conical => "Conical",
            SurfaceKind::ConicalContour => "Conical Contour",
            SurfaceKind::OuterHorizontal => "OHS",
            SurfaceKind::CnsZone => "CNS BRA",
            SurfaceKind::MetStation => "MET",
            SurfaceKind::WildlifeZone => "WMZ",
            SurfaceKind::Windshear => "WSZ",
            SurfaceKind::LightingControl => "LCZ",
            SurfaceKind::PublicSafety => "PSA",
            SurfaceKind::RadioAltimeter => "RAOA",
            SurfaceKind::TaxiwaySeparation => "Taxiway Separation",
            SurfaceKind::Physical => "Physical",
        }
    }

    pub fn layer_name(&self) -> &'static str {
        match self {
            SurfaceKind::Strip => "OLS Runway Strip",
            SurfaceKind::Approach => "OLS Approach",
            SurfaceKind::ApproachContour => "OLS Approach Contours",
            SurfaceKind::InnerApproach => "OLS Inner Approach",
            SurfaceKind::TakeOffClimb => "OLS Take-Off Climb",
            SurfaceKind::Transitional => "OLS Transitional",
            SurfaceKind::InnerHorizontal => "OLS IHS",
            SurfaceKind::Conical => "OLS Conical",
            SurfaceKind::ConicalContour => "OLS Conical Contours",
            SurfaceKind::OuterHorizontal => "OLS OHS",
            SurfaceKind::CnsZone => "CNS Building Restricted Areas",
            SurfaceKind::MetStation => "MET Station",
            SurfaceKind::WildlifeZone => "Wildlife Management Zones",
            SurfaceKind::Windshear => "Windshear Assessment Zones",
            SurfaceKind::LightingControl => "Lighting Control Zones",
            SurfaceKind::PublicSafety => "Public Safety Areas",
            SurfaceKind::RadioAltimeter => "Radio Altimeter Operating Areas",
            SurfaceKind::TaxiwaySeparation => "Taxiway Separation",
            SurfaceKind::Physical => "Runway Physical Geometry",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Real(f64),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Real(_) => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            AttributeValue::Real(v) => Some(*v),
            AttributeValue::Text(_) => None,
        }
    }
}

/// Attribute record of one feature, keyed in schema order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes(BTreeMap<Field, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, field: Field, value: impl Into<String>) -> Self {
        self.0.insert(field, AttributeValue::Text(value.into()));
        self
    }

    pub fn real(mut self, field: Field, value: f64) -> Self {
        self.0.insert(field, AttributeValue::Real(value));
        self
    }

    pub fn get(&self, field: Field) -> Option<&AttributeValue> {
        self.0.get(&field)
    }

    pub fn get_text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(AttributeValue::as_text)
    }

    pub fn get_real(&self, field: Field) -> Option<f64> {
        self.get(field).and_then(AttributeValue::as_real)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &AttributeValue)> {
        self.0.iter()
    }
}

/// One generated polygon (or multi-polygon after dissolve) with its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFeature {
    pub kind: SurfaceKind,
    pub geometry: MultiPolygon<f64>,
    pub attributes: Attributes,
}

impl SurfaceFeature {
    pub fn new(kind: SurfaceKind, geometry: MultiPolygon<f64>, attributes: Attributes) -> Self {
        Self {
            kind,
            geometry,
            attributes: attributes.text(Field::Surface, kind.label()),
        }
    }

    pub fn area(&self) -> f64 {
        self.geometry.unsigned_area()
    }
}
