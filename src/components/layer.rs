use serde::{Deserialize, Serialize};

use crate::components::{SurfaceFeature, SurfaceKind};

/// Output attribute fields. Declaration order is column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RwyName,
    Surface,
    EndDesig,
    SectionDesc,
    Side,
    FacilityId,
    FacilityType,
    Zone,
    ElevM,
    HeightAgl,
    SlopePerc,
    RefMos,
    LenM,
    InnerwM,
    OuterwM,
    DivergPerc,
    OriginOffset,
    InnerRadiusM,
    OuterRadiusM,
    WidthM,
    ExtensionM,
    OffsetM,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Real,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::RwyName => "rwy_name",
            Field::Surface => "surface",
            Field::EndDesig => "end_desig",
            Field::SectionDesc => "section_desc",
            Field::Side => "side",
            Field::FacilityId => "facility_id",
            Field::FacilityType => "facility_type",
            Field::Zone => "zone",
            Field::ElevM => "elev_m",
            Field::HeightAgl => "height_agl",
            Field::SlopePerc => "slope_perc",
            Field::RefMos => "ref_mos",
            Field::LenM => "len_m",
            Field::InnerwM => "innerw_m",
            Field::OuterwM => "outerw_m",
            Field::DivergPerc => "diverg_perc",
            Field::OriginOffset => "origin_offset",
            Field::InnerRadiusM => "inner_radius_m",
            Field::OuterRadiusM => "outer_radius_m",
            Field::WidthM => "width_m",
            Field::ExtensionM => "extension_m",
            Field::OffsetM => "offset_m",
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Field::RwyName
            | Field::Surface
            | Field::EndDesig
            | Field::SectionDesc
            | Field::Side
            | Field::FacilityId
            | Field::FacilityType
            | Field::Zone
            | Field::RefMos => FieldType::Text,
            _ => FieldType::Real,
        }
    }
}

/// Fixed column set for each surface kind.
pub fn schema_for(kind: SurfaceKind) -> Vec<Field> {
    use Field::*;
    match kind {
        SurfaceKind::Strip => vec![RwyName, Surface, ElevM, RefMos, LenM, InnerwM],
        SurfaceKind::Approach | SurfaceKind::TakeOffClimb => vec![
            RwyName,
            Surface,
            EndDesig,
            SectionDesc,
            ElevM,
            HeightAgl,
            SlopePerc,
            RefMos,
            LenM,
            InnerwM,
            OuterwM,
            DivergPerc,
            OriginOffset,
        ],
        SurfaceKind::InnerApproach => vec![
            RwyName,
            Surface,
            EndDesig,
            ElevM,
            HeightAgl,
            SlopePerc,
            RefMos,
            LenM,
            InnerwM,
            OuterwM,
            OriginOffset,
        ],
        SurfaceKind::Transitional => vec![
            RwyName,
            Surface,
            SectionDesc,
            Side,
            ElevM,
            HeightAgl,
            SlopePerc,
            RefMos,
        ],
        SurfaceKind::InnerHorizontal => vec![
            RwyName,
            Surface,
            SectionDesc,
            ElevM,
            HeightAgl,
            RefMos,
            OuterRadiusM,
        ],
        SurfaceKind::Conical => vec![
            RwyName,
            Surface,
            ElevM,
            HeightAgl,
            SlopePerc,
            RefMos,
            InnerRadiusM,
            OuterRadiusM,
        ],
        SurfaceKind::OuterHorizontal => {
            vec![RwyName, Surface, ElevM, HeightAgl, RefMos, OuterRadiusM]
        }
        SurfaceKind::CnsZone => vec![
            Surface,
            FacilityId,
            FacilityType,
            Zone,
            ElevM,
            RefMos,
            InnerRadiusM,
            OuterRadiusM,
        ],
        SurfaceKind::MetStation => vec![Surface, Zone, ElevM, LenM],
        SurfaceKind::WildlifeZone => {
            vec![Surface, SectionDesc, Zone, InnerRadiusM, OuterRadiusM]
        }
        SurfaceKind::ApproachContour => vec![
            RwyName,
            Surface,
            EndDesig,
            SectionDesc,
            ElevM,
            HeightAgl,
            RefMos,
            LenM,
            OriginOffset,
        ],
        SurfaceKind::ConicalContour => vec![
            RwyName,
            Surface,
            SectionDesc,
            ElevM,
            HeightAgl,
            RefMos,
            InnerRadiusM,
            OuterRadiusM,
        ],
        SurfaceKind::Windshear => {
            vec![RwyName, Surface, EndDesig, RefMos, LenM, WidthM]
        }
        SurfaceKind::LightingControl => {
            vec![RwyName, Surface, SectionDesc, Zone, RefMos, WidthM, ExtensionM]
        }
        SurfaceKind::PublicSafety => {
            vec![RwyName, Surface, EndDesig, RefMos, LenM, InnerwM, OuterwM]
        }
        SurfaceKind::RadioAltimeter => vec![RwyName, Surface, EndDesig, RefMos, LenM, WidthM],
        SurfaceKind::TaxiwaySeparation => vec![RwyName, Surface, RefMos, LenM, OffsetM],
        SurfaceKind::Physical => vec![
            RwyName,
            Surface,
            EndDesig,
            SectionDesc,
            Side,
            RefMos,
            LenM,
            WidthM,
        ],
    }
}

/// Named collection of polygon features sharing one surface kind and schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub kind: SurfaceKind,
    pub schema: Vec<Field>,
    pub features: Vec<SurfaceFeature>,
}

impl Layer {
    /// Empty layer for `kind`, optionally prefixed with the aerodrome code.
    pub fn new(kind: SurfaceKind, prefix: Option<&str>) -> Self {
        let name = match prefix {
            Some(p) => format!("{} {}", p, kind.layer_name()),
            None => kind.layer_name().to_string(),
        };
        Self {
            name,
            kind,
            schema: schema_for(kind),
            features: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// True when every attribute of `feature` is a column of this layer.
    pub fn conforms(&self, feature: &SurfaceFeature) -> bool {
        feature.kind == self.kind && feature.attributes.fields().all(|f| self.schema.contains(f))
    }
}
