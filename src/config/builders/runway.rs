use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    components::{Runway, RunwayEnd, RunwayType},
    config::{
        builders::{number, text},
        errors::ConfigError,
    },
    resources::{ApproachSection, OlsStandards},
    utils::Point2D,
};

/// Declared approach values that replace the tabulated first section.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachOverride {
    pub len_m: Option<f64>,
    pub diverg_perc: Option<f64>,
    pub slope_perc: Option<f64>,
    pub innerw_m: Option<f64>,
    pub outerw_m: Option<f64>,
    pub origin_offset: Option<f64>,
    pub ref_mos: Option<String>,
}

impl ApproachOverride {
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            len_m: number(value, "len_m")?,
            diverg_perc: number(value, "diverg_perc")?,
            slope_perc: number(value, "slope_perc")?,
            innerw_m: number(value, "innerw_m")?,
            outerw_m: number(value, "outerw_m")?,
            origin_offset: number(value, "origin_offset")?,
            ref_mos: text(value, "ref_mos")?,
        })
    }

    /// Collapse the funnel into one declared section, falling back to the table
    /// for any value left out.
    fn resolve(&self, table: Option<&ApproachSection>, end: &str) -> Result<ApproachSection, ConfigError> {
        let missing = |field: &str| ConfigError::MissingRequired(format!("runway end {end}: approach.{field}"));

        Ok(ApproachSection {
            length_m: self
                .len_m
                .or(table.map(|s| s.length_m))
                .ok_or_else(|| missing("len_m"))?,
            slope_perc: self
                .slope_perc
                .or(table.map(|s| s.slope_perc))
                .ok_or_else(|| missing("slope_perc"))?,
            diverg_perc: self
                .diverg_perc
                .or(table.map(|s| s.diverg_perc))
                .ok_or_else(|| missing("diverg_perc"))?,
            origin_offset: self
                .origin_offset
                .or(table.and_then(|s| s.origin_offset))
                .or(Some(0.0)),
            innerw_m: Some(
                self.innerw_m
                    .or(table.and_then(|s| s.innerw_m))
                    .ok_or_else(|| missing("innerw_m"))?,
            ),
            ref_mos: self
                .ref_mos
                .clone()
                .or(table.map(|s| s.ref_mos.clone()))
                .unwrap_or_else(|| "Declared".to_string()),
        })
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct RunwayEndBuilder {
    pub designator: Option<String>,
    pub easting: Option<f64>,
    pub northing: Option<f64>,
    pub elevation: Option<f64>,
    pub runway_type: Option<String>,
    pub clearway_m: Option<f64>,
    pub displaced_m: Option<f64>,
    pub strip_half_width: Option<f64>,
    pub strip_extension: Option<f64>,
    pub outerw_m: Option<f64>,
    pub approach: Option<ApproachOverride>,
}

impl RunwayEndBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn designator(mut self, designator: impl Into<String>) -> Self {
        self.designator = Some(designator.into());
        self
    }

    pub fn threshold(mut self, easting: f64, northing: f64, elevation: f64) -> Self {
        self.easting = Some(easting);
        self.northing = Some(northing);
        self.elevation = Some(elevation);
        self
    }

    pub fn runway_type(mut self, runway_type: impl Into<String>) -> Self {
        self.runway_type = Some(runway_type.into());
        self
    }

    pub fn strip_half_width(mut self, half_width: f64) -> Self {
        self.strip_half_width = Some(half_width);
        self
    }

    pub fn approach(mut self, approach: ApproachOverride) -> Self {
        self.approach = Some(approach);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let approach = match value.get("approach") {
            Some(v) if !v.is_null() => Some(ApproachOverride::from_json(v)?),
            _ => None,
        };

        Ok(Self {
            designator: text(value, "designator")?,
            easting: number(value, "easting")?,
            northing: number(value, "northing")?,
            elevation: number(value, "elevation")?,
            runway_type: text(value, "type")?,
            clearway_m: number(value, "clearway_m")?,
            displaced_m: number(value, "displaced_m")?,
            strip_half_width: number(value, "strip_half_width")?,
            strip_extension: number(value, "strip_extension")?,
            outerw_m: number(value, "outerw_m")?,
            approach,
        })
    }

    pub fn build(self, arc_number: u8, standards: &OlsStandards) -> Result<RunwayEnd, ConfigError> {
        let designator = self
            .designator
            .ok_or_else(|| ConfigError::MissingRequired("runway end designator".to_string()))?;
        let missing = |field: &str| ConfigError::MissingRequired(format!("runway end {designator}: {field}"));
        let easting = self.easting.ok_or_else(|| missing("easting"))?;
        let northing = self.northing.ok_or_else(|| missing("northing"))?;
        let elevation = self.elevation.ok_or_else(|| missing("elevation"))?;

        let type_label = self.runway_type.unwrap_or_default();
        let runway_type = RunwayType::parse(&type_label)
            .ok_or_else(|| ConfigError::invalid(format!("{designator}.type"), &type_label))?;

        // A classification without a table entry is left for the engine to report
        let surfaces = match standards.end_surfaces(arc_number, runway_type) {
            Ok(mut surfaces) => {
                if let Some(half_width) = self.strip_half_width {
                    surfaces.strip_half_width = half_width;
                }
                if let Some(extension) = self.strip_extension {
                    surfaces.strip_extension = extension;
                }
                if let Some(approach) = &self.approach {
                    let section = approach.resolve(surfaces.approach.first(), &designator)?;
                    surfaces.approach = vec![section];
                }
                // Zero means not declared
                surfaces.declared_outer_width = self
                    .approach
                    .as_ref()
                    .and_then(|a| a.outerw_m)
                    .or(self.outerw_m)
                    .filter(|w| *w != 0.0);
                Some(surfaces)
            }
            Err(e) => {
                debug!("runway end {designator}: {e}");
                None
            }
        };

        Ok(RunwayEnd {
            designator,
            threshold: Point2D::new(easting, northing),
            elevation,
            runway_type,
            clearway_m: self.clearway_m.unwrap_or(0.0),
            displaced_m: self.displaced_m.unwrap_or(0.0),
            surfaces,
        })
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct RunwayBuilder {
    pub name: Option<String>,
    pub arc_number: Option<u8>,
    pub arc_letter: Option<char>,
    pub width_m: Option<f64>,
    pub shoulder_m: Option<f64>,
    pub ends: Vec<RunwayEndBuilder>,
}

impl RunwayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc_number(mut self, code: u8) -> Self {
        self.arc_number = Some(code);
        self
    }

    pub fn end(mut self, end: RunwayEndBuilder) -> Self {
        self.ends.push(end);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();
        builder.name = text(value, "name")?;

        if let Some(code) = number(value, "arc_number")? {
            if code.fract() != 0.0 || !(1.0..=4.0).contains(&code) {
                return Err(ConfigError::invalid("arc_number", code));
            }
            builder.arc_number = Some(code as u8);
        }
        if let Some(letter) = text(value, "arc_letter")? {
            let mut chars = letter.chars();
            builder.arc_letter = match (chars.next(), chars.next()) {
                (None, _) => None,
                (Some(c), None) if ('A'..='F').contains(&c.to_ascii_uppercase()) => {
                    Some(c.to_ascii_uppercase())
                }
                _ => return Err(ConfigError::invalid("arc_letter", &letter)),
            };
        }
        builder.width_m = number(value, "width_m")?;
        builder.shoulder_m = number(value, "shoulder_m")?;

        if let Some(ends) = value.get("ends").and_then(Value::as_array) {
            for end in ends {
                builder = builder.end(RunwayEndBuilder::from_json(end)?);
            }
        }

        Ok(builder)
    }

    pub fn build(self, standards: &OlsStandards) -> Result<Runway, ConfigError> {
        let arc_number = self
            .arc_number
            .ok_or_else(|| ConfigError::MissingRequired("runway arc_number".to_string()))?;

        let count = self.ends.len();
        let ends: Vec<RunwayEnd> = self
            .ends
            .into_iter()
            .map(|end| end.build(arc_number, standards))
            .collect::<Result<_, _>>()?;
        let ends: [RunwayEnd; 2] = ends.try_into().map_err(|_| {
            ConfigError::ValidationError(format!("a runway needs exactly two ends, got {count}"))
        })?;

        Ok(Runway {
            name: self.name,
            arc_number,
            arc_letter: self.arc_letter,
            width_m: self.width_m,
            shoulder_m: self.shoulder_m,
            ends,
        })
    }
}
