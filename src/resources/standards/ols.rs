//! Obstacle limitation surface dimensions per ARC code number and runway type.
//!
//! The built-in tables follow CASA MOS Part 139 (Table 8.2-1, 7.15(1), 7.16)
//! and can be replaced wholesale by loading a YAML document with the same
//! layout, so a standards revision never requires touching generator code.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    components::{EndSurfaces, RunwayType},
    config::ConfigError,
    utils::{SafeguardError, CONICAL_SLOPE_PERC, IHS_HEIGHT_ABOVE_RED, OHS_HEIGHT_ABOVE_RED},
};

/// One straight-sided section of an approach funnel. Only the first section
/// carries an origin offset and inner width; later sections continue from the
/// previous section's outer edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachSection {
    pub length_m: f64,
    pub slope_perc: f64,
    pub diverg_perc: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innerw_m: Option<f64>,
    pub ref_mos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachParams {
    pub sections: Vec<ApproachSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerApproachParams {
    pub width_m: f64,
    pub origin_offset: f64,
    pub length_m: f64,
    pub slope_perc: f64,
    pub ref_mos: String,
}

/// Take-off climb surface. Divergence is per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffParams {
    pub innerw_m: f64,
    pub origin_offset: f64,
    pub diverg_perc: f64,
    pub outerw_m: f64,
    pub length_m: f64,
    pub slope_perc: f64,
    pub ref_mos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    pub overall_width_m: f64,
    pub extension_m: f64,
    pub ref_mos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionalParams {
    pub slope_perc: f64,
    pub ref_mos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalParams {
    pub height_agl: f64,
    pub radius_m: f64,
    pub ref_mos: String,
}

/// Conical surface, rising from the IHS boundary to `height_extent_m` above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConicalParams {
    pub slope_perc: f64,
    pub height_extent_m: f64,
    pub ref_mos: String,
}

/// Graded part of the runway strip. `narrow_width_m` applies to runways
/// narrower than 45 m when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedStripParams {
    pub width_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrow_width_m: Option<f64>,
    pub ref_mos: String,
}

/// Runway end safety area. Its width is twice the runway width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaParams {
    pub length_m: f64,
    pub ref_mos: String,
}

/// Minimum distance from the runway centreline to a parallel taxiway centreline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxiwaySeparationParams {
    pub code: u8,
    pub letter: char,
    pub runway_type: RunwayType,
    pub offset_m: f64,
    pub ref_mos: String,
}

/// A table row keyed by code number and, optionally, runway type.
/// A row without a runway type applies to every type of that code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classified<T> {
    pub code: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runway_type: Option<RunwayType>,
    #[serde(flatten)]
    pub params: T,
}

impl<T> Classified<T> {
    fn new(code: u8, runway_type: Option<RunwayType>, params: T) -> Self {
        Self {
            code,
            runway_type,
            params,
        }
    }

    fn matches(&self, code: u8, runway_type: RunwayType) -> bool {
        self.code == code && self.runway_type.map_or(true, |t| t == runway_type)
    }
}

fn lookup<T>(rows: &[Classified<T>], code: u8, runway_type: RunwayType) -> Option<&T> {
    rows.iter()
        .find(|row| row.matches(code, runway_type))
        .map(|row| &row.params)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OlsStandards {
    pub version: String,
    pub strip: Vec<Classified<StripParams>>,
    pub approach: Vec<Classified<ApproachParams>>,
    pub inner_approach: Vec<Classified<InnerApproachParams>>,
    pub takeoff: Vec<Classified<TakeoffParams>>,
    pub transitional: Vec<Classified<TransitionalParams>>,
    pub inner_horizontal: Vec<Classified<HorizontalParams>>,
    pub conical: Vec<Classified<ConicalParams>>,
    pub outer_horizontal: Vec<Classified<HorizontalParams>>,
    #[serde(default = "default_graded_strip")]
    pub graded_strip: Vec<Classified<GradedStripParams>>,
    /// A RESA is required only where a row matches.
    #[serde(default = "default_resa")]
    pub resa: Vec<Classified<ResaParams>>,
    #[serde(default = "default_taxiway_separation")]
    pub taxiway_separation: Vec<TaxiwaySeparationParams>,
}

impl OlsStandards {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn strip(&self, code: u8, runway_type: RunwayType) -> Option<&StripParams> {
        lookup(&self.strip, code, runway_type)
    }

    pub fn approach(&self, code: u8, runway_type: RunwayType) -> Option<&[ApproachSection]> {
        lookup(&self.approach, code, runway_type).map(|p| p.sections.as_slice())
    }

    pub fn inner_approach(&self, code: u8, runway_type: RunwayType) -> Option<&InnerApproachParams> {
        lookup(&self.inner_approach, code, runway_type)
    }

    pub fn takeoff(&self, code: u8, runway_type: RunwayType) -> Option<&TakeoffParams> {
        lookup(&self.takeoff, code, runway_type)
    }

    pub fn transitional(&self, code: u8, runway_type: RunwayType) -> Option<&TransitionalParams> {
        lookup(&self.transitional, code, runway_type)
    }

    pub fn inner_horizontal(&self, code: u8, runway_type: RunwayType) -> Option<&HorizontalParams> {
        lookup(&self.inner_horizontal, code, runway_type)
    }

    pub fn conical(&self, code: u8, runway_type: RunwayType) -> Option<&ConicalParams> {
        lookup(&self.conical, code, runway_type)
    }

    pub fn outer_horizontal(&self, code: u8, runway_type: RunwayType) -> Option<&HorizontalParams> {
        lookup(&self.outer_horizontal, code, runway_type)
    }

    pub fn graded_strip(&self, code: u8, runway_type: RunwayType) -> Option<&GradedStripParams> {
        lookup(&self.graded_strip, code, runway_type)
    }

    pub fn resa(&self, code: u8, runway_type: RunwayType) -> Option<&ResaParams> {
        lookup(&self.resa, code, runway_type)
    }

    pub fn taxiway_separation(
        &self,
        code: u8,
        letter: char,
        runway_type: RunwayType,
    ) -> Option<&TaxiwaySeparationParams> {
        let letter = letter.to_ascii_uppercase();
        self.taxiway_separation
            .iter()
            .find(|row| row.code == code && row.letter == letter && row.runway_type == runway_type)
    }

    /// Resolve the full per-end parameter set for a runway end.
    pub fn end_surfaces(
        &self,
        code: u8,
        runway_type: RunwayType,
    ) -> Result<EndSurfaces, SafeguardError> {
        let key = || format!("code {} {}", code, runway_type.abbreviation());

        let strip = self
            .strip(code, runway_type)
            .ok_or_else(|| SafeguardError::MissingStandard(format!("strip, {}", key())))?;
        let approach = self
            .approach(code, runway_type)
            .ok_or_else(|| SafeguardError::MissingStandard(format!("approach, {}", key())))?;
        let transitional = self
            .transitional(code, runway_type)
            .ok_or_else(|| SafeguardError::MissingStandard(format!("transitional, {}", key())))?;

        Ok(EndSurfaces {
            strip_half_width: strip.overall_width_m / 2.0,
            strip_extension: strip.extension_m,
            strip_ref: strip.ref_mos.clone(),
            approach: approach.to_vec(),
            declared_outer_width: None,
            inner_approach: self.inner_approach(code, runway_type).cloned(),
            takeoff: self.takeoff(code, runway_type).cloned(),
            transitional: transitional.clone(),
        })
    }
}

fn section(length_m: f64, slope_perc: f64, diverg_perc: f64, ref_mos: &str) -> ApproachSection {
    ApproachSection {
        length_m,
        slope_perc,
        diverg_perc,
        origin_offset: None,
        innerw_m: None,
        ref_mos: ref_mos.to_string(),
    }
}

fn first_section(
    length_m: f64,
    slope_perc: f64,
    diverg_perc: f64,
    origin_offset: f64,
    innerw_m: f64,
    ref_mos: &str,
) -> ApproachSection {
    ApproachSection {
        origin_offset: Some(origin_offset),
        innerw_m: Some(innerw_m),
        ..section(length_m, slope_perc, diverg_perc, ref_mos)
    }
}

fn three_section_approach(code: u8, label: &str) -> Classified<ApproachParams> {
    let ty = match label {
        "NPA" => RunwayType::NonPrecision,
        "PAI" => RunwayType::PrecisionCatI,
        _ => RunwayType::PrecisionCatIIIII,
    };
    let tag = if ty == RunwayType::NonPrecision {
        format!("{code}-{label}")
    } else {
        format!("3/4-{label}")
    };
    Classified::new(
        code,
        Some(ty),
        ApproachParams {
            sections: vec![
                first_section(3000.0, 2.0, 15.0, 60.0, 280.0, &format!("MOS T8.2-1 ({tag} S1)")),
                section(3600.0, 2.5, 15.0, &format!("MOS T8.2-1 ({tag} S2)")),
                section(8400.0, 0.0, 15.0, &format!("MOS T8.2-1 ({tag} S3/Horiz)")),
            ],
        },
    )
}

fn default_approach() -> Vec<Classified<ApproachParams>> {
    use RunwayType::*;
    let single = |code: u8, ty: RunwayType, len, slope, div, offset, width, r: &str| {
        Classified::new(
            code,
            Some(ty),
            ApproachParams {
                sections: vec![first_section(len, slope, div, offset, width, r)],
            },
        )
    };
    let precision_small = |code: u8| {
        Classified::new(
            code,
            Some(PrecisionCatI),
            ApproachParams {
                sections: vec![
                    first_section(3000.0, 2.5, 15.0, 60.0, 140.0, "MOS T8.2-1 (1/2-PAI S1)"),
                    section(12000.0, 3.0, 15.0, "MOS T8.2-1 (1/2-PAI S2)"),
                ],
            },
        )
    };

    vec![
        single(1, NonInstrument, 1600.0, 5.0, 10.0, 30.0, 60.0, "MOS T8.2-1 (1-NI)"),
        single(2, NonInstrument, 2500.0, 4.0, 10.0, 60.0, 80.0, "MOS T8.2-1 (2-NI)"),
        single(3, NonInstrument, 3000.0, 3.33, 10.0, 60.0, 150.0, "MOS T8.2-1 (3-NI)"),
        single(4, NonInstrument, 3000.0, 2.5, 10.0, 60.0, 150.0, "MOS T8.2-1 (4-NI)"),
        single(1, NonPrecision, 2500.0, 3.33, 15.0, 60.0, 140.0, "MOS T8.2-1 (1/2-NPA)"),
        single(2, NonPrecision, 2500.0, 3.33, 15.0, 60.0, 140.0, "MOS T8.2-1 (1/2-NPA)"),
        three_section_approach(3, "NPA"),
        three_section_approach(4, "NPA"),
        precision_small(1),
        precision_small(2),
        three_section_approach(3, "PAI"),
        three_section_approach(4, "PAI"),
        three_section_approach(3, "PAII/III"),
        three_section_approach(4, "PAII/III"),
    ]
}

fn default_inner_approach() -> Vec<Classified<InnerApproachParams>> {
    use RunwayType::*;
    let row = |code: u8, ty: RunwayType, width_m: f64, slope_perc: f64, r: &str| {
        Classified::new(
            code,
            Some(ty),
            InnerApproachParams {
                width_m,
                origin_offset: 60.0,
                length_m: 900.0,
                slope_perc,
                ref_mos: r.to_string(),
            },
        )
    };
    vec![
        row(1, PrecisionCatI, 90.0, 2.5, "MOS 139 7.10 (Inner App, PA-I, 1/2)"),
        row(2, PrecisionCatI, 90.0, 2.5, "MOS 139 7.10 (Inner App, PA-I, 1/2)"),
        row(3, PrecisionCatI, 120.0, 2.0, "MOS 139 7.10 (Inner App, PA-I, 3/4)"),
        row(4, PrecisionCatI, 120.0, 2.0, "MOS 139 7.10 (Inner App, PA-I, 3/4)"),
        row(3, PrecisionCatIIIII, 120.0, 2.0, "MOS 139 7.10 (Inner App, PA-II/III, 3/4)"),
        row(4, PrecisionCatIIIII, 120.0, 2.0, "MOS 139 7.10 (Inner App, PA-II/III, 3/4)"),
    ]
}

fn default_takeoff() -> Vec<Classified<TakeoffParams>> {
    let row = |code: u8, innerw_m, origin_offset, diverg_perc, outerw_m, length_m, slope_perc, r: &str| {
        Classified::new(
            code,
            None,
            TakeoffParams {
                innerw_m,
                origin_offset,
                diverg_perc,
                outerw_m,
                length_m,
                slope_perc,
                ref_mos: r.to_string(),
            },
        )
    };
    vec![
        row(1, 60.0, 30.0, 10.0, 380.0, 1600.0, 5.0, "MOS 139 7.16 (Code 1)"),
        row(2, 80.0, 60.0, 10.0, 580.0, 2500.0, 4.0, "MOS 139 7.16 (Code 2)"),
        row(3, 180.0, 60.0, 12.5, 1800.0, 15000.0, 2.0, "MOS 139 7.16 (Code 3/4)"),
        row(4, 180.0, 60.0, 12.5, 1800.0, 15000.0, 2.0, "MOS 139 7.16 (Code 3/4)"),
    ]
}

fn default_strip() -> Vec<Classified<StripParams>> {
    use RunwayType::*;
    let row = |code: u8, ty: Option<RunwayType>, width: f64, ext: f64| {
        Classified::new(
            code,
            ty,
            StripParams {
                overall_width_m: width,
                extension_m: ext,
                ref_mos: "MOS 139 6.2.5".to_string(),
            },
        )
    };
    vec![
        row(1, Some(NonInstrument), 140.0, 30.0),
        row(2, Some(NonInstrument), 140.0, 30.0),
        row(1, Some(NonPrecision), 140.0, 60.0),
        row(2, Some(NonPrecision), 140.0, 60.0),
        row(1, None, 280.0, 60.0),
        row(2, None, 280.0, 60.0),
        row(3, None, 280.0, 60.0),
        row(4, None, 280.0, 60.0),
    ]
}

fn default_transitional() -> Vec<Classified<TransitionalParams>> {
    (1..=4)
        .map(|code| {
            let (slope_perc, r) = if code <= 2 {
                (20.0, "MOS 139 8.2.17 (Code 1/2)")
            } else {
                (14.3, "MOS 139 8.2.17 (Code 3/4)")
            };
            Classified::new(
                code,
                None,
                TransitionalParams {
                    slope_perc,
                    ref_mos: r.to_string(),
                },
            )
        })
        .collect()
}

fn default_inner_horizontal() -> Vec<Classified<HorizontalParams>> {
    use RunwayType::*;
    let rows = [
        (1, NonInstrument, 2000.0),
        (2, NonInstrument, 2500.0),
        (3, NonInstrument, 4000.0),
        (4, NonInstrument, 4000.0),
        (1, NonPrecision, 3500.0),
        (2, NonPrecision, 3500.0),
        (3, NonPrecision, 4000.0),
        (4, NonPrecision, 4000.0),
        (1, PrecisionCatI, 3500.0),
        (2, PrecisionCatI, 3500.0),
        (3, PrecisionCatI, 4000.0),
        (4, PrecisionCatI, 4000.0),
        (3, PrecisionCatIIIII, 4000.0),
        (4, PrecisionCatIIIII, 4000.0),
    ];
    rows.iter()
        .map(|&(code, ty, radius_m)| {
            Classified::new(
                code,
                Some(ty),
                HorizontalParams {
                    height_agl: IHS_HEIGHT_ABOVE_RED,
                    radius_m,
                    ref_mos: "MOS 139 8.2.18 / T8.2-1".to_string(),
                },
            )
        })
        .collect()
}

fn default_conical() -> Vec<Classified<ConicalParams>> {
    use RunwayType::*;
    let rows = [
        (1, NonInstrument, 35.0),
        (2, NonInstrument, 55.0),
        (3, NonInstrument, 75.0),
        (4, NonInstrument, 100.0),
        (1, NonPrecision, 60.0),
        (2, NonPrecision, 60.0),
        (3, NonPrecision, 75.0),
        (4, NonPrecision, 100.0),
        (1, PrecisionCatI, 60.0),
        (2, PrecisionCatI, 60.0),
        (3, PrecisionCatI, 100.0),
        (4, PrecisionCatI, 100.0),
        (3, PrecisionCatIIIII, 100.0),
        (4, PrecisionCatIIIII, 100.0),
    ];
    rows.iter()
        .map(|&(code, ty, height_extent_m)| {
            Classified::new(
                code,
                Some(ty),
                ConicalParams {
                    slope_perc: CONICAL_SLOPE_PERC,
                    height_extent_m,
                    ref_mos: "MOS 139 8.2.19 / T8.2-1".to_string(),
                },
            )
        })
        .collect()
}

fn default_outer_horizontal() -> Vec<Classified<HorizontalParams>> {
    use RunwayType::*;
    [
        (3, PrecisionCatI),
        (4, PrecisionCatI),
        (3, PrecisionCatIIIII),
        (4, PrecisionCatIIIII),
    ]
    .iter()
    .map(|&(code, ty)| {
        Classified::new(
            code,
            Some(ty),
            HorizontalParams {
                height_agl: OHS_HEIGHT_ABOVE_RED,
                radius_m: 15000.0,
                ref_mos: "MOS 139 8.2.20".to_string(),
            },
        )
    })
    .collect()
}

fn default_graded_strip() -> Vec<Classified<GradedStripParams>> {
    let row = |code: u8, width_m: f64, narrow_width_m: Option<f64>| {
        Classified::new(
            code,
            None,
            GradedStripParams {
                width_m,
                narrow_width_m,
                ref_mos: "MOS 139 T6.17(1)".to_string(),
            },
        )
    };
    vec![
        row(1, 60.0, None),
        row(2, 80.0, None),
        row(3, 150.0, Some(90.0)),
        row(4, 150.0, Some(90.0)),
    ]
}

fn default_resa() -> Vec<Classified<ResaParams>> {
    use RunwayType::*;
    let row = |code: u8, ty: Option<RunwayType>, length_m: f64| {
        Classified::new(
            code,
            ty,
            ResaParams {
                length_m,
                ref_mos: "MOS 139 6.2.6 / T6.18".to_string(),
            },
        )
    };
    let mut rows: Vec<_> = [1, 2]
        .into_iter()
        .flat_map(|code| {
            [NonPrecision, PrecisionCatI, PrecisionCatIIIII]
                .into_iter()
                .map(move |ty| row(code, Some(ty), 120.0))
        })
        .collect();
    rows.push(row(3, None, 240.0));
    rows.push(row(4, None, 240.0));
    rows
}

fn default_taxiway_separation() -> Vec<TaxiwaySeparationParams> {
    use RunwayType::*;
    // (code, letter, non-instrument, instrument) offsets in m
    let rows: [(u8, char, f64, f64); 16] = [
        (1, 'A', 37.5, 77.5),
        (1, 'B', 42.0, 82.0),
        (1, 'C', 48.0, 88.0),
        (2, 'A', 47.5, 77.5),
        (2, 'B', 52.0, 82.0),
        (2, 'C', 58.0, 88.0),
        (3, 'A', 52.5, 152.0),
        (3, 'B', 87.0, 152.0),
        (3, 'C', 93.0, 158.0),
        (3, 'D', 101.0, 166.0),
        (3, 'E', 107.5, 172.5),
        (3, 'F', 115.0, 180.0),
        (4, 'C', 93.0, 158.0),
        (4, 'D', 101.0, 166.0),
        (4, 'E', 107.5, 172.5),
        (4, 'F', 115.0, 180.0),
    ];
    rows.iter()
        .flat_map(|&(code, letter, visual, instrument)| {
            [
                (NonInstrument, visual),
                (NonPrecision, instrument),
                (PrecisionCatI, instrument),
                (PrecisionCatIIIII, instrument),
            ]
            .into_iter()
            .map(move |(runway_type, offset_m)| TaxiwaySeparationParams {
                code,
                letter,
                runway_type,
                offset_m,
                ref_mos: format!("MOS 139 T9.1 ({code}{letter}-{})", runway_type.abbreviation()),
            })
        })
        .collect()
}

impl Default for OlsStandards {
    fn default() -> Self {
        Self {
            version: "MOS 139 (2019)".to_string(),
            strip: default_strip(),
            approach: default_approach(),
            inner_approach: default_inner_approach(),
            takeoff: default_takeoff(),
            transitional: default_transitional(),
            inner_horizontal: default_inner_horizontal(),
            conical: default_conical(),
            outer_horizontal: default_outer_horizontal(),
            graded_strip: default_graded_strip(),
            resa: default_resa(),
            taxiway_separation: default_taxiway_separation(),
        }
    }
}
