use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    resources::{ApproachSection, InnerApproachParams, TakeoffParams, TransitionalParams},
    utils::{distance, Point2D},
};

/// Runway approach classification, ordered from least to most precise.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RunwayType {
    #[default]
    #[serde(rename = "NI")]
    NonInstrument,
    #[serde(rename = "NPA")]
    NonPrecision,
    #[serde(rename = "PA_I")]
    PrecisionCatI,
    #[serde(rename = "PA_II_III")]
    PrecisionCatIIIII,
}

impl RunwayType {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            RunwayType::NonInstrument => "NI",
            RunwayType::NonPrecision => "NPA",
            RunwayType::PrecisionCatI => "PA_I",
            RunwayType::PrecisionCatIIIII => "PA_II_III",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunwayType::NonInstrument => "Non-Instrument (NI)",
            RunwayType::NonPrecision => "Non-Precision Approach (NPA)",
            RunwayType::PrecisionCatI => "Precision Approach CAT I",
            RunwayType::PrecisionCatIIIII => "Precision Approach CAT II/III",
        }
    }

    /// Accepts abbreviations or the long form labels; blank means non-instrument.
    pub fn parse(value: &str) -> Option<Self> {
        let key = value.trim();
        if key.is_empty() {
            return Some(RunwayType::NonInstrument);
        }
        [
            RunwayType::NonInstrument,
            RunwayType::NonPrecision,
            RunwayType::PrecisionCatI,
            RunwayType::PrecisionCatIIIII,
        ]
        .into_iter()
        .find(|t| {
            t.abbreviation().eq_ignore_ascii_case(key) || t.label().eq_ignore_ascii_case(key)
        })
    }

    pub fn is_precision(&self) -> bool {
        matches!(
            self,
            RunwayType::PrecisionCatI | RunwayType::PrecisionCatIIIII
        )
    }
}

/// Runway designator such as `09L`: magnetic heading in tens of degrees plus
/// an optional parallel-runway suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Designator {
    pub number: u8,
    pub suffix: Option<char>,
}

impl Designator {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
        let rest: Vec<char> = value[digits.len()..].chars().collect();
        let number: u8 = digits.parse().ok()?;
        if !(1..=36).contains(&number) {
            return None;
        }
        let suffix = match rest.as_slice() {
            [] => None,
            [c] => match c.to_ascii_uppercase() {
                s @ ('L' | 'C' | 'R') => Some(s),
                _ => return None,
            },
            _ => return None,
        };
        Some(Self { number, suffix })
    }

    pub fn reciprocal(&self) -> Self {
        let number = if self.number <= 18 {
            self.number + 18
        } else {
            self.number - 18
        };
        let suffix = self.suffix.map(|s| match s {
            'L' => 'R',
            'R' => 'L',
            other => other,
        });
        Self { number, suffix }
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number)?;
        if let Some(s) = self.suffix {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Resolved surface parameters for one runway end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndSurfaces {
    pub strip_half_width: f64,
    /// Distance the strip extends beyond the threshold.
    pub strip_extension: f64,
    pub strip_ref: String,
    pub approach: Vec<ApproachSection>,
    /// Declared outer width of the approach funnel, checked against the computed one.
    pub declared_outer_width: Option<f64>,
    pub inner_approach: Option<InnerApproachParams>,
    pub takeoff: Option<TakeoffParams>,
    pub transitional: TransitionalParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayEnd {
    pub designator: String,
    pub threshold: Point2D,
    /// Threshold elevation, m AMSL
    pub elevation: f64,
    pub runway_type: RunwayType,
    /// Clearway beyond this threshold, used by take-offs departing over it.
    pub clearway_m: f64,
    /// Pavement before the landing threshold, m.
    #[serde(default)]
    pub displaced_m: f64,
    /// `None` until resolved when the standards have no entry for this end's classification.
    pub surfaces: Option<EndSurfaces>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    pub name: Option<String>,
    pub arc_number: u8,
    /// ARC code letter (A-F), needed for taxiway separation.
    #[serde(default)]
    pub arc_letter: Option<char>,
    /// Pavement width, m
    #[serde(default)]
    pub width_m: Option<f64>,
    /// Shoulder width on each side, m
    #[serde(default)]
    pub shoulder_m: Option<f64>,
    pub ends: [RunwayEnd; 2],
}

impl Runway {
    /// Name as `09L/27R`, lower designator first.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let p = self.primary_index();
        format!(
            "{}/{}",
            self.ends[p].designator.trim(),
            self.ends[1 - p].designator.trim()
        )
    }

    /// Index of the end with the lower designator; the first end when they can't be compared.
    pub fn primary_index(&self) -> usize {
        match (
            Designator::parse(&self.ends[0].designator),
            Designator::parse(&self.ends[1].designator),
        ) {
            (Some(a), Some(b)) if b < a => 1,
            (None, None) if self.ends[1].designator < self.ends[0].designator => 1,
            _ => 0,
        }
    }

    pub fn length(&self) -> f64 {
        distance(&self.ends[0].threshold, &self.ends[1].threshold)
    }

    pub fn designators_reciprocal(&self) -> bool {
        match (
            Designator::parse(&self.ends[0].designator),
            Designator::parse(&self.ends[1].designator),
        ) {
            (Some(a), Some(b)) => a.reciprocal() == b,
            _ => false,
        }
    }

    /// Most precise classification of either end.
    pub fn governing_type(&self) -> RunwayType {
        self.ends[0].runway_type.max(self.ends[1].runway_type)
    }

    /// Same runway with the ends listed the other way round.
    pub fn reversed(&self) -> Self {
        let mut runway = self.clone();
        runway.ends.swap(0, 1);
        runway
    }
}
