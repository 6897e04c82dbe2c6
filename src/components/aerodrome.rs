use serde::{Deserialize, Serialize};

use crate::{
    components::{Facility, Runway},
    utils::{Point2D, SafeguardError, DISTANCE_EPSILON},
};

/// A surveyed point with an elevation (ARP, MET station).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub location: Point2D,
    /// m AMSL
    pub elevation: f64,
}

impl ReferencePoint {
    pub const fn new(easting: f64, northing: f64, elevation: f64) -> Self {
        Self {
            location: Point2D::new(easting, northing),
            elevation,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.location.is_finite() && self.elevation.is_finite()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aerodrome {
    pub icao: Option<String>,
    pub arp: Option<ReferencePoint>,
    pub met: Option<ReferencePoint>,
}

impl Aerodrome {
    /// Prefix used in layer names, e.g. `YSSY`.
    pub fn label(&self) -> Option<&str> {
        self.icao.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Everything a generation run consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeguardingInput {
    pub aerodrome: Aerodrome,
    #[serde(default)]
    pub runways: Vec<Runway>,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

fn check_positive(problems: &mut Vec<String>, what: String, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        problems.push(format!("{what} must be greater than zero (got {value})"));
    }
}

fn check_non_negative(problems: &mut Vec<String>, what: String, value: f64) {
    if !value.is_finite() || value < 0.0 {
        problems.push(format!("{what} must not be negative (got {value})"));
    }
}

impl SafeguardingInput {
    /// Check every scalar the generators rely on. All problems are reported at once.
    pub fn validate(&self) -> Result<(), SafeguardError> {
        let mut problems = Vec::new();

        match &self.aerodrome.arp {
            None => problems.push("aerodrome reference point is missing".to_string()),
            Some(arp) if !arp.is_finite() => {
                problems.push("aerodrome reference point is not finite".to_string())
            }
            Some(_) => {}
        }
        if let Some(met) = &self.aerodrome.met {
            if !met.is_finite() {
                problems.push("MET station location is not finite".to_string());
            }
        }

        for (i, runway) in self.runways.iter().enumerate() {
            self.validate_runway(i, runway, &mut problems);
        }

        for facility in &self.facilities {
            if !facility.location.is_finite() || !facility.elevation.is_finite() {
                problems.push(format!("facility '{}' has a non-finite position", facility.id));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(SafeguardError::Validation(problems))
        }
    }

    fn validate_runway(&self, index: usize, runway: &Runway, problems: &mut Vec<String>) {
        let name = format!("runway {} ({})", index + 1, runway.display_name());

        if !(1..=4).contains(&runway.arc_number) {
            problems.push(format!(
                "{name}: ARC code number must be 1-4 (got {})",
                runway.arc_number
            ));
        }

        let mut thresholds_finite = true;
        for end in &runway.ends {
            let what = format!("{name} end {}", end.designator);
            if end.designator.trim().is_empty() {
                problems.push(format!("{name}: designator is empty"));
            }
            if !end.threshold.is_finite() || !end.elevation.is_finite() {
                problems.push(format!("{what}: threshold is not finite"));
                thresholds_finite = false;
            }
            check_non_negative(problems, format!("{what} clearway"), end.clearway_m);
            check_non_negative(problems, format!("{what} displaced threshold"), end.displaced_m);

            // Unresolved ends are reported per runway during generation
            let Some(s) = &end.surfaces else {
                continue;
            };
            check_positive(problems, format!("{what} strip half-width"), s.strip_half_width);
            check_non_negative(problems, format!("{what} strip extension"), s.strip_extension);
            check_positive(problems, format!("{what} transitional slope"), s.transitional.slope_perc);

            for (n, section) in s.approach.iter().enumerate() {
                let sec = format!("{what} approach section {}", n + 1);
                check_positive(problems, format!("{sec} length"), section.length_m);
                check_non_negative(problems, format!("{sec} slope"), section.slope_perc);
                check_non_negative(problems, format!("{sec} divergence"), section.diverg_perc);
                if n == 0 {
                    match section.innerw_m {
                        Some(w) => check_positive(problems, format!("{sec} inner width"), w),
                        None => problems.push(format!("{sec}: inner width is missing")),
                    }
                    check_non_negative(
                        problems,
                        format!("{sec} origin offset"),
                        section.origin_offset.unwrap_or(0.0),
                    );
                }
            }
            if let Some(outer) = s.declared_outer_width {
                check_positive(problems, format!("{what} declared outer width"), outer);
            }
            // Zero-sized optional surfaces are omitted by their generators
            if let Some(inner) = &s.inner_approach {
                check_non_negative(problems, format!("{what} inner approach width"), inner.width_m);
                check_non_negative(problems, format!("{what} inner approach length"), inner.length_m);
                check_non_negative(problems, format!("{what} inner approach slope"), inner.slope_perc);
            }
            if let Some(tocs) = &s.takeoff {
                check_non_negative(problems, format!("{what} take-off inner width"), tocs.innerw_m);
                check_non_negative(problems, format!("{what} take-off final width"), tocs.outerw_m);
                check_non_negative(problems, format!("{what} take-off length"), tocs.length_m);
                check_non_negative(problems, format!("{what} take-off divergence"), tocs.diverg_perc);
                check_non_negative(problems, format!("{what} take-off slope"), tocs.slope_perc);
                check_non_negative(problems, format!("{what} take-off origin offset"), tocs.origin_offset);
            }
        }

        if let Some(width) = runway.width_m {
            check_non_negative(problems, format!("{name} width"), width);
        }
        if let Some(shoulder) = runway.shoulder_m {
            check_non_negative(problems, format!("{name} shoulder width"), shoulder);
        }
        if let Some(letter) = runway.arc_letter {
            if !('A'..='F').contains(&letter) {
                problems.push(format!("{name}: ARC code letter must be A-F (got {letter})"));
            }
        }

        if thresholds_finite && runway.length() < DISTANCE_EPSILON {
            problems.push(format!("{name}: runway length is zero (thresholds coincide)"));
        }
    }
}
