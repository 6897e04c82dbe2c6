use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::{SafeguardError, DEFAULT_CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    GeoJson,
    Shapefile,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "geojson" | "json" => Some(OutputFormat::GeoJson),
            "shapefile" | "shp" | "esri shapefile" => Some(OutputFormat::Shapefile),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_name)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::GeoJson => "geojson",
            OutputFormat::Shapefile => "shp",
        }
    }
}

/// Where generated layers end up. The engine only records the choice; writing
/// is done by a `LayerSink` supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Memory,
    File { path: PathBuf, format: OutputFormat },
}

/// Footprint used for the inner horizontal surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IhsShape {
    /// Disc centred on the ARP.
    #[default]
    ArpCircle,
    /// Convex hull of circles drawn around every strip end.
    StripHull,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub dissolve: bool,
    pub output: OutputMode,
    /// Overrides the tabulated IHS radius.
    pub inner_radius_km: Option<f64>,
    /// Overrides the tabulated OHS radius, and forces an OHS when set.
    pub outer_radius_km: Option<f64>,
    pub ihs_shape: IhsShape,
    pub circle_segments: usize,
    pub parallel: bool,
    pub include_met: bool,
    pub include_wildlife: bool,
    /// Windshear, lighting control and public safety areas.
    pub include_guidelines: bool,
    /// Pavement, shoulders, graded strip, RESA, RAOA and taxiway separation.
    pub include_physical: bool,
    /// Approach and conical contour bands.
    pub include_contours: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            dissolve: false,
            output: OutputMode::Memory,
            inner_radius_km: None,
            outer_radius_km: None,
            ihs_shape: IhsShape::ArpCircle,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            parallel: false,
            include_met: true,
            include_wildlife: true,
            include_guidelines: true,
            include_physical: true,
            include_contours: true,
        }
    }
}

impl GenerationOptions {
    /// Problems that would make generation unsafe, empty when the options are usable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.circle_segments < MIN_CIRCLE_SEGMENTS {
            problems.push(format!(
                "circle_segments must be at least {MIN_CIRCLE_SEGMENTS} (got {})",
                self.circle_segments
            ));
        }
        for (name, radius) in [
            ("inner_radius_km", self.inner_radius_km),
            ("outer_radius_km", self.outer_radius_km),
        ] {
            if let Some(r) = radius {
                if !(r.is_finite() && r > 0.0) {
                    problems.push(format!("{name} must be greater than zero (got {r})"));
                }
            }
        }
        if let (Some(inner), Some(outer)) = (self.inner_radius_km, self.outer_radius_km) {
            if outer <= inner {
                problems.push(format!(
                    "outer_radius_km ({outer}) must exceed inner_radius_km ({inner})"
                ));
            }
        }
        problems
    }

    pub fn validate(&self) -> Result<(), SafeguardError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(SafeguardError::Validation(problems))
        }
    }
}
