use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::config::{
    builders::{number, text},
    errors::ConfigError,
    options::{GenerationOptions, IhsShape, OutputFormat, OutputMode},
};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OptionsBuilder {
    pub dissolve: Option<bool>,
    pub output: Option<OutputMode>,
    pub inner_radius_km: Option<f64>,
    pub outer_radius_km: Option<f64>,
    pub ihs_shape: Option<IhsShape>,
    pub circle_segments: Option<usize>,
    pub parallel: Option<bool>,
    pub include_met: Option<bool>,
    pub include_wildlife: Option<bool>,
    pub include_guidelines: Option<bool>,
    pub include_physical: Option<bool>,
    pub include_contours: Option<bool>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dissolve(mut self, dissolve: bool) -> Self {
        self.dissolve = Some(dissolve);
        self
    }

    pub fn radii_km(mut self, inner: f64, outer: f64) -> Self {
        self.inner_radius_km = Some(inner);
        self.outer_radius_km = Some(outer);
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = Some(output);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        builder.dissolve = value.get("dissolve").and_then(Value::as_bool);
        builder.parallel = value.get("parallel").and_then(Value::as_bool);
        builder.include_met = value.get("include_met").and_then(Value::as_bool);
        builder.include_wildlife = value.get("include_wildlife").and_then(Value::as_bool);
        builder.include_guidelines = value.get("include_guidelines").and_then(Value::as_bool);
        builder.include_physical = value.get("include_physical").and_then(Value::as_bool);
        builder.include_contours = value.get("include_contours").and_then(Value::as_bool);
        builder.inner_radius_km = number(value, "inner_radius_km")?;
        builder.outer_radius_km = number(value, "outer_radius_km")?;

        if let Some(segments) = value.get("circle_segments").and_then(Value::as_u64) {
            builder.circle_segments = Some(segments as usize);
        }

        if let Some(shape) = text(value, "ihs_shape")? {
            builder.ihs_shape = Some(match shape.to_ascii_lowercase().as_str() {
                "arp_circle" | "circle" => IhsShape::ArpCircle,
                "strip_hull" | "hull" => IhsShape::StripHull,
                _ => return Err(ConfigError::invalid("ihs_shape", shape)),
            });
        }

        if let Some(output) = value.get("output") {
            builder.output = Some(Self::output_from_json(output)?);
        }

        Ok(builder)
    }

    fn output_from_json(value: &Value) -> Result<OutputMode, ConfigError> {
        match text(value, "mode")?.as_deref() {
            None | Some("memory") => Ok(OutputMode::Memory),
            Some("file") => {
                let path = text(value, "path")?
                    .map(PathBuf::from)
                    .ok_or_else(|| ConfigError::MissingRequired("output.path".to_string()))?;
                let format = match text(value, "format")? {
                    Some(name) => OutputFormat::from_name(&name)
                        .ok_or_else(|| ConfigError::invalid("output.format", name))?,
                    None => OutputFormat::from_path(&path).ok_or_else(|| {
                        ConfigError::invalid("output.path", path.display())
                    })?,
                };
                Ok(OutputMode::File { path, format })
            }
            Some(other) => Err(ConfigError::invalid("output.mode", other)),
        }
    }

    pub fn build(self) -> Result<GenerationOptions, ConfigError> {
        let mut options = GenerationOptions::default();

        if let Some(dissolve) = self.dissolve {
            options.dissolve = dissolve;
        }
        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(shape) = self.ihs_shape {
            options.ihs_shape = shape;
        }
        if let Some(parallel) = self.parallel {
            options.parallel = parallel;
        }
        if let Some(include_met) = self.include_met {
            options.include_met = include_met;
        }
        if let Some(include_wildlife) = self.include_wildlife {
            options.include_wildlife = include_wildlife;
        }
        if let Some(include_guidelines) = self.include_guidelines {
            options.include_guidelines = include_guidelines;
        }
        if let Some(include_physical) = self.include_physical {
            options.include_physical = include_physical;
        }
        if let Some(include_contours) = self.include_contours {
            options.include_contours = include_contours;
        }
        if let Some(segments) = self.circle_segments {
            options.circle_segments = segments;
        }
        for (name, radius) in [
            ("inner_radius_km", self.inner_radius_km),
            ("outer_radius_km", self.outer_radius_km),
        ] {
            if let Some(r) = radius {
                if !(r.is_finite() && r > 0.0) {
                    return Err(ConfigError::invalid(name, r));
                }
            }
        }
        options.inner_radius_km = self.inner_radius_km;
        options.outer_radius_km = self.outer_radius_km;

        // Same checks the engine applies before generating
        let problems = options.problems();
        if !problems.is_empty() {
            return Err(ConfigError::ValidationError(problems.join("; ")));
        }
        Ok(options)
    }
}
