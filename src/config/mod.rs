use serde_json::Value;
use std::path::Path;

mod builders;
mod errors;
mod options;

pub use builders::*;
pub use errors::ConfigError;
pub use options::{GenerationOptions, IhsShape, OutputFormat, OutputMode};

use crate::{components::SafeguardingInput, resources::Standards};

/// A complete, typed generation request.
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub input: SafeguardingInput,
    pub options: GenerationOptions,
    pub standards: Standards,
}

impl InputConfig {
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let builder = InputConfigBuilder::from_json(value)?;
        builder.build()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_json(&value)
    }

    /// Load a `.json`, `.yaml` or `.yml` request file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Self::from_json_str(&contents),
        }
    }
}
