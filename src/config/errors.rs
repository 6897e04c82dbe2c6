use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required parameter: {0}")]
    MissingRequired(String),

    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ConfigError {
    pub fn invalid(name: impl Into<String>, value: impl ToString) -> Self {
        ConfigError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
        }
    }
}
