use serde::{Deserialize, Serialize};
use std::{fmt, io};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum SafeguardError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Unsupported facility type: {0}")]
    UnsupportedFacilityType(String),

    #[error("No standards entry for {0}")]
    MissingStandard(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl SafeguardError {
    pub fn validation(message: impl Into<String>) -> Self {
        SafeguardError::Validation(vec![message.into()])
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        SafeguardError::DegenerateGeometry(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SafeguardError::Validation(_) | SafeguardError::Config(_) => ErrorKind::Validation,
            SafeguardError::DegenerateGeometry(_) => ErrorKind::DegenerateGeometry,
            SafeguardError::UnsupportedFacilityType(_) => ErrorKind::UnsupportedFacilityType,
            SafeguardError::MissingStandard(_) => ErrorKind::MissingStandard,
            SafeguardError::Io(_) => ErrorKind::Io,
        }
    }
}

/// Classification attached to every non-fatal generation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    DegenerateGeometry,
    UnsupportedFacilityType,
    MissingStandard,
    InconsistentParameter,
    DesignatorMismatch,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::DegenerateGeometry => "DegenerateGeometryError",
            ErrorKind::UnsupportedFacilityType => "UnsupportedFacilityTypeError",
            ErrorKind::MissingStandard => "MissingStandardError",
            ErrorKind::InconsistentParameter => "InconsistentParameter",
            ErrorKind::DesignatorMismatch => "DesignatorMismatch",
            ErrorKind::Io => "IOError",
        };
        f.write_str(name)
    }
}
