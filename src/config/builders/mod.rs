use serde_json::Value;

mod facility;
mod options;
mod reference;
mod runway;

use crate::{
    components::{Aerodrome, SafeguardingInput},
    config::{errors::ConfigError, GenerationOptions, InputConfig},
    resources::{CnsStandards, OlsStandards, Standards},
};

pub use facility::FacilityBuilder;
pub use options::OptionsBuilder;
pub use reference::ReferencePointBuilder;
pub use runway::{ApproachOverride, RunwayBuilder, RunwayEndBuilder};

/// Read a number that may be written as a JSON number or a numeric string.
/// Absent and null values give `None`; anything else non-numeric is an error.
pub(crate) fn number(value: &Value, key: &str) -> Result<Option<f64>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ConfigError::invalid(key, n)),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::invalid(key, s)),
        Some(other) => Err(ConfigError::invalid(key, other)),
    }
}

/// Read an optional trimmed string.
pub(crate) fn text(value: &Value, key: &str) -> Result<Option<String>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(ConfigError::invalid(key, other)),
    }
}

#[derive(Default, Debug, Clone)]
pub struct InputConfigBuilder {
    pub icao: Option<String>,
    pub arp: Option<ReferencePointBuilder>,
    pub met: Option<ReferencePointBuilder>,
    pub runways: Vec<RunwayBuilder>,
    pub facilities: Vec<FacilityBuilder>,
    pub options: OptionsBuilder,
    pub ols: Option<OlsStandards>,
    pub cns: Option<CnsStandards>,
}

impl InputConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = Some(icao.into());
        self
    }

    pub fn arp(mut self, arp: ReferencePointBuilder) -> Self {
        self.arp = Some(arp);
        self
    }

    pub fn met(mut self, met: ReferencePointBuilder) -> Self {
        self.met = Some(met);
        self
    }

    pub fn runway(mut self, runway: RunwayBuilder) -> Self {
        self.runways.push(runway);
        self
    }

    pub fn facility(mut self, facility: FacilityBuilder) -> Self {
        self.facilities.push(facility);
        self
    }

    pub fn options(mut self, options: OptionsBuilder) -> Self {
        self.options = options;
        self
    }

    pub fn ols_standards(mut self, ols: OlsStandards) -> Self {
        self.ols = Some(ols);
        self
    }

    pub fn cns_standards(mut self, cns: CnsStandards) -> Self {
        self.cns = Some(cns);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        builder.icao = text(value, "icao")?.filter(|s| !s.is_empty());

        if let Some(arp) = value.get("arp").filter(|v| !v.is_null()) {
            builder.arp = Some(ReferencePointBuilder::from_json(arp)?);
        }
        if let Some(met) = value.get("met").filter(|v| !v.is_null()) {
            builder.met = Some(ReferencePointBuilder::from_json(met)?);
        }

        if let Some(runways) = value.get("runways").and_then(Value::as_array) {
            for runway in runways {
                builder = builder.runway(RunwayBuilder::from_json(runway)?);
            }
        }

        if let Some(facilities) = value.get("facilities").and_then(Value::as_array) {
            for facility in facilities {
                builder = builder.facility(FacilityBuilder::from_json(facility)?);
            }
        }

        if let Some(options) = value.get("options") {
            builder.options = OptionsBuilder::from_json(options)?;
        }

        if let Some(standards) = value.get("standards") {
            if let Some(ols) = standards.get("ols") {
                builder.ols = Some(serde_json::from_value(ols.clone())?);
            }
            if let Some(cns) = standards.get("cns") {
                builder.cns = Some(serde_json::from_value(cns.clone())?);
            }
        }

        Ok(builder)
    }

    pub fn build(self) -> Result<InputConfig, ConfigError> {
        let standards = Standards {
            ols: self.ols.unwrap_or_default(),
            cns: self.cns.unwrap_or_default(),
        };

        // A missing ARP is left for the engine to reject before generation.
        let arp = self.arp.map(|b| b.build("arp")).transpose()?;
        let met = self.met.map(|b| b.build("met")).transpose()?;

        let runways = self
            .runways
            .into_iter()
            .map(|r| r.build(&standards.ols))
            .collect::<Result<Vec<_>, _>>()?;

        let facilities = self
            .facilities
            .into_iter()
            .enumerate()
            .map(|(i, f)| f.build(i))
            .collect::<Result<Vec<_>, _>>()?;

        let options: GenerationOptions = self.options.build()?;

        Ok(InputConfig {
            input: SafeguardingInput {
                aerodrome: Aerodrome {
                    icao: self.icao,
                    arp,
                    met,
                },
                runways,
                facilities,
            },
            options,
            standards,
        })
    }
}
