//! Building restricted areas around CNS facilities (NASF Guideline G).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneShape {
    Circle,
    Donut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub name: String,
    pub shape: ZoneShape,
    pub outer_radius_m: f64,
    #[serde(default)]
    pub inner_radius_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySpec {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub zones: Vec<ZoneSpec>,
}

impl FacilitySpec {
    fn answers_to(&self, key: &str) -> bool {
        normalize(&self.name) == key || self.aliases.iter().any(|a| normalize(a) == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnsStandards {
    pub version: String,
    pub reference: String,
    pub facilities: Vec<FacilitySpec>,
}

fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}

impl CnsStandards {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Case-insensitive lookup by full name or alias, ignoring surrounding whitespace.
    pub fn lookup(&self, facility_type: &str) -> Option<&FacilitySpec> {
        let key = normalize(facility_type);
        if key.is_empty() {
            return None;
        }
        self.facilities.iter().find(|spec| spec.answers_to(&key))
    }
}

fn circle(name: &str, radius: f64) -> ZoneSpec {
    ZoneSpec {
        name: name.to_string(),
        shape: ZoneShape::Circle,
        outer_radius_m: radius,
        inner_radius_m: 0.0,
    }
}

fn donut(name: &str, outer: f64, inner: f64) -> ZoneSpec {
    ZoneSpec {
        name: name.to_string(),
        shape: ZoneShape::Donut,
        outer_radius_m: outer,
        inner_radius_m: inner,
    }
}

/// Zone A circle plus a Zone A/B donut out to `outer`.
fn two_zone(a: f64, outer: f64) -> Vec<ZoneSpec> {
    vec![circle("Zone A", a), donut("Zone A/B", outer, a)]
}

fn facility(name: &str, aliases: &[&str], zones: Vec<ZoneSpec>) -> FacilitySpec {
    FacilitySpec {
        name: name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        zones,
    }
}

impl Default for CnsStandards {
    fn default() -> Self {
        let radar = || {
            vec![
                circle("Zone A", 500.0),
                donut("Zone A/B", 4000.0, 500.0),
                donut("Area of Interest", 15000.0, 4000.0),
            ]
        };
        Self {
            version: "NASF Guideline G (2016)".to_string(),
            reference: "NASF Guideline G".to_string(),
            facilities: vec![
                facility(
                    "High Frequency (HF)",
                    &["HF"],
                    vec![
                        circle("Zone A", 100.0),
                        donut("Zone A/B", 6000.0, 100.0),
                        donut("Area of Interest", 10000.0, 6000.0),
                    ],
                ),
                facility(
                    "Very High Frequency (VHF)",
                    &["VHF"],
                    vec![
                        circle("Zone A", 100.0),
                        donut("Zone A/B", 600.0, 100.0),
                        donut("Area of Interest", 2000.0, 100.0),
                    ],
                ),
                facility("Satellite Ground Station (SGS)", &["SGS"], two_zone(30.0, 150.0)),
                facility("Non-Directional Beacon (NDB)", &["NDB"], two_zone(60.0, 300.0)),
                facility("Distance Measuring Equipment (DME)", &["DME"], two_zone(100.0, 1500.0)),
                facility("VHF Omni-Directional Range (VOR)", &["VOR"], two_zone(100.0, 1500.0)),
                facility(
                    "Conventional VHF Omni-Directional Range (CVOR)",
                    &["CVOR"],
                    two_zone(200.0, 1500.0),
                ),
                facility(
                    "Doppler VHF Omni-Directional Range (DVOR) - Elevated",
                    &["DVOR-E", "DVOR Elevated"],
                    two_zone(100.0, 1500.0),
                ),
                facility(
                    "Doppler VHF Omni-Directional Range (DVOR) - Ground Mounted",
                    &["DVOR-G", "DVOR Ground Mounted"],
                    two_zone(150.0, 1500.0),
                ),
                facility("Middle and Outer Marker", &["MM", "OM", "Marker"], two_zone(5.0, 50.0)),
                facility("Glide Path (GP)", &["GP"], Vec::new()),
                facility("Localiser (LOC)", &["LOC", "Localizer"], Vec::new()),
                facility(
                    "Automatic Dependent Surveillance Broadcast (ADS-B)",
                    &["ADS-B", "ADSB"],
                    two_zone(100.0, 1500.0),
                ),
                facility("Wide Area Multilateration (WAM)", &["WAM"], two_zone(100.0, 1500.0)),
                facility("Primary Surveillance Radar (PSR)", &["PSR"], radar()),
                facility("Secondary Surveillance Radar (SSR)", &["SSR"], radar()),
                facility(
                    "Ground Based Augmentation System (GBAS) - RSMU",
                    &["GBAS-RSMU", "RSMU"],
                    two_zone(155.0, 3000.0),
                ),
                facility("GBAS - VDB", &["GBAS-VDB", "VDB"], two_zone(200.0, 3000.0)),
                facility("Link Dishes", &["LINK"], vec![circle("Zone A", 30.0)]),
                facility(
                    "Radar Site Monitor - Type A",
                    &["RSM-A"],
                    vec![circle("Zone A", 30.0), circle("Zone A/B", 500.0)],
                ),
                facility(
                    "Radar Site Monitor - Type B",
                    &["RSM-B"],
                    vec![circle("Zone A", 70.0), circle("Zone A/B", 500.0)],
                ),
            ],
        }
    }
}
