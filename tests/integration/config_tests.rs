use std::io::Write;

use approx::assert_relative_eq;
use safeguarding::{
    config::{ConfigError, IhsShape},
    EntityRef, ErrorKind, Field, InputConfig, MemorySink, RunwayType, SurfaceEngine, SurfaceKind,
};
use tempfile::NamedTempFile;

use crate::common::{mixed_runway_config, sample_config, SAMPLE_CONFIG_YAML};

#[test]
fn test_json_config_file_drives_generation() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sample_config()).unwrap();

    let config = InputConfig::from_file(file.path()).unwrap();
    assert_eq!(config.input.aerodrome.label(), Some("YSBK"));
    assert_eq!(config.options.circle_segments, 48);

    let runway = &config.input.runways[0];
    assert_eq!(runway.display_name(), "11C/29C");
    assert_eq!(runway.ends[0].runway_type, RunwayType::NonPrecision);
    assert_relative_eq!(runway.ends[1].elevation, 6.5);
    assert_relative_eq!(runway.ends[0].clearway_m, 60.0);

    let engine = SurfaceEngine::new(config.standards.clone(), config.options.clone());
    let result = engine.generate(&config.input).unwrap();

    // The glide path has no tabulated zone.
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == ErrorKind::UnsupportedFacilityType));
    assert!(result.layer(SurfaceKind::CnsZone).is_some());

    let mut sink = MemorySink::new();
    result.write_to(&mut sink).unwrap();
    assert_eq!(sink.layers().len(), result.layers.len());
    assert!(sink.layers()[0].name.starts_with("YSBK "));
}

#[test]
fn test_yaml_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(SAMPLE_CONFIG_YAML.as_bytes()).unwrap();

    let config = InputConfig::from_file(file.path()).unwrap();
    assert_eq!(config.options.ihs_shape, IhsShape::StripHull);
    assert!(!config.options.include_wildlife);

    let engine = SurfaceEngine::new(config.standards, config.options);
    let result = engine.generate(&config.input).unwrap();
    assert!(result.layer(SurfaceKind::WildlifeZone).is_none());
    let ihs = &result.layer(SurfaceKind::InnerHorizontal).unwrap().features[0];
    assert_eq!(
        ihs.attributes.get_text(safeguarding::Field::SectionDesc),
        Some("Strip Hull")
    );
}

#[test]
fn test_missing_config_file() {
    let result = InputConfig::from_file("does/not/exist.json");
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_malformed_number_is_rejected() {
    let mut value = sample_config();
    value["runways"][0]["ends"][0]["northing"] = serde_json::json!("north");
    assert!(matches!(
        InputConfig::from_json(&value),
        Err(ConfigError::InvalidParameter { .. })
    ));
}

#[test]
fn test_config_without_arp_fails_at_generation() {
    let mut value = sample_config();
    value.as_object_mut().unwrap().remove("arp");
    let config = InputConfig::from_json(&value).unwrap();
    assert!(config.input.aerodrome.arp.is_none());

    let engine = SurfaceEngine::new(config.standards, config.options);
    assert!(engine.generate(&config.input).is_err());
}

#[test]
fn test_runway_without_table_entry_does_not_block_the_others() {
    let config = InputConfig::from_json(&mixed_runway_config()).unwrap();
    let small = &config.input.runways[1];
    assert!(small.ends[0].surfaces.is_none());
    assert!(small.ends[1].surfaces.is_some());
    assert_eq!(config.input.runways[0].arc_letter, Some('C'));

    let engine = SurfaceEngine::new(config.standards, config.options);
    let result = engine.generate(&config.input).unwrap();

    let warning = result
        .warnings
        .iter()
        .find(|w| w.kind == ErrorKind::MissingStandard)
        .expect("missing standard warning");
    assert_eq!(
        warning.entity,
        EntityRef::RunwayEnd {
            runway: "18/36".to_string(),
            designator: "18".to_string()
        }
    );

    for kind in [SurfaceKind::Strip, SurfaceKind::Approach, SurfaceKind::Physical] {
        let layer = result.layer(kind).unwrap();
        assert!(!layer.is_empty(), "{kind}");
        assert!(layer
            .features
            .iter()
            .all(|f| f.attributes.get_text(Field::RwyName) == Some("09/27")));
    }
}
