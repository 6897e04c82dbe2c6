use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use std::{
    env,
    error::Error,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use geo::{LineString, MultiPolygon};
use safeguarding::{
    components::AttributeValue, InputConfig, Layer, LayerSink, OutputFormat, OutputMode,
    SafeguardError, SurfaceEngine,
};

/// Collects layers and writes them as one GeoJSON FeatureCollection, each
/// feature tagged with its layer name. Output is byte-identical for identical
/// input unless a generation timestamp is attached.
struct GeoJsonSink {
    path: PathBuf,
    features: Vec<Value>,
    generated: Option<DateTime<Utc>>,
}

impl GeoJsonSink {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            features: Vec::new(),
            generated: None,
        }
    }

    fn with_timestamp(mut self, generated: DateTime<Utc>) -> Self {
        self.generated = Some(generated);
        self
    }
}

fn ring_coordinates(ring: &LineString<f64>) -> Value {
    Value::Array(ring.coords().map(|c| json!([c.x, c.y])).collect())
}

fn multipolygon_geometry(geometry: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Value> = geometry
        .iter()
        .map(|polygon| {
            let mut rings = vec![ring_coordinates(polygon.exterior())];
            rings.extend(polygon.interiors().iter().map(ring_coordinates));
            Value::Array(rings)
        })
        .collect();
    json!({ "type": "MultiPolygon", "coordinates": polygons })
}

impl LayerSink for GeoJsonSink {
    fn write_layer(&mut self, layer: &Layer) -> Result<(), SafeguardError> {
        for feature in &layer.features {
            let mut properties = Map::new();
            properties.insert("layer".to_string(), json!(layer.name));
            for field in &layer.schema {
                let value = match feature.attributes.get(*field) {
                    Some(AttributeValue::Text(text)) => json!(text),
                    Some(AttributeValue::Real(real)) => json!(real),
                    None => Value::Null,
                };
                properties.insert(field.name().to_string(), value);
            }
            self.features.push(json!({
                "type": "Feature",
                "geometry": multipolygon_geometry(&feature.geometry),
                "properties": properties,
            }));
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SafeguardError> {
        let mut collection = json!({
            "type": "FeatureCollection",
            "features": std::mem::take(&mut self.features),
        });
        if let Some(generated) = self.generated {
            collection["metadata"] = json!({ "generated": generated.to_rfc3339() });
        }
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &collection)
            .map_err(|e| SafeguardError::Io(e.into()))?;
        Ok(())
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let (flags, positional): (Vec<String>, Vec<String>) =
        env::args().skip(1).partition(|arg| arg.starts_with("--"));
    let timestamp = flags.iter().any(|flag| flag == "--timestamp");
    let mut args = positional.into_iter();
    let config_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            error!("usage: safeguarding_build [--timestamp] <config.json|config.yaml> [output.geojson]");
            return Err("missing configuration path".into());
        }
    };

    let mut config = InputConfig::from_file(&config_path)?;
    if let Some(out) = args.next() {
        let path = PathBuf::from(out);
        let format = OutputFormat::from_path(&path).unwrap_or(OutputFormat::GeoJson);
        config.options.output = OutputMode::File { path, format };
    }
    info!("loaded {}", config_path.display());

    let engine = SurfaceEngine::new(config.standards, config.options.clone());
    let result = engine.generate(&config.input)?;
    for warning in &result.warnings {
        warn!("{warning}");
    }
    info!(
        red = result.reference_elevation_datum,
        "{} layers, {} features",
        result.layers.len(),
        result.feature_count()
    );

    match &config.options.output {
        OutputMode::Memory => {
            for layer in &result.layers {
                println!("{:<45} {:>4} features", layer.name, layer.len());
            }
        }
        OutputMode::File { path, format } => match format {
            OutputFormat::GeoJson => {
                let mut sink = GeoJsonSink::new(path);
                if timestamp {
                    sink = sink.with_timestamp(Utc::now());
                }
                result.write_to(&mut sink)?;
                info!("wrote {}", path.display());
            }
            OutputFormat::Shapefile => {
                return Err("Shapefile output is not supported by safeguarding_build; use GeoJSON".into());
            }
        },
    }

    Ok(())
}
