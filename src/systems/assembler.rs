//! Grouping of generated features into per-kind layers.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    components::{Layer, SurfaceFeature, SurfaceKind},
    systems::geometry,
};

/// One layer per surface kind present, in kind order. Within a layer the
/// features keep their generation order. With `dissolve` set each layer is
/// merged into a single feature carrying the first feature's attributes.
pub fn assemble(features: Vec<SurfaceFeature>, dissolve: bool, prefix: Option<&str>) -> Vec<Layer> {
    let mut grouped: BTreeMap<SurfaceKind, Vec<SurfaceFeature>> = BTreeMap::new();
    for feature in features {
        grouped.entry(feature.kind).or_default().push(feature);
    }

    grouped
        .into_iter()
        .map(|(kind, features)| {
            let mut layer = Layer::new(kind, prefix);
            layer.features = if dissolve && features.len() > 1 {
                debug!(layer = %layer.name, parts = features.len(), "dissolving");
                vec![dissolve_features(features)]
            } else {
                features
            };
            layer
        })
        .collect()
}

fn dissolve_features(mut features: Vec<SurfaceFeature>) -> SurfaceFeature {
    let parts: Vec<_> = features.iter().map(|f| f.geometry.clone()).collect();
    let mut first = features.swap_remove(0);
    first.geometry = geometry::union_all(&parts);
    first
}
