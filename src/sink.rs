//! Destinations for generated layers.

use crate::{components::Layer, utils::SafeguardError};

/// Receives finished layers one at a time. File formats live outside the
/// engine and implement this trait.
pub trait LayerSink {
    fn write_layer(&mut self, layer: &Layer) -> Result<(), SafeguardError>;

    /// Called once after the last layer.
    fn finish(&mut self) -> Result<(), SafeguardError> {
        Ok(())
    }
}

/// Keeps every layer in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    layers: Vec<Layer>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }
}

impl LayerSink for MemorySink {
    fn write_layer(&mut self, layer: &Layer) -> Result<(), SafeguardError> {
        self.layers.push(layer.clone());
        Ok(())
    }
}

/// Write `layers` in order, then finish the sink.
pub fn write_all(sink: &mut dyn LayerSink, layers: &[Layer]) -> Result<(), SafeguardError> {
    for layer in layers {
        sink.write_layer(layer)?;
    }
    sink.finish()
}
