//! Top-level generation: validation, per-entity surface generation and layer
//! assembly.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::{
    components::{Facility, Layer, Runway, SafeguardingInput, SurfaceFeature, SurfaceKind},
    config::GenerationOptions,
    resources::Standards,
    sink::{write_all, LayerSink},
    systems::{
        assemble, generate_approach, generate_approach_contours, generate_facility_zones,
        generate_graded_strip, generate_horizontal, generate_inner_approach,
        generate_lighting_zones, generate_met_surfaces, generate_pavement, generate_public_safety,
        generate_raoa, generate_resa, generate_strip, generate_takeoff,
        generate_taxiway_separation, generate_transitional, generate_wildlife_zones,
        generate_windshear, reference_elevation_datum, RunwayModel,
    },
    utils::{ErrorKind, SafeguardError, IHS_HEIGHT_ABOVE_RED},
};

/// The input entity a warning refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRef {
    Aerodrome,
    Met,
    Runway { index: usize, name: String },
    RunwayEnd { runway: String, designator: String },
    Facility { index: usize, id: String },
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Aerodrome => write!(f, "aerodrome"),
            EntityRef::Met => write!(f, "MET station"),
            EntityRef::Runway { name, .. } => write!(f, "runway {name}"),
            EntityRef::RunwayEnd { runway, designator } => {
                write!(f, "runway {runway} end {designator}")
            }
            EntityRef::Facility { id, .. } => write!(f, "facility {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationWarning {
    pub entity: EntityRef,
    pub kind: ErrorKind,
    pub message: String,
}

impl GenerationWarning {
    pub fn new(entity: EntityRef, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            entity,
            kind,
            message: message.into(),
        }
    }

    fn from_error(entity: EntityRef, error: &SafeguardError) -> Self {
        Self::new(entity, error.kind(), error.to_string())
    }
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.entity, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub layers: Vec<Layer>,
    pub warnings: Vec<GenerationWarning>,
    pub reference_elevation_datum: f64,
}

impl GenerationResult {
    pub fn layer(&self, kind: SurfaceKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn feature_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Hand every layer to `sink` in order.
    pub fn write_to(&self, sink: &mut dyn LayerSink) -> Result<(), SafeguardError> {
        write_all(sink, &self.layers)
    }
}

/// Features and warnings produced for one input entity.
#[derive(Debug, Default)]
struct Partial {
    features: Vec<SurfaceFeature>,
    warnings: Vec<GenerationWarning>,
}

impl Partial {
    fn absorb(&mut self, other: Partial) {
        self.features.extend(other.features);
        self.warnings.extend(other.warnings);
    }

    fn record(&mut self, entity: EntityRef, result: Result<Vec<SurfaceFeature>, SafeguardError>) {
        match result {
            Ok(features) => self.features.extend(features),
            Err(e) => {
                warn!("{entity}: {e}");
                self.warnings.push(GenerationWarning::from_error(entity, &e));
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SurfaceEngine {
    standards: Standards,
    options: GenerationOptions,
}

impl SurfaceEngine {
    pub fn new(standards: Standards, options: GenerationOptions) -> Self {
        Self { standards, options }
    }

    pub fn standards(&self) -> &Standards {
        &self.standards
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate every surface for `input`. Invalid input fails before any
    /// geometry is built; problems with individual runways or facilities are
    /// reported as warnings and the rest of the output is still produced.
    pub fn generate(&self, input: &SafeguardingInput) -> Result<GenerationResult, SafeguardError> {
        let mut problems = match input.validate() {
            Ok(()) => Vec::new(),
            Err(SafeguardError::Validation(problems)) => problems,
            Err(e) => return Err(e),
        };
        problems.extend(self.options.problems());
        if !problems.is_empty() {
            return Err(SafeguardError::Validation(problems));
        }
        let arp = input
            .aerodrome
            .arp
            .ok_or_else(|| SafeguardError::validation("aerodrome reference point is missing"))?;

        let prefix = input.aerodrome.label();
        info!(
            aerodrome = prefix.unwrap_or("-"),
            runways = input.runways.len(),
            facilities = input.facilities.len(),
            "generating safeguarding surfaces"
        );

        let red = reference_elevation_datum(&arp, &input.runways);
        debug!(red, "reference elevation datum");
        let ihs_elevation = red + IHS_HEIGHT_ABOVE_RED;

        let mut result = Partial::default();
        let runways: Vec<Runway> = input
            .runways
            .iter()
            .map(|runway| self.resolve_runway(runway, &mut result.warnings))
            .collect();

        let runway_parts: Vec<Partial> = if self.options.parallel {
            runways
                .par_iter()
                .enumerate()
                .map(|(i, runway)| self.runway_surfaces(i, runway, ihs_elevation))
                .collect()
        } else {
            runways
                .iter()
                .enumerate()
                .map(|(i, runway)| self.runway_surfaces(i, runway, ihs_elevation))
                .collect()
        };
        runway_parts.into_iter().for_each(|part| result.absorb(part));

        let horizontal = generate_horizontal(&arp, &runways, red, &self.standards.ols, &self.options);
        result.features.extend(horizontal.features);
        for skipped in &horizontal.skipped {
            warn!("airport-wide surface skipped: {skipped}");
            result
                .warnings
                .push(GenerationWarning::from_error(EntityRef::Aerodrome, skipped));
        }

        let facility_parts: Vec<Partial> = if self.options.parallel {
            input
                .facilities
                .par_iter()
                .enumerate()
                .map(|(i, facility)| self.facility_surfaces(i, facility))
                .collect()
        } else {
            input
                .facilities
                .iter()
                .enumerate()
                .map(|(i, facility)| self.facility_surfaces(i, facility))
                .collect()
        };
        facility_parts.into_iter().for_each(|part| result.absorb(part));

        if self.options.include_met {
            if let Some(met) = &input.aerodrome.met {
                match generate_met_surfaces(met, self.options.circle_segments) {
                    Ok(features) => result.features.extend(features),
                    Err(e) => result
                        .warnings
                        .push(GenerationWarning::from_error(EntityRef::Met, &e)),
                }
            }
        }

        if self.options.include_wildlife {
            match generate_wildlife_zones(&arp, self.options.circle_segments) {
                Ok(features) => result.features.extend(features),
                Err(e) => result
                    .warnings
                    .push(GenerationWarning::from_error(EntityRef::Aerodrome, &e)),
            }
        }

        let layers = assemble(result.features, self.options.dissolve, prefix);
        let generated = GenerationResult {
            layers,
            warnings: result.warnings,
            reference_elevation_datum: red,
        };
        info!(
            layers = generated.layers.len(),
            features = generated.feature_count(),
            warnings = generated.warnings.len(),
            "generation finished"
        );
        Ok(generated)
    }

    /// Copy of `runway` with unresolved ends looked up in the engine's tables.
    /// Ends the tables have no entry for stay unresolved and are reported.
    fn resolve_runway(&self, runway: &Runway, warnings: &mut Vec<GenerationWarning>) -> Runway {
        let mut resolved = runway.clone();
        let name = runway.display_name();
        for end in resolved.ends.iter_mut().filter(|end| end.surfaces.is_none()) {
            match self.standards.ols.end_surfaces(runway.arc_number, end.runway_type) {
                Ok(surfaces) => end.surfaces = Some(surfaces),
                Err(e) => {
                    warn!(runway = %name, end = end.designator.trim(), "{e}");
                    warnings.push(GenerationWarning::from_error(
                        EntityRef::RunwayEnd {
                            runway: name.clone(),
                            designator: end.designator.trim().to_string(),
                        },
                        &e,
                    ));
                }
            }
        }
        resolved
    }

    fn runway_surfaces(&self, index: usize, runway: &Runway, ihs_elevation: f64) -> Partial {
        let mut part = Partial::default();
        let name = runway.display_name();
        let runway_ref = EntityRef::Runway {
            index,
            name: name.clone(),
        };
        let end_ref = |designator: &str| EntityRef::RunwayEnd {
            runway: name.clone(),
            designator: designator.trim().to_string(),
        };

        if !runway.designators_reciprocal() {
            let message = format!(
                "designators {} and {} are not reciprocal",
                runway.ends[0].designator.trim(),
                runway.ends[1].designator.trim()
            );
            warn!(runway = %name, "{message}");
            part.warnings.push(GenerationWarning::new(
                runway_ref.clone(),
                ErrorKind::DesignatorMismatch,
                message,
            ));
        }

        if runway.ends.iter().any(|end| end.surfaces.is_none()) {
            debug!(runway = %name, "skipped: unresolved runway end");
            return part;
        }

        let model = match RunwayModel::build(runway) {
            Ok(model) => model,
            Err(e) => {
                warn!(runway = %name, "skipped: {e}");
                part.warnings.push(GenerationWarning::from_error(runway_ref, &e));
                return part;
            }
        };
        debug!(runway = %name, bearing = model.bearing, length = model.length, "runway model");

        part.record(runway_ref.clone(), generate_strip(&model).map(|f| vec![f]));

        for end in 0..2 {
            let designator = &runway.ends[end].designator;
            match generate_approach(&model, end) {
                Ok(outcome) => {
                    if let Some(message) = outcome.mismatch {
                        warn!("{message}");
                        part.warnings.push(GenerationWarning::new(
                            end_ref(designator),
                            ErrorKind::InconsistentParameter,
                            message,
                        ));
                    }
                    part.features.extend(outcome.features);
                }
                Err(e) => part.record(end_ref(designator), Err(e)),
            }
        }

        for end in 0..2 {
            let designator = &runway.ends[end].designator;
            part.record(
                end_ref(designator),
                generate_inner_approach(&model, end).map(|f| f.into_iter().collect()),
            );
            part.record(
                end_ref(designator),
                generate_takeoff(&model, end).map(|f| f.into_iter().collect()),
            );
        }
        part.record(runway_ref.clone(), generate_transitional(&model, ihs_elevation));

        if self.options.include_contours {
            for end in 0..2 {
                let designator = &runway.ends[end].designator;
                part.record(end_ref(designator), generate_approach_contours(&model, end));
            }
        }

        if self.options.include_guidelines {
            for end in 0..2 {
                let designator = &runway.ends[end].designator;
                part.record(
                    end_ref(designator),
                    generate_windshear(&model, end).map(|f| vec![f]),
                );
            }
            part.record(runway_ref.clone(), generate_lighting_zones(&model));
            for end in 0..2 {
                let designator = &runway.ends[end].designator;
                part.record(
                    end_ref(designator),
                    generate_public_safety(&model, end).map(|f| vec![f]),
                );
            }
        }

        if self.options.include_physical {
            let ols = &self.standards.ols;
            part.record(runway_ref.clone(), generate_pavement(&model));
            part.record(
                runway_ref.clone(),
                generate_graded_strip(&model, ols).map(|f| vec![f]),
            );
            for end in 0..2 {
                let designator = &runway.ends[end].designator;
                part.record(
                    end_ref(designator),
                    generate_resa(&model, ols, end).map(|f| f.into_iter().collect()),
                );
                part.record(
                    end_ref(designator),
                    generate_raoa(&model, end).map(|f| f.into_iter().collect()),
                );
            }
            part.record(
                runway_ref,
                generate_taxiway_separation(&model, ols).map(|f| f.into_iter().collect()),
            );
        }

        part
    }

    fn facility_surfaces(&self, index: usize, facility: &Facility) -> Partial {
        let mut part = Partial::default();
        match generate_facility_zones(facility, &self.standards.cns, self.options.circle_segments) {
            Ok(features) => part.features = features,
            Err(e) => {
                warn!(facility = %facility.id, "{e}");
                part.warnings.push(GenerationWarning::from_error(
                    EntityRef::Facility {
                        index,
                        id: facility.id.clone(),
                    },
                    &e,
                ));
            }
        }
        part
    }
}

/// Generate with the built-in standards tables.
pub fn generate(
    input: &SafeguardingInput,
    options: &GenerationOptions,
) -> Result<GenerationResult, SafeguardError> {
    SurfaceEngine::new(Standards::default(), options.clone()).generate(input)
}
