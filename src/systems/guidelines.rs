//! NASF guideline areas drawn about the runway: windshear assessment zones
//! (Guideline B), lighting control zones (Guideline E) and public safety
//! areas (Guideline I).

use geo::BooleanOps;

use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    systems::{geometry, RunwayModel},
    utils::{
        SafeguardError, LIGHTING_ZONES, PSA_INNER_WIDTH, PSA_LENGTH, PSA_OUTER_WIDTH,
        WINDSHEAR_FAR_EDGE_OFFSET, WINDSHEAR_HALF_WIDTH, WINDSHEAR_ZONE_LENGTH,
    },
};

/// Windshear assessment zone for one end. The far edge lies inside the
/// runway, past the threshold; the zone extends outward from there.
pub fn generate_windshear(model: &RunwayModel, end: usize) -> Result<SurfaceFeature, SafeguardError> {
    let frame = model.frame(end);
    let far_edge = -WINDSHEAR_FAR_EDGE_OFFSET;
    let polygon = frame.rectangle(
        far_edge,
        far_edge + WINDSHEAR_ZONE_LENGTH,
        WINDSHEAR_HALF_WIDTH,
        &format!("{} windshear zone", frame.designator),
    )?;

    let attributes = Attributes::new()
        .text(Field::RwyName, model.name.clone())
        .text(Field::EndDesig, frame.designator.clone())
        .text(Field::RefMos, "NASF Guideline B")
        .real(Field::LenM, WINDSHEAR_ZONE_LENGTH)
        .real(Field::WidthM, 2.0 * WINDSHEAR_HALF_WIDTH);
    Ok(SurfaceFeature::new(
        SurfaceKind::Windshear,
        geometry::to_multi(polygon),
        attributes,
    ))
}

/// Lighting control zones A to D. Each zone is a rectangle about the runway
/// with the zones inside it cut out.
pub fn generate_lighting_zones(model: &RunwayModel) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let frame = model.frame(0);
    let mut features = Vec::with_capacity(LIGHTING_ZONES.len());
    let mut inside = None;

    for &(zone, extension, half_width) in LIGHTING_ZONES.iter() {
        let full = geometry::to_multi(frame.rectangle(
            extension,
            -(model.length + extension),
            half_width,
            &format!("{} lighting zone {zone}", model.name),
        )?);
        let band = match &inside {
            Some(previous) => full.difference(previous),
            None => full.clone(),
        };
        inside = Some(full);

        let description = match zone {
            "A" => "Zone A (0 cd)",
            "B" => "Zone B (50 cd)",
            "C" => "Zone C (150 cd)",
            _ => "Zone D (450 cd)",
        };
        let attributes = Attributes::new()
            .text(Field::RwyName, model.name.clone())
            .text(Field::SectionDesc, description)
            .text(Field::Zone, zone)
            .text(Field::RefMos, "NASF Guideline E")
            .real(Field::WidthM, 2.0 * half_width)
            .real(Field::ExtensionM, extension);
        features.push(SurfaceFeature::new(
            SurfaceKind::LightingControl,
            band,
            attributes,
        ));
    }
    Ok(features)
}

/// Public safety area trapezoid off one end, narrowing away from the runway.
pub fn generate_public_safety(
    model: &RunwayModel,
    end: usize,
) -> Result<SurfaceFeature, SafeguardError> {
    let frame = model.frame(end);
    let polygon = frame.trapezoid(
        0.0,
        PSA_LENGTH,
        PSA_INNER_WIDTH / 2.0,
        PSA_OUTER_WIDTH / 2.0,
        &format!("{} public safety area", frame.designator),
    )?;

    let attributes = Attributes::new()
        .text(Field::RwyName, model.name.clone())
        .text(Field::EndDesig, frame.designator.clone())
        .text(Field::RefMos, "NASF Guideline I")
        .real(Field::LenM, PSA_LENGTH)
        .real(Field::InnerwM, PSA_INNER_WIDTH)
        .real(Field::OuterwM, PSA_OUTER_WIDTH);
    Ok(SurfaceFeature::new(
        SurfaceKind::PublicSafety,
        geometry::to_multi(polygon),
        attributes,
    ))
}
