use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    resources::OlsStandards,
    systems::{geometry, RunwayModel},
    utils::{SafeguardError, TAXIWAY_SEPARATION_LENGTH_FACTOR},
};

/// Band either side of the centreline inside which a parallel taxiway
/// centreline must not lie. It is centred on the runway and runs
/// 1.5 runway lengths. `None` when the runway has no ARC letter.
pub fn generate_taxiway_separation(
    model: &RunwayModel,
    ols: &OlsStandards,
) -> Result<Option<SurfaceFeature>, SafeguardError> {
    let Some(letter) = model.runway.arc_letter else {
        return Ok(None);
    };
    let code = model.runway.arc_number;
    let runway_type = model.runway.governing_type();
    let params = ols
        .taxiway_separation(code, letter, runway_type)
        .ok_or_else(|| {
            SafeguardError::MissingStandard(format!(
                "taxiway separation, code {}{} {}",
                code,
                letter.to_ascii_uppercase(),
                runway_type.abbreviation()
            ))
        })?;

    let length = TAXIWAY_SEPARATION_LENGTH_FACTOR * model.length;
    let overhang = (length - model.length) / 2.0;
    let polygon = model.frame(0).rectangle(
        overhang,
        -(model.length + overhang),
        params.offset_m,
        &format!("{} taxiway separation", model.name),
    )?;

    let attributes = Attributes::new()
        .text(Field::RwyName, model.name.clone())
        .text(Field::RefMos, params.ref_mos.clone())
        .real(Field::LenM, length)
        .real(Field::OffsetM, params.offset_m);
    Ok(Some(SurfaceFeature::new(
        SurfaceKind::TaxiwaySeparation,
        geometry::to_multi(polygon),
        attributes,
    )))
}
