use tracing::debug;

use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    systems::{geometry, RunwayModel},
    utils::SafeguardError,
};

/// Rectangular inner approach surface. `None` when the end has no inner
/// approach parameters.
pub fn generate_inner_approach(
    model: &RunwayModel,
    end: usize,
) -> Result<Option<SurfaceFeature>, SafeguardError> {
    let params = match &model.surfaces[end].inner_approach {
        Some(params) => params,
        None => return Ok(None),
    };
    let frame = model.frame(end);
    if params.width_m <= 0.0 || params.length_m <= 0.0 {
        debug!("{} inner approach has zero size, omitted", frame.designator);
        return Ok(None);
    }

    let start = params.origin_offset;
    let stop = start + params.length_m;
    let hw = params.width_m / 2.0;
    let polygon =
        frame.rectangle(start, stop, hw, &format!("{} inner approach", frame.designator))?;

    let height = params.length_m * params.slope_perc / 100.0;
    let attributes = Attributes::new()
        .text(Field::RwyName, model.name.clone())
        .text(Field::EndDesig, frame.designator.clone())
        .real(Field::ElevM, frame.elevation + height)
        .real(Field::HeightAgl, height)
        .real(Field::SlopePerc, params.slope_perc)
        .text(Field::RefMos, params.ref_mos.clone())
        .real(Field::LenM, params.length_m)
        .real(Field::InnerwM, params.width_m)
        .real(Field::OuterwM, params.width_m)
        .real(Field::OriginOffset, params.origin_offset);

    Ok(Some(SurfaceFeature::new(
        SurfaceKind::InnerApproach,
        geometry::to_multi(polygon),
        attributes,
    )))
}
