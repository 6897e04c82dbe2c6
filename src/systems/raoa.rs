use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    systems::{geometry, RunwayModel},
    utils::{SafeguardError, RAOA_LENGTH, RAOA_WIDTH},
};

/// Radio altimeter operating area in front of a precision approach threshold.
/// `None` for other runway types.
pub fn generate_raoa(
    model: &RunwayModel,
    end: usize,
) -> Result<Option<SurfaceFeature>, SafeguardError> {
    if !model.runway.ends[end].runway_type.is_precision() {
        return Ok(None);
    }
    let frame = model.frame(end);
    let polygon = frame.rectangle(
        0.0,
        RAOA_LENGTH,
        RAOA_WIDTH / 2.0,
        &format!("{} RAOA", frame.designator),
    )?;

    let attributes = Attributes::new()
        .text(Field::RwyName, model.name.clone())
        .text(Field::EndDesig, frame.designator.clone())
        .text(Field::RefMos, "MOS 139 6.2.2")
        .real(Field::LenM, RAOA_LENGTH)
        .real(Field::WidthM, RAOA_WIDTH);
    Ok(Some(SurfaceFeature::new(
        SurfaceKind::RadioAltimeter,
        geometry::to_multi(polygon),
        attributes,
    )))
}
