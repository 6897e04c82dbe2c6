//! Physical runway geometry: pavement, shoulders, graded strip and runway end
//! safety areas.

use tracing::debug;

use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    resources::OlsStandards,
    systems::{geometry, transitional::landing_side, RunwayModel},
    utils::{SafeguardError, NARROW_RUNWAY_WIDTH},
};

fn physical(model: &RunwayModel, polygon: geo::Polygon<f64>, attributes: Attributes) -> SurfaceFeature {
    SurfaceFeature::new(
        SurfaceKind::Physical,
        geometry::to_multi(polygon),
        attributes.text(Field::RwyName, model.name.clone()),
    )
}

/// Pavement between the physical runway ends, which sit a displaced
/// threshold's distance outside the thresholds, plus a shoulder on each side.
/// Empty when the runway width is unknown.
pub fn generate_pavement(model: &RunwayModel) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let Some(width) = model.runway.width_m.filter(|w| *w > 0.0) else {
        debug!("{}: no runway width, pavement skipped", model.name);
        return Ok(Vec::new());
    };
    let (p, f) = (model.primary, RunwayModel::far(model.primary));
    let frame = model.frame(p);
    let near = model.runway.ends[p].displaced_m;
    let far = -(model.length + model.runway.ends[f].displaced_m);
    let length = near - far;
    let hw = width / 2.0;

    let mut features = vec![physical(
        model,
        frame.rectangle(near, far, hw, &format!("{} pavement", model.name))?,
        Attributes::new()
            .text(Field::SectionDesc, "Runway Pavement")
            .text(Field::RefMos, "MOS 139 6.2.3")
            .real(Field::LenM, length)
            .real(Field::WidthM, width),
    )];

    let shoulder = model.runway.shoulder_m.unwrap_or(0.0);
    if shoulder > 0.0 {
        for sign in [1.0, -1.0] {
            let side = landing_side(sign);
            let polygon = geometry::ring_polygon(
                &[
                    frame.point(near, sign * hw),
                    frame.point(far, sign * hw),
                    frame.point(far, sign * (hw + shoulder)),
                    frame.point(near, sign * (hw + shoulder)),
                ],
                &format!("{} {} shoulder", model.name, side.code()),
            )?;
            features.push(physical(
                model,
                polygon,
                Attributes::new()
                    .text(Field::SectionDesc, "Runway Shoulder")
                    .text(Field::Side, side.code())
                    .text(Field::RefMos, "MOS 139 6.2.4")
                    .real(Field::LenM, length)
                    .real(Field::WidthM, shoulder),
            ));
        }
    }
    Ok(features)
}

/// Graded part of the strip, over the same length as the overall strip.
pub fn generate_graded_strip(
    model: &RunwayModel,
    ols: &OlsStandards,
) -> Result<SurfaceFeature, SafeguardError> {
    let code = model.runway.arc_number;
    let runway_type = model.runway.governing_type();
    let params = ols.graded_strip(code, runway_type).ok_or_else(|| {
        SafeguardError::MissingStandard(format!(
            "graded strip, code {} {}",
            code,
            runway_type.abbreviation()
        ))
    })?;
    let width = match (params.narrow_width_m, model.runway.width_m.filter(|w| *w > 0.0)) {
        (Some(narrow), Some(w)) if w < NARROW_RUNWAY_WIDTH => narrow,
        _ => params.width_m,
    };

    let [a, b] = model.surfaces;
    let near = a.strip_extension;
    let far = -(model.length + b.strip_extension);
    let polygon = model
        .frame(0)
        .rectangle(near, far, width / 2.0, &format!("{} graded strip", model.name))?;
    Ok(physical(
        model,
        polygon,
        Attributes::new()
            .text(Field::SectionDesc, "Graded Strip")
            .text(Field::RefMos, params.ref_mos.clone())
            .real(Field::LenM, near - far)
            .real(Field::WidthM, width),
    ))
}

/// Runway end safety area beyond the strip end, twice the runway width.
/// `None` when no RESA is required or the runway width is unknown.
pub fn generate_resa(
    model: &RunwayModel,
    ols: &OlsStandards,
    end: usize,
) -> Result<Option<SurfaceFeature>, SafeguardError> {
    let Some(params) = ols.resa(model.runway.arc_number, model.runway.governing_type()) else {
        return Ok(None);
    };
    let frame = model.frame(end);
    let Some(runway_width) = model.runway.width_m.filter(|w| *w > 0.0) else {
        debug!("{}: RESA required but runway width missing", frame.designator);
        return Ok(None);
    };

    let start = model.surfaces[end].strip_extension;
    let width = 2.0 * runway_width;
    let polygon = frame.rectangle(
        start,
        start + params.length_m,
        width / 2.0,
        &format!("{} RESA", frame.designator),
    )?;
    Ok(Some(physical(
        model,
        polygon,
        Attributes::new()
            .text(Field::EndDesig, frame.designator.clone())
            .text(Field::SectionDesc, "RESA")
            .text(Field::RefMos, params.ref_mos.clone())
            .real(Field::LenM, params.length_m)
            .real(Field::WidthM, width),
    )))
}
