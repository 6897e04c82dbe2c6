use tracing::debug;

use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    systems::{geometry, RunwayModel},
    utils::{SafeguardError, WIDTH_CHECK_TOLERANCE},
};

/// Take-off climb surface for departures toward `end`'s far threshold. The
/// surface begins beyond the far threshold (after any clearway), diverges to
/// its final width and then runs parallel to the overall length.
pub fn generate_takeoff(
    model: &RunwayModel,
    end: usize,
) -> Result<Option<SurfaceFeature>, SafeguardError> {
    let departure = &model.runway.ends[end];
    let params = match &model.surfaces[end].takeoff {
        Some(params) => params,
        None => return Ok(None),
    };
    let far = RunwayModel::far(end);
    let lift_off = &model.runway.ends[far];
    let frame = model.frame(far);
    if params.length_m <= 0.0 || (params.innerw_m <= 0.0 && params.outerw_m <= 0.0) {
        debug!("{} take-off climb has zero size, omitted", departure.designator.trim());
        return Ok(None);
    }

    let start = lift_off.clearway_m + params.origin_offset;
    let inner_hw = params.innerw_m / 2.0;
    let div = params.diverg_perc / 100.0;
    let final_hw = params.outerw_m / 2.0;

    let divergence_len = if div > 0.0 && final_hw > inner_hw {
        (final_hw - inner_hw) / div
    } else {
        0.0
    };

    let mut right = vec![frame.point(start, -inner_hw)];
    let mut left = vec![frame.point(start, inner_hw)];
    let reached_hw = if divergence_len <= 0.0 {
        right.push(frame.point(start + params.length_m, -inner_hw));
        left.push(frame.point(start + params.length_m, inner_hw));
        inner_hw
    } else if divergence_len >= params.length_m {
        let hw = inner_hw + params.length_m * div;
        right.push(frame.point(start + params.length_m, -hw));
        left.push(frame.point(start + params.length_m, hw));
        hw
    } else {
        for along in [start + divergence_len, start + params.length_m] {
            right.push(frame.point(along, -final_hw));
            left.push(frame.point(along, final_hw));
        }
        final_hw
    };
    if (2.0 * reached_hw - params.outerw_m).abs() > WIDTH_CHECK_TOLERANCE {
        debug!(
            "{} take-off climb: reaches {:.2} m wide, tabulated final width is {:.2} m",
            departure.designator.trim(),
            2.0 * reached_hw,
            params.outerw_m
        );
    }
    left.reverse();
    right.extend(left);
    let polygon = geometry::ring_polygon(&right, &format!("{} take-off climb", departure.designator))?;

    let height = params.length_m * params.slope_perc / 100.0;
    let attributes = Attributes::new()
        .text(Field::RwyName, model.name.clone())
        .text(Field::EndDesig, departure.designator.trim().to_string())
        .real(Field::ElevM, lift_off.elevation + height)
        .real(Field::HeightAgl, height)
        .real(Field::SlopePerc, params.slope_perc)
        .text(Field::RefMos, params.ref_mos.clone())
        .real(Field::LenM, params.length_m)
        .real(Field::InnerwM, params.innerw_m)
        .real(Field::OuterwM, 2.0 * reached_hw)
        .real(Field::DivergPerc, params.diverg_perc)
        .real(Field::OriginOffset, start);

    Ok(Some(SurfaceFeature::new(
        SurfaceKind::TakeOffClimb,
        geometry::to_multi(polygon),
        attributes,
    )))
}
