//! Multi-section approach funnels.

use crate::{
    components::{Attributes, EndSurfaces, Field, SurfaceFeature, SurfaceKind},
    systems::{geometry, RunwayModel},
    utils::{SafeguardError, WIDTH_CHECK_TOLERANCE},
};

/// Cross-section of the approach surface at a section boundary, measured in
/// the end frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub along: f64,
    pub half_width: f64,
    pub elevation: f64,
}

/// Section boundaries from the inner edge outward, starting at the threshold
/// `elevation`. Empty when the end has no approach sections.
pub fn approach_stations(surfaces: &EndSurfaces, elevation: f64) -> Vec<Station> {
    let sections = &surfaces.approach;
    let first = match sections.first() {
        Some(first) => first,
        None => return Vec::new(),
    };

    let mut station = Station {
        along: first.origin_offset.unwrap_or(0.0),
        half_width: first.innerw_m.unwrap_or(0.0) / 2.0,
        elevation,
    };
    let mut stations = vec![station];
    for section in sections {
        station = Station {
            along: station.along + section.length_m,
            half_width: station.half_width + section.length_m * section.diverg_perc / 100.0,
            elevation: station.elevation + section.length_m * section.slope_perc / 100.0,
        };
        stations.push(station);
    }
    stations
}

#[derive(Debug, Clone)]
pub struct ApproachOutcome {
    pub features: Vec<SurfaceFeature>,
    pub outer_width: f64,
    /// Set when the declared outer width disagrees with the computed one.
    pub mismatch: Option<String>,
}

pub fn generate_approach(model: &RunwayModel, end: usize) -> Result<ApproachOutcome, SafeguardError> {
    let surfaces = model.surfaces[end];
    let frame = model.frame(end);
    let stations = approach_stations(surfaces, frame.elevation);

    let mut features = Vec::with_capacity(surfaces.approach.len());
    for (n, (section, pair)) in surfaces
        .approach
        .iter()
        .zip(stations.windows(2))
        .enumerate()
    {
        let (inner, outer) = (pair[0], pair[1]);
        let description = if n > 0 && section.slope_perc == 0.0 {
            "Horizontal".to_string()
        } else {
            format!("Section {}", n + 1)
        };

        let polygon = geometry::ring_polygon(
            &[
                frame.point(inner.along, inner.half_width),
                frame.point(outer.along, outer.half_width),
                frame.point(outer.along, -outer.half_width),
                frame.point(inner.along, -inner.half_width),
            ],
            &format!("{} approach {}", frame.designator, description),
        )?;

        let attributes = Attributes::new()
            .text(Field::RwyName, model.name.clone())
            .text(Field::EndDesig, frame.designator.clone())
            .text(Field::SectionDesc, description)
            .real(Field::ElevM, outer.elevation)
            .real(Field::HeightAgl, outer.elevation - frame.elevation)
            .real(Field::SlopePerc, section.slope_perc)
            .text(Field::RefMos, section.ref_mos.clone())
            .real(Field::LenM, section.length_m)
            .real(Field::InnerwM, 2.0 * inner.half_width)
            .real(Field::OuterwM, 2.0 * outer.half_width)
            .real(Field::DivergPerc, section.diverg_perc)
            .real(Field::OriginOffset, inner.along);

        features.push(SurfaceFeature::new(
            SurfaceKind::Approach,
            geometry::to_multi(polygon),
            attributes,
        ));
    }

    let outer_width = stations.last().map_or(0.0, |s| 2.0 * s.half_width);
    let mismatch = surfaces
        .declared_outer_width
        .filter(|declared| (declared - outer_width).abs() > WIDTH_CHECK_TOLERANCE)
        .map(|declared| {
            format!(
                "{} approach: declared outer width {:.2} m differs from computed {:.2} m; using computed",
                frame.designator, declared, outer_width
            )
        });

    Ok(ApproachOutcome {
        features,
        outer_width,
        mismatch,
    })
}
