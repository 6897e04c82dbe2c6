//! Airport-wide surfaces: inner horizontal, conical and outer horizontal.

use geo::{BooleanOps, ConvexHull, MultiPoint, MultiPolygon, Polygon};
use tracing::debug;

use crate::{
    components::{Attributes, Field, ReferencePoint, Runway, RunwayType, SurfaceFeature, SurfaceKind},
    config::{GenerationOptions, IhsShape},
    resources::{ConicalParams, OlsStandards},
    systems::{contours::contour_levels, geometry, RunwayModel},
    utils::{
        Point2D, SafeguardError, AIRPORT_WIDE, CONTOUR_INTERVAL, IHS_HEIGHT_ABOVE_RED,
        OHS_HEIGHT_ABOVE_RED, RED_ARP_TOLERANCE, RED_ROUNDING_STEP,
    },
};

const IHS_REF_FALLBACK: &str = "MOS 139 8.2.18";
const OHS_REF_FALLBACK: &str = "MOS 139 8.2.20";

/// Reference elevation datum. The ARP elevation is used when it lies within
/// 3 m of the mean threshold elevation, otherwise the mean itself; the result
/// is rounded down to the nearest 0.5 m.
pub fn reference_elevation_datum(arp: &ReferencePoint, runways: &[Runway]) -> f64 {
    let elevations: Vec<f64> = runways
        .iter()
        .flat_map(|r| r.ends.iter().map(|e| e.elevation))
        .collect();

    let datum = if elevations.is_empty() {
        arp.elevation
    } else {
        let mean = elevations.iter().sum::<f64>() / elevations.len() as f64;
        if (arp.elevation - mean).abs() <= RED_ARP_TOLERANCE {
            arp.elevation
        } else {
            mean
        }
    };
    (datum / RED_ROUNDING_STEP).floor() * RED_ROUNDING_STEP
}

/// Highest ARC code number and most demanding runway type across all runways.
pub fn governing_classification(runways: &[Runway]) -> Option<(u8, RunwayType)> {
    let code = runways.iter().map(|r| r.arc_number).max()?;
    let runway_type = runways.iter().map(Runway::governing_type).max()?;
    Some((code, runway_type))
}

#[derive(Debug, Default)]
pub struct HorizontalOutcome {
    pub features: Vec<SurfaceFeature>,
    /// Surfaces skipped for lack of parameters.
    pub skipped: Vec<SafeguardError>,
}

fn strip_ends(runways: &[Runway]) -> Vec<Point2D> {
    runways
        .iter()
        .filter_map(|runway| RunwayModel::build(runway).ok())
        .flat_map(|model| {
            (0..2)
                .map(|i| model.frame(i).point(model.surfaces[i].strip_extension, 0.0))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Convex hull of circles of `radius` about every centre.
pub fn hull_of_circles(
    centres: &[Point2D],
    radius: f64,
    segments: usize,
    what: &str,
) -> Result<Polygon<f64>, SafeguardError> {
    let points: Vec<geo::Point<f64>> = centres
        .iter()
        .flat_map(|c| geometry::circle_points(c, radius, segments))
        .map(|p| geo::Point::new(p.easting, p.northing))
        .collect();
    let hull = MultiPoint::from(points).convex_hull();
    let ring: Vec<Point2D> = hull.exterior().coords().map(|c| Point2D::from(*c)).collect();
    geometry::ring_polygon(&ring, what)
}

/// IHS footprint, kept so the conical surface and its contours can grow it outward.
struct InnerFootprint {
    polygon: Polygon<f64>,
    radius: f64,
    /// Strip ends for a strip hull; empty for a circle about the ARP.
    centres: Vec<Point2D>,
    centre: Point2D,
}

impl InnerFootprint {
    fn is_circle(&self) -> bool {
        self.centres.is_empty()
    }

    fn grown(&self, offset: f64, segments: usize, what: &str) -> Result<Polygon<f64>, SafeguardError> {
        if self.is_circle() {
            geometry::disc(&self.centre, self.radius + offset, segments, what)
        } else {
            hull_of_circles(&self.centres, self.radius + offset, segments, what)
        }
    }

    /// Area between the footprint grown by `inner` and by `outer` metres.
    fn band(
        &self,
        inner: f64,
        outer: f64,
        segments: usize,
        what: &str,
    ) -> Result<MultiPolygon<f64>, SafeguardError> {
        if self.is_circle() {
            return Ok(geometry::to_multi(geometry::annulus(
                &self.centre,
                self.radius + outer,
                self.radius + inner,
                segments,
                what,
            )?));
        }
        let hole = if inner > 0.0 {
            self.grown(inner, segments, what)?
        } else {
            self.polygon.clone()
        };
        Ok(geometry::to_multi(self.grown(outer, segments, what)?)
            .difference(&geometry::to_multi(hole)))
    }
}

fn inner_horizontal(
    arp: &ReferencePoint,
    runways: &[Runway],
    red: f64,
    ols: &OlsStandards,
    options: &GenerationOptions,
) -> Result<(SurfaceFeature, InnerFootprint), SafeguardError> {
    let table = governing_classification(runways).and_then(|(code, ty)| ols.inner_horizontal(code, ty));
    let radius = options
        .inner_radius_km
        .map(|km| km * 1000.0)
        .or(table.map(|p| p.radius_m))
        .ok_or_else(|| {
            SafeguardError::MissingStandard(
                "inner horizontal surface radius (no runways and no override)".to_string(),
            )
        })?;

    let centres = match options.ihs_shape {
        IhsShape::StripHull => strip_ends(runways),
        IhsShape::ArpCircle => Vec::new(),
    };
    let segments = options.circle_segments;
    let (polygon, description) = if centres.is_empty() {
        (
            geometry::disc(&arp.location, radius, segments, "inner horizontal surface")?,
            "ARP Circle",
        )
    } else {
        (
            hull_of_circles(&centres, radius, segments, "inner horizontal surface")?,
            "Strip Hull",
        )
    };
    debug!(radius, shape = description, "inner horizontal surface");

    let mut attributes = Attributes::new()
        .text(Field::RwyName, AIRPORT_WIDE)
        .text(Field::SectionDesc, description)
        .real(Field::ElevM, red + IHS_HEIGHT_ABOVE_RED)
        .real(Field::HeightAgl, IHS_HEIGHT_ABOVE_RED)
        .text(
            Field::RefMos,
            table
                .map(|p| p.ref_mos.clone())
                .unwrap_or_else(|| IHS_REF_FALLBACK.to_string()),
        );
    if centres.is_empty() {
        attributes = attributes.real(Field::OuterRadiusM, radius);
    }
    let feature = SurfaceFeature::new(
        SurfaceKind::InnerHorizontal,
        geometry::to_multi(polygon.clone()),
        attributes,
    );
    let footprint = InnerFootprint {
        polygon,
        radius,
        centres,
        centre: arp.location,
    };
    Ok((feature, footprint))
}

fn conical(
    ihs: &InnerFootprint,
    red: f64,
    params: &ConicalParams,
    segments: usize,
) -> Result<SurfaceFeature, SafeguardError> {
    let extent = params.height_extent_m / (params.slope_perc / 100.0);
    let footprint = ihs.band(0.0, extent, segments, "conical surface")?;

    let mut attributes = Attributes::new()
        .text(Field::RwyName, AIRPORT_WIDE)
        .real(Field::ElevM, red + IHS_HEIGHT_ABOVE_RED + params.height_extent_m)
        .real(Field::HeightAgl, IHS_HEIGHT_ABOVE_RED + params.height_extent_m)
        .real(Field::SlopePerc, params.slope_perc)
        .text(Field::RefMos, params.ref_mos.clone());
    if ihs.is_circle() {
        attributes = attributes
            .real(Field::InnerRadiusM, ihs.radius)
            .real(Field::OuterRadiusM, ihs.radius + extent);
    }
    Ok(SurfaceFeature::new(SurfaceKind::Conical, footprint, attributes))
}

/// Bands of the conical surface between successive contour elevations.
fn conical_contours(
    ihs: &InnerFootprint,
    red: f64,
    params: &ConicalParams,
    segments: usize,
) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let base = red + IHS_HEIGHT_ABOVE_RED;
    let slope = params.slope_perc / 100.0;

    let mut features = Vec::new();
    let mut inner = 0.0;
    for level in contour_levels(base, base + params.height_extent_m, CONTOUR_INTERVAL) {
        let outer = (level - base) / slope;
        let description = format!("Contour {level:.0} m");
        let band = ihs.band(inner, outer, segments, &format!("conical {description}"))?;

        let mut attributes = Attributes::new()
            .text(Field::RwyName, AIRPORT_WIDE)
            .text(Field::SectionDesc, description)
            .real(Field::ElevM, level)
            .real(Field::HeightAgl, level - red)
            .text(Field::RefMos, params.ref_mos.clone());
        if ihs.is_circle() {
            attributes = attributes
                .real(Field::InnerRadiusM, ihs.radius + inner)
                .real(Field::OuterRadiusM, ihs.radius + outer);
        }
        features.push(SurfaceFeature::new(SurfaceKind::ConicalContour, band, attributes));
        inner = outer;
    }
    Ok(features)
}

fn outer_horizontal(
    arp: &ReferencePoint,
    runways: &[Runway],
    red: f64,
    ols: &OlsStandards,
    options: &GenerationOptions,
) -> Result<Option<SurfaceFeature>, SafeguardError> {
    let table = governing_classification(runways).and_then(|(code, ty)| ols.outer_horizontal(code, ty));
    let radius = match options.outer_radius_km.map(|km| km * 1000.0).or(table.map(|p| p.radius_m)) {
        Some(radius) => radius,
        None => return Ok(None),
    };
    let ohs = geometry::disc(&arp.location, radius, options.circle_segments, "outer horizontal surface")?;
    let attributes = Attributes::new()
        .text(Field::RwyName, AIRPORT_WIDE)
        .real(Field::ElevM, red + OHS_HEIGHT_ABOVE_RED)
        .real(Field::HeightAgl, OHS_HEIGHT_ABOVE_RED)
        .text(
            Field::RefMos,
            table
                .map(|p| p.ref_mos.clone())
                .unwrap_or_else(|| OHS_REF_FALLBACK.to_string()),
        )
        .real(Field::OuterRadiusM, radius);
    Ok(Some(SurfaceFeature::new(
        SurfaceKind::OuterHorizontal,
        geometry::to_multi(ohs),
        attributes,
    )))
}

/// Build the IHS, conical (with contours) and OHS. Each surface is attempted
/// on its own; failures land in `skipped` and the rest are still returned.
pub fn generate_horizontal(
    arp: &ReferencePoint,
    runways: &[Runway],
    red: f64,
    ols: &OlsStandards,
    options: &GenerationOptions,
) -> HorizontalOutcome {
    let mut outcome = HorizontalOutcome::default();
    let segments = options.circle_segments;

    match inner_horizontal(arp, runways, red, ols, options) {
        Ok((feature, ihs)) => {
            outcome.features.push(feature);

            let governing = governing_classification(runways);
            match governing.and_then(|(code, ty)| ols.conical(code, ty)) {
                None => outcome.skipped.push(SafeguardError::MissingStandard(
                    "conical surface (no governing runway classification)".to_string(),
                )),
                Some(params) => {
                    match conical(&ihs, red, params, segments) {
                        Ok(feature) => outcome.features.push(feature),
                        Err(e) => outcome.skipped.push(e),
                    }
                    if options.include_contours {
                        match conical_contours(&ihs, red, params, segments) {
                            Ok(features) => outcome.features.extend(features),
                            Err(e) => outcome.skipped.push(e),
                        }
                    }
                }
            }
        }
        Err(e) => outcome.skipped.push(e),
    }

    match outer_horizontal(arp, runways, red, ols, options) {
        Ok(feature) => outcome.features.extend(feature),
        Err(e) => outcome.skipped.push(e),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_red_uses_arp_when_close_to_thresholds() {
        let arp = ReferencePoint::new(0.0, 0.0, 21.7);
        assert_relative_eq!(reference_elevation_datum(&arp, &[]), 21.5);
    }

    #[test]
    fn test_governing_classification_empty() {
        assert!(governing_classification(&[]).is_none());
    }

    fn kinds(outcome: &HorizontalOutcome) -> Vec<SurfaceKind> {
        outcome.features.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_failed_inner_horizontal_keeps_outer_horizontal() {
        let arp = ReferencePoint::new(0.0, 0.0, 10.0);
        let options = GenerationOptions {
            inner_radius_km: Some(0.0),
            outer_radius_km: Some(15.0),
            ..GenerationOptions::default()
        };
        let outcome = generate_horizontal(&arp, &[], 10.0, &OlsStandards::default(), &options);
        assert_eq!(kinds(&outcome), vec![SurfaceKind::OuterHorizontal]);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(
            outcome.skipped[0],
            SafeguardError::DegenerateGeometry(_)
        ));
    }

    #[test]
    fn test_failed_outer_horizontal_keeps_inner_horizontal() {
        let arp = ReferencePoint::new(0.0, 0.0, 10.0);
        let options = GenerationOptions {
            inner_radius_km: Some(2.0),
            outer_radius_km: Some(-1.0),
            ..GenerationOptions::default()
        };
        let outcome = generate_horizontal(&arp, &[], 10.0, &OlsStandards::default(), &options);
        assert_eq!(kinds(&outcome), vec![SurfaceKind::InnerHorizontal]);
        // No runways: the conical has no table row, and the OHS radius is unusable
        assert!(outcome
            .skipped
            .iter()
            .any(|e| matches!(e, SafeguardError::MissingStandard(_))));
        assert!(outcome
            .skipped
            .iter()
            .any(|e| matches!(e, SafeguardError::DegenerateGeometry(_))));
    }
}
