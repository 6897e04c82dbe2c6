//! Building restricted area zones around CNS facilities.

use crate::{
    components::{Attributes, Facility, Field, SurfaceFeature, SurfaceKind},
    resources::{CnsStandards, ZoneShape},
    systems::geometry,
    utils::SafeguardError,
};

/// One feature per tabulated zone of the facility's type. Types missing from
/// the table, or present without any zones, are unsupported.
pub fn generate_facility_zones(
    facility: &Facility,
    cns: &CnsStandards,
    segments: usize,
) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let spec = cns.lookup(&facility.facility_type).ok_or_else(|| {
        SafeguardError::UnsupportedFacilityType(format!(
            "'{}' (facility {})",
            facility.facility_type, facility.id
        ))
    })?;
    if spec.zones.is_empty() {
        return Err(SafeguardError::UnsupportedFacilityType(format!(
            "'{}' has no tabulated building restricted area (facility {})",
            spec.name, facility.id
        )));
    }

    spec.zones
        .iter()
        .map(|zone| {
            let what = format!("{} {} zone", facility.id, zone.name);
            let polygon = match zone.shape {
                ZoneShape::Circle => {
                    geometry::disc(&facility.location, zone.outer_radius_m, segments, &what)?
                }
                ZoneShape::Donut => geometry::annulus(
                    &facility.location,
                    zone.outer_radius_m,
                    zone.inner_radius_m,
                    segments,
                    &what,
                )?,
            };
            let attributes = Attributes::new()
                .text(Field::FacilityId, facility.id.clone())
                .text(Field::FacilityType, spec.name.clone())
                .text(Field::Zone, zone.name.clone())
                .real(Field::ElevM, facility.elevation)
                .text(Field::RefMos, cns.reference.clone())
                .real(Field::InnerRadiusM, zone.inner_radius_m)
                .real(Field::OuterRadiusM, zone.outer_radius_m);
            Ok(SurfaceFeature::new(
                SurfaceKind::CnsZone,
                geometry::to_multi(polygon),
                attributes,
            ))
        })
        .collect()
}
