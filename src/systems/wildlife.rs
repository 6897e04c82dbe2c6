use crate::{
    components::{Attributes, Field, ReferencePoint, SurfaceFeature, SurfaceKind},
    systems::geometry,
    utils::{SafeguardError, WILDLIFE_ZONE_A_KM, WILDLIFE_ZONE_B_KM, WILDLIFE_ZONE_C_KM},
};

/// Wildlife management zones A, B and C as concentric bands around the ARP.
pub fn generate_wildlife_zones(
    arp: &ReferencePoint,
    segments: usize,
) -> Result<Vec<SurfaceFeature>, SafeguardError> {
    let bands = [
        ("Area A", 0.0, WILDLIFE_ZONE_A_KM),
        ("Area B", WILDLIFE_ZONE_A_KM, WILDLIFE_ZONE_B_KM),
        ("Area C", WILDLIFE_ZONE_B_KM, WILDLIFE_ZONE_C_KM),
    ];

    bands
        .iter()
        .map(|&(zone, inner_km, outer_km)| {
            let (inner, outer) = (inner_km * 1000.0, outer_km * 1000.0);
            let polygon = geometry::annulus(&arp.location, outer, inner, segments, zone)?;
            let attributes = Attributes::new()
                .text(Field::SectionDesc, format!("{inner_km:.0}-{outer_km:.0}km Zone"))
                .text(Field::Zone, zone)
                .real(Field::InnerRadiusM, inner)
                .real(Field::OuterRadiusM, outer);
            Ok(SurfaceFeature::new(
                SurfaceKind::WildlifeZone,
                geometry::to_multi(polygon),
                attributes,
            ))
        })
        .collect()
}
