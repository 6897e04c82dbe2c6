use geo::Polygon;

use crate::{
    components::{Attributes, Field, SurfaceFeature, SurfaceKind},
    systems::{geometry, RunwayModel},
    utils::SafeguardError,
};

/// Strip footprint corners, in the order they are walked around the ring.
pub fn strip_polygon(model: &RunwayModel) -> Result<Polygon<f64>, SafeguardError> {
    let [a, b] = model.surfaces;
    let frame = model.frame(0);
    let near = a.strip_extension;
    let far = -(model.length + b.strip_extension);
    let (hw_a, hw_b) = (a.strip_half_width, b.strip_half_width);

    geometry::ring_polygon(
        &[
            frame.point(near, hw_a),
            frame.point(far, hw_b),
            frame.point(far, -hw_b),
            frame.point(near, -hw_a),
        ],
        &format!("{} strip", model.name),
    )
}

pub fn generate_strip(model: &RunwayModel) -> Result<SurfaceFeature, SafeguardError> {
    let [a, b] = model.surfaces;
    let polygon = strip_polygon(model)?;

    let length = model.length + a.strip_extension + b.strip_extension;
    let width = 2.0 * a.strip_half_width.max(b.strip_half_width);
    let elevation = (model.frames[0].elevation + model.frames[1].elevation) / 2.0;

    let attributes = Attributes::new()
        .text(Field::RwyName, model.name.clone())
        .real(Field::ElevM, elevation)
        .text(Field::RefMos, model.surfaces[model.primary].strip_ref.clone())
        .real(Field::LenM, length)
        .real(Field::InnerwM, width);

    Ok(SurfaceFeature::new(
        SurfaceKind::Strip,
        geometry::to_multi(polygon),
        attributes,
    ))
}
