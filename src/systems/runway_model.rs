//! Local coordinate frames attached to each runway threshold.

use geo::Polygon;
use nalgebra::{Rotation2, Vector2};

use crate::{
    components::{EndSurfaces, Runway, RunwayEnd},
    systems::geometry,
    utils::{bearing_between, deg_to_rad, lerp, Point2D, SafeguardError},
};

/// Frame with its origin on a threshold. The x axis points outward, away from
/// the far threshold; the y axis points left when looking outward.
#[derive(Debug, Clone)]
pub struct EndFrame {
    pub designator: String,
    pub threshold: Point2D,
    pub elevation: f64,
    pub outward_bearing: f64,
    rotation: Rotation2<f64>,
}

impl EndFrame {
    pub fn new(designator: &str, threshold: Point2D, elevation: f64, outward_bearing: f64) -> Self {
        // Compass bearing b has math angle 90 - b.
        let rotation = Rotation2::new(deg_to_rad(90.0 - outward_bearing));
        Self {
            designator: designator.trim().to_string(),
            threshold,
            elevation,
            outward_bearing,
            rotation,
        }
    }

    pub fn outward(&self) -> Vector2<f64> {
        self.rotation * Vector2::x()
    }

    pub fn inward(&self) -> Vector2<f64> {
        -self.outward()
    }

    pub fn left(&self) -> Vector2<f64> {
        self.rotation * Vector2::y()
    }

    /// World position of a point `along` metres outward and `lateral` metres
    /// to the left of the threshold.
    pub fn point(&self, along: f64, lateral: f64) -> Point2D {
        self.threshold
            .translate(&(self.rotation * Vector2::new(along, lateral)))
    }

    /// Centreline-symmetric quadrilateral between `from` and `to` along the
    /// frame, half-width `near_hw` at `from` and `far_hw` at `to`.
    pub fn trapezoid(
        &self,
        from: f64,
        to: f64,
        near_hw: f64,
        far_hw: f64,
        what: &str,
    ) -> Result<Polygon<f64>, SafeguardError> {
        geometry::ring_polygon(
            &[
                self.point(from, near_hw),
                self.point(to, far_hw),
                self.point(to, -far_hw),
                self.point(from, -near_hw),
            ],
            what,
        )
    }

    pub fn rectangle(
        &self,
        from: f64,
        to: f64,
        half_width: f64,
        what: &str,
    ) -> Result<Polygon<f64>, SafeguardError> {
        self.trapezoid(from, to, half_width, half_width, what)
    }
}

#[derive(Debug, Clone)]
pub struct RunwayModel<'a> {
    pub runway: &'a Runway,
    pub name: String,
    /// Bearing from the first end's threshold to the second's.
    pub bearing: f64,
    pub length: f64,
    pub frames: [EndFrame; 2],
    /// Index of the end with the lower designator.
    pub primary: usize,
    pub surfaces: [&'a EndSurfaces; 2],
}

impl<'a> RunwayModel<'a> {
    /// Both ends must carry resolved surface parameters.
    pub fn build(runway: &'a Runway) -> Result<Self, SafeguardError> {
        let [a, b] = &runway.ends;
        let resolved = |end: &'a RunwayEnd| {
            end.surfaces.as_ref().ok_or_else(|| {
                SafeguardError::MissingStandard(format!(
                    "runway end {}, code {} {}",
                    end.designator.trim(),
                    runway.arc_number,
                    end.runway_type.abbreviation()
                ))
            })
        };
        let surfaces = [resolved(a)?, resolved(b)?];
        let bearing = bearing_between(&a.threshold, &b.threshold)?;
        let back_bearing = bearing_between(&b.threshold, &a.threshold)?;

        let frames = [
            EndFrame::new(&a.designator, a.threshold, a.elevation, back_bearing),
            EndFrame::new(&b.designator, b.threshold, b.elevation, bearing),
        ];

        Ok(Self {
            runway,
            name: runway.display_name(),
            bearing,
            length: runway.length(),
            frames,
            primary: runway.primary_index(),
            surfaces,
        })
    }

    pub fn frame(&self, end: usize) -> &EndFrame {
        &self.frames[end]
    }

    pub fn far(end: usize) -> usize {
        1 - end
    }

    /// Centreline elevation at `along` in the frame of `end`, interpolated
    /// between thresholds and held constant beyond them.
    pub fn centreline_elevation(&self, end: usize, along: f64) -> f64 {
        let near = self.frames[end].elevation;
        let far = self.frames[Self::far(end)].elevation;
        lerp(near, far, -along / self.length)
    }
}
