use iray_math::{DVec3, Ray};

use super::{QuadricParameters, QuadricSurface, SurfaceHit};

/// A double cone around the Y axis with its apex at `center`.
///
/// Unlike `CylinderY` the cone is not clipped: both nappes extend forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeY {
    surface: QuadricSurface,
    radius: f64,
    height: f64,
}

impl ConeY {
    /// `radius` is the cone's radius at `height` above (and below) the apex.
    pub fn new(center: DVec3, radius: f64, height: f64) -> Self {
        Self {
            surface: QuadricSurface::new(QuadricParameters::cone_y(radius, height), center),
            radius,
            height,
        }
    }

    pub fn apex(&self) -> DVec3 {
        self.surface.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.surface.closest_intersection(ray)
    }

    pub fn tex_coords(&self, _point: DVec3) -> (f64, f64) {
        (0.0, 0.0)
    }
}
