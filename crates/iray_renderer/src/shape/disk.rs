use iray_math::{map_range, DVec3, Frame, Ray};

use super::{Plane, SurfaceHit};

/// A flat circular disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: DVec3,
    pub normal: DVec3,
    pub radius: f64,
}

impl Disk {
    pub fn new(center: DVec3, normal: DVec3, radius: f64) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            radius,
        }
    }

    fn plane(&self) -> Plane {
        Plane::new(self.center, self.normal)
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.plane()
            .closest_intersection(ray)
            .filter(|hit| hit.point.distance(self.center) <= self.radius)
    }

    /// Map the point into the disk's local frame and scale `[-R, R]` onto `[0, 1]`.
    pub fn tex_coords(&self, point: DVec3) -> (f64, f64) {
        let frame = Frame::orthonormal_basis(self.center, self.normal);
        let local = frame.to_local(point);
        let u = map_range(local.x, -self.radius, self.radius, 0.0, 1.0);
        let v = 1.0 - map_range(local.y, -self.radius, self.radius, 0.0, 1.0);
        (u, v)
    }
}
