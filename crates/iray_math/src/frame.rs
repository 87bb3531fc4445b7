use crate::DVec3;

/// An orthonormal coordinate frame: an origin plus three unit axes.
///
/// The camera exposes its frame so that lights can be positioned relative
/// to the eye, and disks use a frame built around their normal to compute
/// texture coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub origin: DVec3,
    pub u: DVec3,
    pub v: DVec3,
    pub w: DVec3,
}

impl Frame {
    /// Create a frame from an origin and three (assumed orthonormal) axes.
    pub fn new(origin: DVec3, u: DVec3, v: DVec3, w: DVec3) -> Self {
        Self { origin, u, v, w }
    }

    /// Build a viewing frame located at `eye` and looking toward `target`.
    ///
    /// `w` points from the target back to the eye, so the view direction is `-w`.
    pub fn look_at(eye: DVec3, target: DVec3, up: DVec3) -> Self {
        let w = (eye - target).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);
        Self::new(eye, u, v, w)
    }

    /// Build some orthonormal frame whose `w` axis is the given direction.
    pub fn orthonormal_basis(origin: DVec3, w: DVec3) -> Self {
        let w = w.normalize();
        // Any helper vector works as long as it is not parallel to w
        let helper = if w.y.abs() < 0.9 { DVec3::Y } else { DVec3::X };
        let u = helper.cross(w).normalize();
        let v = w.cross(u);
        Self::new(origin, u, v, w)
    }

    /// Transform a point given in frame coordinates into world coordinates.
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.origin + local.x * self.u + local.y * self.v + local.z * self.w
    }

    /// Transform a world point into this frame's coordinates.
    pub fn to_local(&self, global: DVec3) -> DVec3 {
        let d = global - self.origin;
        DVec3::new(d.dot(self.u), d.dot(self.v), d.dot(self.w))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z)
    }
}
