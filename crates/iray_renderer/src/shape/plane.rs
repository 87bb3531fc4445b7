use iray_math::{approximately_zero, DVec3, Ray};

use super::{in_front, SurfaceHit};

/// An infinite plane through point `a` with unit normal `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub a: DVec3,
    pub n: DVec3,
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::Y)
    }
}

impl Plane {
    /// Plane through `point` with the given normal (normalized here).
    pub fn new(point: DVec3, normal: DVec3) -> Self {
        Self {
            a: point,
            n: normal.normalize(),
        }
    }

    /// Plane through three points. The normal faces the side from which
    /// `p0, p1, p2` appear counter-clockwise.
    pub fn from_points(p0: DVec3, p1: DVec3, p2: DVec3) -> Self {
        Self::new(p1, (p2 - p1).cross(p0 - p1))
    }

    /// Returns true if `p` lies on the side the normal points to (or on the plane).
    pub fn on_front_side(&self, p: DVec3) -> bool {
        (p - self.a).dot(self.n) >= 0.0
    }

    /// Signed distance of `p` from the plane, positive on the front side.
    pub fn signed_distance(&self, p: DVec3) -> f64 {
        (p - self.a).dot(self.n)
    }

    /// Parameter along the segment `p1 -> p2` where it crosses the plane.
    ///
    /// Returns `None` when the segment is parallel to the plane.
    pub fn segment_intersection(&self, p1: DVec3, p2: DVec3) -> Option<f64> {
        let d1 = self.signed_distance(p1);
        let d2 = self.signed_distance(p2);
        if d1 == d2 {
            return None;
        }
        Some(d1 / (d1 - d2))
    }

    /// Returns true if both planes describe the same set of points.
    pub fn is_same_plane(&self, other: &Plane) -> bool {
        let parallel = approximately_zero(self.n.cross(other.n).length());
        parallel && approximately_zero(self.signed_distance(other.a))
    }

    /// Nearest intersection with `t > 0`. Rays parallel to the plane miss.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        let denom = ray.direction.dot(self.n);
        if denom == 0.0 {
            return None;
        }
        let t = (self.a - ray.origin).dot(self.n) / denom;
        in_front(t).then(|| SurfaceHit::new(ray, t, self.n))
    }

    pub fn tex_coords(&self, _point: DVec3) -> (f64, f64) {
        (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_plane_from_above() {
        let plane = Plane::new(DVec3::new(0.0, -2.0, 0.0), DVec3::Y);
        let ray = Ray::new(DVec3::new(1.0, 3.0, 1.0), DVec3::NEG_Y);

        let hit = plane.closest_intersection(&ray).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-12);
        assert!((hit.point - DVec3::new(1.0, -2.0, 1.0)).length() < 1e-12);
        assert_eq!(hit.normal, DVec3::Y);
    }

    #[test]
    fn test_ray_from_below_still_hits() {
        let plane = Plane::default();
        let ray = Ray::new(DVec3::new(0.0, -1.0, 0.0), DVec3::Y);

        let hit = plane.closest_intersection(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-12);
        // Shapes report the raw normal; facing is the tracer's job
        assert_eq!(hit.normal, DVec3::Y);
    }

    #[test]
    fn test_parallel_and_behind_miss() {
        let plane = Plane::default();
        assert!(plane
            .closest_intersection(&Ray::new(DVec3::Y, DVec3::X))
            .is_none());
        assert!(plane
            .closest_intersection(&Ray::new(DVec3::Y, DVec3::Y))
            .is_none());
    }

    #[test]
    fn test_origin_on_plane_misses() {
        let plane = Plane::default();
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 1.0));
        assert!(plane.closest_intersection(&ray).is_none());
    }

    #[test]
    fn test_from_points_normal() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y);
        assert!((plane.n - DVec3::Z).length() < 1e-12);
        assert_eq!(plane.a, DVec3::X);
    }

    #[test]
    fn test_front_side() {
        let plane = Plane::default();
        assert!(plane.on_front_side(DVec3::new(3.0, 0.5, -2.0)));
        assert!(plane.on_front_side(DVec3::new(3.0, 0.0, -2.0)));
        assert!(!plane.on_front_side(DVec3::new(0.0, -0.5, 0.0)));
    }

    #[test]
    fn test_segment_intersection() {
        let plane = Plane::default();
        let t = plane
            .segment_intersection(DVec3::new(0.0, 1.0, 0.0), DVec3::new(0.0, -3.0, 0.0))
            .unwrap();
        assert!((t - 0.25).abs() < 1e-12);

        assert!(plane
            .segment_intersection(DVec3::new(0.0, 1.0, 0.0), DVec3::new(5.0, 1.0, 0.0))
            .is_none());
    }

    #[test]
    fn test_is_same_plane() {
        let p1 = Plane::new(DVec3::ZERO, DVec3::Y);
        let p2 = Plane::new(DVec3::new(1.0, 0.0, 1.0), DVec3::new(0.0, 2.0, 0.0));
        let p3 = Plane::new(DVec3::new(0.0, 1.0, 0.0), DVec3::Y);
        let p4 = Plane::new(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));
        let p5 = Plane::new(DVec3::new(-1.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 0.0));

        assert!(p1.is_same_plane(&p2));
        assert!(!p1.is_same_plane(&p3));
        assert!(p4.is_same_plane(&p5));
    }
}
