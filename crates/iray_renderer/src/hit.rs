//! HitRecord for ray-scene intersection.

use iray_core::{Material, Texture};
use iray_math::{DVec3, Ray};

/// Sentinel `t` for "the ray hit nothing".
pub const NO_HIT: f64 = f64::MAX;

/// Which side of a surface a ray arrives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayStatus {
    /// The ray opposes the surface normal (arrives from outside)
    Entering,
    /// The ray travels along the surface normal (arrives from inside)
    Leaving,
}

impl RayStatus {
    /// Classify a ray direction against a raw (outward) surface normal.
    pub fn of(direction: DVec3, normal: DVec3) -> Self {
        if direction.dot(normal) < 0.0 {
            RayStatus::Entering
        } else {
            RayStatus::Leaving
        }
    }
}

/// Record of a ray-surface intersection.
///
/// The material is a copy so texture lookup can overwrite its diffuse term;
/// the texture is borrowed from the scene for the duration of one trace.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs (`NO_HIT` if none)
    pub t: f64,
    /// Point of intersection
    pub point: DVec3,
    /// Unit surface normal as reported by the shape (not flipped)
    pub normal: DVec3,
    /// Material at the intersection point
    pub material: Material,
    /// Texture of the surface, if any
    pub texture: Option<&'a Texture>,
    /// UV texture coordinates
    pub u: f64,
    pub v: f64,
    /// Whether the ray enters or leaves the surface
    pub ray_status: RayStatus,
}

impl Default for HitRecord<'_> {
    fn default() -> Self {
        Self {
            t: NO_HIT,
            point: DVec3::ZERO,
            normal: DVec3::ZERO,
            material: Material::default(),
            texture: None,
            u: 0.0,
            v: 0.0,
            ray_status: RayStatus::Entering,
        }
    }
}

impl HitRecord<'_> {
    /// Returns true if this record describes an actual intersection.
    pub fn is_hit(&self) -> bool {
        self.t < NO_HIT
    }

    /// The surface normal flipped, if needed, to point against the ray.
    pub fn facing_normal(&self, ray: &Ray) -> DVec3 {
        if ray.direction.dot(self.normal) > 0.0 {
            -self.normal
        } else {
            self.normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_hit() {
        let rec = HitRecord::default();
        assert_eq!(rec.t, NO_HIT);
        assert!(!rec.is_hit());
        assert!(rec.texture.is_none());
    }

    #[test]
    fn test_ray_status() {
        assert_eq!(RayStatus::of(DVec3::NEG_Z, DVec3::Z), RayStatus::Entering);
        assert_eq!(RayStatus::of(DVec3::Z, DVec3::Z), RayStatus::Leaving);
        // Grazing rays count as leaving
        assert_eq!(RayStatus::of(DVec3::X, DVec3::Z), RayStatus::Leaving);
    }

    #[test]
    fn test_facing_normal() {
        let rec = HitRecord {
            t: 1.0,
            normal: DVec3::Y,
            ..Default::default()
        };
        let down = Ray::new(DVec3::Y, DVec3::NEG_Y);
        let up = Ray::new(DVec3::NEG_Y, DVec3::Y);

        assert_eq!(rec.facing_normal(&down), DVec3::Y);
        assert_eq!(rec.facing_normal(&up), DVec3::NEG_Y);
    }
}
