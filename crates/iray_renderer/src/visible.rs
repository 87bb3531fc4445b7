//! Shapes paired with the material and texture they are drawn with.

use std::sync::Arc;

use iray_core::{Material, Texture};
use iray_math::Ray;

use crate::hit::{HitRecord, RayStatus};
use crate::shape::Shape;

/// A renderable object: geometry plus surface appearance.
#[derive(Debug, Clone)]
pub struct VisibleShape {
    pub shape: Shape,
    pub material: Material,
    pub texture: Option<Arc<Texture>>,
}

impl VisibleShape {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
            texture: None,
        }
    }

    /// Attach a (possibly shared) texture.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Nearest hit of `ray` with this object, or a record with `t == NO_HIT`.
    pub fn find_closest_intersection(&self, ray: &Ray) -> HitRecord<'_> {
        let Some(hit) = self.shape.closest_intersection(ray) else {
            return HitRecord::default();
        };

        let texture = self.texture.as_deref();
        let (u, v) = match texture {
            Some(_) => self.shape.tex_coords(hit.point),
            None => (0.0, 0.0),
        };

        HitRecord {
            t: hit.t,
            point: hit.point,
            normal: hit.normal,
            material: self.material,
            texture,
            u,
            v,
            ray_status: RayStatus::of(ray.direction, hit.normal),
        }
    }
}

/// Linear scan for the nearest hit among `surfaces`.
///
/// On equal `t` the surface that comes first wins.
pub fn find_intersection<'a>(ray: &Ray, surfaces: &'a [VisibleShape]) -> HitRecord<'a> {
    let mut closest = HitRecord::default();
    for surface in surfaces {
        let rec = surface.find_closest_intersection(ray);
        if rec.t < closest.t {
            closest = rec;
        }
    }
    closest
}
