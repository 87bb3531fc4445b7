use iray_math::{area_of_triangle, DVec3, Ray, EPSILON};

use super::{Plane, SurfaceHit};

/// A triangle with counter-clockwise vertices `a`, `b`, `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: DVec3,
    pub b: DVec3,
    pub c: DVec3,
    plane: Plane,
    area: f64,
}

impl Triangle {
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        let area = area_of_triangle(a, b, c);
        if area == 0.0 {
            log::warn!("Degenerate triangle {a} {b} {c}");
        }
        Self {
            a,
            b,
            c,
            plane: Plane::from_points(a, b, c),
            area,
        }
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn normal(&self) -> DVec3 {
        self.plane.n
    }

    /// Returns true if `point` (assumed on the supporting plane) lies inside
    /// the triangle or on its edges.
    ///
    /// The sub-areas sum to the full area only for inside points; the
    /// tolerance is relative to the area so small triangles stay tight.
    pub fn inside(&self, point: DVec3) -> bool {
        if self.area <= 0.0 {
            return false;
        }
        let sum = area_of_triangle(point, self.b, self.c)
            + area_of_triangle(self.a, point, self.c)
            + area_of_triangle(self.a, self.b, point);
        (sum - self.area).abs() <= EPSILON * self.area
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.plane
            .closest_intersection(ray)
            .filter(|hit| self.inside(hit.point))
    }

    /// Barycentric weights of `a` and `b`: the sub-areas opposite each
    /// vertex divided by the whole area.
    pub fn tex_coords(&self, point: DVec3) -> (f64, f64) {
        let u = area_of_triangle(point, self.b, self.c) / self.area;
        let v = area_of_triangle(self.a, point, self.c) / self.area;
        (u, v)
    }
}
