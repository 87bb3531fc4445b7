use std::f64::consts::{FRAC_PI_2, PI};

use iray_math::{azimuth_and_elevation, map_range, quadratic, DVec3, Ray};

use super::{in_front, SurfaceHit};

/// Coefficients of the general quadric
/// `Ax² + By² + Cz² + Dxy + Exz + Fyz + Gx + Hy + Iz + J = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadricParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
}

impl Default for QuadricParameters {
    /// Unit sphere.
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0])
    }
}

impl QuadricParameters {
    /// Coefficients in `A..J` order.
    pub const fn new(p: [f64; 10]) -> Self {
        Self {
            a: p[0],
            b: p[1],
            c: p[2],
            d: p[3],
            e: p[4],
            f: p[5],
            g: p[6],
            h: p[7],
            i: p[8],
            j: p[9],
        }
    }

    pub fn sphere(radius: f64) -> Self {
        Self::new([1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -radius * radius])
    }

    /// Axis-aligned ellipsoid with the given semi-axis lengths.
    pub fn ellipsoid(size: DVec3) -> Self {
        let inv = 1.0 / (size * size);
        Self::new([inv.x, inv.y, inv.z, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0])
    }

    /// Infinite cylinder around the X axis.
    pub fn cylinder_x(radius: f64) -> Self {
        let k = 1.0 / (radius * radius);
        Self::new([0.0, k, k, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0])
    }

    /// Infinite cylinder around the Y axis.
    pub fn cylinder_y(radius: f64) -> Self {
        let k = 1.0 / (radius * radius);
        Self::new([k, 0.0, k, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0])
    }

    /// Infinite cylinder around the Z axis.
    pub fn cylinder_z(radius: f64) -> Self {
        let k = 1.0 / (radius * radius);
        Self::new([k, k, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0])
    }

    /// Double cone around the Y axis with its apex at the origin; the
    /// radius is `radius` at a height of `height` above or below the apex.
    pub fn cone_y(radius: f64, height: f64) -> Self {
        let k = (height * height) / (radius * radius);
        Self::new([k, -1.0, k, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// Value of the quadric function at `p` (zero on the surface).
    pub fn evaluate(&self, p: DVec3) -> f64 {
        self.a * p.x * p.x
            + self.b * p.y * p.y
            + self.c * p.z * p.z
            + self.d * p.x * p.y
            + self.e * p.x * p.z
            + self.f * p.y * p.z
            + self.g * p.x
            + self.h * p.y
            + self.i * p.z
            + self.j
    }

    /// Gradient of the quadric function at `p` (not normalized).
    pub fn gradient(&self, p: DVec3) -> DVec3 {
        DVec3::new(
            2.0 * self.a * p.x + self.d * p.y + self.e * p.z + self.g,
            2.0 * self.b * p.y + self.d * p.x + self.f * p.z + self.h,
            2.0 * self.c * p.z + self.e * p.x + self.f * p.y + self.i,
        )
    }

    /// Coefficients `(Aq, Bq, Cq)` of the quadratic in `t` obtained by
    /// substituting a ray (origin relative to the quadric) into the surface.
    pub fn ray_coefficients(&self, origin: DVec3, dir: DVec3) -> (f64, f64, f64) {
        let (o, d) = (origin, dir);
        let aq = self.a * d.x * d.x
            + self.b * d.y * d.y
            + self.c * d.z * d.z
            + self.d * d.x * d.y
            + self.e * d.x * d.z
            + self.f * d.y * d.z;
        let bq = 2.0 * self.a * o.x * d.x
            + 2.0 * self.b * o.y * d.y
            + 2.0 * self.c * o.z * d.z
            + self.d * (o.x * d.y + o.y * d.x)
            + self.e * (o.x * d.z + o.z * d.x)
            + self.f * (o.y * d.z + o.z * d.y)
            + self.g * d.x
            + self.h * d.y
            + self.i * d.z;
        let cq = self.evaluate(o);
        (aq, bq, cq)
    }
}

/// A quadric surface positioned at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadricSurface {
    pub params: QuadricParameters,
    pub center: DVec3,
}

impl Default for QuadricSurface {
    fn default() -> Self {
        Self::new(QuadricParameters::default(), DVec3::ZERO)
    }
}

impl QuadricSurface {
    pub fn new(params: QuadricParameters, center: DVec3) -> Self {
        Self { params, center }
    }

    pub fn ellipsoid(center: DVec3, size: DVec3) -> Self {
        Self::new(QuadricParameters::ellipsoid(size), center)
    }

    /// Unit normal at a point on the surface.
    pub fn normal(&self, point: DVec3) -> DVec3 {
        self.params.gradient(point - self.center).normalize()
    }

    /// All intersections with `t > 0`, nearest first (at most two).
    pub fn intersections(&self, ray: &Ray) -> Vec<SurfaceHit> {
        let (aq, bq, cq) = self
            .params
            .ray_coefficients(ray.origin - self.center, ray.direction);
        quadratic(aq, bq, cq)
            .into_iter()
            .filter(|&t| in_front(t))
            .map(|t| {
                let point = ray.at(t);
                SurfaceHit {
                    t,
                    point,
                    normal: self.normal(point),
                }
            })
            .collect()
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.intersections(ray).into_iter().next()
    }

    pub fn tex_coords(&self, _point: DVec3) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// A sphere: a quadric that also knows its radius for texture mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    surface: QuadricSurface,
    radius: f64,
}

impl Sphere {
    pub fn new(center: DVec3, radius: f64) -> Self {
        if radius <= 0.0 {
            log::warn!("Sphere at {center} has non-positive radius {radius}");
        }
        Self {
            surface: QuadricSurface::new(QuadricParameters::sphere(radius), center),
            radius,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.surface.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn intersections(&self, ray: &Ray) -> Vec<SurfaceHit> {
        self.surface.intersections(ray)
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.surface.closest_intersection(ray)
    }

    /// `u` follows the azimuth around +Y, `v` runs from the north pole (0)
    /// to the south pole (1).
    pub fn tex_coords(&self, point: DVec3) -> (f64, f64) {
        let (_, azimuth, elevation) = azimuth_and_elevation(point - self.surface.center);
        let u = map_range(azimuth, -PI, PI, 0.0, 1.0);
        let v = 1.0 - map_range(elevation, -FRAC_PI_2, FRAC_PI_2, 0.0, 1.0);
        (u, v)
    }
}
