//! Implicit shapes: geometry defined by an equation rather than a mesh.
//!
//! Every shape answers two questions: where does a ray first hit it (strictly
//! in front of the ray origin), and what texture coordinates belong to a
//! point on its surface. Shapes carry no material; see `VisibleShape`.

mod cone;
mod cylinder;
mod disk;
mod plane;
mod quadric;
mod triangle;

use std::fmt;
use std::sync::Arc;

use iray_math::{DVec3, Interval, Ray};

pub use cone::ConeY;
pub use cylinder::{ClosedCylinderY, CylinderY};
pub use disk::Disk;
pub use plane::Plane;
pub use quadric::{QuadricParameters, QuadricSurface, Sphere};
pub use triangle::Triangle;

/// Geometric result of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the intersection, always > 0
    pub t: f64,
    /// World-space intersection point
    pub point: DVec3,
    /// Unit surface normal; not necessarily facing the ray
    pub normal: DVec3,
}

impl SurfaceHit {
    /// Build a hit at parameter `t` along `ray`.
    pub fn new(ray: &Ray, t: f64, normal: DVec3) -> Self {
        Self {
            t,
            point: ray.at(t),
            normal,
        }
    }
}

/// Returns true if `t` is a usable intersection parameter: strictly in
/// front of the ray origin and not the "no hit" sentinel.
#[inline]
pub(crate) fn in_front(t: f64) -> bool {
    Interval::IN_FRONT.surrounds(t)
}

/// Pick the hit with the smallest `t`; on ties the earlier candidate wins.
pub(crate) fn nearest<I>(hits: I) -> Option<SurfaceHit>
where
    I: IntoIterator<Item = Option<SurfaceHit>>,
{
    hits.into_iter().flatten().fold(None, |best, hit| match best {
        Some(b) if b.t <= hit.t => Some(b),
        _ => Some(hit),
    })
}

/// Trait for implicit shapes that can be intersected by rays.
///
/// The built-in shapes are variants of [`Shape`]; implement this trait and
/// wrap it in `Shape::Custom` to add new kinds of geometry.
pub trait ImplicitShape: Send + Sync + fmt::Debug {
    /// Nearest intersection with `t > 0`, if any.
    fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit>;

    /// Texture coordinates of a point on the surface.
    fn tex_coords(&self, _point: DVec3) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// The closed set of shapes the tracer knows about.
#[derive(Debug, Clone)]
pub enum Shape {
    Plane(Plane),
    Quadric(QuadricSurface),
    Sphere(Sphere),
    CylinderY(CylinderY),
    ClosedCylinderY(ClosedCylinderY),
    ConeY(ConeY),
    Disk(Disk),
    Triangle(Triangle),
    Custom(Arc<dyn ImplicitShape>),
}

impl Shape {
    /// Nearest intersection with `t > 0`, if any.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Plane(s) => s.closest_intersection(ray),
            Shape::Quadric(s) => s.closest_intersection(ray),
            Shape::Sphere(s) => s.closest_intersection(ray),
            Shape::CylinderY(s) => s.closest_intersection(ray),
            Shape::ClosedCylinderY(s) => s.closest_intersection(ray),
            Shape::ConeY(s) => s.closest_intersection(ray),
            Shape::Disk(s) => s.closest_intersection(ray),
            Shape::Triangle(s) => s.closest_intersection(ray),
            Shape::Custom(s) => s.closest_intersection(ray),
        }
    }

    /// Texture coordinates of a point on the surface; (0, 0) when unsupported.
    pub fn tex_coords(&self, point: DVec3) -> (f64, f64) {
        match self {
            Shape::Plane(s) => s.tex_coords(point),
            Shape::Quadric(s) => s.tex_coords(point),
            Shape::Sphere(s) => s.tex_coords(point),
            Shape::CylinderY(s) => s.tex_coords(point),
            Shape::ClosedCylinderY(s) => s.tex_coords(point),
            Shape::ConeY(s) => s.tex_coords(point),
            Shape::Disk(s) => s.tex_coords(point),
            Shape::Triangle(s) => s.tex_coords(point),
            Shape::Custom(s) => s.tex_coords(point),
        }
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Plane, Sphere, CylinderY, ClosedCylinderY, ConeY, Disk, Triangle);

impl From<QuadricSurface> for Shape {
    fn from(shape: QuadricSurface) -> Self {
        Shape::Quadric(shape)
    }
}

impl From<Arc<dyn ImplicitShape>> for Shape {
    fn from(shape: Arc<dyn ImplicitShape>) -> Self {
        Shape::Custom(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An axis-aligned unit cube, standing in for user-defined geometry.
    #[derive(Debug)]
    struct UnitCube;

    impl ImplicitShape for UnitCube {
        fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
            // Only handles rays travelling down -Z, enough for the test
            let t = (ray.origin.z - 0.5) / -ray.direction.z;
            let p = ray.at(t);
            (in_front(t) && p.x.abs() <= 0.5 && p.y.abs() <= 0.5)
                .then(|| SurfaceHit::new(ray, t, DVec3::Z))
        }
    }

    #[test]
    fn test_custom_shape_dispatch() {
        let shape = Shape::from(Arc::new(UnitCube) as Arc<dyn ImplicitShape>);
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::NEG_Z);

        let hit = shape.closest_intersection(&ray).unwrap();
        assert!((hit.t - 4.5).abs() < 1e-12);
        assert_eq!(shape.tex_coords(hit.point), (0.0, 0.0));
    }

    #[test]
    fn test_nearest_prefers_earlier_on_tie() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);
        let a = SurfaceHit::new(&ray, 2.0, DVec3::Y);
        let b = SurfaceHit::new(&ray, 2.0, DVec3::Z);
        let c = SurfaceHit::new(&ray, 1.0, DVec3::X);

        assert_eq!(nearest([Some(a), Some(b)]).unwrap().normal, DVec3::Y);
        assert_eq!(nearest([Some(a), None, Some(c)]).unwrap().normal, DVec3::X);
        assert!(nearest([None, None]).is_none());
    }

    #[test]
    fn test_in_front() {
        assert!(in_front(1e-9));
        assert!(!in_front(0.0));
        assert!(!in_front(-2.0));
        assert!(!in_front(f64::NAN));
    }
}
