//! IRAY math - vectors, rays and small numeric helpers.
//!
//! Everything is double precision: the implicit-surface tests (triangle
//! area sums, quadric discriminants) are too sensitive for `f32`.

// Re-export glam for convenience
pub use glam::*;

mod frame;
mod interval;
mod numeric;
mod ray;

pub use frame::Frame;
pub use interval::Interval;
pub use numeric::{
    approximately_equal, approximately_zero, area_of_triangle, azimuth_and_elevation,
    direction_in_radians, map_range, quadratic, reflect, refract, EPSILON,
};
pub use ray::Ray;
