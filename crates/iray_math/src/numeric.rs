//! Scalar and vector helpers shared by the shapes and the shading code.

use std::f64::consts::{PI, TAU};

use crate::{DVec2, DVec3};

/// Offset used to push secondary ray origins off a surface.
pub const EPSILON: f64 = 1.0e-5;

/// Returns true if `a` and `b` agree to within `EPSILON`, scaled by their
/// magnitude once that exceeds 1.
pub fn approximately_equal(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= EPSILON * scale
}

/// Returns true if `a` is within `EPSILON` of zero.
pub fn approximately_zero(a: f64) -> bool {
    a.abs() <= EPSILON
}

/// Real roots of `a*t^2 + b*t + c = 0`, in ascending order.
///
/// A zero discriminant yields one root. A zero `a` degrades to the linear
/// equation; if `b` is zero as well there are no roots.
pub fn quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        if b == 0.0 {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    if discriminant == 0.0 {
        return vec![-b / (2.0 * a)];
    }

    let sqrtd = discriminant.sqrt();
    let r1 = (-b - sqrtd) / (2.0 * a);
    let r2 = (-b + sqrtd) / (2.0 * a);
    if r1 <= r2 {
        vec![r1, r2]
    } else {
        vec![r2, r1]
    }
}

/// Area of the triangle with the given corners.
pub fn area_of_triangle(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    0.5 * (b - a).cross(c - a).length()
}

/// Linearly map `x` from `[x_lo, x_hi]` onto `[y_lo, y_hi]`.
pub fn map_range(x: f64, x_lo: f64, x_hi: f64, y_lo: f64, y_hi: f64) -> f64 {
    y_lo + (x - x_lo) / (x_hi - x_lo) * (y_hi - y_lo)
}

/// Direction from `reference` to `target`, in radians within `[0, 2π)`.
pub fn direction_in_radians(reference: DVec2, target: DVec2) -> f64 {
    let d = target - reference;
    d.y.atan2(d.x).rem_euclid(TAU)
}

/// Spherical coordinates of `p`: `(radius, azimuth, elevation)`.
///
/// Azimuth is measured around +Y starting at +Z, in `(-π, π]`.
/// Elevation is measured from the XZ plane, in `[-π/2, π/2]`.
pub fn azimuth_and_elevation(p: DVec3) -> (f64, f64, f64) {
    let radius = p.length();
    if radius == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let azimuth = p.x.atan2(p.z);
    let elevation = (p.y / radius).clamp(-1.0, 1.0).asin();
    debug_assert!((-PI..=PI).contains(&azimuth));
    (radius, azimuth, elevation)
}

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `incident` through a surface with unit normal
/// `n` (facing the incident side) and index ratio `eta = n1 / n2`.
///
/// Returns `None` on total internal reflection.
#[inline]
pub fn refract(incident: DVec3, n: DVec3, eta: f64) -> Option<DVec3> {
    let cos_i = -n.dot(incident);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        None
    } else {
        Some(eta * incident + (eta * cos_i - k.sqrt()) * n)
    }
}
