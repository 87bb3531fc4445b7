use std::f64::consts::TAU;

use iray_math::{direction_in_radians, map_range, DVec2, DVec3, Interval, Ray, EPSILON};

use super::{nearest, Disk, QuadricParameters, QuadricSurface, SurfaceHit};

/// An open cylinder around the Y axis, `length` tall and centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderY {
    surface: QuadricSurface,
    radius: f64,
    length: f64,
}

impl CylinderY {
    pub fn new(center: DVec3, radius: f64, length: f64) -> Self {
        Self {
            surface: QuadricSurface::new(QuadricParameters::cylinder_y(radius), center),
            radius,
            length,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.surface.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Open interval of y values covered by the wall.
    pub fn y_bounds(&self) -> Interval {
        Interval::centered(self.surface.center.y, self.length)
    }

    /// First wall hit (ascending `t`) whose y lies strictly inside the bounds.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        let bounds = self.y_bounds();
        self.surface
            .intersections(ray)
            .into_iter()
            .find(|hit| bounds.surrounds(hit.point.y))
    }

    /// `u` follows the angle around the axis, `v` runs from the top (0) to
    /// the bottom (1).
    pub fn tex_coords(&self, point: DVec3) -> (f64, f64) {
        let bounds = self.y_bounds();
        let c = self.surface.center;
        let angle = direction_in_radians(DVec2::new(c.x, c.z), DVec2::new(point.x, point.z));
        let u = map_range(angle, 0.0, TAU, 0.0, 1.0);
        let v = map_range(point.y, bounds.min, bounds.max, 1.0, 0.0);
        (u, v)
    }
}

/// A Y-axis cylinder capped with a disk at each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedCylinderY {
    wall: CylinderY,
    top: Disk,
    bottom: Disk,
}

impl ClosedCylinderY {
    pub fn new(center: DVec3, radius: f64, length: f64) -> Self {
        let half = DVec3::new(0.0, length / 2.0, 0.0);
        Self {
            wall: CylinderY::new(center, radius, length),
            top: Disk::new(center + half, DVec3::Y, radius),
            bottom: Disk::new(center - half, DVec3::NEG_Y, radius),
        }
    }

    pub fn wall(&self) -> &CylinderY {
        &self.wall
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<SurfaceHit> {
        nearest([
            self.wall.closest_intersection(ray),
            self.top.closest_intersection(ray),
            self.bottom.closest_intersection(ray),
        ])
    }

    /// Points at (or beyond) a cap use that cap's mapping, everything else
    /// maps onto the wall.
    pub fn tex_coords(&self, point: DVec3) -> (f64, f64) {
        let bounds = self.wall.y_bounds();
        if point.y >= bounds.max - EPSILON {
            self.top.tex_coords(point)
        } else if point.y <= bounds.min + EPSILON {
            self.bottom.tex_coords(point)
        } else {
            self.wall.tex_coords(point)
        }
    }
}
