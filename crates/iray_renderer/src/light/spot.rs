use iray_core::{colors, Color, Material};
use iray_math::{DVec3, Frame};

use super::PositionalLight;

/// A positional light that only shines inside a cone.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub light: PositionalLight,
    direction: DVec3,
    /// Full opening angle of the cone in radians
    pub fov: f64,
}

impl SpotLight {
    pub fn new(position: DVec3, direction: DVec3, fov: f64, color: Color) -> Self {
        Self {
            light: PositionalLight::new(position, color),
            direction: direction.normalize(),
            fov,
        }
    }

    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Re-aim the spot; `direction` need not be unit length.
    pub fn set_direction(&mut self, direction: DVec3) {
        self.direction = direction.normalize();
    }

    /// Returns true if `point` lies inside the cone with apex `spot_pos`,
    /// axis `spot_dir` and half-angle `fov / 2`.
    pub fn is_in_cone(spot_pos: DVec3, spot_dir: DVec3, fov: f64, point: DVec3) -> bool {
        let to_point = (point - spot_pos).normalize();
        to_point.dot(spot_dir.normalize()) >= (fov / 2.0).cos()
    }

    pub fn illuminate(
        &self,
        point: DVec3,
        normal: DVec3,
        material: &Material,
        eye_frame: &Frame,
        in_shadow: bool,
    ) -> Color {
        let position = self.light.actual_position(eye_frame);
        if !Self::is_in_cone(position, self.direction, self.fov, point) {
            return colors::BLACK;
        }
        self.light.illuminate(point, normal, material, eye_frame, in_shadow)
    }
}
