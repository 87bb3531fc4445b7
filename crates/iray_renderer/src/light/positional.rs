use iray_core::{colors, Color, Material};
use iray_math::{DVec3, Frame, Ray, EPSILON};

use super::{ambient_color, total_color, Attenuation};
use crate::visible::{find_intersection, VisibleShape};

/// A point light.
///
/// When `tied_to_world` is false, `position` is interpreted in the camera's
/// frame so the light moves with the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalLight {
    pub position: DVec3,
    pub color: Color,
    pub is_on: bool,
    pub tied_to_world: bool,
    pub attenuation: Option<Attenuation>,
}

impl PositionalLight {
    /// A world-space light that is switched on and not attenuated.
    pub fn new(position: DVec3, color: Color) -> Self {
        Self {
            position,
            color,
            is_on: true,
            tied_to_world: true,
            attenuation: None,
        }
    }

    /// Position the light relative to the camera instead of the world.
    pub fn camera_relative(mut self) -> Self {
        self.tied_to_world = false;
        self
    }

    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = Some(attenuation);
        self
    }

    /// World-space position of the light.
    pub fn actual_position(&self, eye_frame: &Frame) -> DVec3 {
        if self.tied_to_world {
            self.position
        } else {
            eye_frame.to_world(self.position)
        }
    }

    pub fn illuminate(
        &self,
        point: DVec3,
        normal: DVec3,
        material: &Material,
        eye_frame: &Frame,
        in_shadow: bool,
    ) -> Color {
        if !self.is_on {
            return colors::BLACK;
        }
        if in_shadow {
            return ambient_color(material, self.color);
        }
        total_color(
            material,
            self.color,
            eye_frame.origin,
            normal,
            self.actual_position(eye_frame),
            point,
            self.attenuation.as_ref(),
        )
    }

    /// Ray from just above the surface toward the light, and the distance
    /// the ray has to travel to reach it.
    pub fn shadow_feeler(&self, point: DVec3, normal: DVec3, eye_frame: &Frame) -> (Ray, f64) {
        let origin = point + EPSILON * normal;
        let to_light = self.actual_position(eye_frame) - origin;
        (Ray::normalized(origin, to_light), to_light.length())
    }

    /// Returns true if an object lies strictly between `point` and the light.
    pub fn point_is_in_a_shadow(
        &self,
        point: DVec3,
        normal: DVec3,
        objects: &[VisibleShape],
        eye_frame: &Frame,
    ) -> bool {
        let (feeler, distance) = self.shadow_feeler(point, normal, eye_frame);
        let hit = find_intersection(&feeler, objects);
        hit.t < distance
    }
}
