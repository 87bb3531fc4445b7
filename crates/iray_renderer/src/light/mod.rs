//! Light sources and the Phong illumination model.
//!
//! Lights are a closed enum; both variants share the positional light's
//! shading and shadow code, the spot light only adds a cone test.

mod positional;
mod spot;

use iray_core::{colors, Color, Material};
use iray_math::{reflect, DVec3, Frame};

use crate::visible::VisibleShape;

pub use positional::PositionalLight;
pub use spot::SpotLight;

/// Distance attenuation coefficients: `1 / (constant + linear*d + quadratic*d^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f64,
    pub linear: f64,
    pub quadratic: f64,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl Attenuation {
    pub const fn new(constant: f64, linear: f64, quadratic: f64) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Attenuation factor at `distance`. A non-positive denominator means no falloff.
    pub fn factor(&self, distance: f64) -> f64 {
        let denom = self.constant + self.linear * distance + self.quadratic * distance * distance;
        if denom <= 0.0 {
            1.0
        } else {
            1.0 / denom
        }
    }
}

/// Ambient term only, used for points in shadow.
pub fn ambient_color(material: &Material, light_color: Color) -> Color {
    material.ambient * light_color
}

/// Full Phong contribution of a light at `light_pos` to `point`.
///
/// `eye_pos` is the viewer, `n` the unit normal facing the viewer side.
/// Ambient is never attenuated. Each channel is clamped to [0, 1].
pub fn total_color(
    material: &Material,
    light_color: Color,
    eye_pos: DVec3,
    n: DVec3,
    light_pos: DVec3,
    point: DVec3,
    attenuation: Option<&Attenuation>,
) -> Color {
    let to_light = light_pos - point;
    let l = to_light.normalize();
    let r = reflect(-l, n);
    let v = (eye_pos - point).normalize();

    let ambient = material.ambient * light_color;
    let diffuse = material.diffuse * light_color * l.dot(n).max(0.0);
    let specular = material.specular * light_color * r.dot(v).max(0.0).powf(material.shininess);

    let factor = attenuation.map_or(1.0, |a| a.factor(to_light.length()));
    (ambient + factor * (diffuse + specular)).clamp(colors::BLACK, colors::WHITE)
}

/// A light source in the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Positional(PositionalLight),
    Spot(SpotLight),
}

impl Light {
    fn positional(&self) -> &PositionalLight {
        match self {
            Light::Positional(light) => light,
            Light::Spot(spot) => &spot.light,
        }
    }

    fn positional_mut(&mut self) -> &mut PositionalLight {
        match self {
            Light::Positional(light) => light,
            Light::Spot(spot) => &mut spot.light,
        }
    }

    /// Color this light contributes at `point`.
    pub fn illuminate(
        &self,
        point: DVec3,
        normal: DVec3,
        material: &Material,
        eye_frame: &Frame,
        in_shadow: bool,
    ) -> Color {
        match self {
            Light::Positional(light) => light.illuminate(point, normal, material, eye_frame, in_shadow),
            Light::Spot(spot) => spot.illuminate(point, normal, material, eye_frame, in_shadow),
        }
    }

    /// Returns true if some object blocks the path from `point` to this light.
    pub fn point_is_in_a_shadow(
        &self,
        point: DVec3,
        normal: DVec3,
        objects: &[VisibleShape],
        eye_frame: &Frame,
    ) -> bool {
        self.positional()
            .point_is_in_a_shadow(point, normal, objects, eye_frame)
    }

    pub fn is_on(&self) -> bool {
        self.positional().is_on
    }

    pub fn set_on(&mut self, on: bool) {
        self.positional_mut().is_on = on;
    }

    /// Flip the light on or off.
    pub fn toggle(&mut self) {
        let light = self.positional_mut();
        light.is_on = !light.is_on;
    }

    pub fn position(&self) -> DVec3 {
        self.positional().position
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.positional_mut().position = position;
    }

    pub fn color(&self) -> Color {
        self.positional().color
    }

    /// World-space position, resolving camera-relative lights through `eye_frame`.
    pub fn actual_position(&self, eye_frame: &Frame) -> DVec3 {
        self.positional().actual_position(eye_frame)
    }
}

impl From<PositionalLight> for Light {
    fn from(light: PositionalLight) -> Self {
        Light::Positional(light)
    }
}

impl From<SpotLight> for Light {
    fn from(light: SpotLight) -> Self {
        Light::Spot(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attenuation_factor() {
        assert_eq!(Attenuation::default().factor(100.0), 1.0);

        let att = Attenuation::new(1.0, 0.5, 0.25);
        // 1 / (1 + 1 + 1)
        assert!((att.factor(2.0) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(Attenuation::new(0.0, 0.0, 0.0).factor(5.0), 1.0);
    }

    #[test]
    fn test_total_color_head_on() {
        // Light, eye and normal all aligned: diffuse and specular at full strength
        let material = Material::new(Color::splat(0.1), Color::splat(0.5), Color::splat(0.3), 10.0);
        let color = total_color(
            &material,
            colors::WHITE,
            DVec3::new(0.0, 5.0, 0.0),
            DVec3::Y,
            DVec3::new(0.0, 10.0, 0.0),
            DVec3::ZERO,
            None,
        );
        assert!((color - Color::splat(0.9)).length() < 1e-12);
    }

    #[test]
    fn test_total_color_clamps() {
        let color = total_color(
            &Material::WHITE,
            Color::splat(5.0),
            DVec3::Y,
            DVec3::Y,
            DVec3::Y,
            DVec3::ZERO,
            None,
        );
        assert_eq!(color, colors::WHITE);
    }

    #[test]
    fn test_attenuation_leaves_ambient() {
        let material = Material::new(Color::splat(0.1), Color::splat(0.5), Color::ZERO, 1.0);
        let far = total_color(
            &material,
            colors::WHITE,
            DVec3::Y,
            DVec3::Y,
            DVec3::new(0.0, 1000.0, 0.0),
            DVec3::ZERO,
            Some(&Attenuation::new(0.0, 0.0, 1.0)),
        );
        assert!((far - Color::splat(0.1)).length() < 1e-6);
    }

    #[test]
    fn test_light_toggle_and_move() {
        let mut light = Light::from(PositionalLight::new(DVec3::ONE, colors::WHITE));
        assert!(light.is_on());
        light.toggle();
        assert!(!light.is_on());
        light.set_on(true);
        assert!(light.is_on());

        light.set_position(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.position(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.color(), colors::WHITE);
    }
}
