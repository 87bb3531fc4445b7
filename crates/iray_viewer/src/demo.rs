//! The demo scene: a textured globe, two copper cylinders and a glass disk
//! on a tin floor, lit by a point light and a spot light.

use std::sync::Arc;

use iray_core::{colors, Color, Material, Texture};
use iray_math::DVec3;
use iray_renderer::{
    Camera, ClosedCylinderY, CylinderY, Disk, Plane, PositionalLight, Scene, Sphere, SpotLight, VisibleShape,
};

pub const CAMERA_POSITION: DVec3 = DVec3::new(16.0, 8.0, 16.0);
pub const CAMERA_FOV_DEGREES: f64 = 60.0;

pub const POSITIONAL_LIGHT_POSITION: DVec3 = DVec3::new(15.0, 15.0, 15.0);
pub const SPOT_LIGHT_POSITION: DVec3 = DVec3::new(-15.0, 5.0, 10.0);
pub const SPOT_LIGHT_FOV_DEGREES: f64 = 120.0;

/// Which of the demo lights start switched on.
#[derive(Debug, Clone, Copy)]
pub struct LightSwitches {
    pub positional: bool,
    pub spot: bool,
}

impl Default for LightSwitches {
    fn default() -> Self {
        Self {
            positional: true,
            spot: true,
        }
    }
}

pub fn camera(width: u32, height: u32) -> Camera {
    Camera::perspective(
        CAMERA_POSITION,
        DVec3::ZERO,
        DVec3::Y,
        CAMERA_FOV_DEGREES.to_radians(),
        width,
        height,
    )
}

/// Build the demo scene.
///
/// `globe` is applied to the sphere and `label` to the open cylinder.
pub fn build_scene(
    width: u32,
    height: u32,
    globe: Arc<Texture>,
    label: Arc<Texture>,
    switches: LightSwitches,
) -> Scene {
    let mut scene = Scene::new(camera(width, height));

    scene.add_object(VisibleShape::new(
        Plane::new(DVec3::new(0.0, -2.0, 0.0), DVec3::Y),
        Material::TIN,
    ));
    scene.add_object(
        VisibleShape::new(Sphere::new(DVec3::new(0.0, 2.0, 0.0), 4.0), Material::WHITE).with_texture(globe),
    );
    scene.add_object(VisibleShape::new(
        ClosedCylinderY::new(DVec3::new(8.0, 0.0, 4.0), 1.5, 3.0),
        Material::COPPER,
    ));
    scene.add_object(
        VisibleShape::new(CylinderY::new(DVec3::new(2.0, 0.0, 8.0), 1.5, 3.0), Material::COPPER)
            .with_texture(label),
    );
    scene.add_object(VisibleShape::new(
        Disk::new(DVec3::new(-8.0, 1.0, 8.0), DVec3::X, 3.0),
        Material::mirror_glass(),
    ));

    let mut positional = PositionalLight::new(POSITIONAL_LIGHT_POSITION, colors::WHITE);
    positional.is_on = switches.positional;
    scene.add_light(positional);

    let mut spot = SpotLight::new(
        SPOT_LIGHT_POSITION,
        DVec3::NEG_Y,
        SPOT_LIGHT_FOV_DEGREES.to_radians(),
        colors::WHITE,
    );
    spot.light.is_on = switches.spot;
    scene.add_light(spot);

    log::debug!(
        "Demo scene: {} objects, {} lights",
        scene.len(),
        scene.lights().len()
    );
    scene
}

/// Procedural stand-in for the globe texture.
pub fn default_globe() -> Texture {
    Texture::checkerboard(256, 16, Color::new(0.1, 0.3, 0.8), Color::new(0.2, 0.7, 0.3))
}

/// Procedural stand-in for the cylinder label.
pub fn default_label() -> Texture {
    Texture::checkerboard(128, 8, colors::RED, colors::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iray_math::Ray;

    fn scene(switches: LightSwitches) -> Scene {
        build_scene(
            64,
            48,
            Arc::new(default_globe()),
            Arc::new(default_label()),
            switches,
        )
    }

    #[test]
    fn test_demo_scene_contents() {
        let scene = scene(LightSwitches::default());
        assert_eq!(scene.len(), 5);
        assert_eq!(scene.lights().len(), 2);
        assert!(scene.lights().iter().all(|l| l.is_on()));
        assert_eq!(scene.camera().frame().origin, CAMERA_POSITION);
    }

    #[test]
    fn test_light_switches() {
        let scene = scene(LightSwitches {
            positional: false,
            spot: true,
        });
        assert!(!scene.lights()[0].is_on());
        assert!(scene.lights()[1].is_on());
    }

    #[test]
    fn test_camera_sees_globe() {
        let scene = scene(LightSwitches::default());
        let ray = Ray::normalized(CAMERA_POSITION, DVec3::new(0.0, 2.0, 0.0) - CAMERA_POSITION);
        let rec = scene.find_intersection(&ray);
        assert!(rec.is_hit());
        assert!(rec.texture.is_some());
        assert_eq!(rec.material, Material::WHITE);
    }
}
