//! Scene container: objects, lights and the active camera.

use iray_math::Ray;

use crate::camera::Camera;
use crate::hit::HitRecord;
use crate::light::Light;
use crate::visible::{find_intersection, VisibleShape};

/// Everything the tracer needs to render a frame.
///
/// Object order matters: on equal hit distance the earlier object wins.
/// Lights are accumulated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<VisibleShape>,
    lights: Vec<Light>,
    camera: Camera,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            camera,
        }
    }

    pub fn add_object(&mut self, object: VisibleShape) {
        self.objects.push(object);
    }

    /// Add a light and return its index for later toggling.
    pub fn add_light(&mut self, light: impl Into<Light>) -> usize {
        self.lights.push(light.into());
        self.lights.len() - 1
    }

    pub fn objects(&self) -> &[VisibleShape] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light_mut(&mut self, index: usize) -> Option<&mut Light> {
        self.lights.get_mut(index)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Nearest hit of `ray` with any object.
    pub fn find_intersection(&self, ray: &Ray) -> HitRecord<'_> {
        find_intersection(ray, &self.objects)
    }

    /// Remove all objects and lights, keeping the camera.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.lights.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::PositionalLight;
    use crate::shape::Sphere;
    use iray_core::{colors, Material};
    use iray_math::DVec3;

    #[test]
    fn test_scene_add_and_query() {
        let mut scene = Scene::default();
        assert!(scene.is_empty());

        scene.add_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), Material::GOLD));
        let index = scene.add_light(PositionalLight::new(DVec3::ONE, colors::WHITE));

        assert_eq!(scene.len(), 1);
        assert_eq!(index, 0);

        let rec = scene.find_intersection(&Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::NEG_Z));
        assert!(rec.is_hit());

        scene.light_mut(index).unwrap().toggle();
        assert!(!scene.lights()[0].is_on());
        assert!(scene.light_mut(3).is_none());

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.lights().is_empty());
    }
}
