//! Perspective camera for ray generation.

use iray_math::{DVec3, Frame, Ray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pinhole camera generating rays for framebuffer pixels.
///
/// Pixel `(0, 0)` is the lower-left corner of the image.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: DVec3,
    look_at: DVec3,
    vup: DVec3,

    // Vertical field of view in radians
    vfov: f64,

    // Cached computed values (set by initialize())
    frame: Frame,
    pixel00_loc: DVec3,
    pixel_delta_u: DVec3,
    pixel_delta_v: DVec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            look_from: DVec3::ZERO,
            look_at: DVec3::NEG_Z,
            vup: DVec3::Y,
            vfov: 60f64.to_radians(),
            frame: Frame::default(),
            pixel00_loc: DVec3::ZERO,
            pixel_delta_u: DVec3::ZERO,
            pixel_delta_v: DVec3::ZERO,
        }
    }

    /// Convenience constructor returning an initialized camera.
    pub fn perspective(look_from: DVec3, look_at: DVec3, vup: DVec3, vfov: f64, width: u32, height: u32) -> Self {
        let mut camera = Self::new()
            .with_resolution(width, height)
            .with_position(look_from, look_at, vup)
            .with_fov(vfov);
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: DVec3, look_at: DVec3, vup: DVec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the vertical field of view (radians).
    pub fn with_fov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }

    /// Change the resolution of an initialized camera (e.g. on window resize).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image_width = width;
        self.image_height = height;
        self.initialize();
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        let width = self.image_width.max(1) as f64;
        let height = self.image_height.max(1) as f64;

        // Viewport one unit in front of the eye
        let viewport_height = 2.0 * (self.vfov / 2.0).tan();
        let viewport_width = viewport_height * (width / height);

        self.frame = Frame::look_at(self.look_from, self.look_at, self.vup);
        let Frame { origin, u, v, w } = self.frame;

        // Pixel rows grow upward
        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * v;

        self.pixel_delta_u = viewport_u / width;
        self.pixel_delta_v = viewport_v / height;

        let viewport_lower_left = origin - w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_lower_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// The eye's coordinate frame (origin = eye position).
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Normalized ray through a point given in pixel units, where `(x, y)`
    /// is the center of pixel `(x, y)`.
    fn ray_through(&self, x: f64, y: f64) -> Ray {
        let target = self.pixel00_loc + x * self.pixel_delta_u + y * self.pixel_delta_v;
        Ray::normalized(self.frame.origin, target - self.frame.origin)
    }

    /// Ray through the center of pixel `(x, y)`.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        self.ray_through(x as f64, y as f64)
    }

    /// `n * n` rays through pixel `(x, y)`, one jittered sample per cell of
    /// an `n x n` grid over the pixel.
    ///
    /// The jitter is seeded from the pixel coordinates, so the same pixel
    /// always gets the same rays. `n <= 1` yields the single center ray.
    pub fn get_rays(&self, x: u32, y: u32, n: u32) -> Vec<Ray> {
        if n <= 1 {
            return vec![self.get_ray(x, y)];
        }

        let mut rng = StdRng::seed_from_u64(((y as u64) << 32) | x as u64);
        let cell = 1.0 / n as f64;
        let mut rays = Vec::with_capacity((n * n) as usize);
        for j in 0..n {
            for i in 0..n {
                // Offsets relative to the pixel center, in [-0.5, 0.5)
                let dx = (i as f64 + rng.gen::<f64>()) * cell - 0.5;
                let dy = (j as f64 + rng.gen::<f64>()) * cell - 0.5;
                rays.push(self.ray_through(x as f64 + dx, y as f64 + dy));
            }
        }
        rays
    }
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self::new();
        camera.initialize();
        camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_initialize() {
        let mut camera = Camera::new()
            .with_resolution(800, 600)
            .with_position(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0), DVec3::Y)
            .with_fov(90f64.to_radians());

        camera.initialize();

        let frame = camera.frame();
        assert_eq!(frame.origin, DVec3::ZERO);
        assert!((frame.w - DVec3::Z).length() < 0.001);
    }

    #[test]
    fn test_center_ray_looks_at_target() {
        // Odd resolution so a pixel center lies exactly on the view axis
        let camera = Camera::perspective(
            DVec3::new(16.0, 8.0, 16.0),
            DVec3::ZERO,
            DVec3::Y,
            60f64.to_radians(),
            101,
            101,
        );

        let ray = camera.get_ray(50, 50);
        let expected = (-DVec3::new(16.0, 8.0, 16.0)).normalize();
        assert!((ray.direction - expected).length() < 1e-9);
        assert_eq!(ray.origin, DVec3::new(16.0, 8.0, 16.0));
    }

    #[test]
    fn test_bottom_row_looks_down() {
        let camera = Camera::perspective(DVec3::ZERO, DVec3::NEG_Z, DVec3::Y, 90f64.to_radians(), 100, 100);

        assert!(camera.get_ray(50, 0).direction.y < 0.0);
        assert!(camera.get_ray(50, 99).direction.y > 0.0);
        assert!(camera.get_ray(0, 50).direction.x < 0.0);
    }

    #[test]
    fn test_get_rays_count_and_determinism() {
        let camera = Camera::perspective(DVec3::ZERO, DVec3::NEG_Z, DVec3::Y, 90f64.to_radians(), 64, 64);

        assert_eq!(camera.get_rays(3, 4, 1), vec![camera.get_ray(3, 4)]);

        let rays = camera.get_rays(10, 20, 3);
        assert_eq!(rays.len(), 9);
        assert_eq!(rays, camera.get_rays(10, 20, 3));
        assert_ne!(rays, camera.get_rays(11, 20, 3));
    }

    #[test]
    fn test_jittered_rays_stay_in_pixel() {
        let camera = Camera::perspective(DVec3::ZERO, DVec3::NEG_Z, DVec3::Y, 90f64.to_radians(), 10, 10);
        let center = camera.get_ray(5, 5).direction;

        // At 90 degrees and 10 pixels, one pixel spans 0.2 units on the z = -1 plane
        for ray in camera.get_rays(5, 5, 3) {
            let d = ray.direction / -ray.direction.z;
            let c = center / -center.z;
            assert!((d.x - c.x).abs() <= 0.1 + 1e-12);
            assert!((d.y - c.y).abs() <= 0.1 + 1e-12);
        }
    }
}
