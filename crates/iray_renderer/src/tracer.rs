//! Recursive Whitted-style ray tracer.
//!
//! A primary ray is traced at `recursion_level == max_depth`; each bounce
//! (mirror reflection, dielectric reflection/refraction, see-through
//! transparency) recurses with the level decremented until it reaches 0.

use std::time::Instant;

use iray_core::{colors, Color, RenderConfig};
use iray_math::{reflect, refract, Ray, EPSILON};

use crate::bucket::{generate_buckets, render_buckets};
use crate::framebuffer::FrameBuffer;
use crate::hit::{HitRecord, RayStatus, NO_HIT};
use crate::scene::Scene;

/// Factor applied to the background color seen through a bounce.
pub const SECONDARY_MISS_SCALE: f64 = 0.1;

/// Share of a texel used as the ambient color of a textured surface.
pub const TEXTURE_AMBIENT_FRACTION: f64 = 0.15;

/// Weight of the mirror bounce on non-dielectric surfaces.
pub const REFLECTION_WEIGHT: f64 = 0.25;

/// Fresnel reflectance for light going from index `n1` into index `n2`.
///
/// `cos_i` is the cosine of the angle between the incident ray and the
/// surface normal. Returns the average of the s- and p-polarized
/// reflectances, or 1 on total internal reflection. The transmitted share
/// is `1 - fresnel(..)`.
pub fn fresnel(cos_i: f64, n1: f64, n2: f64) -> f64 {
    let cos_i = cos_i.clamp(0.0, 1.0);
    let sin_t = n1 / n2 * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    if sin_t >= 1.0 {
        return 1.0;
    }
    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();

    let rs = (n1 * cos_i - n2 * cos_t) / (n1 * cos_i + n2 * cos_t);
    let rp = (n1 * cos_t - n2 * cos_i) / (n1 * cos_t + n2 * cos_i);
    (rs * rs + rp * rp) / 2.0
}

/// Renders scenes according to a `RenderConfig`.
#[derive(Debug, Clone, Default)]
pub struct RayTracer {
    config: RenderConfig,
}

impl RayTracer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Color seen along `ray`.
    ///
    /// Pass `max_depth` as `recursion_level` for a primary ray.
    pub fn trace_individual_ray(&self, ray: &Ray, scene: &Scene, recursion_level: u32) -> Color {
        self.trace(ray, scene, recursion_level).0
    }

    /// Color seen along `ray` and the hit distance (`NO_HIT` on a miss).
    fn trace(&self, ray: &Ray, scene: &Scene, recursion_level: u32) -> (Color, f64) {
        let hit = scene.find_intersection(ray);
        if !hit.is_hit() {
            let background = if recursion_level == self.config.max_depth {
                self.config.default_color
            } else {
                self.config.default_color * SECONDARY_MISS_SCALE
            };
            return (background, NO_HIT);
        }

        let t = hit.t;
        (self.shade(ray, scene, hit, recursion_level), t)
    }

    fn shade(&self, ray: &Ray, scene: &Scene, mut hit: HitRecord<'_>, recursion_level: u32) -> Color {
        if self.config.texture_mapping {
            if let Some(texture) = hit.texture {
                let texel = texture.pixel_uv(hit.u, hit.v);
                hit.material.apply_texel(texel, TEXTURE_AMBIENT_FRACTION);
            }
        }

        let normal = hit.facing_normal(ray);
        let eye_frame = scene.camera().frame();

        let mut color = colors::BLACK;
        for light in scene.lights().iter().filter(|light| light.is_on()) {
            let in_shadow = light.point_is_in_a_shadow(hit.point, normal, scene.objects(), &eye_frame);
            color += light.illuminate(hit.point, normal, &hit.material, &eye_frame, in_shadow);
        }

        if recursion_level > 0 {
            let next = recursion_level - 1;
            let direction = ray.direction.normalize();
            let origin = hit.point + EPSILON * normal;
            let reflected = Ray::new(origin, reflect(direction, normal));

            if hit.material.is_dielectric {
                let ior = hit.material.refraction_index;
                let (n1, n2) = match hit.ray_status {
                    RayStatus::Entering => (1.0, ior),
                    RayStatus::Leaving => (ior, 1.0),
                };
                let kr = fresnel(-direction.dot(normal), n1, n2);

                color += kr * self.trace_individual_ray(&reflected, scene, next);
                if kr < 1.0 {
                    if let Some(refracted) = refract(direction, normal, n1 / n2) {
                        // Offset on the incoming side, like the other secondary rays
                        let refracted = Ray::new(origin, refracted);
                        color += (1.0 - kr) * self.trace_individual_ray(&refracted, scene, next);
                    }
                }
            } else {
                color += REFLECTION_WEIGHT * self.trace_individual_ray(&reflected, scene, next);

                let alpha = hit.material.alpha;
                if alpha < 1.0 {
                    let see_through = Ray::new(origin, ray.direction);
                    let behind = self.trace_individual_ray(&see_through, scene, next);
                    color = alpha * color + (1.0 - alpha) * behind;
                }
            }
        }

        if let Some(fog) = &self.config.fog {
            color = fog.apply(color, eye_frame.origin, hit.point);
        }

        color.clamp(colors::BLACK, colors::WHITE)
    }

    /// Averaged color and nearest primary hit distance for pixel `(x, y)`.
    pub fn render_pixel(&self, scene: &Scene, x: u32, y: u32) -> (Color, f64) {
        let rays = scene.camera().get_rays(x, y, self.config.antialiasing);
        let mut color = colors::BLACK;
        let mut depth = NO_HIT;
        for ray in &rays {
            let (c, t) = self.trace(ray, scene, self.config.max_depth);
            color += c;
            depth = depth.min(t);
        }
        (color / rays.len().max(1) as f64, depth)
    }

    /// Render a complete frame into `frame_buffer`.
    pub fn raytrace_scene(&self, frame_buffer: &mut FrameBuffer, scene: &Scene) {
        let start = Instant::now();
        let (width, height) = (frame_buffer.width(), frame_buffer.height());

        let camera = scene.camera();
        if camera.image_width != width || camera.image_height != height {
            log::warn!(
                "Camera resolution {}x{} does not match framebuffer {}x{}",
                camera.image_width,
                camera.image_height,
                width,
                height
            );
        }

        if self.config.parallel {
            let buckets = generate_buckets(width, height, self.config.bucket_size);
            log::debug!("Rendering {} buckets in parallel", buckets.len());
            for result in render_buckets(&buckets, self, scene) {
                result.write_into(frame_buffer, self.config.depth_write);
            }
        } else {
            for y in 0..height {
                for x in 0..width {
                    let (color, depth) = self.render_pixel(scene, x, y);
                    frame_buffer.set_color(x as i32, y as i32, color);
                    if self.config.depth_write {
                        frame_buffer.set_depth(x as i32, y as i32, depth);
                    }
                }
            }
        }

        if let Some(thickness) = self.config.axes {
            for y in 0..height {
                for x in 0..width {
                    frame_buffer.show_axes(x as i32, y as i32, &camera.get_ray(x, y), thickness);
                }
            }
        }

        log::info!(
            "Rendered {}x{} frame in {:.2?} (depth {}, {} spp)",
            width,
            height,
            start.elapsed(),
            self.config.max_depth,
            self.config.samples_per_pixel()
        );
    }
}
