//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. The scene is only read
//! during a frame, so workers share it without locking.

use iray_core::Color;
use rayon::prelude::*;

use crate::framebuffer::FrameBuffer;
use crate::scene::Scene;
use crate::tracer::RayTracer;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's lower-left corner
    pub x: u32,
    /// Y coordinate of bucket's lower-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted in spiral order from center.
///
/// Buckets are rendered from the center outward so the middle of the frame
/// is finished first.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    // Generate grid of buckets
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    // Sort by distance from center (spiral order)
    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f64 + b.width as f64 / 2.0;
        let by = b.y as f64 + b.height as f64 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors and primary hit distances in row-major order
    pub pixels: Vec<(Color, f64)>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<(Color, f64)>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into the framebuffer.
    pub fn write_into(&self, frame_buffer: &mut FrameBuffer, depth_write: bool) {
        let width = self.bucket.width.max(1) as usize;
        for (i, &(color, depth)) in self.pixels.iter().enumerate() {
            let x = (self.bucket.x as usize + i % width) as i32;
            let y = (self.bucket.y as usize + i / width) as i32;
            frame_buffer.set_color(x, y, color);
            if depth_write {
                frame_buffer.set_depth(x, y, depth);
            }
        }
    }
}

/// Render a single bucket.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, tracer: &RayTracer, scene: &Scene) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(tracer.render_pixel(scene, bucket.x + local_x, bucket.y + local_y));
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Render all buckets on the rayon thread pool, in bucket order.
pub fn render_buckets(buckets: &[Bucket], tracer: &RayTracer, scene: &Scene) -> Vec<BucketResult> {
    buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, tracer, scene))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use iray_core::RenderConfig;
    use iray_math::DVec3;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 100, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 100);
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket should be the center one
        let first = &buckets[0];
        assert_eq!(first.x, 64);
        assert_eq!(first.y, 64);
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_buckets_cover_every_pixel_once() {
        let (width, height) = (37, 23);
        let mut covered = vec![0u32; (width * height) as usize];
        for bucket in generate_buckets(width, height, 8) {
            for y in bucket.y..bucket.y + bucket.height {
                for x in bucket.x..bucket.x + bucket.width {
                    covered[(y * width + x) as usize] += 1;
                }
            }
        }
        assert!(covered.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_empty_image_has_no_buckets() {
        assert!(generate_buckets(0, 10, 4).is_empty());
        assert!(generate_buckets(10, 0, 4).is_empty());
    }

    #[test]
    fn test_render_bucket_writes_its_region() {
        let camera = Camera::perspective(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO, DVec3::Y, 1.0, 8, 8);
        let scene = Scene::new(camera);
        let tracer = RayTracer::new(RenderConfig::default());

        let bucket = Bucket::new(4, 0, 4, 2, 0);
        let result = render_bucket(&bucket, &tracer, &scene);
        assert_eq!(result.pixels.len(), 8);

        let mut fb = FrameBuffer::new(8, 8);
        result.write_into(&mut fb, true);

        let default = tracer.config().default_color;
        assert!((fb.color(5, 1) - default).length() < 0.01);
        assert_eq!(fb.color(3, 1), Color::ZERO);
        assert_eq!(fb.depth(7, 0), f64::MAX);
        assert_eq!(fb.depth(7, 2), 1.0);
    }
}
