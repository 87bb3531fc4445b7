//! Software framebuffer with an 8-bit color buffer and a depth buffer.
//!
//! Row 0 is the bottom of the image. Reads and writes outside the buffer
//! are ignored rather than treated as errors.

use iray_core::{colors, Color};
use iray_math::{quadratic, Ray};

use crate::shape::QuadricParameters;

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = color.clamp(colors::BLACK, colors::WHITE);
    [
        (255.0 * c.x).round() as u8,
        (255.0 * c.y).round() as u8,
        (255.0 * c.z).round() as u8,
    ]
}

fn rgb_to_color(rgb: [u8; 3]) -> Color {
    Color::new(
        rgb[0] as f64 / 255.0,
        rgb[1] as f64 / 255.0,
        rgb[2] as f64 / 255.0,
    )
}

/// Value the depth buffer is cleared to.
pub const CLEAR_DEPTH: f64 = 1.0;

/// Axis overlay marks every `AXIS_STRIDE`-th pixel in each direction.
const AXIS_STRIDE: i32 = 2;

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    clear_color: Color,
    colors: Vec<[u8; 3]>,
    depths: Vec<f64>,
}

impl FrameBuffer {
    /// Create a framebuffer cleared to black with depth `CLEAR_DEPTH`.
    pub fn new(width: u32, height: u32) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            clear_color: colors::BLACK,
            colors: vec![[0; 3]; count],
            depths: vec![CLEAR_DEPTH; count],
        }
    }

    /// Reallocate for a new size. Contents are cleared.
    pub fn resize(&mut self, width: u32, height: u32) {
        let clear_color = self.clear_color;
        *self = Self::new(width, height);
        self.clear_color = clear_color;
        self.clear_color_buffer();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn clear_color_buffer(&mut self) {
        let rgb = color_to_rgb(self.clear_color);
        self.colors.fill(rgb);
    }

    pub fn clear_depth_buffer(&mut self) {
        self.depths.fill(CLEAR_DEPTH);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Store a color, clamped and quantized to 8 bits per channel.
    pub fn set_color(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.colors[i] = color_to_rgb(color);
        }
    }

    /// Stored color at `(x, y)`; the clear color outside the buffer.
    pub fn color(&self, x: i32, y: i32) -> Color {
        match self.index(x, y) {
            Some(i) => rgb_to_color(self.colors[i]),
            None => self.clear_color,
        }
    }

    pub fn set_depth(&mut self, x: i32, y: i32, depth: f64) {
        if let Some(i) = self.index(x, y) {
            self.depths[i] = depth;
        }
    }

    /// Stored depth at `(x, y)`; 0.0 outside the buffer.
    pub fn depth(&self, x: i32, y: i32) -> f64 {
        self.index(x, y).map_or(0.0, |i| self.depths[i])
    }

    /// Set color and depth together.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color, depth: f64) {
        self.set_color(x, y, color);
        self.set_depth(x, y, depth);
    }

    /// Debug overlay: mark pixel `(x, y)` red, green or blue when `ray`
    /// passes through a tube of radius `thickness` around the positive X,
    /// Y or Z world axis.
    ///
    /// Only every other pixel is marked so the scene shows through, and an
    /// axis is skipped when the ray starts inside its tube.
    pub fn show_axes(&mut self, x: i32, y: i32, ray: &Ray, thickness: f64) {
        if x % AXIS_STRIDE != 0 || y % AXIS_STRIDE != 0 {
            return;
        }
        let tubes = [
            (0, QuadricParameters::cylinder_x(thickness), colors::RED),
            (1, QuadricParameters::cylinder_y(thickness), colors::GREEN),
            (2, QuadricParameters::cylinder_z(thickness), colors::BLUE),
        ];
        for (axis, tube, color) in tubes {
            let mut radial = ray.origin;
            radial[axis] = 0.0;
            if radial.length() <= thickness {
                continue;
            }
            let (a, b, c) = tube.ray_coefficients(ray.origin, ray.direction);
            let Some(&t) = quadratic(a, b, c).last() else {
                continue;
            };
            if t >= 0.0 && ray.at(t)[axis] >= 0.0 {
                self.set_color(x, y, color);
                return;
            }
        }
    }

    /// RGBA bytes with the top row first, ready for image export.
    pub fn to_rgba(&self) -> Vec<u8> {
        let width = self.width as usize;
        let mut bytes = Vec::with_capacity(self.colors.len() * 4);
        for row in self.colors.chunks(width.max(1)).rev() {
            for rgb in row {
                bytes.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        bytes
    }
}
