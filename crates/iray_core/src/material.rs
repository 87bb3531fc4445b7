//! Phong surface materials.

use iray_math::DVec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

/// Commonly used colors.
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
    pub const PALE_GREEN: Color = Color::new(0.6, 0.9, 0.6);
}

/// Surface reflectance parameters for the Phong lighting model.
///
/// `alpha` is the legacy transparency factor: 1.0 is fully opaque, lower
/// values let the tracer blend in what lies behind the surface. Dielectric
/// materials ignore `alpha` and use Fresnel-weighted refraction instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient reflectance
    pub ambient: Color,
    /// Diffuse reflectance
    pub diffuse: Color,
    /// Specular reflectance
    pub specular: Color,
    /// Specular exponent
    pub shininess: f64,
    /// Legacy transparency (1 = opaque)
    pub alpha: f64,
    /// Whether the surface refracts light like glass
    pub is_dielectric: bool,
    /// Index of refraction, used only when `is_dielectric` is set
    pub refraction_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self::new(
            Color::splat(0.1),
            Color::splat(0.5),
            Color::splat(0.5),
            32.0,
        )
    }
}

impl Material {
    /// Create an opaque, non-dielectric material.
    pub const fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            alpha: 1.0,
            is_dielectric: false,
            refraction_index: 1.0,
        }
    }

    /// Set the legacy transparency factor.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Turn this material into a dielectric with the given index of refraction.
    ///
    /// - `ior`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn with_dielectric(mut self, ior: f64) -> Self {
        self.is_dielectric = true;
        self.refraction_index = ior;
        self
    }

    /// Returns true if the legacy alpha makes this surface see-through.
    pub fn is_translucent(&self) -> bool {
        self.alpha < 1.0
    }

    /// Replace the diffuse color with a texel and derive the ambient term from it.
    pub fn apply_texel(&mut self, texel: Color, ambient_fraction: f64) {
        self.diffuse = texel;
        self.ambient = ambient_fraction * texel;
    }

    // Named presets (classic OpenGL material tables)

    pub const BRASS: Material = Material::new(
        Color::new(0.329412, 0.223529, 0.027451),
        Color::new(0.780392, 0.568627, 0.113725),
        Color::new(0.992157, 0.941176, 0.807843),
        27.8974,
    );

    pub const BRONZE: Material = Material::new(
        Color::new(0.2125, 0.1275, 0.054),
        Color::new(0.714, 0.4284, 0.18144),
        Color::new(0.393548, 0.271906, 0.166721),
        25.6,
    );

    pub const CHROME: Material = Material::new(
        Color::new(0.25, 0.25, 0.25),
        Color::new(0.4, 0.4, 0.4),
        Color::new(0.774597, 0.774597, 0.774597),
        76.8,
    );

    pub const COPPER: Material = Material::new(
        Color::new(0.19125, 0.0735, 0.0225),
        Color::new(0.7038, 0.27048, 0.0828),
        Color::new(0.256777, 0.137622, 0.086014),
        12.8,
    );

    pub const GOLD: Material = Material::new(
        Color::new(0.24725, 0.1995, 0.0745),
        Color::new(0.75164, 0.60648, 0.22648),
        Color::new(0.628281, 0.555802, 0.366065),
        51.2,
    );

    pub const SILVER: Material = Material::new(
        Color::new(0.19225, 0.19225, 0.19225),
        Color::new(0.50754, 0.50754, 0.50754),
        Color::new(0.508273, 0.508273, 0.508273),
        51.2,
    );

    pub const TIN: Material = Material::new(
        Color::new(0.105882, 0.058824, 0.113725),
        Color::new(0.427451, 0.470588, 0.541176),
        Color::new(0.333333, 0.333333, 0.521569),
        9.84615,
    );

    pub const RED_PLASTIC: Material = Material::new(
        Color::new(0.0, 0.0, 0.0),
        Color::new(0.5, 0.0, 0.0),
        Color::new(0.7, 0.6, 0.6),
        32.0,
    );

    pub const WHITE: Material = Material::new(
        Color::new(0.2, 0.2, 0.2),
        Color::new(1.0, 1.0, 1.0),
        Color::new(0.5, 0.5, 0.5),
        32.0,
    );

    pub const BLACK: Material = Material::new(Color::ZERO, Color::ZERO, Color::ZERO, 1.0);

    /// Dark, highly specular glass.
    pub fn mirror_glass() -> Material {
        Material::new(
            Color::new(0.1, 0.1, 0.1),
            Color::new(0.2, 0.2, 0.3),
            Color::new(1.0, 1.0, 1.0),
            128.0,
        )
        .with_dielectric(1.5)
    }

    /// Look up a preset by name (case-insensitive).
    pub fn named(name: &str) -> Option<Material> {
        let material = match name.to_ascii_lowercase().as_str() {
            "brass" => Self::BRASS,
            "bronze" => Self::BRONZE,
            "chrome" => Self::CHROME,
            "copper" => Self::COPPER,
            "gold" => Self::GOLD,
            "silver" => Self::SILVER,
            "tin" => Self::TIN,
            "red_plastic" | "redplastic" => Self::RED_PLASTIC,
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "glass" | "mirror_glass" => Self::mirror_glass(),
            _ => return None,
        };
        Some(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_material_is_opaque() {
        let mat = Material::GOLD;
        assert_eq!(mat.alpha, 1.0);
        assert!(!mat.is_dielectric);
        assert!(!mat.is_translucent());
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Material::TIN.with_alpha(1.5).alpha, 1.0);
        assert_eq!(Material::TIN.with_alpha(-0.5).alpha, 0.0);
        assert!(Material::TIN.with_alpha(0.4).is_translucent());
    }

    #[test]
    fn test_mirror_glass_is_dielectric() {
        let glass = Material::mirror_glass();
        assert!(glass.is_dielectric);
        assert_eq!(glass.refraction_index, 1.5);
    }

    #[test]
    fn test_apply_texel() {
        let mut mat = Material::COPPER;
        mat.apply_texel(Color::new(1.0, 0.5, 0.0), 0.15);
        assert_eq!(mat.diffuse, Color::new(1.0, 0.5, 0.0));
        assert!((mat.ambient - Color::new(0.15, 0.075, 0.0)).length() < 1e-12);
        // Specular is untouched
        assert_eq!(mat.specular, Material::COPPER.specular);
    }

    #[test]
    fn test_named_presets() {
        assert_eq!(Material::named("Copper"), Some(Material::COPPER));
        assert_eq!(Material::named("red_plastic"), Some(Material::RED_PLASTIC));
        assert!(Material::named("unobtainium").is_none());
    }
}
