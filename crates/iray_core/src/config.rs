//! Render configuration.
//!
//! Everything that influences how a frame is shaded lives here and is
//! handed to the tracer explicitly. A configuration can be loaded from a
//! JSON file; missing fields fall back to their defaults.

use std::path::Path;

use iray_math::{DVec3, Interval};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::{colors, Color};

/// Errors that can occur while loading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Linear distance fog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogParams {
    /// Distance at which fog starts
    pub start: f64,
    /// Distance at which the fog color fully replaces the surface color
    pub end: f64,
    /// Fog color
    pub color: Color,
}

impl FogParams {
    /// Fraction of the surface color that survives at `distance` (1 = no fog).
    pub fn fog_factor(&self, distance: f64) -> f64 {
        if self.end <= self.start {
            return if distance < self.start { 1.0 } else { 0.0 };
        }
        Interval::UNIT.clamp((self.end - distance) / (self.end - self.start))
    }

    /// Blend `surface` toward the fog color for a fragment at `frag_pos`
    /// seen from `eye_pos`.
    pub fn apply(&self, surface: Color, eye_pos: DVec3, frag_pos: DVec3) -> Color {
        let f = self.fog_factor(eye_pos.distance(frag_pos));
        f * surface + (1.0 - f) * self.color
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of reflection/refraction bounces
    pub max_depth: u32,
    /// Rays per pixel side; each pixel is sampled `antialiasing^2` times
    pub antialiasing: u32,
    /// Color returned by rays that hit nothing
    pub default_color: Color,
    /// Whether textured surfaces use their texture instead of the flat material
    pub texture_mapping: bool,
    /// Whether primary hit distances are written to the depth buffer
    pub depth_write: bool,
    /// Optional linear fog
    pub fog: Option<FogParams>,
    /// Render buckets on the rayon thread pool instead of a single thread
    pub parallel: bool,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
    /// Tube radius of the world axes overlay; `None` hides the axes
    pub axes: Option<f64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            antialiasing: 1,
            default_color: colors::PALE_GREEN,
            texture_mapping: true,
            depth_write: true,
            fog: None,
            parallel: false,
            bucket_size: 64,
            axes: None,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded render config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.antialiasing == 0 {
            return Err(ConfigError::Invalid {
                field: "antialiasing",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::Invalid {
                field: "bucket_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(thickness) = self.axes {
            if thickness <= 0.0 {
                return Err(ConfigError::Invalid {
                    field: "axes",
                    reason: format!("thickness must be positive, got {thickness}"),
                });
            }
        }
        if let Some(fog) = &self.fog {
            if fog.start < 0.0 || fog.end < 0.0 {
                return Err(ConfigError::Invalid {
                    field: "fog",
                    reason: format!("distances must be non-negative (start {}, end {})", fog.start, fog.end),
                });
            }
        }
        Ok(())
    }

    /// Number of camera rays traced per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        self.antialiasing * self.antialiasing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.samples_per_pixel(), 1);
        assert!(config.texture_mapping);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RenderConfig::from_json_str(r#"{ "max_depth": 3, "antialiasing": 3 }"#).unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.samples_per_pixel(), 9);
        assert_eq!(config.default_color, colors::PALE_GREEN);
        assert!(config.fog.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let config = RenderConfig {
            fog: Some(FogParams {
                start: 5.0,
                end: 50.0,
                color: Color::splat(0.8),
            }),
            parallel: true,
            ..Default::default()
        };
        let json = config.to_json_string().unwrap();
        let back = RenderConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_invalid_antialiasing() {
        let result = RenderConfig::from_json_str(r#"{ "antialiasing": 0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "antialiasing", .. })
        ));
    }

    #[test]
    fn test_axes_thickness_must_be_positive() {
        let config = RenderConfig::from_json_str(r#"{ "axes": 0.25 }"#).unwrap();
        assert_eq!(config.axes, Some(0.25));

        let result = RenderConfig::from_json_str(r#"{ "axes": 0.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid { field: "axes", .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = RenderConfig::from_json_str("{ max_depth: ");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_fog_factor() {
        let fog = FogParams {
            start: 10.0,
            end: 20.0,
            color: colors::WHITE,
        };
        assert_eq!(fog.fog_factor(5.0), 1.0);
        assert_eq!(fog.fog_factor(15.0), 0.5);
        assert_eq!(fog.fog_factor(30.0), 0.0);

        let fogged = fog.apply(colors::BLACK, DVec3::ZERO, DVec3::new(0.0, 0.0, 15.0));
        assert!((fogged - Color::splat(0.5)).length() < 1e-12);
    }
}
