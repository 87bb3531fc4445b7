//! IRAY Core - scene data shared by the renderer and the viewer.
//!
//! This crate provides:
//!
//! - **Materials**: Phong reflectance parameters and named presets
//! - **Textures**: images sampled by `(u, v)` surface coordinates
//! - **Render configuration**: shading flags, loadable from JSON

pub mod config;
pub mod material;
pub mod texture;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, FogParams, RenderConfig};
pub use material::{colors, Color, Material};
pub use texture::{Texture, TextureError, TextureResult};
