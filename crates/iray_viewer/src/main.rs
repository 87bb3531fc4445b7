mod demo;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use iray_core::{RenderConfig, Texture};
use iray_renderer::{FrameBuffer, RayTracer};

use demo::LightSwitches;

/// Render the demo scene of implicit surfaces to a PNG file.
#[derive(Parser, Debug)]
#[command(name = "iray_viewer", version, about)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Reflection/refraction depth
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=4))]
    depth: Option<u32>,

    /// Rays per pixel side (1 or 3)
    #[arg(long, value_parser = parse_antialiasing)]
    antialiasing: Option<u32>,

    /// Render buckets on all cores
    #[arg(long)]
    parallel: bool,

    /// Overlay the positive world axes as tubes of this radius
    #[arg(long, value_name = "THICKNESS")]
    axes: Option<f64>,

    /// JSON render configuration; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image applied to the sphere instead of the built-in checkerboard
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Output image
    #[arg(long, short, default_value = "render.png")]
    output: PathBuf,

    /// Start with the spot light switched off
    #[arg(long)]
    spotlight_off: bool,

    /// Start with the positional light switched off
    #[arg(long)]
    positional_off: bool,
}

fn parse_antialiasing(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(n @ (1 | 3)) => Ok(n),
        Ok(n) => Err(format!("antialiasing must be 1 or 3, got {n}")),
        Err(e) => Err(e.to_string()),
    }
}

impl Args {
    /// Merge the config file (if any) with command line overrides.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("Failed to load render config {}", path.display()))?,
            None => RenderConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(antialiasing) = self.antialiasing {
            config.antialiasing = antialiasing;
        }
        if self.parallel {
            config.parallel = true;
        }
        if self.axes.is_some() {
            config.axes = self.axes;
        }
        config.validate()?;
        Ok(config)
    }

    fn globe_texture(&self) -> Result<Texture> {
        match &self.texture {
            Some(path) => {
                Texture::load(path).with_context(|| format!("Failed to load texture {}", path.display()))
            }
            None => Ok(demo::default_globe()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Starting IRAY viewer");

    let config = args.render_config()?;
    log::info!(
        "Render settings: {}x{}, depth {}, {} spp{}",
        args.width,
        args.height,
        config.max_depth,
        config.samples_per_pixel(),
        if config.parallel { ", parallel" } else { "" }
    );

    let scene = demo::build_scene(
        args.width,
        args.height,
        Arc::new(args.globe_texture()?),
        Arc::new(demo::default_label()),
        LightSwitches {
            positional: !args.positional_off,
            spot: !args.spotlight_off,
        },
    );

    let mut frame_buffer = FrameBuffer::new(args.width, args.height);
    frame_buffer.set_clear_color(config.default_color);
    frame_buffer.clear_color_buffer();
    frame_buffer.clear_depth_buffer();

    let tracer = RayTracer::new(config);
    tracer.raytrace_scene(&mut frame_buffer, &scene);

    let image = image::RgbaImage::from_raw(args.width, args.height, frame_buffer.to_rgba())
        .context("Framebuffer size does not match image dimensions")?;
    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["iray_viewer"]).unwrap();
        assert_eq!(args.width, 800);
        assert_eq!(args.height, 600);
        assert_eq!(args.output, PathBuf::from("render.png"));

        let config = args.render_config().unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "iray_viewer",
            "--depth",
            "3",
            "--antialiasing",
            "3",
            "--parallel",
            "--spotlight-off",
            "--axes",
            "0.25",
        ])
        .unwrap();
        let config = args.render_config().unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.antialiasing, 3);
        assert!(config.parallel);
        assert_eq!(config.axes, Some(0.25));
        assert!(args.spotlight_off);
        assert!(!args.positional_off);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["iray_viewer", "--depth", "5"]).is_err());
        assert!(Args::try_parse_from(["iray_viewer", "--antialiasing", "2"]).is_err());
        assert!(Args::try_parse_from(["iray_viewer", "--antialiasing", "x"]).is_err());

        let args = Args::try_parse_from(["iray_viewer", "--axes", "0"]).unwrap();
        assert!(args.render_config().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args::try_parse_from(["iray_viewer", "--config", "/no/such/render.json"]).unwrap();
        assert!(args.render_config().is_err());
    }
}
