//! Example: Load a render config and/or a texture and print what was read.
//!
//! Run with: cargo run --example inspect_inputs -- render.json earth.png

use std::env;

use iray_core::{RenderConfig, Texture};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        println!("Usage: inspect_inputs <render.json | image>...");
        println!("\nPrints the parsed render configuration or texture summary.");
        println!("\nDefault configuration:");
        match RenderConfig::default().to_json_string() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing config: {e}"),
        }
        return;
    }

    for path in &args {
        if path.ends_with(".json") {
            match RenderConfig::load(path) {
                Ok(config) => {
                    println!("\n=== Config: {path} ===");
                    println!("Max depth: {}", config.max_depth);
                    println!("Samples per pixel: {}", config.samples_per_pixel());
                    println!("Texture mapping: {}", config.texture_mapping);
                    println!("Parallel: {} (bucket size {})", config.parallel, config.bucket_size);
                    if let Some(fog) = config.fog {
                        println!("Fog: {:.2} to {:.2}", fog.start, fog.end);
                    }
                }
                Err(e) => eprintln!("Error loading config {path}: {e}"),
            }
        } else {
            match Texture::load(path) {
                Ok(texture) => {
                    println!("\n=== Texture: {path} ===");
                    println!("Size: {}x{}", texture.width, texture.height);
                    let c = texture.pixel_uv(0.5, 0.5);
                    println!("Center texel: ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z);
                }
                Err(e) => eprintln!("Error loading texture {path}: {e}"),
            }
        }
    }
}
