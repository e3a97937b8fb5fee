//! Density texture generator
//!
//! Rasterizes the radial density falloff used by the fluid shader into an
//! RGBA PNG. All parameters are fixed constants; the output is
//! deterministic and overwrites any previous texture.
//!
//! Run with: `cargo run --bin generate_density`

use fluid_assets::density::{DensityProfile, samples, texture_size};
use image::RgbaImage;

const RADIUS: u32 = 70;
const SOLUTION: u32 = 2048;
const OUTPUT_PATH: &str = "./textures/density.png";

fn main() {
    let size = texture_size(RADIUS);
    let mut img = RgbaImage::new(size, size);

    for sample in samples(RADIUS, SOLUTION) {
        img.put_pixel(sample.x, sample.y, sample.color);
        let [r, g, b, a] = sample.color.0;
        println!(
            "Set pixel at ({}, {}) to density ({}, {}, {}, {})",
            sample.x, sample.y, r, g, b, a
        );
    }

    img.save(OUTPUT_PATH).unwrap_or_else(|e| {
        panic!("\n\nERROR: Could not write '{}': {}\n", OUTPUT_PATH, e)
    });

    let profile = DensityProfile::new(RADIUS);
    println!("Max density: {}", profile.max_alpha() * 255.0);
    println!("Saved density texture to {}", OUTPUT_PATH);
}
