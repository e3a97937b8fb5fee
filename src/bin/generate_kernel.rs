//! Gaussian kernel table generator
//!
//! Precomputes the blur kernel embedded into shader source as a C array
//! literal. The table holds raw Gaussian samples; the shader normalizes
//! them itself, so no unit-sum scaling happens here.
//!
//! Run with: `cargo run --bin generate_kernel`

use fluid_assets::kernel::{generate_kernel, write_kernel};

const SIZE: i32 = 3;
const SIGMA: f64 = 1.0;
const OUTPUT_PATH: &str = "scripts/gaussian_kernel.txt";

fn main() {
    let kernel = generate_kernel(SIZE, SIGMA);

    write_kernel(OUTPUT_PATH, &kernel).unwrap_or_else(|e| {
        panic!("\n\nERROR: Could not write '{}': {}\n", OUTPUT_PATH, e)
    });

    println!("Saved Gaussian kernel to {}", OUTPUT_PATH);
}
