//! Discretized 2-D Gaussian kernel generation.
//!
//! Produces a flat table of raw Gaussian density samples over a small odd
//! window and serializes it as a C array literal for embedding into shader
//! source. The table is deliberately NOT normalized to unit sum; the
//! consuming shader normalizes downstream if it needs to.

use std::f64::consts::PI;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// The 1-D normal density evaluated at radial distance `x`.
pub fn gaussian(x: f64, sigma: f64) -> f64 {
    (-(x * x) / (2.0 * sigma * sigma)).exp() / ((2.0 * PI).sqrt() * sigma)
}

/// Flattened `(2*size+1) x (2*size+1)` kernel of Gaussian samples.
///
/// Row-major over integer offsets `(i, j)` with `i, j` in
/// `[-size, size]`: outer loop over `i`, inner loop over `j`. The value at
/// offset `(i, j)` is the density at distance `sqrt(i^2 + j^2)`.
pub fn generate_kernel(size: i32, sigma: f64) -> Vec<f64> {
    let mut kernel = Vec::with_capacity(((2 * size + 1) * (2 * size + 1)).max(0) as usize);
    for i in -size..=size {
        for j in -size..=size {
            let dist = ((i * i + j * j) as f64).sqrt();
            kernel.push(gaussian(dist, sigma));
        }
    }
    kernel
}

/// Serialize a kernel as a one-line C array literal.
///
/// The declared array size comes from the kernel's actual length, and every
/// value is formatted with exactly 6 decimal digits and followed by a comma:
/// `float kernel[49] = {0.161780, ..., 0.000216, };`
pub fn format_kernel(kernel: &[f64]) -> String {
    let mut out = format!("float kernel[{}] = {{", kernel.len());
    for value in kernel {
        let _ = write!(out, "{:.6}, ", value);
    }
    out.push_str("};\n");
    out
}

/// Write the serialized kernel, overwriting the target unconditionally.
pub fn write_kernel(path: impl AsRef<Path>, kernel: &[f64]) -> io::Result<()> {
    fs::write(path, format_kernel(kernel))
}
