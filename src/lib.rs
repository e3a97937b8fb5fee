//! Offline asset generators for the fluid simulator.
//!
//! Two independent one-shot tools share this library: a radial density
//! texture rasterizer (a shader input) and a 2-D Gaussian kernel table
//! generator (embedded into shader source). Both are deterministic: fixed
//! constants in, byte-identical artifacts out.

pub mod density;
pub mod kernel;

// Re-export commonly used items for convenience
pub use density::{DensityProfile, Sample, render, samples, texture_size};
pub use kernel::{format_kernel, gaussian, generate_kernel, write_kernel};
