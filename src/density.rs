//! Radial density texture generation.
//!
//! Samples a radially symmetric density falloff at discrete polar
//! coordinates (angle steps x radius steps) and plots the samples into an
//! RGBA raster. The fill is polar, not a dense Cartesian sweep: pixels no
//! sample lands on stay transparent black.

use image::{Rgba, RgbaImage};
use std::f64::consts::PI;

/// The radial falloff curve mapping distance-from-center to alpha.
///
/// The normalization constant `PI * radius^6 / 6` is computed once at
/// construction. `radius` is not validated; a zero radius divides by zero
/// downstream, consistent with the tool's one-shot nature.
#[derive(Clone, Copy, Debug)]
pub struct DensityProfile {
    radius: u32,
    norm: f64,
}

impl DensityProfile {
    pub fn new(radius: u32) -> Self {
        let r = radius as f64;
        Self {
            radius,
            norm: PI * r.powi(6) / 6.0,
        }
    }

    /// Density-to-alpha mapping: `0.1 * (radius^2 - dist^2)^3 / norm`.
    pub fn alpha(&self, dist: f64) -> f64 {
        let r = self.radius as f64;
        0.1 * (r * r - dist * dist).powi(3) / self.norm
    }

    /// Peak of the falloff, reached at the center (`dist = 0`).
    pub fn max_alpha(&self) -> f64 {
        self.alpha(0.0)
    }
}

/// Side length of the square output texture for a given radius.
pub fn texture_size(radius: u32) -> u32 {
    radius * 2 + 2
}

/// One plotted pixel: integer raster coordinates plus the RGBA value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub x: u32,
    pub y: u32,
    pub color: Rgba<u8>,
}

/// Iterator over every density sample in plotting order.
///
/// Order is angle-major, radial-step-minor and is part of the output
/// contract: when two samples truncate to the same pixel, the later one
/// wins.
pub struct Samples {
    profile: DensityProfile,
    solution: u32,
    center: u32,
    theta: u32,
    r0: u32,
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.profile.radius == 0 || self.theta >= self.solution {
            return None;
        }

        let t = PI * 2.0 * self.theta as f64 / self.solution as f64;
        let r0 = self.r0 as f64;
        let x0 = self.center as f64;

        // Truncation, not rounding, matches the reference artifact.
        let x = (x0 + r0 * t.cos()) as u32;
        let y = (x0 + r0 * t.sin()) as u32;
        let d = (255.0 * 0.6 * self.profile.alpha(r0)) as u8;

        self.r0 += 1;
        if self.r0 >= self.profile.radius {
            self.r0 = 0;
            self.theta += 1;
        }

        Some(Sample {
            x,
            y,
            color: Rgba([255, 255, 255, d]),
        })
    }
}

/// All samples for a texture of the given radius, at `solution` evenly
/// spaced angles in `[0, 2*PI)` and integer radial steps in `[0, radius)`.
pub fn samples(radius: u32, solution: u32) -> Samples {
    Samples {
        profile: DensityProfile::new(radius),
        solution,
        center: texture_size(radius) / 2,
        theta: 0,
        r0: 0,
    }
}

/// Render the density texture into a transparent-black RGBA buffer.
///
/// Plotting is last-write-wins: a later sample landing on an already
/// written pixel overwrites it unconditionally, with no blending.
pub fn render(radius: u32, solution: u32) -> RgbaImage {
    let size = texture_size(radius);
    let mut img = RgbaImage::new(size, size);
    for sample in samples(radius, solution) {
        img.put_pixel(sample.x, sample.y, sample.color);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_size_is_diameter_plus_two() {
        assert_eq!(texture_size(70), 142);
        assert_eq!(texture_size(1), 4);
    }

    #[test]
    fn profile_peaks_at_center() {
        let profile = DensityProfile::new(70);
        // 0.1 * r^6 / (PI * r^6 / 6) = 0.6 / PI, independent of radius
        let expected = 0.6 / PI;
        assert!((profile.max_alpha() - expected).abs() < 1e-12);
        assert!((DensityProfile::new(9).max_alpha() - expected).abs() < 1e-12);
    }

    #[test]
    fn profile_strictly_decreases_with_distance() {
        let profile = DensityProfile::new(70);
        for r0 in 1..70u32 {
            assert!(
                profile.alpha(r0 as f64) < profile.alpha(r0 as f64 - 1.0),
                "alpha not decreasing at r0 = {}",
                r0
            );
        }
    }

    #[test]
    fn sample_count_is_solution_times_radius() {
        assert_eq!(samples(70, 2048).count(), 70 * 2048);
        assert_eq!(samples(5, 16).count(), 5 * 16);
    }

    #[test]
    fn samples_stay_inside_texture_with_bounded_alpha() {
        let size = texture_size(70);
        for sample in samples(70, 2048) {
            assert!(sample.x < size && sample.y < size);
            let Rgba([r, g, b, a]) = sample.color;
            assert_eq!((r, g, b), (255, 255, 255));
            // trunc(255 * 0.6 * 0.6/PI) = 29 at the center
            assert!(a <= 29, "alpha {} out of range", a);
        }
    }

    #[test]
    fn render_matches_reference_dimensions() {
        let img = render(70, 2048);
        assert_eq!(img.dimensions(), (142, 142));
    }

    #[test]
    fn untouched_pixels_stay_transparent() {
        let img = render(70, 2048);
        // Corners are outside every sampled radius.
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*img.get_pixel(141, 141), Rgba([0, 0, 0, 0]));
        assert_eq!(*img.get_pixel(0, 141), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn center_pixel_holds_peak_alpha() {
        // Every angle plots r0 = 0 at the center; last write wins but all
        // writes there carry the peak value.
        let img = render(70, 2048);
        assert_eq!(*img.get_pixel(71, 71), Rgba([255, 255, 255, 29]));
    }

    #[test]
    fn render_is_deterministic() {
        let a = render(70, 2048);
        let b = render(70, 2048);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn coordinates_truncate_toward_zero() {
        // theta = 0 plots along the positive x axis: y stays exactly at the
        // center row and x advances one pixel per radial step.
        let row: Vec<Sample> = samples(70, 2048).take(70).collect();
        for (r0, sample) in row.iter().enumerate() {
            assert_eq!(sample.y, 71);
            assert_eq!(sample.x, 71 + r0 as u32);
        }
    }
}
