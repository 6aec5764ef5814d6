// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and small in-memory fixtures.
//!
//! Float assertions come from the `approx` crate, which handles precision
//! issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use image_rs::{DynamicImage, Rgba, RgbaImage};

/// Epsilon for f32 values that should be "exactly equal".
pub const F32_EPSILON: f32 = 1e-6;

/// Epsilon for f64 values that should be "exactly equal".
pub const F64_EPSILON: f64 = 1e-10;

/// Solid-color RGBA image.
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
}

/// RGBA image whose pixels encode their own coordinates, so that moves
/// (rotation, crop) can be traced back to the source pixel.
pub fn coordinate_image(width: u32, height: u32) -> DynamicImage {
    let buffer = RgbaImage::from_fn(width, height, |x, y| {
        #[allow(clippy::cast_possible_truncation)]
        Rgba([x as u8, y as u8, 128, 255])
    });
    DynamicImage::ImageRgba8(buffer)
}
