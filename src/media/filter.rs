// SPDX-License-Identifier: MPL-2.0
//! Color and blur filters.
//!
//! Every filter is a pure function from image to image. Color filters work on
//! straight-alpha RGBA and never touch the alpha channel.

use crate::domain::editing::{FilterKind, Intensity};
use image_rs::{DynamicImage, Rgba, RgbaImage};

/// Rec. 709 luma weights.
const LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Sepia tone matrix (rows produce R, G, B).
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

const VIVID_SATURATION: f32 = 1.2;
const VIVID_BRIGHTNESS: f32 = 0.8;
const VIVID_CONTRAST: f32 = 1.1;
const NOIR_CONTRAST: f32 = 1.5;

/// Applies `kind` at `intensity`. [`FilterKind::None`] returns the input.
///
/// Intensity only affects sepia, blur and contrast.
#[must_use]
pub fn apply(image: &DynamicImage, kind: FilterKind, intensity: Intensity) -> DynamicImage {
    match kind {
        FilterKind::None => image.clone(),
        FilterKind::Sepia => map_pixels(image, |rgb| sepia(rgb, intensity.value())),
        FilterKind::Noir => map_pixels(image, noir),
        FilterKind::Mono => map_pixels(image, |rgb| {
            let y = luma(rgb);
            [y, y, y]
        }),
        FilterKind::Vivid => map_pixels(image, vivid),
        FilterKind::Blur => blur(image, intensity.blur_radius()),
        FilterKind::Contrast => {
            let factor = intensity.contrast_factor();
            map_pixels(image, |rgb| rgb.map(|c| contrast(c, factor)))
        }
    }
}

fn map_pixels(image: &DynamicImage, f: impl Fn([f32; 3]) -> [f32; 3]) -> DynamicImage {
    let mut rgba = image.to_rgba8();
    for Rgba(px) in rgba.pixels_mut() {
        let rgb = [px[0], px[1], px[2]].map(|c| f32::from(c) / 255.0);
        let out = f(rgb);
        for (channel, value) in px.iter_mut().zip(out) {
            *channel = to_u8(value);
        }
    }
    DynamicImage::ImageRgba8(rgba)
}

fn to_u8(value: f32) -> u8 {
    // Clamped to [0, 255] before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    byte
}

fn luma(rgb: [f32; 3]) -> f32 {
    rgb[0] * LUMA[0] + rgb[1] * LUMA[1] + rgb[2] * LUMA[2]
}

/// Scales the distance from mid-gray by `factor`.
fn contrast(channel: f32, factor: f32) -> f32 {
    (channel - 0.5) * factor + 0.5
}

fn sepia(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let toned = SEPIA.map(|row| row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]);
    [0, 1, 2].map(|i| rgb[i] + (toned[i] - rgb[i]) * amount)
}

fn noir(rgb: [f32; 3]) -> [f32; 3] {
    let y = contrast(luma(rgb), NOIR_CONTRAST);
    [y, y, y]
}

fn vivid(rgb: [f32; 3]) -> [f32; 3] {
    let y = luma(rgb);
    rgb.map(|c| {
        let saturated = y + (c - y) * VIVID_SATURATION;
        contrast(saturated * VIVID_BRIGHTNESS, VIVID_CONTRAST)
    })
}

/// Gaussian blur with the given radius in pixels. Keeps the image size.
fn blur(image: &DynamicImage, radius: f32) -> DynamicImage {
    if radius <= 0.0 {
        return image.clone();
    }
    let rgba: RgbaImage = image_rs::imageops::blur(&image.to_rgba8(), radius);
    DynamicImage::ImageRgba8(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{coordinate_image, solid_image};

    fn pixel(image: &DynamicImage) -> [u8; 4] {
        image.to_rgba8().get_pixel(0, 0).0
    }

    #[test]
    fn none_is_identity() {
        let img = coordinate_image(4, 4);
        assert_eq!(apply(&img, FilterKind::None, Intensity::FULL), img);
    }

    #[test]
    fn mono_produces_gray_and_keeps_alpha() {
        let img = solid_image(2, 2, [255, 0, 0, 128]);
        let [r, g, b, a] = pixel(&apply(&img, FilterKind::Mono, Intensity::FULL));
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, 54); // 0.2126 * 255
        assert_eq!(a, 128);
    }

    #[test]
    fn sepia_full_intensity_warms_gray() {
        let img = solid_image(1, 1, [128, 128, 128, 255]);
        let [r, g, b, _] = pixel(&apply(&img, FilterKind::Sepia, Intensity::FULL));
        assert!(r > g && g > b);
    }

    #[test]
    fn sepia_zero_intensity_is_identity() {
        let img = coordinate_image(3, 3);
        assert_eq!(apply(&img, FilterKind::Sepia, Intensity::new(0.0)), img);
    }

    #[test]
    fn contrast_half_intensity_is_identity() {
        // factor = 0.5 * 2 = 1.0
        let img = coordinate_image(3, 3);
        assert_eq!(apply(&img, FilterKind::Contrast, Intensity::new(0.5)), img);
    }

    #[test]
    fn contrast_zero_intensity_flattens_to_mid_gray() {
        let img = coordinate_image(3, 3);
        let [r, g, b, _] = pixel(&apply(&img, FilterKind::Contrast, Intensity::new(0.0)));
        assert_eq!([r, g, b], [128, 128, 128]);
    }

    #[test]
    fn vivid_darkens_white() {
        let img = solid_image(1, 1, [255, 255, 255, 255]);
        let [r, _, _, _] = pixel(&apply(&img, FilterKind::Vivid, Intensity::FULL));
        // (0.8 - 0.5) * 1.1 + 0.5 = 0.83
        assert_eq!(r, 212);
    }

    #[test]
    fn noir_is_gray() {
        let img = solid_image(1, 1, [200, 40, 90, 255]);
        let [r, g, b, _] = pixel(&apply(&img, FilterKind::Noir, Intensity::FULL));
        assert!(r == g && g == b);
    }

    #[test]
    fn blur_keeps_size_and_smooths_edges() {
        let mut buffer = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        for y in 0..20 {
            for x in 10..20 {
                buffer.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let img = DynamicImage::ImageRgba8(buffer);
        let blurred = apply(&img, FilterKind::Blur, Intensity::new(0.3));
        assert_eq!((blurred.width(), blurred.height()), (20, 20));
        let edge = blurred.to_rgba8().get_pixel(9, 10).0[0];
        assert!(edge > 0 && edge < 255);
    }

    #[test]
    fn blur_zero_intensity_is_identity() {
        let img = coordinate_image(4, 4);
        assert_eq!(apply(&img, FilterKind::Blur, Intensity::new(0.0)), img);
    }

    #[test]
    fn filters_are_deterministic() {
        let img = coordinate_image(16, 16);
        for kind in FilterKind::ALL {
            let a = apply(&img, kind, Intensity::default());
            let b = apply(&img, kind, Intensity::default());
            assert_eq!(a, b, "{kind} must be pure");
        }
    }
}
