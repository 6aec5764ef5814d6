// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for rotate, crop, and scale operations.
//!
//! Positive rotation angles turn the image clockwise, like
//! [`DynamicImage::rotate90`].

use crate::domain::editing::{CropRect, PreviewScale, Rotation};
use image_rs::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};
use tiny_skia::{FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};

// ==========================================================================
// Rotation
// ==========================================================================

/// Rotates `image` by `degrees` about its center.
///
/// The output canvas is the integral bounding box of the rotated source, so
/// no pixel is clipped. Exact quarter turns are lossless; other angles are
/// resampled bilinearly onto a transparent canvas.
#[must_use]
pub fn rotate(image: &DynamicImage, degrees: f32) -> DynamicImage {
    match Rotation::from_degrees(degrees).quarter_turns() {
        Some(0) => image.clone(),
        Some(1) => image.rotate90(),
        Some(2) => image.rotate180(),
        Some(3) => image.rotate270(),
        _ => rotate_resampled(image, degrees).unwrap_or_else(|| {
            log::warn!(
                "Rotation by {degrees} degrees failed for a {}x{} image",
                image.width(),
                image.height()
            );
            image.clone()
        }),
    }
}

/// Size of the axis-aligned box enclosing a `width × height` rectangle
/// rotated by `degrees`.
#[must_use]
pub fn rotated_bounds(width: u32, height: u32, degrees: f32) -> (u32, u32) {
    let radians = f64::from(degrees).to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    let (w, h) = (f64::from(width), f64::from(height));

    // Trims float noise so that e.g. 100.0000001 does not grow a pixel
    let integral = |v: f64| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (v - 1e-6).ceil().max(1.0) as u32;
        n
    };
    (integral(w * cos + h * sin), integral(w * sin + h * cos))
}

fn rotate_resampled(image: &DynamicImage, degrees: f32) -> Option<DynamicImage> {
    let source = to_pixmap(&image.to_rgba8())?;
    let (out_w, out_h) = rotated_bounds(image.width(), image.height(), degrees);
    let mut canvas = Pixmap::new(out_w, out_h)?;

    #[allow(clippy::cast_precision_loss)]
    let transform = Transform::from_translate(
        -(image.width() as f32) / 2.0,
        -(image.height() as f32) / 2.0,
    )
    .post_rotate(degrees)
    .post_translate(out_w as f32 / 2.0, out_h as f32 / 2.0);

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    canvas.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

    Some(DynamicImage::ImageRgba8(from_pixmap(&canvas)))
}

/// Copies straight-alpha RGBA into a premultiplied pixmap.
fn to_pixmap(rgba: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(rgba.width(), rgba.height())?;
    let mut data = rgba.as_raw().clone();
    for px in data.chunks_exact_mut(4) {
        let alpha = u16::from(px[3]);
        for channel in &mut px[..3] {
            // (c * a + 127) / 255 stays within u8
            #[allow(clippy::cast_possible_truncation)]
            let premultiplied = ((u16::from(*channel) * alpha + 127) / 255) as u8;
            *channel = premultiplied;
        }
    }
    Pixmap::from_vec(data, size)
}

fn from_pixmap(pixmap: &Pixmap) -> RgbaImage {
    let pixels = pixmap.pixels();
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let index = (y * pixmap.width() + x) as usize;
        let color = pixels[index].demultiply();
        Rgba([color.red(), color.green(), color.blue(), color.alpha()])
    })
}

// ==========================================================================
// Crop
// ==========================================================================

/// Crops `image` to the intersection of `rect` with the image bounds.
///
/// An empty intersection (rectangle outside the image, or zero-sized)
/// leaves the image unmodified.
#[must_use]
pub fn crop(image: &DynamicImage, rect: CropRect) -> DynamicImage {
    if rect.is_empty() {
        return image.clone();
    }
    match rect.to_pixel_rect().intersect(image.width(), image.height()) {
        // Intersected coordinates are within [0, width/height]
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(px) => image.crop_imm(px.x as u32, px.y as u32, px.width, px.height),
        None => image.clone(),
    }
}

// ==========================================================================
// Scale
// ==========================================================================

/// Resizes `image` by `scale`, keeping at least one pixel per side.
#[must_use]
pub fn scale(image: &DynamicImage, scale: PreviewScale) -> DynamicImage {
    if scale.is_original() {
        return image.clone();
    }
    let factor = scale.value();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let (width, height) = (
        (image.width() as f32 * factor).round().max(1.0) as u32,
        (image.height() as f32 * factor).round().max(1.0) as u32,
    );
    image.resize_exact(width, height, FilterType::Triangle)
}
