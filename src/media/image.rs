// SPDX-License-Identifier: MPL-2.0
//! Image loading and JPEG encoding for uploads.

use crate::config::JPEG_QUALITY;
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::DynamicImage;
use std::fs;
use std::path::Path;

/// Loads and decodes an image file (PNG, JPEG, GIF, WebP, ...).
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or a media error if the
/// bytes are not a supported image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let bytes = fs::read(path.as_ref())?;
    let image = image_rs::load_from_memory(&bytes)?;
    Ok(image)
}

/// Encodes `image` as JPEG at the upload quality.
///
/// JPEG has no alpha channel: transparent pixels are flattened to their
/// color channels.
///
/// # Errors
///
/// Returns a media error if encoding fails.
pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>> {
    encode_jpeg_with_quality(image, JPEG_QUALITY)
}

/// Encodes `image` as JPEG at `quality` (1-100).
///
/// # Errors
///
/// Returns a media error if encoding fails.
pub fn encode_jpeg_with_quality(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder).map_err(Error::from)?;
    Ok(out)
}
