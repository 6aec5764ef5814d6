// SPDX-License-Identifier: MPL-2.0
//! Image render pipeline: rotation, then filters in order, then crop.
//!
//! The pipeline is pure and never fails. Identical inputs produce
//! bit-identical output.

use super::{filter, image_transform};
use crate::domain::editing::{CropRect, FilterKind, Intensity};
use image_rs::DynamicImage;

/// Renders `source` with the committed edits of an edit context.
///
/// Filters run at full intensity, in list order. The crop rectangle is
/// expressed in post-rotation coordinates.
#[must_use]
pub fn render(
    source: &DynamicImage,
    rotation_degrees: f32,
    filters: &[FilterKind],
    crop: Option<CropRect>,
) -> DynamicImage {
    let filters: Vec<_> = filters.iter().map(|&kind| (kind, Intensity::FULL)).collect();
    render_with_intensity(source, rotation_degrees, &filters, crop)
}

/// Same as [`render`], with a per-filter intensity.
#[must_use]
pub fn render_with_intensity(
    source: &DynamicImage,
    rotation_degrees: f32,
    filters: &[(FilterKind, Intensity)],
    crop: Option<CropRect>,
) -> DynamicImage {
    let mut image = image_transform::rotate(source, rotation_degrees);
    for &(kind, intensity) in filters {
        image = filter::apply(&image, kind, intensity);
    }
    match crop {
        Some(rect) => image_transform::crop(&image, rect),
        None => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{coordinate_image, solid_image};

    #[test]
    fn no_edits_is_identity() {
        let img = coordinate_image(6, 4);
        assert_eq!(render(&img, 0.0, &[], None), img);
    }

    #[test]
    fn only_none_filters_is_identity() {
        let img = coordinate_image(6, 4);
        assert_eq!(
            render(&img, 0.0, &[FilterKind::None, FilterKind::None], None),
            img
        );
    }

    #[test]
    fn crop_applies_after_rotation() {
        // 4x2 rotated 90 degrees is 2x4; a crop at y=3 only exists after rotation
        let img = coordinate_image(4, 2);
        let out = render(&img, 90.0, &[], Some(CropRect::new(0.0, 3.0, 2.0, 1.0)));
        assert_eq!((out.width(), out.height()), (2, 1));
        assert_eq!(out.to_rgba8().get_pixel(0, 0).0, [3, 1, 128, 255]);
    }

    #[test]
    fn filters_apply_in_order() {
        let img = solid_image(1, 1, [200, 60, 20, 255]);
        let a = render(&img, 0.0, &[FilterKind::Sepia, FilterKind::Mono], None);
        let b = render(&img, 0.0, &[FilterKind::Mono, FilterKind::Sepia], None);
        let [r, g, b_, _] = a.to_rgba8().get_pixel(0, 0).0;
        assert!(r == g && g == b_, "mono last yields gray");
        let [r, g, _, _] = b.to_rgba8().get_pixel(0, 0).0;
        assert_ne!(r, g, "sepia last yields a tint");
    }

    #[test]
    fn crop_outside_returns_filtered_uncropped() {
        let img = coordinate_image(4, 4);
        let out = render(
            &img,
            0.0,
            &[FilterKind::Mono],
            Some(CropRect::new(50.0, 50.0, 2.0, 2.0)),
        );
        assert_eq!((out.width(), out.height()), (4, 4));
    }

    #[test]
    fn rendering_is_deterministic() {
        let img = coordinate_image(20, 12);
        let filters = [FilterKind::Vivid, FilterKind::Blur];
        let crop = Some(CropRect::new(1.0, 1.0, 8.0, 8.0));
        assert_eq!(
            render(&img, 33.0, &filters, crop),
            render(&img, 33.0, &filters, crop)
        );
    }
}
