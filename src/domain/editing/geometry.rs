// SPDX-License-Identifier: MPL-2.0
//! Points and crop rectangles.

/// A point in on-screen or image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer pixel rectangle, as consumed by the crop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Intersects this rectangle with a `width × height` image.
    ///
    /// Returns `None` when the intersection is empty.
    #[must_use]
    pub fn intersect(&self, width: u32, height: u32) -> Option<PixelRect> {
        let left = self.x.max(0);
        let top = self.y.max(0);
        let right = self
            .x
            .saturating_add(i64::from(self.width))
            .min(i64::from(width));
        let bottom = self
            .y
            .saturating_add(i64::from(self.height))
            .min(i64::from(height));

        if right <= left || bottom <= top {
            return None;
        }

        // Bounded by the image dimensions, which are u32
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(PixelRect {
            x: left,
            y: top,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

/// A crop rectangle with floating-point coordinates.
///
/// Width and height are never negative: [`CropRect::from_points`] always
/// produces the normalized bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Normalized bounding box of two points, in any drag direction.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Scales every coordinate independently along each axis.
    #[must_use]
    pub fn scaled(&self, scale_x: f32, scale_y: f32) -> Self {
        Self {
            x: self.x * scale_x,
            y: self.y * scale_y,
            width: self.width * scale_x,
            height: self.height * scale_y,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Converts to the smallest integer pixel rectangle containing this one.
    #[must_use]
    pub fn to_pixel_rect(&self) -> PixelRect {
        let left = self.x.floor();
        let top = self.y.floor();
        let right = (self.x + self.width).ceil();
        let bottom = (self.y + self.height).ceil();

        // Saturating float-to-int casts are the intended behaviour here
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        PixelRect {
            x: left as i64,
            y: top as i64,
            width: (right - left).max(0.0) as u32,
            height: (bottom - top).max(0.0) as u32,
        }
    }
}
