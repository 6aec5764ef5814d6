// SPDX-License-Identifier: MPL-2.0
//! Crop selection on the on-screen preview.
//!
//! The user drags in display coordinates; the rectangle is only mapped to
//! image pixels when the edit is applied.

use crate::config::EDITOR_DISPLAY_HEIGHT;
use crate::domain::editing::{CropRect, Point};

/// Size of the frame the working image is shown in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayFrame {
    pub width: f32,
    pub height: f32,
}

impl DisplayFrame {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Frame of the default editor height, as wide as the image aspect ratio
    /// requires.
    #[must_use]
    pub fn fit_height(image_width: u32, image_height: u32) -> Self {
        let height = EDITOR_DISPLAY_HEIGHT;
        if image_height == 0 {
            return Self::new(0.0, height);
        }
        #[allow(clippy::cast_precision_loss)]
        let aspect = image_width as f32 / image_height as f32;
        Self::new(height * aspect, height)
    }

    /// Maps a rectangle drawn on this frame onto a `width × height` image.
    ///
    /// Returns `None` when the frame has no area, since no meaningful scale
    /// factor exists then.
    #[must_use]
    pub fn to_pixels(&self, rect: CropRect, width: u32, height: u32) -> Option<CropRect> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let (scale_x, scale_y) = (width as f32 / self.width, height as f32 / self.height);
        Some(rect.scaled(scale_x, scale_y))
    }
}

/// In-progress or finished crop selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CropSelection {
    anchor: Option<Point>,
    rect: Option<CropRect>,
}

impl CropSelection {
    /// Starts a new selection at `point`, dropping any previous rectangle.
    pub fn begin(&mut self, point: Point) {
        self.anchor = Some(point);
        self.rect = Some(CropRect::from_points(point, point));
    }

    /// Stretches the selection to `point`. Ignored when no drag is active.
    pub fn update(&mut self, point: Point) -> bool {
        match self.anchor {
            Some(anchor) => {
                self.rect = Some(CropRect::from_points(anchor, point));
                true
            }
            None => false,
        }
    }

    /// Ends the drag, keeping the rectangle.
    pub fn finish(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    #[must_use]
    pub fn rect(&self) -> Option<CropRect> {
        self.rect
    }
}
