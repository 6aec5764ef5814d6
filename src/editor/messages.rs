// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::domain::editing::{FilterKind, Point};
use image_rs::DynamicImage;

/// Messages emitted by the editor controls and the preview surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    FilterChanged(FilterKind),
    /// Intensity slider moved (clamped to 0.0–1.0)
    IntensityChanged(f32),
    RotateLeft,
    RotateRight,
    /// Scale slider moved (clamped to 0.5–2.0)
    ScaleChanged(f32),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// Preview frame resized
    DisplayResized { width: f32, height: f32 },
    Apply,
    Cancel,
}

/// Events propagated to the caller, which owns the committed image.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The edit was confirmed; the caller should replace its image with this one.
    Applied(DynamicImage),
    /// The edit was discarded; the caller's image is untouched.
    Cancelled,
}

impl Event {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Event::None)
    }
}
