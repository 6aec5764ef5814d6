// SPDX-License-Identifier: MPL-2.0
//! Interactive image editor with live filter preview, rotation, scaling and
//! drag-to-crop.
//!
//! This module follows a "state down, messages up" pattern. The editor works
//! on a copy of the caller's image and never touches the caller's binding: a
//! confirmed edit is handed back as [`Event::Applied`], and the caller commits
//! it.
//!
//! ```text
//! Idle ──edit──▶ Previewing ──pointer down──▶ CropDragging ──pointer up──▶ CropPreview
//!   │                │                                                        │
//!   └────────────────┴──────────── Apply ─▶ Applied / Cancel ─▶ Cancelled ◀───┘
//! ```

mod crop;
mod messages;

pub use crop::{CropSelection, DisplayFrame};
pub use messages::{Event, Message};

use crate::config::ROTATION_STEP_DEGREES;
use crate::domain::editing::{CropRect, FilterKind, FilterSelection, Intensity, PreviewScale, Rotation};
use crate::media::{filter, image_transform};
use image_rs::DynamicImage;

/// Phase of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    Idle,
    Previewing,
    CropDragging,
    CropPreview,
    Applied,
    Cancelled,
}

impl EditorPhase {
    /// `Applied` and `Cancelled` end the session.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, EditorPhase::Applied | EditorPhase::Cancelled)
    }
}

/// Local state for one editing session.
#[derive(Clone)]
pub struct State {
    /// Image handed in by the caller; every preview is rendered from it.
    original_image: DynamicImage,
    /// Current preview (filter, rotation and scale applied).
    working_image: DynamicImage,
    phase: EditorPhase,
    filter: FilterSelection,
    rotation: Rotation,
    scale: PreviewScale,
    crop: CropSelection,
    display: DisplayFrame,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("filter", &self.filter)
            .field("rotation", &self.rotation)
            .field("scale", &self.scale)
            .field("crop", &self.crop)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Starts a session on a copy of `image`.
    ///
    /// The preview frame defaults to the standard editor height with the
    /// image's aspect ratio.
    #[must_use]
    pub fn new(image: &DynamicImage) -> Self {
        Self {
            original_image: image.clone(),
            working_image: image.clone(),
            phase: EditorPhase::Idle,
            filter: FilterSelection::default(),
            rotation: Rotation::ZERO,
            scale: PreviewScale::default(),
            crop: CropSelection::default(),
            display: DisplayFrame::fit_height(image.width(), image.height()),
        }
    }

    /// Uses `display` as the on-screen frame for crop mapping.
    #[must_use]
    pub fn with_display_frame(mut self, display: DisplayFrame) -> Self {
        self.display = display;
        self
    }

    /// Update the state and emit an [`Event`] for the caller when needed.
    ///
    /// Messages received after the session finished are ignored.
    pub fn update(&mut self, message: Message) -> Event {
        if self.phase.is_finished() {
            log::debug!("Editor already {:?}, ignoring {message:?}", self.phase);
            return Event::None;
        }

        match message {
            Message::FilterChanged(kind) => {
                self.filter.kind = kind;
                self.preview();
            }
            Message::IntensityChanged(value) => {
                self.filter.intensity = Intensity::new(value);
                self.preview();
            }
            Message::RotateLeft => {
                self.rotation = self.rotation.rotated_by(-ROTATION_STEP_DEGREES);
                self.preview();
            }
            Message::RotateRight => {
                self.rotation = self.rotation.rotated_by(ROTATION_STEP_DEGREES);
                self.preview();
            }
            Message::ScaleChanged(value) => {
                self.scale = PreviewScale::new(value);
                self.preview();
            }
            Message::PointerDown(point) => {
                self.crop.begin(point);
                self.phase = EditorPhase::CropDragging;
            }
            Message::PointerMove(point) => {
                self.crop.update(point);
            }
            Message::PointerUp => {
                if self.crop.finish() {
                    self.phase = EditorPhase::CropPreview;
                }
            }
            Message::DisplayResized { width, height } => {
                self.display = DisplayFrame::new(width, height);
            }
            Message::Apply => return self.apply(),
            Message::Cancel => {
                self.crop.clear();
                self.working_image = self.original_image.clone();
                self.phase = EditorPhase::Cancelled;
                return Event::Cancelled;
            }
        }
        Event::None
    }

    /// Re-renders the preview synchronously from the original image.
    fn preview(&mut self) {
        self.working_image = self.render_working();
        self.phase = EditorPhase::Previewing;
    }

    /// Filter with intensity, then rotation, then scale.
    fn render_working(&self) -> DynamicImage {
        let filtered = match self.filter.effective_intensity() {
            Some(intensity) => filter::apply(&self.original_image, self.filter.kind, intensity),
            None => self.original_image.clone(),
        };
        let rotated = image_transform::rotate(&filtered, self.rotation.degrees());
        image_transform::scale(&rotated, self.scale)
    }

    fn apply(&mut self) -> Event {
        let rendered = self.render_working();
        let output = match self.crop.rect() {
            Some(rect) => {
                match self
                    .display
                    .to_pixels(rect, rendered.width(), rendered.height())
                {
                    Some(pixels) => image_transform::crop(&rendered, pixels),
                    None => {
                        log::warn!("Preview frame has no area, applying without crop");
                        rendered
                    }
                }
            }
            None => rendered,
        };

        self.crop.clear();
        self.working_image = output.clone();
        self.phase = EditorPhase::Applied;
        Event::Applied(output)
    }

    #[must_use]
    pub fn state(&self) -> EditorPhase {
        self.phase
    }

    #[must_use]
    pub fn working_image(&self) -> &DynamicImage {
        &self.working_image
    }

    /// Crop rectangle in display coordinates, if one is drawn.
    #[must_use]
    pub fn crop_rect(&self) -> Option<CropRect> {
        self.crop.rect()
    }

    #[must_use]
    pub fn filter(&self) -> FilterKind {
        self.filter.kind
    }

    #[must_use]
    pub fn intensity(&self) -> Intensity {
        self.filter.intensity
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn scale(&self) -> PreviewScale {
        self.scale
    }

    #[must_use]
    pub fn display_frame(&self) -> DisplayFrame {
        self.display
    }
}
