// SPDX-License-Identifier: MPL-2.0
//! Edit context: a media item plus the edits queued against it.

use super::render;
use crate::domain::editing::{CropRect, FilterKind, Rotation};
use image_rs::DynamicImage;
use std::path::{Path, PathBuf};

/// The item being edited: exactly one of an image or a video file.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaItem {
    Image(DynamicImage),
    Video(PathBuf),
}

impl MediaItem {
    #[must_use]
    pub fn as_image(&self) -> Option<&DynamicImage> {
        match self {
            MediaItem::Image(image) => Some(image),
            MediaItem::Video(_) => None,
        }
    }

    #[must_use]
    pub fn as_video(&self) -> Option<&Path> {
        match self {
            MediaItem::Image(_) => None,
            MediaItem::Video(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditContext {
    media: MediaItem,
    filters: Vec<FilterKind>,
    crop: Option<CropRect>,
    rotation: Rotation,
}

impl EditContext {
    #[must_use]
    pub fn new(media: MediaItem) -> Self {
        Self {
            media,
            filters: Vec::new(),
            crop: None,
            rotation: Rotation::ZERO,
        }
    }

    /// Appends `filter`; filters render in insertion order.
    pub fn apply(&mut self, filter: FilterKind) {
        self.filters.push(filter);
    }

    /// Adds `degrees` to the cumulative rotation.
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation = self.rotation.rotated_by(degrees);
    }

    /// Sets the crop rectangle, in post-rotation coordinates.
    pub fn crop(&mut self, rect: CropRect) {
        self.crop = Some(rect);
    }

    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.crop.is_some() || !self.rotation.is_zero() || !self.filters.is_empty()
    }

    /// Renders the edits onto the image. Videos render to `None`.
    #[must_use]
    pub fn render(&self) -> Option<DynamicImage> {
        let image = self.media.as_image()?;
        Some(render::render(
            image,
            self.rotation.degrees(),
            &self.filters,
            self.crop,
        ))
    }

    #[must_use]
    pub fn media(&self) -> &MediaItem {
        &self.media
    }

    #[must_use]
    pub fn filters(&self) -> &[FilterKind] {
        &self.filters
    }

    #[must_use]
    pub fn crop_rect(&self) -> Option<CropRect> {
        self.crop
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}
