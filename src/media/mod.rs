// SPDX-License-Identifier: MPL-2.0
//! Media processing for images and videos.
//!
//! Images go through a pure render pipeline (rotate, filter, crop) driven by
//! an [`EditContext`]. Videos are trimmed and merged by a [`VideoPipeline`]
//! that delegates the heavy lifting to a [`MediaExporter`](crate::application::port::MediaExporter).

pub mod context;
pub mod filter;
pub mod image;
pub mod image_transform;
pub mod render;
pub mod video_edit;

pub use context::{EditContext, MediaItem};
pub use image::{encode_jpeg, encode_jpeg_with_quality, load_image};
pub use render::{render, render_with_intensity};
pub use video_edit::VideoPipeline;

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp"];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov"];

    /// Audio file extensions accepted as a merge soundtrack
    pub const AUDIO_EXTENSIONS: &[&str] = &["m4a", "mp3", "aac", "wav"];
}

/// Kind of a media file, guessed from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

/// Detects the media type from the file extension, case-insensitively.
pub fn detect_media_type<P: AsRef<std::path::Path>>(path: P) -> Option<MediaType> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaType::Image)
    } else if extensions::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaType::Video)
    } else if extensions::AUDIO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaType::Audio)
    } else {
        None
    }
}
