// SPDX-License-Identifier: MPL-2.0
//! Media probing and export port definitions.
//!
//! The video pipeline talks to these traits only. The `FFmpeg` adapters in
//! [`crate::infrastructure::ffmpeg`] implement them; tests substitute fakes.
//!
//! # Design Notes
//!
//! - Both traits are **blocking**; async callers run them on a blocking thread
//! - Uses domain types only (`Composition`, `AssetInfo`, `MediaError`)

use crate::domain::error::MediaError;
use crate::domain::video::{AssetInfo, Composition};
use std::path::Path;

// =============================================================================
// MediaProbe Trait
// =============================================================================

/// Port for inspecting the tracks of a media file.
pub trait MediaProbe: Send + Sync {
    /// Reads the container of `path` and reports its duration and tracks.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the file cannot be opened or parsed.
    fn probe(&self, path: &Path) -> Result<AssetInfo, MediaError>;
}

// =============================================================================
// MediaExporter Trait
// =============================================================================

/// Port for rendering a [`Composition`] into a QuickTime file.
pub trait MediaExporter: Send + Sync {
    /// Writes `composition` to `output`.
    ///
    /// A cancelled export reports [`MediaError::ExportCancelled`], which
    /// callers treat as a failure.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if any source cannot be read or the output
    /// cannot be written.
    fn export(&self, composition: &Composition, output: &Path) -> Result<(), MediaError>;
}
