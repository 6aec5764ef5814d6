// SPDX-License-Identifier: MPL-2.0
//! Video trim and audio merge pipelines.
//!
//! Both operations build a fresh [`Composition`] and hand it to a
//! [`MediaExporter`] on a blocking thread. Each returns a future that resolves
//! exactly once with the output location or the export error. There is a
//! single attempt and no retry.
//!
//! Trim writes to a fixed path inside the output directory and deletes any
//! previous file there first, so the last export wins. Callers that run
//! several exports at once should give each pipeline its own directory with
//! [`VideoPipeline::with_output_dir`].

use crate::application::port::{MediaExporter, MediaProbe};
use crate::config::{MERGE_OUTPUT_FILE, TRIM_OUTPUT_FILE};
use crate::domain::error::MediaError;
use crate::domain::video::{Composition, TrackKind, TrimRange};
use crate::infrastructure::ffmpeg::{FfmpegExporter, FfmpegProbe};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone)]
pub struct VideoPipeline {
    probe: Arc<dyn MediaProbe>,
    exporter: Arc<dyn MediaExporter>,
    output_dir: PathBuf,
}

impl std::fmt::Debug for VideoPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoPipeline")
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

impl Default for VideoPipeline {
    /// `FFmpeg` adapters writing into the system temp directory.
    fn default() -> Self {
        Self::new(Arc::new(FfmpegProbe), Arc::new(FfmpegExporter::new()))
    }
}

impl VideoPipeline {
    #[must_use]
    pub fn new(probe: Arc<dyn MediaProbe>, exporter: Arc<dyn MediaExporter>) -> Self {
        Self {
            probe,
            exporter,
            output_dir: std::env::temp_dir(),
        }
    }

    /// Writes fixed-name outputs into `dir` instead of the temp directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Location every trim writes to.
    #[must_use]
    pub fn trim_output_path(&self) -> PathBuf {
        self.output_dir.join(TRIM_OUTPUT_FILE)
    }

    /// Exports the picture track of `source` between `start` and `end`
    /// seconds, placed at time zero.
    ///
    /// The range is not validated here: an empty, inverted or negative range,
    /// or one past the end of the source, surfaces as
    /// [`MediaError::ExportFailed`] from the exporter. Use
    /// [`TrimRange::is_valid_for`] or the trim sliders beforehand.
    ///
    /// # Errors
    ///
    /// Returns the export error, or [`MediaError::ExportCancelled`] if the
    /// export was cancelled.
    pub async fn trim(&self, source: &Path, start: f64, end: f64) -> Result<PathBuf, MediaError> {
        let range = TrimRange::new(start, end);
        let output = self.trim_output_path();
        remove_previous(&output)?;

        let mut composition = Composition::new();
        composition.insert(TrackKind::Picture, source, range.start, range.duration(), 0.0);

        log::info!(
            "Trimming {} to [{:.1}s, {:.1}s)",
            source.display(),
            range.start,
            range.end
        );
        self.export(composition, output).await
    }

    /// Combines the picture of `video`, its own audio if any, and the audio
    /// of `audio`, all starting at zero and spanning the video's duration.
    ///
    /// A longer external audio track is truncated; a shorter one leaves the
    /// rest silent.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::MissingTrack`] without exporting when `video` has
    /// no picture track, otherwise the probe or export error.
    pub async fn merge(
        &self,
        video: &Path,
        audio: &Path,
        output: &Path,
    ) -> Result<PathBuf, MediaError> {
        let video_info = self.probe_blocking(video).await?;
        if !video_info.has_video {
            log::warn!("Merge aborted: {} has no video track", video.display());
            return Err(MediaError::MissingTrack("video"));
        }
        let audio_info = self.probe_blocking(audio).await?;

        let duration = video_info.duration_secs;
        let mut composition = Composition::new();
        composition.insert(TrackKind::Picture, video, 0.0, duration, 0.0);
        if video_info.has_audio {
            composition.insert(TrackKind::Audio, video, 0.0, duration, 0.0);
        }
        if audio_info.has_audio {
            composition.insert(TrackKind::Audio, audio, 0.0, duration, 0.0);
        } else {
            log::warn!("{} has no audio track, merging without it", audio.display());
        }

        let output = output.to_path_buf();
        remove_previous(&output)?;
        self.export(composition, output).await
    }

    /// [`merge`](Self::merge) into the fixed merge path of the output directory.
    ///
    /// # Errors
    ///
    /// Same as [`merge`](Self::merge).
    pub async fn merge_to_default(&self, video: &Path, audio: &Path) -> Result<PathBuf, MediaError> {
        let output = self.output_dir.join(MERGE_OUTPUT_FILE);
        self.merge(video, audio, &output).await
    }

    async fn probe_blocking(&self, path: &Path) -> Result<crate::domain::video::AssetInfo, MediaError> {
        let probe = Arc::clone(&self.probe);
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || probe.probe(&path))
            .await
            .map_err(|e| MediaError::Other(format!("Probe task failed: {e}")))?
    }

    async fn export(&self, composition: Composition, output: PathBuf) -> Result<PathBuf, MediaError> {
        let exporter = Arc::clone(&self.exporter);
        tokio::task::spawn_blocking(move || {
            exporter.export(&composition, &output)?;
            Ok(output)
        })
        .await
        .map_err(|e| MediaError::Other(format!("Export task failed: {e}")))?
    }
}

/// Deletes a previous export at `path`. A missing file is fine.
fn remove_previous(path: &Path) -> Result<(), MediaError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(MediaError::from(e)),
    }
}
