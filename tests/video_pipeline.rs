// SPDX-License-Identifier: MPL-2.0
//! Video trim and merge tests.
//!
//! The `FFmpeg` tests need sample files under `tests/data/` and are skipped
//! when those are absent.

use snapdeck::application::port::{MediaExporter, MediaProbe};
use snapdeck::domain::error::MediaError;
use snapdeck::domain::video::{AssetInfo, Composition, TrackKind};
use snapdeck::infrastructure::{FfmpegExporter, FfmpegProbe};
use snapdeck::media::VideoPipeline;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

fn data_file(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    if path.exists() {
        Some(path)
    } else {
        eprintln!("Skipping test: {} not found", path.display());
        None
    }
}

struct StaticProbe(AssetInfo);

impl MediaProbe for StaticProbe {
    fn probe(&self, _path: &Path) -> Result<AssetInfo, MediaError> {
        Ok(self.0)
    }
}

#[derive(Default)]
struct CapturingExporter {
    last: Mutex<Option<Composition>>,
}

impl MediaExporter for CapturingExporter {
    fn export(&self, composition: &Composition, output: &Path) -> Result<(), MediaError> {
        std::fs::write(output, b"mov").map_err(MediaError::from)?;
        *self.last.lock().unwrap() = Some(composition.clone());
        Ok(())
    }
}

struct FailingExporter;

impl MediaExporter for FailingExporter {
    fn export(&self, _composition: &Composition, _output: &Path) -> Result<(), MediaError> {
        Err(MediaError::ExportCancelled)
    }
}

#[tokio::test]
async fn test_trim_writes_into_output_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let exporter = Arc::new(CapturingExporter::default());
    let pipeline = VideoPipeline::new(
        Arc::new(StaticProbe(AssetInfo {
            duration_secs: 20.0,
            has_video: true,
            has_audio: false,
        })),
        exporter.clone(),
    )
    .with_output_dir(dir.path());

    let output = pipeline
        .trim(Path::new("clip.mov"), 3.0, 8.0)
        .await
        .expect("trim succeeds");

    assert_eq!(output, dir.path().join("trimmed.mov"));
    assert!(output.exists());
    let composition = exporter.last.lock().unwrap().clone().expect("exported");
    assert_eq!(composition.duration(), 5.0);
}

#[tokio::test]
async fn test_merge_spans_video_duration() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let exporter = Arc::new(CapturingExporter::default());
    let pipeline = VideoPipeline::new(
        Arc::new(StaticProbe(AssetInfo {
            duration_secs: 12.5,
            has_video: true,
            has_audio: true,
        })),
        exporter.clone(),
    );
    let output = dir.path().join("merged.mov");

    let written = pipeline
        .merge(Path::new("video.mov"), Path::new("song.m4a"), &output)
        .await
        .expect("merge succeeds");

    assert_eq!(written, output);
    let composition = exporter.last.lock().unwrap().clone().expect("exported");
    assert_eq!(composition.tracks_of(TrackKind::Picture).count(), 1);
    assert_eq!(composition.tracks_of(TrackKind::Audio).count(), 2);
    for track in composition.tracks() {
        assert_eq!(track.segment.insert_at, 0.0);
        assert_eq!(track.segment.duration, 12.5);
    }
}

#[tokio::test]
async fn test_cancelled_export_is_a_failure() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let pipeline = VideoPipeline::new(
        Arc::new(StaticProbe(AssetInfo {
            duration_secs: 10.0,
            has_video: true,
            has_audio: true,
        })),
        Arc::new(FailingExporter),
    )
    .with_output_dir(dir.path());

    let result = pipeline.trim(Path::new("clip.mov"), 1.0, 4.0).await;
    assert_eq!(result, Err(MediaError::ExportCancelled));
}

/// Container durations of a stream copy land on frame boundaries.
const DURATION_TOLERANCE_SECS: f64 = 0.15;

#[tokio::test]
async fn test_ffmpeg_inverted_trim_range_fails() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let pipeline = VideoPipeline::default().with_output_dir(dir.path());

    let result = pipeline.trim(Path::new("clip.mov"), 10.0, 5.0).await;

    assert!(matches!(result, Err(MediaError::ExportFailed(_))));
    assert!(!pipeline.trim_output_path().exists());
}

#[tokio::test]
async fn test_ffmpeg_trim_sample_mid_range() {
    let Some(source) = data_file("sample.mp4") else {
        return;
    };
    let dir = tempdir().expect("Failed to create temporary directory");
    let probe = Arc::new(FfmpegProbe);
    let pipeline = VideoPipeline::new(probe.clone(), Arc::new(FfmpegExporter::new()))
        .with_output_dir(dir.path());

    let info = probe.probe(&source).expect("Failed to probe sample");
    let (start, end) = (1.0, 3.0);
    if info.duration_secs < end {
        eprintln!("Skipping test: sample shorter than {end}s");
        return;
    }

    let output = pipeline
        .trim(&source, start, end)
        .await
        .expect("Failed to trim sample");

    let trimmed = probe.probe(&output).expect("Failed to probe trimmed file");
    assert!(trimmed.has_video);
    assert!(!trimmed.has_audio);
    assert!(
        (trimmed.duration_secs - (end - start)).abs() <= DURATION_TOLERANCE_SECS,
        "expected ~{}s, got {}s",
        end - start,
        trimmed.duration_secs
    );
}

#[tokio::test]
async fn test_ffmpeg_trim_past_end_of_sample_fails() {
    let Some(source) = data_file("sample.mp4") else {
        return;
    };
    let dir = tempdir().expect("Failed to create temporary directory");
    let pipeline = VideoPipeline::default().with_output_dir(dir.path());
    let info = FfmpegProbe.probe(&source).expect("Failed to probe sample");

    let start = info.duration_secs + 10.0;
    let result = pipeline.trim(&source, start, start + 2.0).await;

    assert!(matches!(result, Err(MediaError::ExportFailed(_))));
    assert!(!pipeline.trim_output_path().exists());
}

#[tokio::test]
async fn test_ffmpeg_merge_sample() {
    let (Some(video), Some(audio)) = (data_file("sample.mp4"), data_file("sample.m4a")) else {
        return;
    };
    let dir = tempdir().expect("Failed to create temporary directory");
    let output = dir.path().join("merged.mov");

    let written = VideoPipeline::default()
        .merge(&video, &audio, &output)
        .await
        .expect("Failed to merge samples");

    let merged = FfmpegProbe.probe(&written).expect("Failed to probe merged file");
    assert!(merged.has_video);
    assert!(merged.has_audio);
}
