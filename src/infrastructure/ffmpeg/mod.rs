// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapters implementing the [`MediaProbe`] and [`MediaExporter`] ports.
//!
//! Export is a stream-copy remux into a QuickTime (`.mov`) container: no
//! frame is decoded or re-encoded. Each composition track is read from its
//! own input context, cut to its segment and re-based so the segment starts
//! at its `insert_at` position. Packets of all tracks are merged in
//! timestamp order before muxing.
//!
//! # Cut precision
//!
//! A picture segment starts at the keyframe preceding `source_start`. Packets
//! between that keyframe and the requested start get negative timestamps,
//! which the QuickTime muxer hides behind an edit list, so playback still
//! starts exactly at `source_start`.
//!
//! [`MediaProbe`]: crate::application::port::MediaProbe
//! [`MediaExporter`]: crate::application::port::MediaExporter

use crate::application::port::{MediaExporter, MediaProbe};
use crate::domain::error::MediaError;
use crate::domain::video::{AssetInfo, Composition, Track, TrackKind};
use ffmpeg_next::format::stream::Disposition;
use ffmpeg_next::media::Type;
use ffmpeg_next::{Packet, Rational};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

/// Container format of every export.
const OUTPUT_FORMAT: &str = "mov";

static FFMPEG_INIT: Once = Once::new();

/// Initializes `FFmpeg` once per process and lowers its log level to errors.
///
/// # Errors
///
/// Returns an error if `FFmpeg` fails to initialize.
pub fn init_ffmpeg() -> Result<(), MediaError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(MediaError::Other(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

fn open_input(path: &Path) -> Result<ffmpeg_next::format::context::Input, MediaError> {
    if !path.exists() {
        return Err(MediaError::Io(format!(
            "No such file: {}",
            path.display()
        )));
    }
    ffmpeg_next::format::input(path)
        .map_err(|e| MediaError::from_message(&format!("Failed to open {}: {e}", path.display())))
}

/// Returns the index of the first stream carrying `kind`.
///
/// Cover art (attached pictures) does not count as a picture track.
fn find_stream(input: &ffmpeg_next::format::context::Input, kind: TrackKind) -> Option<usize> {
    let wanted = match kind {
        TrackKind::Picture => Type::Video,
        TrackKind::Audio => Type::Audio,
    };
    input
        .streams()
        .find(|stream| {
            stream.parameters().medium() == wanted
                && !stream.disposition().contains(Disposition::ATTACHED_PIC)
        })
        .map(|stream| stream.index())
}

fn secs_to_ts(secs: f64, time_base: Rational) -> i64 {
    let ticks = secs * f64::from(time_base.denominator()) / f64::from(time_base.numerator());
    // Timestamps are well within i64 for any realistic duration
    #[allow(clippy::cast_possible_truncation)]
    let ts = ticks.round() as i64;
    ts
}

#[allow(clippy::cast_precision_loss)]
fn ts_to_secs(ts: i64, time_base: Rational) -> f64 {
    ts as f64 * f64::from(time_base)
}

// =============================================================================
// Probe
// =============================================================================

/// Reads duration and track presence from container metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfmpegProbe;

impl MediaProbe for FfmpegProbe {
    fn probe(&self, path: &Path) -> Result<AssetInfo, MediaError> {
        init_ffmpeg()?;
        let input = open_input(path)?;

        let picture = find_stream(&input, TrackKind::Picture);
        let audio = find_stream(&input, TrackKind::Audio);

        #[allow(clippy::cast_precision_loss)]
        let duration_secs = if input.duration() > 0 {
            input.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
        } else {
            // Fall back to the longest stream
            input
                .streams()
                .filter(|s| s.duration() > 0)
                .map(|s| ts_to_secs(s.duration(), s.time_base()))
                .fold(0.0, f64::max)
        };

        log::debug!(
            "Probed {}: {duration_secs:.2}s, video={}, audio={}",
            path.display(),
            picture.is_some(),
            audio.is_some()
        );

        Ok(AssetInfo {
            duration_secs,
            has_video: picture.is_some(),
            has_audio: audio.is_some(),
        })
    }
}

// =============================================================================
// Export
// =============================================================================

/// One composition track being copied into the output.
struct TrackReader {
    input: ffmpeg_next::format::context::Input,
    stream_index: usize,
    output_index: usize,
    input_time_base: Rational,
    kind: TrackKind,
    /// Segment bounds in the input time base.
    start_ts: i64,
    end_ts: i64,
    /// Shift applied to every timestamp, in the input time base.
    shift_ts: i64,
    pending: Option<Packet>,
    finished: bool,
    written: usize,
}

impl TrackReader {
    fn open(track: &Track) -> Result<Self, MediaError> {
        let mut input = open_input(&track.source)?;
        let stream_index = find_stream(&input, track.kind).ok_or(match track.kind {
            TrackKind::Picture => MediaError::MissingTrack("video"),
            TrackKind::Audio => MediaError::MissingTrack("audio"),
        })?;
        let input_time_base = input
            .stream(stream_index)
            .map(|s| s.time_base())
            .ok_or_else(|| MediaError::Other("Stream vanished".to_string()))?;

        let segment = track.segment;
        if segment.source_start > 0.0 {
            // Lands on the keyframe at or before the requested start
            #[allow(clippy::cast_possible_truncation)]
            let target = (segment.source_start * f64::from(ffmpeg_next::ffi::AV_TIME_BASE)) as i64;
            input
                .seek(target, ..target)
                .map_err(|e| MediaError::ExportFailed(format!("Seek failed: {e}")))?;
        }

        let start_ts = secs_to_ts(segment.source_start, input_time_base);
        Ok(Self {
            input,
            stream_index,
            output_index: 0,
            input_time_base,
            kind: track.kind,
            start_ts,
            end_ts: secs_to_ts(segment.source_start + segment.duration, input_time_base),
            shift_ts: secs_to_ts(segment.insert_at, input_time_base) - start_ts,
            pending: None,
            finished: false,
            written: 0,
        })
    }

    /// Pulls the next packet of this track that belongs to the segment.
    fn refill(&mut self) {
        while self.pending.is_none() && !self.finished {
            let stream_index = self.stream_index;
            let next = self
                .input
                .packets()
                .find(|(stream, _)| stream.index() == stream_index)
                .map(|(_, packet)| packet);

            let Some(mut packet) = next else {
                self.finished = true;
                break;
            };

            let dts = packet.dts().or(packet.pts()).unwrap_or(self.start_ts);
            let pts = packet.pts().unwrap_or(dts);
            if dts >= self.end_ts {
                self.finished = true;
                break;
            }
            if pts >= self.end_ts {
                continue;
            }
            // Audio needs no pre-roll; picture keeps it for decoding
            if self.kind == TrackKind::Audio && pts + packet.duration() <= self.start_ts {
                continue;
            }

            packet.set_pts(packet.pts().map(|ts| ts + self.shift_ts));
            packet.set_dts(packet.dts().map(|ts| ts + self.shift_ts));
            self.pending = Some(packet);
        }
    }

    /// Decode time of the pending packet, in seconds on the output timeline.
    fn pending_secs(&self) -> Option<f64> {
        self.pending.as_ref().map(|packet| {
            let ts = packet.dts().or(packet.pts()).unwrap_or(0);
            ts_to_secs(ts, self.input_time_base)
        })
    }
}

/// Remuxes compositions into QuickTime files with `FFmpeg`.
#[derive(Debug, Default, Clone)]
pub struct FfmpegExporter {
    cancel: Option<Arc<AtomicBool>>,
}

impl FfmpegExporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts any running export once `flag` becomes `true`.
    #[must_use]
    pub fn with_cancel_flag(flag: Arc<AtomicBool>) -> Self {
        Self { cancel: Some(flag) }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn remux(&self, composition: &Composition, output: &Path) -> Result<(), MediaError> {
        let mut readers = composition
            .tracks()
            .iter()
            .map(TrackReader::open)
            .collect::<Result<Vec<_>, _>>()?;

        let mut octx = ffmpeg_next::format::output_as(output, OUTPUT_FORMAT)
            .map_err(|e| MediaError::from_message(&format!("Failed to create output: {e}")))?;

        for (output_index, reader) in readers.iter_mut().enumerate() {
            let parameters = reader
                .input
                .stream(reader.stream_index)
                .map(|s| s.parameters())
                .ok_or_else(|| MediaError::Other("Stream vanished".to_string()))?;
            let mut stream = octx
                .add_stream(ffmpeg_next::encoder::find(ffmpeg_next::codec::Id::None))
                .map_err(|e| MediaError::ExportFailed(format!("Failed to add stream: {e}")))?;
            stream.set_parameters(parameters);
            // SAFETY: the stream belongs to `octx`; clearing the tag lets the
            // muxer pick the QuickTime tag for the codec.
            unsafe {
                (*stream.parameters().as_mut_ptr()).codec_tag = 0;
            }
            reader.output_index = output_index;
        }

        octx.write_header()
            .map_err(|e| MediaError::ExportFailed(format!("Failed to write header: {e}")))?;

        let output_time_bases: Vec<Rational> = (0..readers.len())
            .map(|i| octx.stream(i).map_or(Rational(1, 1), |s| s.time_base()))
            .collect();

        for reader in &mut readers {
            reader.refill();
        }

        loop {
            if self.is_cancelled() {
                return Err(MediaError::ExportCancelled);
            }

            let next = readers
                .iter()
                .enumerate()
                .filter_map(|(i, r)| r.pending_secs().map(|secs| (i, secs)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i);
            let Some(index) = next else { break };

            let reader = &mut readers[index];
            if let Some(mut packet) = reader.pending.take() {
                packet.rescale_ts(reader.input_time_base, output_time_bases[index]);
                packet.set_position(-1);
                packet.set_stream(reader.output_index);
                packet
                    .write_interleaved(&mut octx)
                    .map_err(|e| MediaError::ExportFailed(format!("Failed to write packet: {e}")))?;
                reader.written += 1;
            }
            reader.refill();
        }

        // A range past the end of its source yields no packets at all
        if let Some(empty) = readers.iter().find(|r| r.written == 0) {
            return Err(MediaError::ExportFailed(format!(
                "No {:?} data in the requested range",
                empty.kind
            )));
        }

        octx.write_trailer()
            .map_err(|e| MediaError::ExportFailed(format!("Failed to write trailer: {e}")))?;
        Ok(())
    }
}

impl MediaExporter for FfmpegExporter {
    fn export(&self, composition: &Composition, output: &Path) -> Result<(), MediaError> {
        if composition.is_empty() {
            return Err(MediaError::ExportFailed("Nothing to export".to_string()));
        }
        if let Some(track) = composition.tracks().iter().find(|t| !t.segment.is_valid()) {
            let segment = track.segment;
            return Err(MediaError::ExportFailed(format!(
                "Invalid range for {}: start {:.2}s, duration {:.2}s",
                track.source.display(),
                segment.source_start,
                segment.duration
            )));
        }
        init_ffmpeg()?;

        log::info!(
            "Exporting {} track(s), {:.2}s, to {}",
            composition.tracks().len(),
            composition.duration(),
            output.display()
        );

        let result = self.remux(composition, output);
        match &result {
            Ok(()) => log::info!("Export finished: {}", output.display()),
            Err(err) => {
                log::error!("Export to {} failed: {err}", output.display());
                // A partial file must not be mistaken for a result
                let _ = fs::remove_file(output);
            }
        }
        result
    }
}
