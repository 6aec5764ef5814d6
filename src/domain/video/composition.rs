// SPDX-License-Identifier: MPL-2.0
//! Export-ready compositions of picture and audio tracks.
//!
//! A [`Composition`] is assembled fresh for every export request and dropped
//! once the export completes. All tracks share the same time origin (zero).

use std::path::{Path, PathBuf};

/// Kind of media carried by a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Picture,
    Audio,
}

/// A time range of a source track placed on the composition timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Offset into the source track, in seconds.
    pub source_start: f64,
    /// Length of the inserted range, in seconds.
    pub duration: f64,
    /// Position on the composition timeline, in seconds.
    pub insert_at: f64,
}

impl Segment {
    /// End of the segment on the composition timeline.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.insert_at + self.duration
    }

    /// A segment must cover some time and start inside its source and the
    /// timeline.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.duration > 0.0 && self.source_start >= 0.0 && self.insert_at >= 0.0
    }
}

/// One track of a composition, taken from the first stream of `kind` in `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub kind: TrackKind,
    pub source: PathBuf,
    pub segment: Segment,
}

/// An in-memory assembly of tracks aligned on a shared timeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    tracks: Vec<Track>,
}

impl Composition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `duration` seconds of the first `kind` stream of `source`,
    /// starting `source_start` seconds into it, at `insert_at` on the timeline.
    pub fn insert(
        &mut self,
        kind: TrackKind,
        source: &Path,
        source_start: f64,
        duration: f64,
        insert_at: f64,
    ) {
        self.tracks.push(Track {
            kind,
            source: source.to_path_buf(),
            segment: Segment {
                source_start,
                duration,
                insert_at,
            },
        });
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Tracks of one kind, in insertion order.
    pub fn tracks_of(&self, kind: TrackKind) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |track| track.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Maximum end time of all inserted ranges.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(|track| track.segment.end())
            .fold(0.0, f64::max)
    }
}

/// Probe result describing the tracks of a media file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetInfo {
    /// Container duration in seconds.
    pub duration_secs: f64,
    /// Whether the file has at least one picture stream.
    pub has_video: bool,
    /// Whether the file has at least one audio stream.
    pub has_audio: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_composition_has_zero_duration() {
        let composition = Composition::new();
        assert!(composition.is_empty());
        assert_eq!(composition.duration(), 0.0);
    }

    #[test]
    fn duration_is_max_of_inserted_ranges() {
        let mut composition = Composition::new();
        composition.insert(TrackKind::Picture, Path::new("a.mov"), 5.0, 5.0, 0.0);
        composition.insert(TrackKind::Audio, Path::new("b.m4a"), 0.0, 3.0, 4.0);
        assert_eq!(composition.duration(), 7.0);
    }

    #[test]
    fn segment_validity() {
        let mut composition = Composition::new();
        composition.insert(TrackKind::Picture, Path::new("a.mov"), 5.0, 5.0, 0.0);
        composition.insert(TrackKind::Picture, Path::new("a.mov"), 10.0, -5.0, 0.0);
        composition.insert(TrackKind::Picture, Path::new("a.mov"), -1.0, 2.0, 0.0);
        composition.insert(TrackKind::Audio, Path::new("b.m4a"), 0.0, 0.0, 0.0);

        let valid: Vec<bool> = composition
            .tracks()
            .iter()
            .map(|track| track.segment.is_valid())
            .collect();
        assert_eq!(valid, vec![true, false, false, false]);
    }

    #[test]
    fn tracks_of_filters_by_kind() {
        let mut composition = Composition::new();
        composition.insert(TrackKind::Picture, Path::new("a.mov"), 0.0, 1.0, 0.0);
        composition.insert(TrackKind::Audio, Path::new("a.mov"), 0.0, 1.0, 0.0);
        composition.insert(TrackKind::Audio, Path::new("b.m4a"), 0.0, 1.0, 0.0);
        assert_eq!(composition.tracks_of(TrackKind::Audio).count(), 2);
        assert_eq!(composition.tracks_of(TrackKind::Picture).count(), 1);
    }
}
