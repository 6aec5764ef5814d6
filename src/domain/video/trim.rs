// SPDX-License-Identifier: MPL-2.0
//! Trim ranges and the mutually constrained start/end sliders.

/// Minimum gap, in seconds, the sliders keep between start and end.
pub const MIN_TRIM_GAP_SECS: f64 = 1.0;

/// Slider step, in seconds.
pub const TRIM_STEP_SECS: f64 = 0.1;

/// Requested sub-interval of a source video, in seconds.
///
/// Construction does not validate: the trim pipeline trusts its caller (the
/// sliders below) and an invalid range surfaces as an export error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimRange {
    pub start: f64,
    pub end: f64,
}

impl TrimRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the range in seconds (may be negative for invalid ranges).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Checks `0 <= start < end <= source_duration`.
    #[must_use]
    pub fn is_valid_for(&self, source_duration: f64) -> bool {
        self.start >= 0.0 && self.start < self.end && self.end <= source_duration
    }
}

/// State of the trim screen's two sliders.
///
/// The start slider's maximum is `end - 1` and the end slider's minimum is
/// `start + 1`; both snap to a 0.1 s grid. When the source is shorter than
/// the minimum gap the ranges collapse and the setters keep `start = 0`,
/// `end = duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimSliders {
    duration: f64,
    start: f64,
    end: f64,
}

impl TrimSliders {
    /// Sliders for a source of `duration` seconds, covering the whole video.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        let duration = duration.max(0.0);
        Self {
            duration,
            start: 0.0,
            end: duration,
        }
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Range currently allowed for the start slider.
    #[must_use]
    pub fn start_bounds(&self) -> (f64, f64) {
        (0.0, (self.end - MIN_TRIM_GAP_SECS).max(0.0))
    }

    /// Range currently allowed for the end slider.
    #[must_use]
    pub fn end_bounds(&self) -> (f64, f64) {
        let min = (self.start + MIN_TRIM_GAP_SECS).min(self.duration);
        (min, self.duration)
    }

    pub fn set_start(&mut self, value: f64) {
        let (min, max) = self.start_bounds();
        self.start = snap(value).clamp(min, max);
    }

    pub fn set_end(&mut self, value: f64) {
        let (min, max) = self.end_bounds();
        self.end = snap(value).clamp(min, max);
    }

    #[must_use]
    pub fn range(&self) -> TrimRange {
        TrimRange::new(self.start, self.end)
    }
}

fn snap(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value / TRIM_STEP_SECS).round() * TRIM_STEP_SECS
}
