// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Intensity Bounds
// =============================================================================

/// Filter intensity bounds (0.0 to 1.0).
pub mod intensity_bounds {
    /// Minimum intensity.
    pub const MIN: f32 = 0.0;
    /// Maximum intensity.
    pub const MAX: f32 = 1.0;
    /// Default intensity when the editor opens.
    pub const DEFAULT: f32 = 0.5;
}

// =============================================================================
// Intensity
// =============================================================================

/// Strength of the live-preview filter, guaranteed to be within 0.0–1.0.
///
/// The intensity is only meaningful when a filter other than
/// [`FilterKind::None`](super::FilterKind::None) is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intensity(f32);

impl Intensity {
    /// Full strength, used by the non-interactive render pipeline.
    pub const FULL: Self = Self(intensity_bounds::MAX);

    /// Creates a new intensity, clamping the value to the valid range.
    /// `NaN` falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(intensity_bounds::MIN, intensity_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Gaussian blur radius derived from this intensity (`intensity × 10`).
    #[must_use]
    pub fn blur_radius(self) -> f32 {
        self.0 * 10.0
    }

    /// Contrast factor derived from this intensity (`intensity × 2`).
    #[must_use]
    pub fn contrast_factor(self) -> f32 {
        self.0 * 2.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(intensity_bounds::DEFAULT)
    }
}

// =============================================================================
// Preview Scale
// =============================================================================

/// Preview scale bounds (0.5x to 2.0x).
pub mod scale_bounds {
    /// Minimum preview scale factor.
    pub const MIN: f32 = 0.5;
    /// Maximum preview scale factor.
    pub const MAX: f32 = 2.0;
    /// Default preview scale factor.
    pub const DEFAULT: f32 = 1.0;
}

/// Scale factor of the interactive editor's working image (0.5–2.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewScale(f32);

impl PreviewScale {
    /// Creates a new scale factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether this scale leaves the image at its original size.
    #[must_use]
    pub fn is_original(self) -> bool {
        (self.0 - scale_bounds::DEFAULT).abs() < f32::EPSILON
    }
}

impl Default for PreviewScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// Cumulative rotation in degrees.
///
/// Rotations add up: rotating by 90 then by -90 yields 0. The raw sum is kept
/// (not wrapped) so that [`Rotation::is_zero`] reflects the user's intent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation(f32);

impl Rotation {
    /// No rotation.
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees)
    }

    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Adds `degrees` to the current rotation.
    #[must_use]
    pub fn rotated_by(self, degrees: f32) -> Self {
        Self(self.0 + degrees)
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns the rotation wrapped into `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> f32 {
        let wrapped = self.0.rem_euclid(360.0);
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }

    /// Returns the number of clockwise quarter turns if this rotation is an
    /// exact multiple of 90 degrees.
    #[must_use]
    pub fn quarter_turns(self) -> Option<u8> {
        let normalized = self.normalized();
        let turns = normalized / 90.0;
        if (turns - turns.round()).abs() > 1e-4 {
            return None;
        }
        // round() of a value in [0, 4] fits in u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some((turns.round() as u8) % 4)
    }
}
