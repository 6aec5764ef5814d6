// SPDX-License-Identifier: MPL-2.0
//! Video editing domain types.
//!
//! - [`TrimRange`] / [`TrimSliders`]: requested sub-interval and its UI constraints
//! - [`Composition`]: tracks assembled for a single export
//! - [`AssetInfo`]: probe result for a media file

pub mod composition;
pub mod trim;

pub use composition::{AssetInfo, Composition, Segment, Track, TrackKind};
pub use trim::{TrimRange, TrimSliders, MIN_TRIM_GAP_SECS, TRIM_STEP_SECS};
