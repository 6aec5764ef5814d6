// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image editing operations:
//! - [`FilterKind`] / [`FilterSelection`]: filter identifiers and live-preview choice
//! - [`Intensity`]: filter strength (0.0–1.0)
//! - [`PreviewScale`]: working-image scale factor (0.5–2.0)
//! - [`Rotation`]: cumulative rotation in degrees
//! - [`CropRect`] / [`Point`]: crop geometry

pub mod filter;
pub mod geometry;
pub mod newtypes;

pub use filter::{FilterKind, FilterSelection};
pub use geometry::{CropRect, PixelRect, Point};
pub use newtypes::{Intensity, PreviewScale, Rotation};
