// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like `FFmpeg`
//! and the filesystem.
//!
//! # Available Adapters
//!
//! - [`ffmpeg`]: Media probing and stream-copy export (implements
//!   [`MediaProbe`] and [`MediaExporter`])
//! - [`secret`]: File and in-memory credential storage (implements
//!   [`SecretStore`])
//!
//! [`MediaProbe`]: crate::application::port::MediaProbe
//! [`MediaExporter`]: crate::application::port::MediaExporter
//! [`SecretStore`]: crate::application::port::SecretStore

pub mod ffmpeg;
pub mod secret;

pub use ffmpeg::{FfmpegExporter, FfmpegProbe};
pub use secret::{FileSecretStore, MemorySecretStore};
