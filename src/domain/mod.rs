// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and business rules.
//!
//! This module contains pure domain types and value objects. Apart from
//! `serde` derives and logging, it has no dependencies on media, network or
//! runtime crates, which keeps it trivially testable.
//!
//! # Modules
//!
//! - [`capability`]: Device capabilities and their status
//! - [`editing`]: Image editing types ([`FilterKind`](editing::FilterKind),
//!   [`Intensity`](editing::Intensity), [`CropRect`](editing::CropRect))
//! - [`error`]: Domain error types ([`MediaError`](error::MediaError),
//!   [`NetworkError`](error::NetworkError))
//! - [`payload`]: Backend payloads ([`AnyValue`](payload::AnyValue),
//!   [`Association`](payload::Association))
//! - [`video`]: Trim ranges and compositions

pub mod capability;
pub mod editing;
pub mod error;
pub mod payload;
pub mod video;
