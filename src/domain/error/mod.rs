// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! These errors are caught where the asynchronous work completes and turned
//! into a user-facing message or a status value.

mod media;
mod network;

pub use media::MediaError;
pub use network::{NetworkError, Operation};
