// SPDX-License-Identifier: MPL-2.0
//! Backend client: login, registration, post upload and JSON fetches with
//! retry.

pub mod client;
pub mod models;
pub mod retry;

pub use client::{ApiClient, INVALID_FORM_MESSAGE};
pub use models::PostDraft;
pub use retry::RetryPolicy;
