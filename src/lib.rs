// SPDX-License-Identifier: MPL-2.0
//! `snapdeck` is the core of a social media client.
//!
//! It provides media editing (filters, rotation, crop), video trim and audio
//! merge over `FFmpeg`, a device capability dashboard model, a backend client
//! with retry, and the session, settings and feed models a UI shell drives.

#![doc(html_root_url = "https://docs.rs/snapdeck/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod feed;
pub mod infrastructure;
pub mod media;
pub mod network;

#[cfg(test)]
mod test_utils;
