// SPDX-License-Identifier: MPL-2.0
//! Media editing and export errors.

use std::fmt;

/// Errors raised while probing, composing or exporting media.
///
/// Every variant maps to a user-facing message via [`MediaError::user_message`];
/// none of them is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The asset has no track of the requested kind (e.g. no picture track).
    MissingTrack(&'static str),

    /// The export step failed inside the encoder/muxer.
    ExportFailed(String),

    /// The export was cancelled before completion. Treated as a failure.
    ExportCancelled,

    /// Source pixel data could not be decoded or encoded.
    InvalidImage(String),

    /// I/O error (file not found, permission denied, etc.)
    Io(String),

    /// Generic error with raw message
    Other(String),
}

impl MediaError {
    /// Returns the message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            MediaError::MissingTrack(kind) => format!("The selected file has no {kind} track"),
            MediaError::ExportFailed(msg) => format!("Failed to export: {msg}"),
            MediaError::ExportCancelled => "Export was cancelled".to_string(),
            MediaError::InvalidImage(_) => "The image could not be processed".to_string(),
            MediaError::Io(msg) => format!("File error: {msg}"),
            MediaError::Other(msg) => msg.clone(),
        }
    }

    /// Attempts to categorize a raw message coming from `FFmpeg`.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return MediaError::Io(msg.to_string());
        }

        if msg_lower.contains("no video stream") || msg_lower.contains("no video track") {
            return MediaError::MissingTrack("video");
        }

        if msg_lower.contains("exit requested") || msg_lower.contains("cancel") {
            return MediaError::ExportCancelled;
        }

        if msg_lower.contains("muxer")
            || msg_lower.contains("header")
            || msg_lower.contains("packet")
            || msg_lower.contains("invalid argument")
        {
            return MediaError::ExportFailed(msg.to_string());
        }

        MediaError::Other(msg.to_string())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::MissingTrack(kind) => write!(f, "No {kind} track"),
            MediaError::ExportFailed(msg) => write!(f, "Export failed: {msg}"),
            MediaError::ExportCancelled => write!(f, "Export cancelled"),
            MediaError::InvalidImage(msg) => write!(f, "Invalid image: {msg}"),
            MediaError::Io(msg) => write!(f, "I/O error: {msg}"),
            MediaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

impl From<std::io::Error> for MediaError {
    fn from(err: std::io::Error) -> Self {
        MediaError::Io(err.to_string())
    }
}
