// SPDX-License-Identifier: MPL-2.0
//! Backend communication errors.

use std::fmt;

/// Which backend operation produced a server error.
///
/// Used to pick the user-facing wording of a non-2xx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    CreatePost,
    Fetch,
}

/// Errors raised by the backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The configured base URL and endpoint do not form a valid URL.
    InvalidUrl(String),

    /// No connectivity, DNS failure, TLS failure, timeout...
    Transport(String),

    /// The server answered with a non-2xx status.
    Server { operation: Operation, status: u16 },

    /// The body did not match the expected JSON shape.
    Decode(String),

    /// Client-side validation rejected the request before it was sent.
    Validation(String),

    /// An authenticated call was attempted without a token.
    MissingToken,
}

impl NetworkError {
    /// Returns the message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::InvalidUrl(_) => "Invalid server address".to_string(),
            NetworkError::Transport(msg) => format!("Error: {msg}"),
            NetworkError::Server { operation, status } => match operation {
                Operation::Login => format!("Failed authorization (status: {status})"),
                Operation::Register => format!("Failed to register (status: {status})"),
                Operation::CreatePost => format!("Post failed (status: {status})"),
                Operation::Fetch => format!("Request failed (status: {status})"),
            },
            NetworkError::Decode(_) => "Invalid server response".to_string(),
            NetworkError::Validation(msg) => msg.clone(),
            NetworkError::MissingToken => "You need to sign in first".to_string(),
        }
    }

    /// Returns `true` for failures that an automatic retry may fix.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        !matches!(
            self,
            NetworkError::InvalidUrl(_) | NetworkError::Validation(_) | NetworkError::MissingToken
        )
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidUrl(url) => write!(f, "Invalid URL: {url}"),
            NetworkError::Transport(msg) => write!(f, "Transport error: {msg}"),
            NetworkError::Server { operation, status } => {
                write!(f, "Server returned status {status} for {operation:?}")
            }
            NetworkError::Decode(msg) => write!(f, "Decode error: {msg}"),
            NetworkError::Validation(msg) => write!(f, "Validation error: {msg}"),
            NetworkError::MissingToken => write!(f, "Missing auth token"),
        }
    }
}

impl std::error::Error for NetworkError {}
