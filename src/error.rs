// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub use crate::domain::error::{MediaError, NetworkError};

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Secret(String),
    /// Authentication was refused; the message is shown as-is.
    Auth(String),
    Network(NetworkError),
    Media(MediaError),
}

impl Error {
    /// Returns the message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(e) => e.user_message(),
            Error::Media(e) => e.user_message(),
            Error::Auth(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Secret(e) => write!(f, "Secret Store Error: {}", e),
            Error::Auth(e) => write!(f, "Auth Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Media(MediaError::InvalidImage(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Operation;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn user_message_delegates_to_domain_errors() {
        let err: Error = NetworkError::Server {
            operation: Operation::Login,
            status: 403,
        }
        .into();
        assert_eq!(err.user_message(), "Failed authorization (status: 403)");

        let err: Error = MediaError::MissingTrack("video").into();
        assert_eq!(err.user_message(), "The selected file has no video track");
    }
}
