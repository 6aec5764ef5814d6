// SPDX-License-Identifier: MPL-2.0
//! Request and response bodies exchanged with the backend.

use image_rs::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login body: `{"user": {"auth_token": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    #[serde(alias = "authentication_token", alias = "authToken", alias = "token")]
    pub auth_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub user: RegisterUser<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
}

/// Content of a new post before it is uploaded.
///
/// Both attachments are optional; the image is encoded as JPEG at upload
/// time and the video file is read as-is.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub image: Option<DynamicImage>,
    pub video: Option<PathBuf>,
}

impl PostDraft {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: DynamicImage) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_video(mut self, path: impl Into<PathBuf>) -> Self {
        self.video = Some(path.into());
        self
    }
}
