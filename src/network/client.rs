// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the backend.
//!
//! Every call resolves exactly once with the decoded result or a
//! [`NetworkError`]. Only [`ApiClient::fetch_json`] retries; login, register
//! and post creation make a single attempt.

use super::models::{LoginRequest, LoginResponse, PostDraft, RegisterRequest, RegisterUser};
use super::retry::RetryPolicy;
use crate::config::{NetworkConfig, DEFAULT_APP_NAME, DEFAULT_APP_VERSION};
use crate::domain::error::{NetworkError, Operation};
use crate::error::{Error, Result};
use crate::media::encode_jpeg;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Message shown when the credentials form is incomplete.
pub const INVALID_FORM_MESSAGE: &str = "Please fill all fields correctly";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            NetworkError::Decode(err.to_string())
        } else if err.is_builder() {
            NetworkError::InvalidUrl(err.to_string())
        } else {
            NetworkError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Creates a client for `base_url` with the default retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] if `base_url` is not an absolute
    /// URL, or [`NetworkError::Transport`] if the HTTP stack cannot start.
    pub fn new(base_url: &str) -> std::result::Result<Self, NetworkError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url =
            Url::parse(&normalized).map_err(|e| NetworkError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = Client::builder()
            .user_agent(format!("{DEFAULT_APP_NAME}/{DEFAULT_APP_VERSION}"))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            retry: RetryPolicy::default(),
        })
    }

    /// Creates a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn from_config(config: &NetworkConfig) -> std::result::Result<Self, NetworkError> {
        Self::new(&config.backend_url)
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `endpoint` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] if the result is not a valid URL.
    pub fn endpoint_url(&self, endpoint: &str) -> std::result::Result<Url, NetworkError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| NetworkError::InvalidUrl(format!("{endpoint}: {e}")))
    }

    /// Signs in and returns the auth token found at `user.auth_token`.
    ///
    /// # Errors
    ///
    /// Validation, transport, non-2xx status or a body without token.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<String, NetworkError> {
        if email.is_empty() || password.is_empty() {
            return Err(NetworkError::Validation(INVALID_FORM_MESSAGE.to_string()));
        }
        let url = self.endpoint_url("login")?;

        let response = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let response = check_status(response, Operation::Login)?;

        let body: LoginResponse = response.json().await?;
        log::info!("Signed in as {email}");
        Ok(body.user.auth_token)
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Validation`] without sending anything when a
    /// field is empty or the passwords differ.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> std::result::Result<(), NetworkError> {
        if email.is_empty() || password.is_empty() || password != confirmation {
            return Err(NetworkError::Validation(INVALID_FORM_MESSAGE.to_string()));
        }
        let url = self.endpoint_url("register")?;

        let body = RegisterRequest {
            user: RegisterUser {
                email,
                password,
                password_confirmation: confirmation,
            },
        };
        let response = self.http.post(url).json(&body).send().await?;
        check_status(response, Operation::Register)?;
        log::info!("Registered {email}");
        Ok(())
    }

    /// Uploads a post as `multipart/form-data` with bearer authorization.
    ///
    /// The image part is JPEG-encoded off the async thread; the video part is
    /// the raw file content.
    ///
    /// # Errors
    ///
    /// Network errors, image encoding errors, or I/O errors reading the video.
    pub async fn create_post(&self, token: &str, draft: PostDraft) -> Result<()> {
        if token.is_empty() {
            return Err(NetworkError::MissingToken.into());
        }
        let url = self.endpoint_url("posts")?;

        let mut form = Form::new().text("content", draft.content);

        if let Some(image) = draft.image {
            let jpeg = tokio::task::spawn_blocking(move || encode_jpeg(&image))
                .await
                .map_err(|e| Error::Io(format!("Encoding task failed: {e}")))??;
            let part = Part::bytes(jpeg)
                .file_name("image.jpg")
                .mime_str("image/jpeg")
                .map_err(NetworkError::from)?;
            form = form.part("image", part);
        }

        if let Some(path) = draft.video {
            let bytes = tokio::fs::read(&path).await?;
            let part = Part::bytes(bytes)
                .file_name("video.mov")
                .mime_str("video/quicktime")
                .map_err(NetworkError::from)?;
            form = form.part("video", part);
        }

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(NetworkError::from)?;
        check_status(response, Operation::CreatePost)?;
        log::info!("Post created");
        Ok(())
    }

    /// Fetches `{base}/{endpoint}` and decodes the JSON body into `T`.
    ///
    /// Transport errors, non-2xx statuses and decode errors are all retried
    /// according to the retry policy. An invalid URL fails before the first
    /// attempt.
    ///
    /// # Errors
    ///
    /// The error of the final attempt.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> std::result::Result<T, NetworkError> {
        let url = self.endpoint_url(endpoint)?;

        self.retry
            .execute(endpoint, |attempt| {
                log::debug!("GET {url} (attempt {attempt})");
                get_json::<T>(self.http.get(url.clone()))
            })
            .await
    }
}

async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> std::result::Result<T, NetworkError> {
    let response = check_status(request.send().await?, Operation::Fetch)?;
    Ok(response.json::<T>().await?)
}

fn check_status(
    response: Response,
    operation: Operation,
) -> std::result::Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NetworkError::Server {
            operation,
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9").expect("valid base url")
    }

    #[test]
    fn endpoints_are_joined_under_base_path() {
        let client = ApiClient::new("https://lightek.diy/api").unwrap();
        assert_eq!(
            client.endpoint_url("/titles").unwrap().as_str(),
            "https://lightek.diy/api/titles"
        );
        assert_eq!(
            client.endpoint_url("login").unwrap().as_str(),
            "https://lightek.diy/api/login"
        );
    }

    #[test]
    fn default_backend_is_accepted() {
        let client = ApiClient::from_config(&NetworkConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "https://lightek.diy/");
    }

    #[test]
    fn relative_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(NetworkError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn register_rejects_mismatched_passwords_locally() {
        let result = client().register("a@b.c", "one", "two").await;
        let err = result.unwrap_err();
        assert_eq!(err.user_message(), "Please fill all fields correctly");
    }

    #[tokio::test]
    async fn register_rejects_empty_fields_locally() {
        let result = client().register("", "pw", "pw").await;
        assert!(matches!(result, Err(NetworkError::Validation(_))));
    }

    #[tokio::test]
    async fn login_rejects_empty_fields_locally() {
        let result = client().login("a@b.c", "").await;
        assert!(matches!(result, Err(NetworkError::Validation(_))));
    }

    #[tokio::test]
    async fn create_post_requires_token() {
        let result = client().create_post("", PostDraft::new("hello")).await;
        assert!(matches!(
            result,
            Err(Error::Network(NetworkError::MissingToken))
        ));
    }

    #[test]
    fn json_errors_map_to_decode() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        assert!(matches!(NetworkError::from(err), NetworkError::Decode(_)));
    }
}
