// SPDX-License-Identifier: MPL-2.0
//! Sign-in flows: password login, registration and biometric unlock.

use crate::application::port::{BiometricAuthenticator, SecretStore};
use crate::application::session::Session;
use crate::config::AUTH_TOKEN_KEY;
use crate::error::{Error, Result};
use crate::network::ApiClient;
use std::sync::Arc;

/// Reason shown in the platform biometric prompt.
pub const BIOMETRIC_REASON: &str = "Sign in with Face ID / Touch ID";

/// What a biometric unlock attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometricOutcome {
    /// The stored token was restored into the session.
    Unlocked,
    /// The user passed the prompt but no token was stored.
    NoStoredToken,
    /// Biometrics are disabled, unsupported, or not needed. Nothing happened.
    Skipped,
}

pub struct AuthFlow {
    client: ApiClient,
    secrets: Arc<dyn SecretStore>,
    biometrics: Option<Arc<dyn BiometricAuthenticator>>,
}

impl std::fmt::Debug for AuthFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthFlow")
            .field("client", &self.client)
            .field("biometrics", &self.biometrics.is_some())
            .finish_non_exhaustive()
    }
}

impl AuthFlow {
    #[must_use]
    pub fn new(client: ApiClient, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            client,
            secrets,
            biometrics: None,
        }
    }

    #[must_use]
    pub fn with_biometrics(mut self, authenticator: Arc<dyn BiometricAuthenticator>) -> Self {
        self.biometrics = Some(authenticator);
        self
    }

    /// Logs in, stores the token under `auth_token` and signs the session in.
    ///
    /// # Errors
    ///
    /// Network failures, or a token that cannot be stored. The session is
    /// left untouched on error.
    pub async fn login(&self, session: &mut Session, email: &str, password: &str) -> Result<()> {
        let token = self.client.login(email, password).await?;
        self.secrets.save(AUTH_TOKEN_KEY, token.as_bytes())?;
        session.set_token(token);
        Ok(())
    }

    /// Creates an account. The user still has to log in afterwards.
    ///
    /// # Errors
    ///
    /// Validation or network failures.
    pub async fn register(&self, email: &str, password: &str, confirmation: &str) -> Result<()> {
        self.client.register(email, password, confirmation).await?;
        Ok(())
    }

    /// Offers biometric unlock when enabled in settings and the session is
    /// signed out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] with "Biometric authentication failed: ..."
    /// when the prompt is refused.
    pub async fn biometric_unlock(&self, session: &mut Session) -> Result<BiometricOutcome> {
        if !session.config().security.use_biometrics || session.is_authenticated() {
            return Ok(BiometricOutcome::Skipped);
        }
        let Some(authenticator) = self.biometrics.clone() else {
            return Ok(BiometricOutcome::Skipped);
        };

        let prompt = tokio::task::spawn_blocking(move || {
            if authenticator.is_available() {
                Some(authenticator.authenticate(BIOMETRIC_REASON))
            } else {
                None
            }
        })
        .await
        .map_err(|e| Error::Auth(format!("Biometric prompt failed: {e}")))?;

        match prompt {
            None => {
                log::info!("Biometric authentication not available");
                Ok(BiometricOutcome::Skipped)
            }
            Some(Err(reason)) => {
                log::warn!("Biometric authentication failed: {reason}");
                Err(Error::Auth(format!(
                    "Biometric authentication failed: {reason}"
                )))
            }
            Some(Ok(())) => match self.secrets.load_string(AUTH_TOKEN_KEY) {
                Some(token) if !token.is_empty() => {
                    session.set_token(token);
                    Ok(BiometricOutcome::Unlocked)
                }
                _ => Ok(BiometricOutcome::NoStoredToken),
            },
        }
    }

    /// Signs the session out and deletes the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be deleted.
    pub fn sign_out(&self, session: &mut Session) -> Result<()> {
        session.sign_out(self.secrets.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::infrastructure::secret::MemorySecretStore;

    struct FakeBiometrics {
        available: bool,
        result: std::result::Result<(), String>,
    }

    impl BiometricAuthenticator for FakeBiometrics {
        fn is_available(&self) -> bool {
            self.available
        }

        fn authenticate(&self, _reason: &str) -> std::result::Result<(), String> {
            self.result.clone()
        }
    }

    fn setup(
        available: bool,
        result: std::result::Result<(), String>,
    ) -> (AuthFlow, Arc<MemorySecretStore>, Session) {
        let secrets = Arc::new(MemorySecretStore::new());
        let flow = AuthFlow::new(ApiClient::new("http://127.0.0.1:9").unwrap(), secrets.clone())
            .with_biometrics(Arc::new(FakeBiometrics { available, result }));
        let mut config = Config::default();
        config.security.use_biometrics = true;
        let session = Session::initialize(config, secrets.as_ref());
        (flow, secrets, session)
    }

    #[tokio::test]
    async fn successful_prompt_restores_stored_token() {
        let (flow, secrets, mut session) = setup(true, Ok(()));
        // Stored after the session was built, e.g. by another process
        secrets.save(AUTH_TOKEN_KEY, b"abc").unwrap();

        let outcome = flow.biometric_unlock(&mut session).await.unwrap();
        assert_eq!(outcome, BiometricOutcome::Unlocked);
        assert_eq!(session.token(), Some("abc"));
    }

    #[tokio::test]
    async fn successful_prompt_without_token() {
        let (flow, _secrets, mut session) = setup(true, Ok(()));
        let outcome = flow.biometric_unlock(&mut session).await.unwrap();
        assert_eq!(outcome, BiometricOutcome::NoStoredToken);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn refused_prompt_reports_message() {
        let (flow, _secrets, mut session) = setup(true, Err("User canceled".into()));
        let err = flow.biometric_unlock(&mut session).await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "Biometric authentication failed: User canceled"
        );
    }

    #[tokio::test]
    async fn unavailable_biometrics_is_a_no_op() {
        let (flow, _secrets, mut session) = setup(false, Err("never asked".into()));
        let outcome = flow.biometric_unlock(&mut session).await.unwrap();
        assert_eq!(outcome, BiometricOutcome::Skipped);
    }

    #[tokio::test]
    async fn disabled_setting_skips_prompt() {
        let (flow, _secrets, mut session) = setup(true, Err("never asked".into()));
        session.config_mut().security.use_biometrics = false;
        let outcome = flow.biometric_unlock(&mut session).await.unwrap();
        assert_eq!(outcome, BiometricOutcome::Skipped);
    }

    #[tokio::test]
    async fn login_validation_leaves_session_signed_out() {
        let (flow, secrets, mut session) = setup(false, Ok(()));
        let err = flow.login(&mut session, "", "").await.unwrap_err();
        assert_eq!(err.user_message(), "Please fill all fields correctly");
        assert!(!session.is_authenticated());
        assert_eq!(secrets.load(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn sign_out_clears_store() {
        let (flow, secrets, mut session) = setup(false, Ok(()));
        secrets.save(AUTH_TOKEN_KEY, b"abc").unwrap();
        session.set_token("abc".into());

        flow.sign_out(&mut session).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(secrets.load(AUTH_TOKEN_KEY), None);
    }
}
