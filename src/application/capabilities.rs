// SPDX-License-Identifier: MPL-2.0
//! Capability status aggregation.
//!
//! [`CapabilityCenter`] owns one provider per capability and refreshes them
//! all at once. Every query runs on a blocking thread; results are gathered
//! into a [`CapabilityReport`], each one filling only its own entry.
//! Nothing is cached: every refresh asks the providers again.

use crate::application::port::CapabilityProvider;
use crate::domain::capability::{Capability, CapabilityStatus, CapabilityStatuses};
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Statuses of every capability and the time they were read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityReport {
    pub statuses: CapabilityStatuses,
    pub checked_at: DateTime<Utc>,
}

impl CapabilityReport {
    #[must_use]
    pub fn status(&self, capability: Capability) -> CapabilityStatus {
        self.statuses.get(capability)
    }

    /// `(capability, status)` pairs in dashboard order.
    pub fn entries(&self) -> impl Iterator<Item = (Capability, CapabilityStatus)> + '_ {
        Capability::ALL
            .into_iter()
            .map(|capability| (capability, self.statuses.get(capability)))
    }
}

#[derive(Default, Clone)]
pub struct CapabilityCenter {
    providers: BTreeMap<Capability, Arc<dyn CapabilityProvider>>,
}

impl std::fmt::Debug for CapabilityCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityCenter")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CapabilityCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider`, replacing any provider for the same capability.
    pub fn register(&mut self, provider: Arc<dyn CapabilityProvider>) {
        self.providers.insert(provider.capability(), provider);
    }

    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn CapabilityProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Queries every capability concurrently.
    ///
    /// A capability without provider, or whose query panicked, reads as
    /// [`CapabilityStatus::Unknown`].
    pub async fn refresh_all(&self) -> CapabilityReport {
        let queries = Capability::ALL.into_iter().map(|capability| async move {
            (capability, self.refresh(capability).await)
        });

        let mut statuses = CapabilityStatuses::unknown();
        for (capability, status) in join_all(queries).await {
            statuses.set(capability, status);
        }

        CapabilityReport {
            statuses,
            checked_at: Utc::now(),
        }
    }

    /// Queries a single capability.
    pub async fn refresh(&self, capability: Capability) -> CapabilityStatus {
        self.run(capability, |provider| provider.query()).await
    }

    /// Prompts for a single capability and returns the resulting status.
    pub async fn request(&self, capability: Capability) -> CapabilityStatus {
        self.run(capability, |provider| provider.request()).await
    }

    async fn run<F>(&self, capability: Capability, op: F) -> CapabilityStatus
    where
        F: FnOnce(&dyn CapabilityProvider) -> CapabilityStatus + Send + 'static,
    {
        let Some(provider) = self.providers.get(&capability).cloned() else {
            log::debug!("No provider for {capability}, status unknown");
            return CapabilityStatus::Unknown;
        };

        match tokio::task::spawn_blocking(move || op(provider.as_ref())).await {
            Ok(status) => {
                log::debug!("{capability}: {status}");
                status
            }
            Err(e) => {
                log::warn!("Query for {capability} failed: {e}");
                CapabilityStatus::Unknown
            }
        }
    }
}
