// SPDX-License-Identifier: MPL-2.0
//! Device capabilities and their authorization state.
//!
//! A capability is a permission-gated device feature. Its status is refreshed
//! only by an explicit query and may be stale in between.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Permission-gated device feature shown on the permissions dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Contacts,
    Camera,
    Photos,
    Microphone,
    Location,
    Motion,
    Notifications,
    Bluetooth,
}

impl Capability {
    /// The fixed set of capabilities, in dashboard order.
    pub const ALL: [Capability; 8] = [
        Capability::Contacts,
        Capability::Camera,
        Capability::Photos,
        Capability::Microphone,
        Capability::Location,
        Capability::Motion,
        Capability::Notifications,
        Capability::Bluetooth,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Capability::Contacts => "contacts",
            Capability::Camera => "camera",
            Capability::Photos => "photos",
            Capability::Microphone => "microphone",
            Capability::Location => "location",
            Capability::Motion => "motion",
            Capability::Notifications => "notifications",
            Capability::Bluetooth => "bluetooth",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tri-state (plus restricted/unknown) authorization status.
///
/// A denied or restricted capability is a status, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityStatus {
    Granted,
    Denied,
    NotDetermined,
    Restricted,
    #[default]
    Unknown,
}

impl CapabilityStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityStatus::Granted => "granted",
            CapabilityStatus::Denied => "denied",
            CapabilityStatus::NotDetermined => "not-determined",
            CapabilityStatus::Restricted => "restricted",
            CapabilityStatus::Unknown => "unknown",
        }
    }

    /// Parses a status string; anything unrecognized becomes `Unknown`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "granted" => CapabilityStatus::Granted,
            "denied" => CapabilityStatus::Denied,
            "not-determined" => CapabilityStatus::NotDetermined,
            "restricted" => CapabilityStatus::Restricted,
            _ => CapabilityStatus::Unknown,
        }
    }

    #[must_use]
    pub fn is_granted(self) -> bool {
        self == CapabilityStatus::Granted
    }
}

impl fmt::Display for CapabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of every capability, as of one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilityStatuses {
    statuses: BTreeMap<Capability, CapabilityStatus>,
}

impl CapabilityStatuses {
    /// All capabilities set to `Unknown`.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            statuses: Capability::ALL
                .into_iter()
                .map(|c| (c, CapabilityStatus::Unknown))
                .collect(),
        }
    }

    /// Status of `capability`, `Unknown` if never set.
    #[must_use]
    pub fn get(&self, capability: Capability) -> CapabilityStatus {
        self.statuses.get(&capability).copied().unwrap_or_default()
    }

    /// Updates a single entry, leaving the others untouched.
    pub fn set(&mut self, capability: Capability, status: CapabilityStatus) {
        self.statuses.insert(capability, status);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Capability, CapabilityStatus)> + '_ {
        self.statuses.iter().map(|(c, s)| (*c, *s))
    }

    /// Returns `true` if every capability in the fixed set has `status`.
    #[must_use]
    pub fn all(&self, status: CapabilityStatus) -> bool {
        Capability::ALL.into_iter().all(|c| self.get(c) == status)
    }
}
