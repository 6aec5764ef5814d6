// SPDX-License-Identifier: MPL-2.0
//! User associations (forum, store, profile) and their routing.

use super::value::AnyValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Destination kind of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociationType {
    Forum,
    Store,
    Profile,
    #[serde(other)]
    Unknown,
}

/// Screen a view-mode switch points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Dashboard,
    Forum,
    Profile,
    Store,
}

/// A link from the user to a forum, store or profile, with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AssociationType,
    pub label: String,
    #[serde(default)]
    pub data: BTreeMap<String, AnyValue>,
}

impl Association {
    /// String value stored under `key`, if it is a string.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(AnyValue::as_str)
    }

    /// String list stored under `key` (e.g. `topics`, `products`).
    #[must_use]
    pub fn string_list(&self, key: &str) -> Option<Vec<&str>> {
        self.data.get(key).and_then(AnyValue::as_string_list)
    }

    /// View the association navigates to; `None` for unknown kinds.
    #[must_use]
    pub fn route(&self) -> Option<ViewMode> {
        match self.kind {
            AssociationType::Forum => Some(ViewMode::Forum),
            AssociationType::Store => Some(ViewMode::Store),
            AssociationType::Profile => Some(ViewMode::Profile),
            AssociationType::Unknown => None,
        }
    }
}

/// Decodes a JSON array of associations.
///
/// A malformed payload is logged and yields an empty list.
#[must_use]
pub fn decode_associations(bytes: &[u8]) -> Vec<Association> {
    match serde_json::from_slice::<Vec<Association>>(bytes) {
        Ok(associations) => associations,
        Err(err) => {
            log::warn!("Decoding associations failed: {err}");
            Vec::new()
        }
    }
}
