// SPDX-License-Identifier: MPL-2.0
//! Signed-in user as returned by the backend.

use super::association::Association;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "avatarURL", alias = "avatar_url")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub associations: Vec<Association>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_user_with_profile() {
        let json = r#"{
            "email": "a@b.c",
            "profile": {"id": 1, "name": "Ada", "avatarURL": "https://x/y.jpg"},
            "associations": []
        }"#;
        let user: User = serde_json::from_str(json).expect("valid user");
        let profile = user.profile.expect("profile");
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.avatar_url.as_deref(), Some("https://x/y.jpg"));
        assert!(profile.bio.is_none());
    }

    #[test]
    fn missing_fields_default() {
        let user: User = serde_json::from_str("{}").expect("empty user");
        assert_eq!(user, User::default());
    }
}
