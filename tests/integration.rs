// SPDX-License-Identifier: MPL-2.0
use snapdeck::app::persisted_state::AppState;
use snapdeck::application::port::{FixedCapability, SecretStore};
use snapdeck::application::{CapabilityCenter, Session};
use snapdeck::config::{self, Config, AUTH_TOKEN_KEY};
use snapdeck::domain::capability::{Capability, CapabilityStatus};
use snapdeck::domain::payload::{decode_associations, ViewMode};
use snapdeck::feed::HomeTab;
use snapdeck::infrastructure::FileSecretStore;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_settings_survive_session_teardown() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let secrets = FileSecretStore::open(dir.path().join("secrets")).expect("secret store");

    let mut session = Session::initialize(Config::default(), &secrets);
    session.config_mut().security.use_biometrics = true;
    session
        .config_mut()
        .features
        .insert("E-Commerce".to_string(), true);
    session
        .teardown(Some(dir.path().to_path_buf()))
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(loaded.security.use_biometrics);
    assert!(loaded.feature_enabled("E-Commerce"));
    assert!(loaded.feature_enabled("Comments"));
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_token_persists_across_sessions() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("secrets");

    {
        let secrets = FileSecretStore::open(&path).expect("secret store");
        secrets
            .save(AUTH_TOKEN_KEY, b"persisted-token")
            .expect("Failed to save token");
    }

    let secrets = FileSecretStore::open(&path).expect("secret store");
    let mut session = Session::initialize(Config::default(), &secrets);
    assert_eq!(session.token(), Some("persisted-token"));

    session.sign_out(&secrets).expect("Failed to sign out");
    let session = Session::initialize(Config::default(), &secrets);
    assert!(!session.is_authenticated());
}

#[test]
fn test_associations_route_the_session() {
    let payload = br#"[
        {"id": "1", "type": "forum", "label": "Rust", "data": {"topics": ["async", "ffi"]}},
        {"id": "2", "type": "store", "label": "Merch", "data": {"products": ["mug"]}},
        {"id": "3", "type": "podcast", "label": "Later"}
    ]"#;
    let associations = decode_associations(payload);
    assert_eq!(associations.len(), 3);

    let secrets = snapdeck::infrastructure::MemorySecretStore::new();
    let mut session = Session::initialize(Config::default(), &secrets);

    assert_eq!(session.open(&associations[0]), Some(ViewMode::Forum));
    assert_eq!(associations[0].string_list("topics"), Some(vec!["async", "ffi"]));
    assert_eq!(session.open(&associations[1]), Some(ViewMode::Store));
    assert_eq!(session.views().current, ViewMode::Store);

    // Unknown kinds decode but go nowhere
    assert_eq!(session.open(&associations[2]), None);
    assert_eq!(session.views().current, ViewMode::Store);
}

#[tokio::test]
async fn test_capability_snapshot_roundtrip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let center = CapabilityCenter::new()
        .with_provider(Arc::new(FixedCapability::new(
            Capability::Camera,
            CapabilityStatus::Granted,
        )))
        .with_provider(Arc::new(FixedCapability::new(
            Capability::Location,
            CapabilityStatus::Denied,
        )));

    let report = center.refresh_all().await;
    assert_eq!(report.status(Capability::Camera), CapabilityStatus::Granted);
    assert_eq!(report.status(Capability::Location), CapabilityStatus::Denied);
    assert_eq!(report.status(Capability::Bluetooth), CapabilityStatus::Unknown);
    assert_eq!(report.entries().count(), Capability::ALL.len());

    let state = AppState {
        capabilities: Some(report),
        last_tab: HomeTab::Inbox,
    };
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, state);
}

#[tokio::test]
async fn test_all_denied_capabilities_persist_as_denied() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut center = CapabilityCenter::new();
    for capability in Capability::ALL {
        center.register(Arc::new(FixedCapability::new(
            capability,
            CapabilityStatus::Denied,
        )));
    }

    let report = center.refresh_all().await;
    for capability in Capability::ALL {
        assert_eq!(report.status(capability), CapabilityStatus::Denied);
    }

    let state = AppState {
        capabilities: Some(report),
        last_tab: HomeTab::Home,
    };
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
    let (loaded, _) = AppState::load_from(Some(dir.path().to_path_buf()));
    let loaded = loaded.capabilities.expect("snapshot saved");
    assert!(loaded
        .entries()
        .all(|(_, status)| status == CapabilityStatus::Denied));
}

#[test]
fn test_unreadable_state_is_discarded() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("state.cbor"), b"\xff\x00garbage").expect("write");

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, AppState::default());
    assert_eq!(warning.as_deref(), Some("state-parse-error"));
}
