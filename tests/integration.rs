// SPDX-License-Identifier: MPL-2.0
use huddle_client::config::{self, Config};
use huddle_client::notifications::{Severity, Toast, ToastDefaults, ToastStore};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn lifecycle_walkthrough() {
    let store = ToastStore::new();

    let first = store.show("A");
    assert_eq!(first.value(), 1);

    let second = store.show_with("B", Severity::Error, None);
    assert_eq!(second.value(), 2);

    let entries = store.snapshot();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message(), "A");
    assert_eq!(entries[0].severity(), Severity::Info);
    assert_eq!(entries[1].message(), "B");
    assert_eq!(entries[1].severity(), Severity::Error);

    assert!(store.dismiss(first));
    let entries = store.snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id(), second);

    // Dismissing the same id again changes nothing.
    assert!(!store.dismiss(first));
    assert_eq!(store.len(), 1);
}

#[test]
fn config_file_drives_toast_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let on_disk = Config {
        api_base_url: None,
        toast_duration_ms: Some(0),
        toast_severity: Some(Severity::Warning),
    };
    config::save_to_path(&on_disk, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let defaults = ToastDefaults::from_config(&loaded);
    assert_eq!(defaults.severity, Severity::Warning);
    assert_eq!(defaults.duration, None);

    let store = ToastStore::with_defaults(defaults);
    store.show("disk space is low");

    let entries = store.snapshot();
    assert_eq!(entries[0].severity(), Severity::Warning);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn convenience_constructors_tag_their_severity() {
    let store = ToastStore::with_defaults(ToastDefaults {
        severity: Severity::Info,
        duration: None,
    });

    store.success("saved");
    store.warning("slow network");
    store.error("rejected");

    let severities: Vec<Severity> = store.snapshot().iter().map(Toast::severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Success, Severity::Warning, Severity::Error]
    );
}

#[tokio::test(start_paused = true)]
async fn expiry_and_dismissal_interleave_safely() {
    let store = ToastStore::new();

    let quick = store.show_with("quick", Severity::Info, Some(Duration::from_millis(100)));
    let manual = store.show_with("manual", Severity::Info, Some(Duration::from_secs(5)));
    let sticky = store.show_with("sticky", Severity::Error, None);

    // Manual dismissal before any timer has fired.
    assert!(store.dismiss(manual));

    tokio::time::sleep(Duration::from_secs(10)).await;

    // "quick" expired, "manual" stayed gone when its timer fired, and the
    // sticky toast is untouched.
    let remaining: Vec<_> = store.snapshot().iter().map(Toast::id).collect();
    assert_eq!(remaining, vec![sticky]);
    assert!(!store.dismiss(quick));
    assert!(!store.dismiss(manual));
}

#[tokio::test]
async fn live_view_tracks_every_change() {
    let store = ToastStore::new();
    let mut view = store.subscribe();
    assert!(view.borrow().is_empty());

    let id = store.show_with("joined session", Severity::Success, None);
    view.changed().await.expect("store dropped");
    {
        let entries = view.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message(), "joined session");
    }

    store.dismiss(id);
    view.changed().await.expect("store dropped");
    assert!(view.borrow().is_empty());
}

#[test]
fn snapshots_are_detached_from_the_store() {
    let store = ToastStore::new();
    store.show_with("present", Severity::Info, None);

    let mut snapshot = store.snapshot();
    snapshot.clear();

    // Mutating the copy has no effect on the store.
    assert_eq!(store.len(), 1);
}
