use dockpane_core::{MINIMIZED_KEY, OverlayConfig, OverlayCustomizer};
use dockpane_plugin::SessionStore;
use dockpane_runtime::{JsonFileStore, OverlayHost, TracingSink};
use tempfile::tempdir;

fn config() -> OverlayConfig {
    OverlayConfig::from_json(r#"{"iframeUrl": "https://panel.example.com/embed"}"#).unwrap()
}

#[tokio::test]
async fn minimize_survives_a_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let host = OverlayHost::new(
        OverlayCustomizer::new(config()),
        TracingSink,
        JsonFileStore::open(&path),
    );
    host.initialize().await.unwrap();
    host.minimize_activated().unwrap();

    // the flag is written through to the store file
    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get(MINIMIZED_KEY).as_deref(), Some("true"));

    // a second page lifecycle in the same session starts minimized
    let host = OverlayHost::new(OverlayCustomizer::new(config()), TracingSink, reopened);
    host.initialize().await.unwrap();
    let minimized = host
        .with_customizer(|customizer| customizer.controller().unwrap().is_minimized())
        .unwrap();
    assert!(minimized);
}

#[tokio::test]
async fn restore_writes_the_flag_back_to_false() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let host = OverlayHost::new(
        OverlayCustomizer::new(config()),
        TracingSink,
        JsonFileStore::open(&path),
    );
    host.initialize().await.unwrap();
    host.minimize_activated().unwrap();
    host.restore_activated().unwrap();

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get(MINIMIZED_KEY).as_deref(), Some("false"));
}

#[tokio::test]
async fn activations_on_hidden_controls_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let host = OverlayHost::new(
        OverlayCustomizer::new(config()),
        TracingSink,
        JsonFileStore::open(&path),
    );
    host.initialize().await.unwrap();

    // restore is hidden while expanded, so nothing is persisted
    host.restore_activated().unwrap();
    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get(MINIMIZED_KEY), None);
}
