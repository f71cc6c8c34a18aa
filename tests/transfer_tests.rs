//! Integration Tests
//!
//! End-to-end tests for the handoff transfer cycle over the file-backed
//! store.

use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use handoff::{
    AppDescriptor, AppRegistry, EditorState, EditorTransferOptions, EmbeddablePackage,
    KeyValueStore, PackageTransferOptions, RecordingNavigator, StateTransfer,
    TRANSFER_STORAGE_KEY,
};

/// Helper to build a transfer helper over a file store in `root`.
///
/// Run with `RUST_LOG=handoff=debug` to see transfer events.
fn file_transfer(root: &Path) -> StateTransfer<handoff::FileStore, RecordingNavigator> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut registry = AppRegistry::new();
    registry.insert("dashboards", AppDescriptor::new("Dashboards"));
    registry.insert("superUltraVisualize", AppDescriptor::new("Super Ultra Visualize"));
    StateTransfer::with_file_store(RecordingNavigator::new(), Some(registry), root)
}

#[test]
fn test_full_editor_transfer_cycle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let transfer = file_transfer(temp_dir.path());

    let mut state = EditorState::new("dashboards");
    state.originating_path = Some("/view/panel-1".to_string());
    state.value_input = Some(json!({"title": "My panel"}));

    transfer
        .navigate_to_editor(
            "superUltraVisualize",
            EditorTransferOptions {
                state,
                path: Some("/edit".to_string()),
                replace: Some(true),
            },
        )
        .unwrap();

    // Receiving side: a fresh helper over the same root sees the state.
    let receiver = file_transfer(temp_dir.path());
    let incoming = receiver.incoming_editor_state(true).unwrap().unwrap();

    assert_eq!(incoming.originating_app, "dashboards");
    assert_eq!(incoming.originating_path.as_deref(), Some("/view/panel-1"));
    assert_eq!(incoming.value_input, Some(json!({"title": "My panel"})));
    assert_eq!(
        receiver.app_name_from_id(&incoming.originating_app),
        Some("Dashboards".to_string())
    );

    // Consumed: the record is gone.
    assert_eq!(receiver.incoming_editor_state(false).unwrap(), None);
}

#[test]
fn test_worked_example_package_transfer() {
    let temp_dir = tempfile::tempdir().unwrap();
    let transfer = file_transfer(temp_dir.path());

    transfer
        .navigate_to_with_embeddable_package(
            "superUltraVisualize",
            PackageTransferOptions {
                state: EmbeddablePackage::new("coolestType", json!({"savedObjectId": "150"})),
                path: None,
                replace: None,
            },
        )
        .unwrap();

    let store = handoff::FileStore::new(temp_dir.path());
    assert_eq!(
        store.get(TRANSFER_STORAGE_KEY).unwrap().unwrap(),
        json!({
            "embeddablePackage": {
                "type": "coolestType",
                "input": {"savedObjectId": "150"},
            },
        })
    );

    let calls = transfer.navigator().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "superUltraVisualize");
    assert_eq!(calls[0].1.path, None);
}

#[test]
fn test_foreign_keys_survive_out_and_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = handoff::FileStore::new(temp_dir.path());
    store
        .set(
            TRANSFER_STORAGE_KEY,
            json!({"someOtherWriter": {"pinned": true}}),
        )
        .unwrap();

    let transfer = file_transfer(temp_dir.path());
    transfer
        .navigate_to_with_embeddable_package(
            "superUltraVisualize",
            PackageTransferOptions {
                state: EmbeddablePackage::new("map", json!({"id": "7"})),
                path: None,
                replace: None,
            },
        )
        .unwrap();

    let receiver = file_transfer(temp_dir.path());
    receiver.incoming_embeddable_package(true).unwrap().unwrap();

    let stored = store.get(TRANSFER_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(stored, json!({"someOtherWriter": {"pinned": true}}));
}

#[test_case(json!({"originatingPath": "/view"}); "missing originating app")]
#[test_case(json!({"originatingApp": ""}); "empty originating app")]
#[test_case(json!({"originatingApp": 42}); "non-string originating app")]
#[test_case(json!([1, 2]); "not an object")]
fn test_malformed_editor_state_reads_as_absent(sub_record: serde_json::Value) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = handoff::FileStore::new(temp_dir.path());
    store
        .set(TRANSFER_STORAGE_KEY, json!({"editorState": sub_record}))
        .unwrap();

    let transfer = file_transfer(temp_dir.path());
    assert_eq!(transfer.incoming_editor_state(false).unwrap(), None);
}

#[test_case(json!({"input": {"id": "1"}}); "missing type")]
#[test_case(json!({"type": "map"}); "missing input")]
#[test_case(json!({"type": "map", "input": null}); "null input")]
fn test_malformed_package_reads_as_absent(sub_record: serde_json::Value) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = handoff::FileStore::new(temp_dir.path());
    store
        .set(TRANSFER_STORAGE_KEY, json!({"embeddablePackage": sub_record}))
        .unwrap();

    let transfer = file_transfer(temp_dir.path());
    assert_eq!(transfer.incoming_embeddable_package(false).unwrap(), None);
}

#[test]
fn test_both_sub_states_travel_independently() {
    let temp_dir = tempfile::tempdir().unwrap();
    let transfer = file_transfer(temp_dir.path());

    transfer
        .navigate_to_editor(
            "superUltraVisualize",
            EditorTransferOptions {
                state: EditorState::new("dashboards"),
                path: None,
                replace: None,
            },
        )
        .unwrap();
    transfer
        .navigate_to_with_embeddable_package(
            "superUltraVisualize",
            PackageTransferOptions {
                state: EmbeddablePackage::new("lens", json!({"id": "9"})),
                path: None,
                replace: None,
            },
        )
        .unwrap();

    let receiver = file_transfer(temp_dir.path());

    // Consuming the package leaves the editor state pending.
    receiver.incoming_embeddable_package(true).unwrap().unwrap();
    let editor = receiver.incoming_editor_state(true).unwrap().unwrap();
    assert_eq!(editor.originating_app, "dashboards");

    // Both consumed: the top-level key is released.
    let store = handoff::FileStore::new(temp_dir.path());
    assert_eq!(store.get(TRANSFER_STORAGE_KEY).unwrap(), None);
}
