mod support;

use skill_panel_lib::test_support as ts;
use support::TestApp;

#[test]
fn toggle_flow_through_managed_state() {
    let app = TestApp::new();
    let handle = app.handle();

    assert!(ts::selection_current(&handle).selected.is_empty());

    let summary = ts::selection_toggle(&handle, "php", true);
    assert_eq!(summary.selected, ["php"]);

    let summary = ts::selection_toggle(&handle, "js", true);
    assert_eq!(summary.selected, ["php", "js"]);
    assert_eq!(summary.display, "php,js");

    let summary = ts::selection_toggle(&handle, "php", false);
    assert_eq!(summary.selected, ["js"]);

    let summary = ts::selection_clear(&handle);
    assert!(summary.selected.is_empty());
    assert_eq!(ts::selection_current(&handle).display, "");
}

#[test]
fn rechecking_does_not_duplicate() {
    let app = TestApp::new();
    let handle = app.handle();

    ts::selection_toggle(&handle, "node", true);
    let summary = ts::selection_toggle(&handle, "node", true);
    assert_eq!(summary.selected, ["node"]);
}

#[test]
fn transitions_emit_change_events() {
    use tauri::Listener;

    let app = TestApp::new();
    let handle = app.handle();

    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::<String>::new()));
    let sink = seen.clone();
    handle.listen(ts::SELECTION_CHANGED_EVENT, move |event| {
        sink.lock().expect("lock event sink").push(event.payload().to_string());
    });

    ts::selection_toggle(&handle, "node", true);
    ts::selection_clear(&handle);

    let seen = seen.lock().expect("lock event sink");
    assert_eq!(seen.len(), 2);

    let first: serde_json::Value = serde_json::from_str(&seen[0]).expect("payload json");
    assert_eq!(first["selected"], serde_json::json!(["node"]));
    assert_eq!(first["display"], "node");

    let second: serde_json::Value = serde_json::from_str(&seen[1]).expect("payload json");
    assert_eq!(second["selected"], serde_json::json!([]));
    assert_eq!(second["display"], "");
}

#[test]
fn reads_do_not_emit_change_events() {
    use tauri::Listener;

    let app = TestApp::new();
    let handle = app.handle();

    let seen = std::sync::Arc::new(std::sync::Mutex::new(0usize));
    let sink = seen.clone();
    handle.listen(ts::SELECTION_CHANGED_EVENT, move |_| {
        *sink.lock().expect("lock event counter") += 1;
    });

    let _ = ts::selection_current(&handle);
    assert_eq!(*seen.lock().expect("lock event counter"), 0);
}

#[test]
fn catalog_user_and_wrapper_surfaces() {
    let ids: Vec<String> = ts::skills_catalog().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, ["php", "js", "node"]);

    let card = ts::user_card(ts::UserInfo {
        name: "Peter".to_string(),
        age: 30,
        email: "peter@example.com".to_string(),
    });
    assert_eq!(card.lines, ["Peter", "30", "peter@example.com"]);

    assert_eq!(ts::wrapper_style(None).color, ts::DEFAULT_COLOR);
    assert_eq!(ts::wrapper_style(Some("red".to_string())).color, "red");
}
