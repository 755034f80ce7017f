//! Usage: Skill selection Tauri commands (the checkbox change-event surface).

use crate::{catalog, selection};

/// Change-event contract from the webview: `{ identifier, value, checked }`.
/// The reducer keys on `identifier`; `value` is display-only.
#[tauri::command]
#[specta::specta]
pub(crate) fn selection_toggle(
    app: tauri::AppHandle,
    identifier: String,
    value: String,
    checked: bool,
) -> selection::SelectionSummary {
    tracing::debug!(identifier = %identifier, value = %value, checked, "checkbox change");
    selection::toggle(&app, &identifier, checked)
}

#[tauri::command]
#[specta::specta]
pub(crate) fn selection_clear(app: tauri::AppHandle) -> selection::SelectionSummary {
    selection::clear(&app)
}

#[tauri::command]
#[specta::specta]
pub(crate) fn selection_get(app: tauri::AppHandle) -> selection::SelectionSummary {
    selection::current(&app)
}

#[tauri::command]
#[specta::specta]
pub(crate) fn skills_catalog_get() -> Vec<catalog::SkillOption> {
    catalog::catalog()
}
