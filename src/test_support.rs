//! Usage: Public test helpers for integration tests.

use tauri::Manager;

pub use crate::domain::catalog::{catalog as skills_catalog, SkillOption};
pub use crate::domain::selection::{
    SelectionEvent, SelectionSummary, SkillSelection, SELECTION_CHANGED_EVENT,
};
pub use crate::domain::user::{card as user_card, UserCard, UserInfo};
pub use crate::domain::wrapper::{style as wrapper_style, WrapperStyle, DEFAULT_COLOR};

/// Registers the managed selection state, as `run()` does for the real app.
pub fn manage_selection<R: tauri::Runtime>(app: &tauri::AppHandle<R>) {
    app.manage(crate::app_state::SelectionState::default());
}

pub fn selection_toggle<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    identifier: &str,
    checked: bool,
) -> SelectionSummary {
    crate::domain::selection::toggle(app, identifier, checked)
}

pub fn selection_clear<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> SelectionSummary {
    crate::domain::selection::clear(app)
}

pub fn selection_current<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> SelectionSummary {
    crate::domain::selection::current(app)
}
