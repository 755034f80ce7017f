//! Usage: Styling wrapper Tauri command.

use crate::wrapper;

#[tauri::command]
#[specta::specta]
pub(crate) fn wrapper_style_get(color: Option<String>) -> wrapper::WrapperStyle {
    wrapper::style(color)
}
