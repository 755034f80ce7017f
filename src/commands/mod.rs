//! Usage: Thin `#[tauri::command]` layer over `domain`.

pub(crate) mod app;
pub(crate) mod selection;
pub(crate) mod user;
pub(crate) mod wrapper;

pub(crate) use app::*;
pub(crate) use selection::*;
pub(crate) use user::*;
pub(crate) use wrapper::*;
