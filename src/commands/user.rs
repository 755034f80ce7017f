//! Usage: User info display Tauri command.

use crate::user;

#[tauri::command]
#[specta::specta]
pub(crate) fn user_card_get(info: user::UserInfo) -> user::UserCard {
    user::card(info)
}
