//! Usage: Read-only user info passthrough view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub age: u32,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct UserCard {
    pub info: UserInfo,
    pub lines: Vec<String>,
}

/// Renders the record verbatim, one line per field. No mutation, no validation.
pub fn card(info: UserInfo) -> UserCard {
    let lines = vec![info.name.clone(), info.age.to_string(), info.email.clone()];
    UserCard { info, lines }
}
