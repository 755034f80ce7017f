//! Usage: Presentation attributes for the styling wrapper.

use serde::Serialize;

pub const DEFAULT_COLOR: &str = "blue";
const BORDER: &str = "5px solid green";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct WrapperStyle {
    pub color: String,
    pub border: String,
}

/// Resolves the wrapper style; content nested inside the wrapper is owned by
/// the webview and never passes through here.
pub fn style(color: Option<String>) -> WrapperStyle {
    WrapperStyle {
        color: color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        border: BORDER.to_string(),
    }
}
