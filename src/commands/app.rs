//! Usage: App-level Tauri commands (about info, frontend error reporting).

fn sanitize_text(input: Option<String>, max_len: usize) -> Option<String> {
    let value = input?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(max_len).collect())
}

#[derive(Debug, Clone, serde::Serialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppAboutInfo {
    os: String,
    arch: String,
    profile: String,
    app_version: String,
}

#[tauri::command]
#[specta::specta]
pub(crate) fn app_about_get() -> AppAboutInfo {
    AppAboutInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        profile: if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "release".to_string()
        },
        app_version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[tauri::command]
pub(crate) fn app_frontend_error_report(
    source: String,
    message: String,
    stack: Option<String>,
    details_json: Option<String>,
) -> Result<bool, String> {
    let source = sanitize_text(Some(source), 128).unwrap_or_else(|| "unknown".to_string());
    let message = sanitize_text(Some(message), 4096).unwrap_or_else(|| "unknown".to_string());
    let stack = sanitize_text(stack, 16_384);
    // Only structured details survive; anything unparsable is dropped rather
    // than logged raw.
    let details = sanitize_text(details_json, 16_384)
        .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).ok());

    tracing::error!(
        target: "frontend",
        source = %source,
        stack = %stack.as_deref().unwrap_or_default(),
        details = %details.map(|v| v.to_string()).unwrap_or_default(),
        "{message}"
    );
    Ok(true)
}
