mod app;
mod commands;
mod domain;
mod shared;
pub mod test_support;

pub(crate) use app::app_state;
pub(crate) use domain::{catalog, selection, user, wrapper};

use app_state::SelectionState;
use commands::*;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .manage(SelectionState::default())
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            crate::app::logging::init(app.handle());

            // Panic hook so post-mortem context lands in the disk log; the
            // payload is not logged to avoid leaking user data.
            std::panic::set_hook(Box::new(|panic_info| {
                let location = panic_info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::error!(location = %location, "PANIC: application panicked");
            }));

            tracing::info!(version = env!("CARGO_PKG_VERSION"), "skill panel started");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            skills_catalog_get,
            selection_get,
            selection_toggle,
            selection_clear,
            user_card_get,
            wrapper_style_get,
            app_about_get,
            app_frontend_error_report
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Specta type export configuration.
///
/// Run `cargo test export_bindings -- --ignored` to regenerate `ui/bindings.ts`.
#[cfg(test)]
#[test]
#[ignore = "run manually: cargo test export_bindings -- --ignored"]
fn export_bindings() {
    let builder =
        tauri_specta::Builder::<tauri::Wry>::new().commands(tauri_specta::collect_commands![
            commands::selection::skills_catalog_get,
            commands::selection::selection_get,
            commands::selection::selection_toggle,
            commands::selection::selection_clear,
            commands::user::user_card_get,
            commands::wrapper::wrapper_style_get,
            commands::app::app_about_get
        ]);

    builder
        .export(specta_typescript::Typescript::default(), "ui/bindings.ts")
        .expect("failed to export specta TypeScript bindings");
}
