//! Usage: Tracing initialization (env-filtered stderr + daily rolling file log).

use crate::shared::error::{AppError, AppResult};
use std::sync::OnceLock;
use tauri::Manager;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directives, e.g. `SKILL_PANEL_LOG=skill_panel_lib=debug`.
const LOG_FILTER_ENV: &str = "SKILL_PANEL_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "skill-panel.log";

// Keeps the non-blocking writer alive for the process lifetime.
static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

pub(crate) fn init<R: tauri::Runtime>(app: &tauri::AppHandle<R>) {
    if let Err(err) = try_init(app) {
        eprintln!("logging init failed: {err}");
    }
}

fn try_init<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> AppResult<()> {
    let log_dir = app
        .path()
        .app_log_dir()
        .map_err(|e| AppError::new("LOGGING_INIT", format!("resolve app log dir: {e}")))?;
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| AppError::new("LOGGING_INIT", format!("create log dir: {e}")))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX));
    let _ = FILE_GUARD.set(guard);

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    // Route `log` records (tauri internals) through tracing as well.
    let _ = tracing_log::LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init()
        .map_err(|e| AppError::new("LOGGING_INIT", format!("install subscriber: {e}")))?;

    tracing::info!(dir = %log_dir.display(), "file logging enabled");
    Ok(())
}
