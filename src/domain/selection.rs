//! Usage: Skill selection state (pure reducer + managed-state operations).

use crate::app_state::SelectionState;
use crate::shared::mutex_ext::MutexExt;
use serde::{Deserialize, Serialize};
use tauri::{Emitter, Manager};

/// Emitted to the webview after every selection transition so it can re-render.
pub const SELECTION_CHANGED_EVENT: &str = "skills:selection-changed";

const DISPLAY_SEPARATOR: &str = ",";

/// Ordered, duplicate-free list of currently checked skill identifiers.
///
/// Every transition goes through [`SkillSelection::apply`], which returns a
/// new value instead of mutating in place. Insertion order is preserved but
/// carries no meaning for consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelection {
    selected: Vec<String>,
}

/// One discrete UI event driving the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Toggle { identifier: String, checked: bool },
    Clear,
}

/// Snapshot of the selection handed to the webview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub selected: Vec<String>,
    pub display: String,
}

impl SkillSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from an initial preset, dropping duplicates while
    /// keeping the first occurrence of each identifier.
    pub fn with_selected(identifiers: impl IntoIterator<Item = String>) -> Self {
        let mut selected: Vec<String> = Vec::new();
        for identifier in identifiers {
            if !selected.contains(&identifier) {
                selected.push(identifier);
            }
        }
        Self { selected }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Total transition function: checking appends the identifier if absent
    /// (re-checking is a no-op), unchecking removes every occurrence
    /// (unchecking an absent identifier is a no-op), clearing always yields
    /// the empty selection. Identifiers are opaque; nothing is validated.
    pub fn apply(&self, event: &SelectionEvent) -> Self {
        match event {
            SelectionEvent::Toggle {
                identifier,
                checked: true,
            } => {
                if self.selected.contains(identifier) {
                    return self.clone();
                }
                let mut selected = self.selected.clone();
                selected.push(identifier.clone());
                Self { selected }
            }
            SelectionEvent::Toggle {
                identifier,
                checked: false,
            } => Self {
                selected: self
                    .selected
                    .iter()
                    .filter(|entry| *entry != identifier)
                    .cloned()
                    .collect(),
            },
            SelectionEvent::Clear => Self::new(),
        }
    }

    /// Comma-joined identifiers, display only.
    pub fn display(&self) -> String {
        self.selected.join(DISPLAY_SEPARATOR)
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            selected: self.selected.clone(),
            display: self.display(),
        }
    }
}

pub fn toggle<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    identifier: &str,
    checked: bool,
) -> SelectionSummary {
    apply_event(
        app,
        &SelectionEvent::Toggle {
            identifier: identifier.to_string(),
            checked,
        },
    )
}

pub fn clear<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> SelectionSummary {
    apply_event(app, &SelectionEvent::Clear)
}

pub fn current<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> SelectionSummary {
    let state = app.state::<SelectionState>();
    let guard = state.0.lock_or_recover();
    guard.summary()
}

fn apply_event<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    event: &SelectionEvent,
) -> SelectionSummary {
    let state = app.state::<SelectionState>();
    let summary = {
        let mut guard = state.0.lock_or_recover();
        let next = guard.apply(event);
        *guard = next;
        guard.summary()
    };
    notify_changed(app, &summary);
    summary
}

fn notify_changed<R: tauri::Runtime>(app: &tauri::AppHandle<R>, summary: &SelectionSummary) {
    // Best-effort: the transition already happened; a lost notification only
    // delays the webview until its next read.
    if let Err(err) = app.emit(SELECTION_CHANGED_EVENT, summary) {
        tracing::warn!(error = %err, "selection change notification failed");
    }
}
