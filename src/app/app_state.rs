//! Usage: Shared Tauri state holding the live skill selection.

use crate::domain::selection::SkillSelection;
use std::sync::Mutex;

/// One selection per app window surface; mutated only inside command
/// handlers, so transitions never overlap.
#[derive(Default)]
pub(crate) struct SelectionState(pub(crate) Mutex<SkillSelection>);
