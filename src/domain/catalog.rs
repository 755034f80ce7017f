//! Usage: Static catalog of selectable skills rendered as the checkbox list.

use serde::Serialize;

// Identifier doubles as the input value so label `for` references and
// change-event identifiers always agree.
const CATALOG: &[(&str, &str)] = &[("php", "PHP"), ("js", "JS"), ("node", "Node")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct SkillOption {
    pub id: String,
    pub value: String,
    pub label: String,
}

pub fn catalog() -> Vec<SkillOption> {
    CATALOG
        .iter()
        .map(|(id, label)| SkillOption {
            id: (*id).to_string(),
            value: (*id).to_string(),
            label: (*label).to_string(),
        })
        .collect()
}
