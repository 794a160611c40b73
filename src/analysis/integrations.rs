//! Integration suggestions derived from task names
//!
//! A case-insensitive keyword scan over the parent and subtask names, emitting
//! advisory external actions (calendar entries, shopping lists). Suggestions
//! never mutate a task and are never deduplicated: each qualifying subtask
//! produces its own entry.

use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// Which external system a suggestion targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationKind {
    Calendar,
    Shopping,
}

/// What the caller should do in that system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationAction {
    Schedule,
    AddItems,
    BlockTime,
}

/// One suggested external action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    #[serde(rename = "type")]
    pub kind: IntegrationKind,
    pub action: IntegrationAction,
    pub details: String,
}

/// Scan the parent name and subtask names for domain keywords.
///
/// The parent-name checks are independent: a name mentioning both an event
/// and a purchase fires both suggestions.
pub fn suggest_integrations(task_name: &str, subtasks: &[Task]) -> Vec<Integration> {
    let mut suggestions = Vec::new();
    let name = task_name.to_lowercase();

    if name.contains("event") || name.contains("meeting") {
        suggestions.push(Integration {
            kind: IntegrationKind::Calendar,
            action: IntegrationAction::Schedule,
            details: format!("Consider adding \"{}\" deadlines to your calendar", task_name),
        });
    }

    if name.contains("buy") || name.contains("purchase") || name.contains("shop") {
        suggestions.push(Integration {
            kind: IntegrationKind::Shopping,
            action: IntegrationAction::AddItems,
            details: format!("Create shopping list for \"{}\"", task_name),
        });
    }

    for subtask in subtasks {
        let sub_name = subtask.name.to_lowercase();
        if sub_name.contains("research") || sub_name.contains("call") {
            suggestions.push(Integration {
                kind: IntegrationKind::Calendar,
                action: IntegrationAction::BlockTime,
                details: format!("Block time for \"{}\"", subtask.name),
            });
        }
    }

    suggestions
}
