//! Eisenhower matrix prioritization
//!
//! Maps each task's (urgency, importance) pair to a quadrant with a textual
//! rationale reporting both scores, so a human can audit why a label was
//! chosen.

use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// Eisenhower matrix quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    Do,
    Schedule,
    Delegate,
    Delete,
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Do => write!(f, "do"),
            Self::Schedule => write!(f, "schedule"),
            Self::Delegate => write!(f, "delegate"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Quadrant assignment for one task; derived, never stored on the task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixPosition {
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub position: Quadrant,
    pub reasoning: String,
}

/// Place each task in an Eisenhower quadrant, preserving input order.
///
/// Ambiguous score combinations (middle scores, 4/3 mixes) default to `Do`:
/// treated as actionable rather than silently dropped.
pub fn assign_matrix_positions(tasks: &[Task]) -> Vec<MatrixPosition> {
    tasks
        .iter()
        .map(|task| {
            let position = quadrant(task.urgent, task.important);
            MatrixPosition {
                task_id: task.id.clone(),
                reasoning: format!(
                    "Urgent: {}/5, Important: {}/5 → {}",
                    task.urgent, task.important, position
                ),
                position,
            }
        })
        .collect()
}

fn quadrant(urgent: u8, important: u8) -> Quadrant {
    if urgent >= 4 && important >= 4 {
        Quadrant::Do
    } else if urgent >= 4 && important <= 2 {
        Quadrant::Delegate
    } else if urgent <= 2 && important >= 4 {
        Quadrant::Schedule
    } else if urgent <= 2 && important <= 2 {
        Quadrant::Delete
    } else {
        Quadrant::Do
    }
}
