//! Finalizer - close-out summary once the human is satisfied
//!
//! Adds no new tasks, only summary statistics and a fixed next-steps
//! checklist. Always succeeds for a well-formed decomposition; everything
//! worth validating happened upstream.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::integrations::{Integration, suggest_integrations};
use crate::analysis::matrix::{MatrixPosition, assign_matrix_positions};
use crate::domain::{Assignee, Decomposition, Task};

/// Aggregate counts over a finished decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    /// Subtasks plus the parent
    #[serde(rename = "totalTasks")]
    pub total_tasks: usize,
    #[serde(rename = "marioTasks")]
    pub mario_tasks: usize,
    #[serde(rename = "mariaTasks")]
    pub maria_tasks: usize,
    #[serde(rename = "bothTasks")]
    pub both_tasks: usize,
    /// Subtasks with a deadline set
    pub deadlines: usize,
    /// Subtasks blocked on at least one other task
    pub dependencies: usize,
}

/// Final record handed back to the caller when the loop ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalSummary {
    pub success: bool,
    #[serde(rename = "parentTask")]
    pub parent_task: Task,
    pub subtasks: Vec<Task>,
    pub summary: SummaryCounts,
    pub matrix_positions: Vec<MatrixPosition>,
    pub integrations: Vec<Integration>,
    pub next_steps: Vec<String>,
    pub message: String,
}

/// Compute summary statistics and the close-out message
pub fn finalize_decomposition(decomposition: &Decomposition) -> FinalSummary {
    let parent = decomposition.parent_task.clone();
    let subtasks = decomposition.subtasks.clone();

    let summary = SummaryCounts {
        total_tasks: subtasks.len() + 1,
        mario_tasks: decomposition.assigned_count(Assignee::Mario),
        maria_tasks: decomposition.assigned_count(Assignee::Maria),
        both_tasks: decomposition.assigned_count(Assignee::Both),
        deadlines: subtasks.iter().filter(|t| t.deadline.is_some()).count(),
        dependencies: subtasks.iter().filter(|t| t.is_blocked()).count(),
    };

    info!(parent_id = %parent.id, total = summary.total_tasks, "decomposition finalized");

    FinalSummary {
        success: true,
        message: format!(
            "Perfect! Your task \"{}\" has been successfully decomposed into {} manageable subtasks.",
            parent.name,
            subtasks.len()
        ),
        matrix_positions: assign_matrix_positions(&subtasks),
        integrations: suggest_integrations(&parent.name, &subtasks),
        next_steps: vec![
            "Review the Eisenhower matrix positions for prioritization".to_string(),
            "Add important deadlines to your calendar".to_string(),
            "Consider the suggested integrations".to_string(),
            "Start with the highest priority tasks".to_string(),
        ],
        summary,
        parent_task: parent,
        subtasks,
    }
}
