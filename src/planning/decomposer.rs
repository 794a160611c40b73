//! Decomposition engine - breaks one large task into chained subtasks
//!
//! Subtask content is templated from the parent name; what matters here is
//! the structure: the subtask count, assignee rotation, size and score
//! draws, deadline spacing, and the strict dependency chain.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::deadline::calculate_deadline;
use crate::analysis::integrations::suggest_integrations;
use crate::analysis::matrix::assign_matrix_positions;
use crate::clock::Clock;
use crate::domain::{Assignee, Decomposition, Size, Task, clamp_score};
use crate::error::ValidationError;

/// Sizes a generated subtask may take
const SUBTASK_SIZES: [Size; 3] = [Size::S, Size::M, Size::L];

/// Input for [`decompose_task`]: the one large task to break down
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskDescription {
    pub name: String,
    pub assignee: Option<Assignee>,
    pub urgent: Option<i64>,
    pub important: Option<i64>,
    pub deadline: Option<NaiveDate>,
    pub icon: Option<String>,
    pub first_step: Option<String>,
    pub completion_criteria: Option<String>,
}

/// Break a task description into a parent task and 3-6 chained subtasks.
///
/// The parent is always sized `xl`. Subtasks alternate assignees by index
/// parity, draw size from {s, m, l} and scores from [2, 4], chain each onto
/// the previous one, and space their deadlines back from the parent
/// deadline. `organization_id` is propagated unchanged onto the parent and
/// every subtask.
pub fn decompose_task(
    clock: &dyn Clock,
    description: &TaskDescription,
    organization_id: Option<&str>,
) -> Result<Decomposition, ValidationError> {
    if description.name.trim().is_empty() {
        return Err(ValidationError::MissingDecompositionName);
    }

    let parent_id = clock.new_id(&description.name);
    let parent_task = Task {
        id: parent_id.clone(),
        name: description.name.clone(),
        assignee: description.assignee.unwrap_or(Assignee::Both),
        size: Size::Xl,
        urgent: description.urgent.map_or(3, clamp_score),
        important: description.important.map_or(3, clamp_score),
        completed: false,
        icon: Some(description.icon.clone().unwrap_or_else(|| "📋".to_string())),
        first_step: description.first_step.clone(),
        completion_criteria: description.completion_criteria.clone(),
        deadline: description.deadline,
        depends_on: None,
        parent_task_id: None,
        created_at: clock.now(),
        organization_id: organization_id.map(str::to_string),
    };

    let mut rng = rand::rng();
    let subtask_count = rng.random_range(3..=6);

    let mut subtasks: Vec<Task> = Vec::with_capacity(subtask_count);
    for i in 0..subtask_count {
        let name = format!("Subtask {} for \"{}\"", i + 1, description.name);
        let depends_on = (i > 0).then(|| vec![subtasks[i - 1].id.clone()]);
        subtasks.push(Task {
            id: clock.new_id(&name),
            assignee: if i % 2 == 0 { Assignee::Mario } else { Assignee::Maria },
            size: SUBTASK_SIZES[rng.random_range(0..SUBTASK_SIZES.len())],
            urgent: rng.random_range(2..=4),
            important: rng.random_range(2..=4),
            completed: false,
            icon: Some("✅".to_string()),
            first_step: Some(format!("Start working on subtask {}", i + 1)),
            completion_criteria: Some(format!("Complete subtask {} requirements", i + 1)),
            deadline: calculate_deadline(i, description.deadline),
            depends_on,
            parent_task_id: Some(parent_id.clone()),
            created_at: clock.now(),
            organization_id: organization_id.map(str::to_string),
            name,
        });
    }

    info!(parent_id = %parent_task.id, subtask_count = subtasks.len(), "task decomposed");

    let message = format!(
        "Task \"{}\" has been decomposed into {} subtasks.",
        description.name,
        subtasks.len()
    );

    Ok(Decomposition {
        matrix_positions: assign_matrix_positions(&subtasks),
        integrations: suggest_integrations(&description.name, &subtasks),
        parent_task,
        subtasks,
        message,
    })
}
