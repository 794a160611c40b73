//! Refiner - applies human answers to a decomposition
//!
//! Each question/response pair is matched on question keywords, in the order
//! given, so later answers can override earlier ones on the same field. The
//! input decomposition is never mutated; every round returns a fresh copy.

use chrono::Days;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::deadline::{calculate_deadline, parse_deadline};
use crate::analysis::integrations::suggest_integrations;
use crate::analysis::matrix::assign_matrix_positions;
use crate::clock::Clock;
use crate::domain::{Assignee, Decomposition, Task};

/// Days added to a high-urgency deadline when the human asks to extend
const EXTENSION_DAYS: u64 = 2;

/// One clarifying question and the human's answer to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub response: String,
}

/// Apply a batch of question/answer pairs to produce a new decomposition.
///
/// Matching is case-insensitive substring matching on the question text.
/// After all answers are applied, a changed parent deadline recomputes every
/// subtask deadline from scratch, discarding any extensions applied earlier
/// in the same call.
pub fn refine_decomposition(clock: &dyn Clock, decomposition: &Decomposition, answers: &[Answer]) -> Decomposition {
    let original_deadline = decomposition.parent_task.deadline;
    let mut parent = decomposition.parent_task.clone();
    let mut subtasks = decomposition.subtasks.clone();

    for answer in answers {
        let question = answer.question.to_lowercase();
        let response = answer.response.to_lowercase();

        if (question.contains("deadline") || question.contains("when")) && question.contains("overall") {
            parent.deadline = Some(parse_deadline(clock.today(), &answer.response));
        }

        if question.contains("budget") || question.contains("cost") {
            let note = format!("Budget: {}", answer.response);
            parent.completion_criteria = Some(match parent.completion_criteria.take() {
                Some(existing) => format!("{}. {}", existing, note),
                None => note,
            });
        }

        if question.contains("balance") || question.contains("workload") {
            if response.contains("mario") {
                reassign_first(&mut subtasks, Assignee::Maria, Assignee::Mario);
            } else if response.contains("maria") {
                reassign_first(&mut subtasks, Assignee::Mario, Assignee::Maria);
            }
        }

        if question.contains("first step") || question.contains("start") {
            parent.first_step = Some(answer.response.clone());
        }

        if (question.contains("realistic") || question.contains("urgent"))
            && (response.contains("no") || response.contains("extend"))
        {
            for task in subtasks.iter_mut().filter(|t| t.urgent >= 4) {
                if let Some(deadline) = task.deadline {
                    task.deadline = deadline.checked_add_days(Days::new(EXTENSION_DAYS));
                }
            }
        }

        if question.contains("dependency") || question.contains("order") {
            reset_dependency_chain(&mut subtasks);
        }
    }

    // A new parent deadline invalidates every subtask deadline, including
    // extensions applied earlier in this same call.
    if parent.deadline.is_some() && parent.deadline != original_deadline {
        for (index, task) in subtasks.iter_mut().enumerate() {
            task.deadline = calculate_deadline(index, parent.deadline);
        }
    }

    info!(parent_id = %parent.id, answers = answers.len(), "decomposition refined");

    Decomposition {
        message: "Decomposition refined based on your answers.".to_string(),
        matrix_positions: assign_matrix_positions(&subtasks),
        integrations: suggest_integrations(&parent.name, &subtasks),
        parent_task: parent,
        subtasks,
    }
}

/// Move the first subtask assigned to `from` over to `to`
fn reassign_first(subtasks: &mut [Task], from: Assignee, to: Assignee) {
    if let Some(task) = subtasks.iter_mut().find(|t| t.assignee == from) {
        debug!(task_id = %task.id, %from, %to, "rebalancing workload");
        task.assignee = to;
    }
}

/// Reset to the strict sequential chain: first subtask unblocked, each later
/// one blocked on its predecessor.
fn reset_dependency_chain(subtasks: &mut [Task]) {
    let ids: Vec<String> = subtasks.iter().map(|t| t.id.clone()).collect();
    for (index, task) in subtasks.iter_mut().enumerate() {
        task.depends_on = (index > 0).then(|| vec![ids[index - 1].clone()]);
    }
}
