//! Self-review over a decomposition
//!
//! A fixed battery of completeness and consistency checks. Findings are
//! surfaced as issues paired with clarifying questions; nothing here raises
//! an error, the calling loop decides whether to ask the human or stop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::dependencies::has_circular_dependencies;
use crate::clock::Clock;
use crate::domain::{Assignee, Decomposition};

/// How many clarifying questions a single review may carry.
///
/// Callers may apply a tighter cap of their own after a refinement round;
/// the two limits compose rather than merge.
const MAX_QUESTIONS: usize = 4;

/// A high-urgency subtask due sooner than this is flagged as unrealistic
const URGENT_HORIZON_DAYS: i64 = 3;

pub const ISSUE_MISSING_DEADLINE: &str = "Missing deadline for parent task";
pub const ISSUE_MISSING_FIRST_STEP: &str = "Missing first step";
pub const ISSUE_BUDGET: &str = "Budget not considered";
pub const ISSUE_UNBALANCED: &str = "Unbalanced workload";
pub const ISSUE_URGENT_DEADLINES: &str = "Potentially unrealistic urgent deadlines";
pub const ISSUE_CIRCULAR: &str = "Circular dependencies detected";

/// Reviewer confidence in the current decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    fn from_issue_count(count: usize) -> Self {
        match count {
            0 => Self::High,
            1..=2 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Outcome of one review pass; produced fresh on every call, never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
    pub confidence: Confidence,
    pub issues: Vec<String>,
    pub questions: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Run the review battery over a decomposition.
///
/// `lenient` suppresses the two missing-field checks (parent deadline and
/// first step); used after a refinement round so the loop converges instead
/// of re-asking for fields the human declined to supply.
pub fn review_decomposition(clock: &dyn Clock, decomposition: &Decomposition, lenient: bool) -> ReviewResult {
    let parent = &decomposition.parent_task;
    let subtasks = &decomposition.subtasks;
    let mut issues = Vec::new();
    let mut questions = Vec::new();

    if !lenient && parent.deadline.is_none() {
        issues.push(ISSUE_MISSING_DEADLINE.to_string());
        questions.push("What's the overall deadline for this task?".to_string());
    }

    if !lenient && parent.first_step.is_none() {
        issues.push(ISSUE_MISSING_FIRST_STEP.to_string());
        questions.push("What would be a good first step to get started?".to_string());
    }

    let name = parent.name.to_lowercase();
    let money_related =
        name.contains("buy") || name.contains("purchase") || name.contains("cost") || name.contains("budget");
    let budget_covered = parent
        .completion_criteria
        .as_ref()
        .is_some_and(|criteria| criteria.to_lowercase().contains("budget"));
    if money_related && !budget_covered {
        issues.push(ISSUE_BUDGET.to_string());
        questions.push("What's your budget for this task?".to_string());
    }

    let mario = decomposition.assigned_count(Assignee::Mario) as i64;
    let maria = decomposition.assigned_count(Assignee::Maria) as i64;
    if (mario - maria).abs() > 1 {
        issues.push(ISSUE_UNBALANCED.to_string());
        questions
            .push("Would you prefer to balance the workload differently between Mario and Maria?".to_string());
    }

    let today = clock.today();
    let rushed = subtasks.iter().any(|task| {
        task.urgent >= 4
            && task
                .deadline
                .is_some_and(|deadline| (deadline - today).num_days() < URGENT_HORIZON_DAYS)
    });
    if rushed {
        issues.push(ISSUE_URGENT_DEADLINES.to_string());
        questions.push("Are these urgent deadlines realistic given the task complexity?".to_string());
    }

    if has_circular_dependencies(subtasks) {
        issues.push(ISSUE_CIRCULAR.to_string());
        questions.push("Can you clarify the dependency relationships between these tasks?".to_string());
    }

    questions.truncate(MAX_QUESTIONS);

    let confidence = Confidence::from_issue_count(issues.len());
    debug!(issue_count = issues.len(), ?confidence, lenient, "decomposition reviewed");

    ReviewResult {
        is_complete: issues.is_empty(),
        confidence,
        suggestions: suggestions_for(&issues),
        issues,
        questions,
    }
}

/// Remediation hints keyed off specific issue strings; issues without a
/// matching rule produce none.
fn suggestions_for(issues: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if issues.iter().any(|issue| issue == ISSUE_UNBALANCED) {
        suggestions.push("Consider redistributing some tasks to balance the workload".to_string());
    }

    if issues.iter().any(|issue| issue == ISSUE_URGENT_DEADLINES) {
        suggestions.push("Consider extending some deadlines or reducing urgency levels".to_string());
    }

    if issues.iter().any(|issue| issue == ISSUE_MISSING_DEADLINE) {
        suggestions.push("Setting a clear deadline helps with prioritization".to_string());
    }

    suggestions
}
