//! Decomposition - the unit of work carried through the pipeline
//!
//! Created once by the decomposition engine, passed by value through zero or
//! more refinement rounds (each producing a new Decomposition), and consumed
//! once by the finalizer.

use serde::{Deserialize, Serialize};

use super::task::{Assignee, Task};
use crate::analysis::integrations::Integration;
use crate::analysis::matrix::MatrixPosition;

/// A parent task plus its generated subtasks, with derived advisory data
///
/// Subtask order is meaningful: it defines default dependency chaining and
/// deadline spacing. Invariants: every subtask's `parent_task_id` equals the
/// parent's id; the first subtask is unblocked and each later one depends on
/// its predecessor unless a refinement altered the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    #[serde(rename = "parentTask")]
    pub parent_task: Task,

    pub subtasks: Vec<Task>,

    /// Human-readable status line for the chat client
    pub message: String,

    /// Eisenhower quadrant per subtask, recomputed on every stage
    pub matrix_positions: Vec<MatrixPosition>,

    /// Advisory external actions, recomputed on every stage
    pub integrations: Vec<Integration>,
}

impl Decomposition {
    /// Number of subtasks assigned to `assignee`
    pub fn assigned_count(&self, assignee: Assignee) -> usize {
        self.subtasks.iter().filter(|t| t.assignee == assignee).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn sample() -> Decomposition {
        let clock = FixedClock::at(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let parent = Task::new(&clock, "Parent", Assignee::Both);
        let subtasks = vec![
            Task::new(&clock, "One", Assignee::Mario),
            Task::new(&clock, "Two", Assignee::Maria),
            Task::new(&clock, "Three", Assignee::Mario),
        ];
        Decomposition {
            parent_task: parent,
            subtasks,
            message: String::new(),
            matrix_positions: vec![],
            integrations: vec![],
        }
    }

    #[test]
    fn test_assigned_count() {
        let decomposition = sample();
        assert_eq!(decomposition.assigned_count(Assignee::Mario), 2);
        assert_eq!(decomposition.assigned_count(Assignee::Maria), 1);
        assert_eq!(decomposition.assigned_count(Assignee::Both), 0);
    }

    #[test]
    fn test_serde_parent_key() {
        let decomposition = sample();
        let json = serde_json::to_value(&decomposition).unwrap();
        assert!(json.get("parentTask").is_some());
        assert!(json.get("parent_task").is_none());
    }
}
