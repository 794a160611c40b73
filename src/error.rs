//! Validation errors raised by the core pipeline
//!
//! Validation failures are the only errors the core raises: always
//! synchronous, always permanent for the given input. Soft quality problems
//! (missing deadlines, unbalanced workload, dependency cycles) are surfaced
//! as review issues instead, so the calling loop can decide whether to ask
//! the human or proceed.

use thiserror::Error;

/// A required field is missing or an enum field has an invalid value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task name is required for decomposition")]
    MissingDecompositionName,

    #[error("Task name and assignee are required")]
    MissingNameOrAssignee,

    #[error("Assignee must be one of: mario, maria, both")]
    InvalidAssignee,

    #[error("Size must be one of: xs, s, m, l, xl")]
    InvalidSize,

    #[error("Task ID is required")]
    MissingTaskId,

    #[error("Split description must include both part1 and part2 task names")]
    MissingSplitParts,
}
