//! Breakdown - iterative task decomposition pipeline
//!
//! Turns a single large task description into a structured, prioritized,
//! dependency-ordered set of subtasks through a plan, self-critique, refine,
//! finalize loop. This crate is the pure core of that loop: a chat-style
//! caller alternates between these functions and clarifying questions to a
//! human, then persists or delivers the result itself.
//!
//! # Pipeline
//!
//! - [`decompose_task`] produces a parent task plus 3-6 chained subtasks
//! - [`review_decomposition`] runs a battery of completeness and consistency
//!   checks, yielding issues, questions, and a confidence rating
//! - [`refine_decomposition`] applies human answers to produce a new
//!   decomposition (copy-on-write, the input is never mutated)
//! - [`finalize_decomposition`] computes the close-out summary
//!
//! All operations are synchronous, hold no shared state, and perform no I/O
//! apart from reading the injected [`Clock`]. Concurrent callers need no
//! synchronization.
//!
//! # Modules
//!
//! - [`planning`] - the four pipeline stages
//! - [`analysis`] - deadline, prioritization, integration, and dependency
//!   heuristics
//! - [`domain`] - task and decomposition types
//! - [`tasks`] - single-task create/split/update helpers
//! - [`clock`] - injectable time and ID provider

pub mod analysis;
pub mod clock;
pub mod domain;
pub mod error;
pub mod planning;
pub mod tasks;

// Re-export commonly used types
pub use analysis::deadline::{calculate_deadline, parse_deadline};
pub use analysis::dependencies::has_circular_dependencies;
pub use analysis::integrations::{Integration, IntegrationAction, IntegrationKind, suggest_integrations};
pub use analysis::matrix::{MatrixPosition, Quadrant, assign_matrix_positions};
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{Assignee, Decomposition, Size, Task, clamp_score};
pub use error::ValidationError;
pub use planning::{
    Answer, Confidence, FinalSummary, ReviewResult, SummaryCounts, TaskDescription, decompose_task,
    finalize_decomposition, refine_decomposition, review_decomposition,
};
pub use tasks::{
    AppliedUpdates, NewTask, SplitParts, TaskSplit, TaskUpdate, TaskUpdates, create_task, split_task, update_task,
};
