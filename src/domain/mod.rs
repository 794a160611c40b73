//! Domain types: tasks, decompositions, field enums

pub mod decomposition;
pub mod task;

pub use decomposition::Decomposition;
pub use task::{Assignee, Size, Task, clamp_score};
