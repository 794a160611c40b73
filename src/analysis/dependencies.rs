//! Cycle detection over the depends-on relation
//!
//! Deliberately a 2-hop check: a task and one of its direct dependencies
//! naming each other. Longer cycles (A depends on B depends on C depends on
//! A) are outside this contract; callers wanting full graph traversal should
//! layer it on top.

use crate::domain::Task;

/// Report whether any two tasks directly depend on each other.
///
/// Returns `false` for empty input and for acyclic graphs.
pub fn has_circular_dependencies(tasks: &[Task]) -> bool {
    for task in tasks {
        let Some(deps) = &task.depends_on else {
            continue;
        };
        for dep_id in deps {
            let dep = tasks.iter().find(|t| &t.id == dep_id);
            if let Some(dep) = dep
                && dep.depends_on.as_ref().is_some_and(|back| back.contains(&task.id))
            {
                return true;
            }
        }
    }
    false
}
