//! Single-task helpers: create, split, update
//!
//! These share the field validation rules of the pipeline but operate on one
//! task at a time. Persistence is the caller's concern; each helper returns
//! the validated result as plain data.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::Clock;
use crate::domain::{Assignee, Size, Task, clamp_score};
use crate::error::ValidationError;

/// Input for [`create_task`]
///
/// Assignee and size arrive as free strings from the caller's wire format
/// and are validated here, so a bad value produces the library's error
/// message rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTask {
    pub name: Option<String>,
    pub assignee: Option<String>,
    pub size: Option<String>,
    pub urgent: Option<i64>,
    pub important: Option<i64>,
    pub icon: Option<String>,
    pub first_step: Option<String>,
    pub completion_criteria: Option<String>,
}

/// Create a single task with defaulted optional fields.
///
/// Name and assignee are required; size defaults to `m` and both scores to
/// 3. Scores are clamped into `[1, 5]`.
pub fn create_task(clock: &dyn Clock, data: &NewTask) -> Result<Task, ValidationError> {
    let (Some(name), Some(assignee)) = (data.name.as_deref(), data.assignee.as_deref()) else {
        return Err(ValidationError::MissingNameOrAssignee);
    };
    if name.trim().is_empty() || assignee.trim().is_empty() {
        return Err(ValidationError::MissingNameOrAssignee);
    }

    let assignee: Assignee = assignee.parse()?;
    let size = match data.size.as_deref() {
        Some(size) => size.parse()?,
        None => Size::M,
    };

    let task = Task {
        id: clock.new_id(name),
        name: name.to_string(),
        assignee,
        size,
        urgent: data.urgent.map_or(3, clamp_score),
        important: data.important.map_or(3, clamp_score),
        completed: false,
        icon: data.icon.clone(),
        first_step: data.first_step.clone(),
        completion_criteria: data.completion_criteria.clone(),
        deadline: None,
        depends_on: None,
        parent_task_id: None,
        created_at: clock.now(),
        organization_id: None,
    };
    info!(task_id = %task.id, "task created");
    Ok(task)
}

/// Names and per-part overrides for [`split_task`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitParts {
    pub part1: Option<String>,
    pub part2: Option<String>,
    pub size1: Option<String>,
    pub size2: Option<String>,
    pub first_step1: Option<String>,
    pub first_step2: Option<String>,
    pub completion_criteria1: Option<String>,
    pub completion_criteria2: Option<String>,
}

/// Result of splitting a task into two parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSplit {
    #[serde(rename = "originalTaskId")]
    pub original_task_id: String,
    #[serde(rename = "newTasks")]
    pub new_tasks: [Task; 2],
    pub message: String,
}

/// Split a task into two new tasks.
///
/// Requires a non-empty task id and both part names. Each part may carry its
/// own size, first step, and completion criteria; sizes default to `m`.
pub fn split_task(clock: &dyn Clock, task_id: &str, parts: &SplitParts) -> Result<TaskSplit, ValidationError> {
    if task_id.trim().is_empty() {
        return Err(ValidationError::MissingTaskId);
    }
    let (Some(part1), Some(part2)) = (parts.part1.as_deref(), parts.part2.as_deref()) else {
        return Err(ValidationError::MissingSplitParts);
    };
    if part1.trim().is_empty() || part2.trim().is_empty() {
        return Err(ValidationError::MissingSplitParts);
    }

    let first = split_part(
        clock,
        part1,
        parts.size1.as_deref(),
        parts.first_step1.clone(),
        parts.completion_criteria1.clone(),
    )?;
    let second = split_part(
        clock,
        part2,
        parts.size2.as_deref(),
        parts.first_step2.clone(),
        parts.completion_criteria2.clone(),
    )?;

    info!(original = task_id, "task split into two parts");

    Ok(TaskSplit {
        original_task_id: task_id.to_string(),
        message: format!("Task {} split into \"{}\" and \"{}\".", task_id, part1, part2),
        new_tasks: [first, second],
    })
}

fn split_part(
    clock: &dyn Clock,
    name: &str,
    size: Option<&str>,
    first_step: Option<String>,
    completion_criteria: Option<String>,
) -> Result<Task, ValidationError> {
    let size = match size {
        Some(size) => size.parse()?,
        None => Size::M,
    };
    Ok(Task {
        id: clock.new_id(name),
        name: name.to_string(),
        assignee: Assignee::Both,
        size,
        urgent: 3,
        important: 3,
        completed: false,
        icon: Some("📋".to_string()),
        first_step,
        completion_criteria,
        deadline: None,
        depends_on: None,
        parent_task_id: None,
        created_at: clock.now(),
        organization_id: None,
    })
}

/// Requested field changes for [`update_task`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskUpdates {
    pub name: Option<String>,
    pub assignee: Option<String>,
    pub size: Option<String>,
    pub urgent: Option<i64>,
    pub important: Option<i64>,
    pub completed: Option<bool>,
    pub icon: Option<String>,
    pub first_step: Option<String>,
    pub completion_criteria: Option<String>,
}

/// Validated field changes; only provided fields are present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppliedUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_criteria: Option<String>,
}

/// Result of a task update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub updates: AppliedUpdates,
    pub message: String,
}

/// Validate a set of field updates for a task.
///
/// Requires a non-empty task id. Assignee and size values are validated,
/// scores clamped; fields not provided are absent from the result.
pub fn update_task(task_id: &str, updates: &TaskUpdates) -> Result<TaskUpdate, ValidationError> {
    if task_id.trim().is_empty() {
        return Err(ValidationError::MissingTaskId);
    }

    let applied = AppliedUpdates {
        name: updates.name.clone(),
        assignee: updates.assignee.as_deref().map(|s| s.parse()).transpose()?,
        size: updates.size.as_deref().map(|s| s.parse()).transpose()?,
        urgent: updates.urgent.map(clamp_score),
        important: updates.important.map(clamp_score),
        completed: updates.completed,
        icon: updates.icon.clone(),
        first_step: updates.first_step.clone(),
        completion_criteria: updates.completion_criteria.clone(),
    };

    Ok(TaskUpdate {
        task_id: task_id.to_string(),
        message: format!("Task {} updated.", task_id),
        updates: applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::at(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    fn new_task(name: Option<&str>, assignee: Option<&str>) -> NewTask {
        NewTask {
            name: name.map(str::to_string),
            assignee: assignee.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_task_defaults() {
        let task = create_task(&clock(), &new_task(Some("Test Task"), Some("mario"))).unwrap();
        assert_eq!(task.name, "Test Task");
        assert_eq!(task.assignee, Assignee::Mario);
        assert_eq!(task.size, Size::M);
        assert_eq!(task.urgent, 3);
        assert_eq!(task.important, 3);
        assert!(!task.completed);
        assert!(task.icon.is_none());
        assert!(task.first_step.is_none());
        assert!(task.completion_criteria.is_none());
    }

    #[test]
    fn test_create_task_requires_name_and_assignee() {
        assert_eq!(
            create_task(&clock(), &new_task(None, Some("mario"))).unwrap_err(),
            ValidationError::MissingNameOrAssignee
        );
        assert_eq!(
            create_task(&clock(), &new_task(Some("Test"), None)).unwrap_err(),
            ValidationError::MissingNameOrAssignee
        );
        assert_eq!(
            create_task(&clock(), &new_task(Some(""), Some("mario"))).unwrap_err(),
            ValidationError::MissingNameOrAssignee
        );
    }

    #[test]
    fn test_create_task_validates_enums() {
        assert_eq!(
            create_task(&clock(), &new_task(Some("Test"), Some("luigi"))).unwrap_err(),
            ValidationError::InvalidAssignee
        );

        let mut data = new_task(Some("Test"), Some("maria"));
        data.size = Some("gigantic".to_string());
        assert_eq!(create_task(&clock(), &data).unwrap_err(), ValidationError::InvalidSize);

        data.size = Some("xl".to_string());
        assert_eq!(create_task(&clock(), &data).unwrap().size, Size::Xl);
    }

    #[test]
    fn test_create_task_clamps_scores() {
        let mut data = new_task(Some("Test"), Some("mario"));
        data.urgent = Some(10);
        data.important = Some(-5);
        let task = create_task(&clock(), &data).unwrap();
        assert_eq!(task.urgent, 5);
        assert_eq!(task.important, 1);
    }

    #[test]
    fn test_create_task_optional_fields() {
        let mut data = new_task(Some("Test"), Some("mario"));
        data.icon = Some("📋".to_string());
        data.first_step = Some("Start here".to_string());
        data.completion_criteria = Some("Done when X".to_string());

        let task = create_task(&clock(), &data).unwrap();
        assert_eq!(task.icon.as_deref(), Some("📋"));
        assert_eq!(task.first_step.as_deref(), Some("Start here"));
        assert_eq!(task.completion_criteria.as_deref(), Some("Done when X"));
    }

    fn parts(part1: Option<&str>, part2: Option<&str>) -> SplitParts {
        SplitParts {
            part1: part1.map(str::to_string),
            part2: part2.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_split_task_basic() {
        let result = split_task(&clock(), "task_123", &parts(Some("First part"), Some("Second part"))).unwrap();
        assert_eq!(result.original_task_id, "task_123");
        assert_eq!(result.new_tasks[0].name, "First part");
        assert_eq!(result.new_tasks[1].name, "Second part");
        assert!(!result.message.is_empty());
    }

    #[test]
    fn test_split_task_defaults() {
        let result = split_task(&clock(), "task_123", &parts(Some("A"), Some("B"))).unwrap();
        for task in &result.new_tasks {
            assert_eq!(task.size, Size::M);
            assert_eq!(task.urgent, 3);
            assert_eq!(task.important, 3);
            assert!(!task.completed);
            assert_eq!(task.icon.as_deref(), Some("📋"));
        }
    }

    #[test]
    fn test_split_task_per_part_overrides() {
        let mut split = parts(Some("A"), Some("B"));
        split.size1 = Some("s".to_string());
        split.size2 = Some("l".to_string());
        split.first_step1 = Some("Start step 1".to_string());
        split.completion_criteria2 = Some("Done 2".to_string());

        let result = split_task(&clock(), "task_123", &split).unwrap();
        assert_eq!(result.new_tasks[0].size, Size::S);
        assert_eq!(result.new_tasks[1].size, Size::L);
        assert_eq!(result.new_tasks[0].first_step.as_deref(), Some("Start step 1"));
        assert!(result.new_tasks[1].first_step.is_none());
        assert_eq!(result.new_tasks[1].completion_criteria.as_deref(), Some("Done 2"));
    }

    #[test]
    fn test_split_task_validation() {
        assert_eq!(
            split_task(&clock(), "", &parts(Some("A"), Some("B"))).unwrap_err(),
            ValidationError::MissingTaskId
        );
        assert_eq!(
            split_task(&clock(), "task_123", &parts(None, Some("B"))).unwrap_err(),
            ValidationError::MissingSplitParts
        );
        assert_eq!(
            split_task(&clock(), "task_123", &parts(Some("A"), None)).unwrap_err(),
            ValidationError::MissingSplitParts
        );
    }

    #[test]
    fn test_update_task_basic() {
        let updates = TaskUpdates {
            name: Some("Updated Task".to_string()),
            urgent: Some(5),
            important: Some(4),
            completed: Some(true),
            ..Default::default()
        };
        let result = update_task("task_123", &updates).unwrap();
        assert_eq!(result.task_id, "task_123");
        assert_eq!(result.updates.name.as_deref(), Some("Updated Task"));
        assert_eq!(result.updates.urgent, Some(5));
        assert_eq!(result.updates.important, Some(4));
        assert_eq!(result.updates.completed, Some(true));
    }

    #[test]
    fn test_update_task_requires_id() {
        assert_eq!(
            update_task("", &TaskUpdates::default()).unwrap_err(),
            ValidationError::MissingTaskId
        );
    }

    #[test]
    fn test_update_task_validates_enums() {
        let updates = TaskUpdates {
            assignee: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(update_task("task_123", &updates).unwrap_err(), ValidationError::InvalidAssignee);

        let updates = TaskUpdates {
            size: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(update_task("task_123", &updates).unwrap_err(), ValidationError::InvalidSize);
    }

    #[test]
    fn test_update_task_clamps_scores() {
        let updates = TaskUpdates {
            urgent: Some(10),
            important: Some(-5),
            ..Default::default()
        };
        let result = update_task("task_123", &updates).unwrap();
        assert_eq!(result.updates.urgent, Some(5));
        assert_eq!(result.updates.important, Some(1));
    }

    #[test]
    fn test_update_task_only_provided_fields() {
        let updates = TaskUpdates {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        let result = update_task("task_123", &updates).unwrap();
        let json = serde_json::to_value(&result.updates).unwrap();
        assert_eq!(json["name"], "New Name");
        assert!(json.get("assignee").is_none());
        assert!(json.get("urgent").is_none());
    }
}
