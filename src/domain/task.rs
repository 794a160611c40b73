//! Task domain type
//!
//! A Task is either the parent (the original large task) or one of the
//! subtasks generated for it. Both share the same shape; subtasks carry a
//! back-reference to the parent in `parent_task_id`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::ValidationError;

/// Who a task is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Assignee {
    Mario,
    Maria,
    #[default]
    Both,
}

impl std::fmt::Display for Assignee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mario => write!(f, "mario"),
            Self::Maria => write!(f, "maria"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for Assignee {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mario" => Ok(Self::Mario),
            "maria" => Ok(Self::Maria),
            "both" => Ok(Self::Both),
            _ => Err(ValidationError::InvalidAssignee),
        }
    }
}

/// T-shirt size of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xs => write!(f, "xs"),
            Self::S => write!(f, "s"),
            Self::M => write!(f, "m"),
            Self::L => write!(f, "l"),
            Self::Xl => write!(f, "xl"),
        }
    }
}

impl std::str::FromStr for Size {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xs" => Ok(Self::Xs),
            "s" => Ok(Self::S),
            "m" => Ok(Self::M),
            "l" => Ok(Self::L),
            "xl" => Ok(Self::Xl),
            _ => Err(ValidationError::InvalidSize),
        }
    }
}

/// Clamp an urgency/importance score into the valid `[1, 5]` range
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(1, 5) as u8
}

/// A task: the parent or one of its subtasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique ID, assigned at creation, never reassigned
    pub id: String,

    /// Human-readable name, non-empty
    pub name: String,

    pub assignee: Assignee,

    pub size: Size,

    /// Urgency score, 1-5
    pub urgent: u8,

    /// Importance score, 1-5
    pub important: u8,

    pub completed: bool,

    /// Optional display glyph
    pub icon: Option<String>,

    pub first_step: Option<String>,

    pub completion_criteria: Option<String>,

    /// Due date, `YYYY-MM-DD` once set
    pub deadline: Option<NaiveDate>,

    /// IDs of tasks this one is blocked on; `None` means unblocked
    pub depends_on: Option<Vec<String>>,

    /// Back-reference to the owning parent task (subtasks only)
    pub parent_task_id: Option<String>,

    /// Set once at construction, immutable thereafter
    pub created_at: DateTime<Utc>,

    /// Tenant tag propagated unchanged from the originating request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl Task {
    /// Create a task with defaults for every optional field
    pub fn new(clock: &dyn Clock, name: impl Into<String>, assignee: Assignee) -> Self {
        let name = name.into();
        Self {
            id: clock.new_id(&name),
            name,
            assignee,
            size: Size::M,
            urgent: 3,
            important: 3,
            completed: false,
            icon: None,
            first_step: None,
            completion_criteria: None,
            deadline: None,
            depends_on: None,
            parent_task_id: None,
            created_at: clock.now(),
            organization_id: None,
        }
    }

    /// Whether this task is blocked on at least one other task
    pub fn is_blocked(&self) -> bool {
        self.depends_on.as_ref().is_some_and(|deps| !deps.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn clock() -> FixedClock {
        FixedClock::at(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_assignee_roundtrip() {
        for a in [Assignee::Mario, Assignee::Maria, Assignee::Both] {
            assert_eq!(a.to_string().parse::<Assignee>().unwrap(), a);
        }
        assert_eq!("MARIO".parse::<Assignee>().unwrap(), Assignee::Mario);
        assert_eq!("luigi".parse::<Assignee>(), Err(ValidationError::InvalidAssignee));
    }

    #[test]
    fn test_size_roundtrip() {
        for s in [Size::Xs, Size::S, Size::M, Size::L, Size::Xl] {
            assert_eq!(s.to_string().parse::<Size>().unwrap(), s);
        }
        assert_eq!("XL".parse::<Size>().unwrap(), Size::Xl);
        assert_eq!("huge".parse::<Size>(), Err(ValidationError::InvalidSize));
    }

    #[test]
    fn test_enum_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Assignee::Maria).unwrap(), "\"maria\"");
        assert_eq!(serde_json::to_string(&Size::Xl).unwrap(), "\"xl\"");
        let a: Assignee = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(a, Assignee::Both);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(0), 1);
        assert_eq!(clamp_score(-5), 1);
        assert_eq!(clamp_score(3), 3);
        assert_eq!(clamp_score(5), 5);
        assert_eq!(clamp_score(10), 5);
    }

    #[test]
    fn test_task_new_defaults() {
        let clock = clock();
        let task = Task::new(&clock, "Test Task", Assignee::Mario);
        assert_eq!(task.name, "Test Task");
        assert_eq!(task.assignee, Assignee::Mario);
        assert_eq!(task.size, Size::M);
        assert_eq!(task.urgent, 3);
        assert_eq!(task.important, 3);
        assert!(!task.completed);
        assert!(task.icon.is_none());
        assert!(task.deadline.is_none());
        assert!(task.depends_on.is_none());
        assert!(task.parent_task_id.is_none());
        assert_eq!(task.created_at, clock.now());
    }

    #[test]
    fn test_is_blocked() {
        let clock = clock();
        let mut task = Task::new(&clock, "Test", Assignee::Both);
        assert!(!task.is_blocked());

        task.depends_on = Some(vec![]);
        assert!(!task.is_blocked());

        task.depends_on = Some(vec!["other-id".to_string()]);
        assert!(task.is_blocked());
    }

    #[test]
    fn test_task_serde_deadline_format() {
        let clock = clock();
        let mut task = Task::new(&clock, "Test", Assignee::Both);
        task.deadline = NaiveDate::from_ymd_opt(2025, 12, 31);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["deadline"], "2025-12-31");
        // organization_id omitted when unset
        assert!(json.get("organization_id").is_none());
    }

    proptest! {
        #[test]
        fn prop_clamp_always_in_range(value in any::<i64>()) {
            let clamped = clamp_score(value);
            prop_assert!((1..=5).contains(&clamped));
        }
    }
}
