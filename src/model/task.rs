use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle state as recorded by the store
///
/// Unknown strings normalize to `Todo` at the deserialization boundary, so
/// the style and progress mappings downstream stay total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Parse a store status string; anything unrecognized is `Todo`
    pub fn parse(value: &str) -> TaskStatus {
        match value {
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Todo,
        }
    }

    /// Human-readable label for board columns and cards
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Whether the task still needs work
    pub fn is_open(self) -> bool {
        self != TaskStatus::Completed
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        TaskStatus::parse(&value)
    }
}

/// Task priority as recorded by the store
///
/// Variants are ordered so `max()` over a member set yields the most urgent
/// level. Unknown strings normalize to `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse a store priority string; anything unrecognized is `Low`
    pub fn parse(value: &str) -> Priority {
        match value {
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Low,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::parse(&value)
    }
}

/// A task record, owned by the external store and read-only here
///
/// `start`/`end` may be absent or inverted; the range resolver substitutes
/// and clamps rather than rejecting. A `project_id` naming no project in the
/// same snapshot counts as unassigned, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable store identifier
    pub id: String,
    /// Task title text
    pub title: String,
    /// Lifecycle state
    #[serde(default)]
    pub status: TaskStatus,
    /// Urgency level
    #[serde(default)]
    pub priority: Priority,
    /// Due date, surfaced on cards but not used for bar geometry
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    /// Owning project, if any; may dangle after a project deletion
    #[serde(default)]
    pub project_id: Option<String>,
    /// Assignee identifiers in store order
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Scheduled start instant, if the user set one
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// Scheduled end instant, if the user set one
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Last store mutation instant
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a bare task record with default state, stamped now
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
            due: None,
            project_id: None,
            assignees: Vec::new(),
            start: None,
            end: None,
            updated_at: Utc::now(),
        }
    }
}
