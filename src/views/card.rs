use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::task::{Priority, Task, TaskStatus};

/// Card-level task summary shared by the board and workload views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskCard {
    fn from(task: &Task) -> Self {
        TaskCard {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            priority: task.priority,
            due: task.due,
            project_id: task.project_id.clone(),
            updated_at: task.updated_at,
        }
    }
}
