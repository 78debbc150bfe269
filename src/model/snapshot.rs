use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::project::Project;
use super::task::Task;

/// An immutable capture of the store's task and project collections
///
/// `taken_at` is the capture instant. Every "now" default in the projection
/// resolves against it, so projecting the same snapshot twice yields
/// identical output regardless of when the calls happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Instant the store handed this capture over
    pub taken_at: DateTime<Utc>,
    /// All task records, in store order
    pub tasks: Vec<Task>,
    /// All project records, in store order
    pub projects: Vec<Project>,
}

impl Snapshot {
    /// Capture stamped with the current wall clock
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        Snapshot::at(Utc::now(), tasks, projects)
    }

    /// Capture stamped with an explicit instant
    pub fn at(taken_at: DateTime<Utc>, tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        Snapshot {
            taken_at,
            tasks,
            projects,
        }
    }

    /// True when the store holds nothing to display
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.projects.is_empty()
    }

    /// Member tasks per project plus the unassigned remainder, preserving
    /// store order on both axes
    ///
    /// Every project gets an entry even with no members. A task whose
    /// `project_id` names no project in this snapshot counts as unassigned.
    pub fn members_by_project(&self) -> (IndexMap<&str, Vec<&Task>>, Vec<&Task>) {
        let mut members: IndexMap<&str, Vec<&Task>> = self
            .projects
            .iter()
            .map(|p| (p.id.as_str(), Vec::new()))
            .collect();
        let mut unassigned: Vec<&Task> = Vec::new();
        for task in &self.tasks {
            match task.project_id.as_deref().and_then(|id| members.get_mut(id)) {
                Some(bucket) => bucket.push(task),
                // No reference, or a dangling one: either way unassigned
                None => unassigned.push(task),
            }
        }
        (members, unassigned)
    }
}
