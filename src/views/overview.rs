use serde::Serialize;

use crate::model::snapshot::Snapshot;
use crate::model::task::{Task, TaskStatus};
use crate::timeline::progress;

/// Per-status member counts for one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    fn tally(members: &[&Task]) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for task in members {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.completed
    }
}

/// One project's rollup for the portfolio list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectOverview {
    pub id: String,
    pub name: String,
    /// Accent color token, passed through from the store unvalidated
    pub color: String,
    pub counts: StatusCounts,
    /// Percent complete over the member set, same formula the timeline uses
    pub progress: u8,
}

/// The portfolio view-model: one rollup per project in store order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub projects: Vec<ProjectOverview>,
    /// Count of tasks belonging to no project in the snapshot
    pub unassigned: usize,
}

/// Roll the snapshot up into per-project counts and progress
pub fn overview_view(snapshot: &Snapshot) -> OverviewView {
    let (members, unassigned) = snapshot.members_by_project();

    let projects = snapshot
        .projects
        .iter()
        .map(|project| {
            let member_tasks = members
                .get(project.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            ProjectOverview {
                id: project.id.clone(),
                name: project.name.clone(),
                color: project.color.clone(),
                counts: StatusCounts::tally(member_tasks),
                progress: progress::project_progress(member_tasks),
            }
        })
        .collect();

    OverviewView {
        projects,
        unassigned: unassigned.len(),
    }
}
