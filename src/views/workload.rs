use indexmap::IndexMap;
use serde::Serialize;

use crate::model::snapshot::Snapshot;
use crate::model::task::Task;
use crate::views::card::TaskCard;

/// One assignee's slice of the snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssigneeLoad {
    pub assignee: String,
    pub cards: Vec<TaskCard>,
    /// Members not yet completed
    pub open: usize,
    /// Completed members
    pub done: usize,
}

/// The per-person workload view-model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadView {
    /// One entry per assignee, in order of first appearance
    pub assignees: Vec<AssigneeLoad>,
    /// Cards carrying no assignee at all
    pub unassigned: Vec<TaskCard>,
}

/// Group the snapshot's tasks by assignee
///
/// A task with several assignees appears under each of them; a task with
/// none lands in `unassigned`.
pub fn workload_view(snapshot: &Snapshot) -> WorkloadView {
    let mut per_assignee: IndexMap<&str, Vec<&Task>> = IndexMap::new();
    let mut unassigned: Vec<TaskCard> = Vec::new();

    for task in &snapshot.tasks {
        if task.assignees.is_empty() {
            unassigned.push(TaskCard::from(task));
            continue;
        }
        for (i, assignee) in task.assignees.iter().enumerate() {
            // A name repeated on one task still counts that task once
            if task.assignees[..i].contains(assignee) {
                continue;
            }
            per_assignee
                .entry(assignee.as_str())
                .or_default()
                .push(task);
        }
    }

    let assignees = per_assignee
        .into_iter()
        .map(|(assignee, tasks)| AssigneeLoad {
            assignee: assignee.to_string(),
            open: tasks.iter().filter(|t| t.status.is_open()).count(),
            done: tasks.iter().filter(|t| !t.status.is_open()).count(),
            cards: tasks.into_iter().map(TaskCard::from).collect(),
        })
        .collect();

    WorkloadView {
        assignees,
        unassigned,
    }
}
