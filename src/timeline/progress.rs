use crate::model::task::{Task, TaskStatus};

/// Percent complete for a single task, derived from status alone
pub fn task_progress(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 50,
        TaskStatus::Completed => 100,
    }
}

/// Percent complete for a project's member set
///
/// An in-progress member counts as half a completed one, and the ratio is
/// rounded half-up. This is a completion proxy over the set, not an average
/// of the per-task values. An empty set reads as 0.
pub fn project_progress(members: &[&Task]) -> u8 {
    if members.is_empty() {
        return 0;
    }
    let completed = members
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let in_progress = members
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    let score = (completed as f64 + in_progress as f64 * 0.5) / members.len() as f64;
    (score * 100.0).round() as u8
}
