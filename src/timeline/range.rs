use chrono::{DateTime, Duration, Utc};

use crate::model::project::Project;
use crate::model::task::Task;

/// The span an entity is drawn with, after defaulting and clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Resolve the drawable span for a task
///
/// A missing start becomes `now`; a missing end becomes `now + 1 day`. If
/// the resulting pair is inverted or empty, the end clamps to one day after
/// the start, so the output always satisfies `end > start`.
pub fn resolve_task_range(task: &Task, now: DateTime<Utc>) -> TimeRange {
    let start = task.start.unwrap_or(now);
    let mut end = task.end.unwrap_or_else(|| now + Duration::days(1));
    if end <= start {
        end = start + Duration::days(1);
    }
    TimeRange { start, end }
}

/// Resolve the drawable span for a project
///
/// Each side independently prefers the project's explicit date, then the
/// extreme of the member spans, then the same defaults tasks get. The same
/// one-day clamp guarantees `end > start`.
pub fn resolve_project_range(
    project: &Project,
    member_ranges: &[TimeRange],
    now: DateTime<Utc>,
) -> TimeRange {
    let start = project
        .start
        .or_else(|| member_ranges.iter().map(|r| r.start).min())
        .unwrap_or(now);
    let mut end = project
        .end
        .or_else(|| member_ranges.iter().map(|r| r.end).max())
        .unwrap_or_else(|| start + Duration::days(1));
    if end <= start {
        end = start + Duration::days(1);
    }
    TimeRange { start, end }
}
