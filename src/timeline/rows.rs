use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::project::Project;
use crate::model::snapshot::Snapshot;
use crate::model::task::Task;
use crate::timeline::progress;
use crate::timeline::range::{self, TimeRange};
use crate::timeline::style::{Palette, StyleDescriptor};

/// Name shown on the placeholder row of an empty chart
pub const PLACEHOLDER_NAME: &str = "No tasks or projects yet";

/// Entity kind behind a display row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Project,
    Task,
}

/// Row identifier, namespaced by entity kind so a project and a task that
/// share a store id can never collide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    /// Row id for a project entity
    pub fn project(id: &str) -> RowId {
        RowId(format!("project-{}", id))
    }

    /// Row id for a task entity
    pub fn task(id: &str) -> RowId {
        RowId(format!("task-{}", id))
    }

    /// Row id of the empty-chart placeholder
    pub fn placeholder() -> RowId {
        RowId("placeholder".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line item handed to the renderer, fully resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub id: RowId,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub kind: RowKind,
    /// Owning project row, present only on member task rows
    pub parent: Option<RowId>,
    /// Position in emission order, dense from zero
    pub display_order: usize,
    pub style: StyleDescriptor,
}

// ---------------------------------------------------------------------------
// Row assembly
// ---------------------------------------------------------------------------

/// Build the ordered row list for one snapshot.
///
/// Emission order is: each project in store order, immediately followed by
/// its member tasks in store order, then every unassigned task in store
/// order. A task whose `project_id` names no project in the snapshot is
/// emitted with the unassigned tail rather than dropped. An empty snapshot
/// yields exactly one placeholder row, so the result is never empty.
pub fn build_rows(snapshot: &Snapshot, palette: &Palette) -> Vec<DisplayRow> {
    let now = snapshot.taken_at;
    if snapshot.is_empty() {
        return vec![placeholder_row(now, palette)];
    }

    let (members, unassigned) = snapshot.members_by_project();

    let mut rows = Vec::with_capacity(snapshot.projects.len() + snapshot.tasks.len());
    for project in &snapshot.projects {
        let member_tasks = members
            .get(project.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        push_project_rows(&mut rows, project, member_tasks, now, palette);
    }
    for task in unassigned {
        let range = range::resolve_task_range(task, now);
        let order = rows.len();
        rows.push(task_row(task, range, None, order, palette));
    }
    rows
}

// ---------------------------------------------------------------------------
// Row constructors
// ---------------------------------------------------------------------------

fn push_project_rows(
    rows: &mut Vec<DisplayRow>,
    project: &Project,
    member_tasks: &[&Task],
    now: DateTime<Utc>,
    palette: &Palette,
) {
    let member_ranges: Vec<TimeRange> = member_tasks
        .iter()
        .map(|t| range::resolve_task_range(t, now))
        .collect();
    let project_range = range::resolve_project_range(project, &member_ranges, now);
    let parent_id = RowId::project(&project.id);

    let order = rows.len();
    rows.push(DisplayRow {
        id: parent_id.clone(),
        name: project.name.clone(),
        start: project_range.start,
        end: project_range.end,
        progress: progress::project_progress(member_tasks),
        kind: RowKind::Project,
        parent: None,
        display_order: order,
        style: palette.style_for_project(member_tasks),
    });

    for (task, range) in member_tasks.iter().copied().zip(member_ranges) {
        let order = rows.len();
        rows.push(task_row(task, range, Some(parent_id.clone()), order, palette));
    }
}

fn task_row(
    task: &Task,
    range: TimeRange,
    parent: Option<RowId>,
    order: usize,
    palette: &Palette,
) -> DisplayRow {
    DisplayRow {
        id: RowId::task(&task.id),
        name: task.title.clone(),
        start: range.start,
        end: range.end,
        progress: progress::task_progress(task.status),
        kind: RowKind::Task,
        parent,
        display_order: order,
        style: palette.style_for(task.priority, task.status),
    }
}

fn placeholder_row(now: DateTime<Utc>, palette: &Palette) -> DisplayRow {
    DisplayRow {
        id: RowId::placeholder(),
        name: PLACEHOLDER_NAME.to_string(),
        start: now,
        end: now + Duration::days(1),
        progress: 0,
        kind: RowKind::Task,
        parent: None,
        display_order: 0,
        style: palette.placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Priority, TaskStatus};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
    }

    fn assigned(id: &str, title: &str, project_id: &str) -> Task {
        let mut task = Task::new(id, title);
        task.project_id = Some(project_id.to_string());
        task
    }

    fn ids(rows: &[DisplayRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_snapshot_yields_placeholder() {
        let snapshot = Snapshot::at(t0(), vec![], vec![]);
        let rows = build_rows(&snapshot, &Palette::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, RowId::placeholder());
        assert_eq!(rows[0].name, PLACEHOLDER_NAME);
        assert_eq!(rows[0].progress, 0);
        assert_eq!(rows[0].start, t0());
        assert_eq!(rows[0].end, t0() + Duration::days(1));
        assert_eq!(rows[0].style, Palette::default().placeholder);
    }

    #[test]
    fn test_emission_order_projects_interleaved_then_unassigned() {
        let tasks = vec![
            assigned("t1", "First", "p1"),
            assigned("t3", "Third", "p2"),
            assigned("t2", "Second", "p1"),
            Task::new("t5", "Loose"),
            assigned("t4", "Fourth", "p2"),
        ];
        let projects = vec![Project::new("p1", "One"), Project::new("p2", "Two")];
        let snapshot = Snapshot::at(t0(), tasks, projects);
        let rows = build_rows(&snapshot, &Palette::default());

        assert_eq!(
            ids(&rows),
            vec![
                "project-p1",
                "task-t1",
                "task-t2",
                "project-p2",
                "task-t3",
                "task-t4",
                "task-t5",
            ]
        );
        let orders: Vec<usize> = rows.iter().map(|r| r.display_order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_member_rows_carry_parent_reference() {
        let tasks = vec![assigned("t1", "Member", "p1"), Task::new("t2", "Loose")];
        let projects = vec![Project::new("p1", "One")];
        let snapshot = Snapshot::at(t0(), tasks, projects);
        let rows = build_rows(&snapshot, &Palette::default());

        assert_eq!(rows[0].parent, None);
        assert_eq!(rows[1].parent, Some(RowId::project("p1")));
        assert_eq!(rows[2].parent, None);
    }

    #[test]
    fn test_dangling_project_reference_joins_unassigned_tail() {
        let tasks = vec![
            assigned("t1", "Orphan", "ghost"),
            assigned("t2", "Member", "p1"),
        ];
        let projects = vec![Project::new("p1", "One")];
        let snapshot = Snapshot::at(t0(), tasks, projects);
        let rows = build_rows(&snapshot, &Palette::default());

        assert_eq!(ids(&rows), vec!["project-p1", "task-t2", "task-t1"]);
        // Orphan renders as a plain unassigned task
        assert_eq!(rows[2].parent, None);
        assert_eq!(rows[2].kind, RowKind::Task);
    }

    #[test]
    fn test_project_row_aggregates_members() {
        let mut done = assigned("t1", "Done", "p1");
        done.status = TaskStatus::Completed;
        done.start = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        done.end = Some(Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap());
        let mut open = assigned("t2", "Open", "p1");
        open.priority = Priority::High;
        open.start = Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
        open.end = Some(Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap());

        let snapshot = Snapshot::at(t0(), vec![done, open], vec![Project::new("p1", "One")]);
        let rows = build_rows(&snapshot, &Palette::default());

        let project = &rows[0];
        assert_eq!(project.kind, RowKind::Project);
        assert_eq!(
            project.start,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            project.end,
            Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap()
        );
        // 1 completed of 2 members
        assert_eq!(project.progress, 50);
        // One high-priority member colors the whole project
        assert_eq!(project.style, Palette::default().high);
    }

    #[test]
    fn test_project_without_members_still_emits() {
        let snapshot = Snapshot::at(t0(), vec![], vec![Project::new("p1", "Empty")]);
        let rows = build_rows(&snapshot, &Palette::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, RowId::project("p1"));
        assert_eq!(rows[0].progress, 0);
        assert_eq!(rows[0].start, t0());
        assert_eq!(rows[0].end, t0() + Duration::days(1));
    }

    #[test]
    fn test_row_ids_namespaced_by_kind() {
        // A project and a task sharing the store id "42" must not collide
        let tasks = vec![assigned("42", "Task", "42")];
        let projects = vec![Project::new("42", "Project")];
        let snapshot = Snapshot::at(t0(), tasks, projects);
        let rows = build_rows(&snapshot, &Palette::default());

        assert_eq!(ids(&rows), vec!["project-42", "task-42"]);
    }
}
