use serde::Serialize;

use crate::model::snapshot::Snapshot;
use crate::model::task::TaskStatus;
use crate::views::card::TaskCard;

/// Column order on the board, one column per lifecycle state
pub const COLUMN_ORDER: [TaskStatus; 3] = [
    TaskStatus::Todo,
    TaskStatus::InProgress,
    TaskStatus::Completed,
];

/// One status column with its cards in store order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn {
    pub status: TaskStatus,
    /// Human-readable column title
    pub title: &'static str,
    pub cards: Vec<TaskCard>,
}

/// The kanban view-model; every column is always present, even when empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub columns: Vec<BoardColumn>,
}

/// Group the snapshot's tasks into status columns
pub fn board_view(snapshot: &Snapshot) -> BoardView {
    let mut columns: Vec<BoardColumn> = COLUMN_ORDER
        .iter()
        .map(|&status| BoardColumn {
            status,
            title: status.label(),
            cards: Vec::new(),
        })
        .collect();

    for task in &snapshot.tasks {
        if let Some(column) = columns.iter_mut().find(|c| c.status == task.status) {
            column.cards.push(TaskCard::from(task));
        }
    }

    BoardView { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
    }

    fn with_status(id: &str, status: TaskStatus) -> Task {
        let mut task = Task::new(id, "card");
        task.status = status;
        task
    }

    #[test]
    fn test_empty_snapshot_still_has_all_columns() {
        let view = board_view(&Snapshot::at(t0(), vec![], vec![]));
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.columns[0].title, "To do");
        assert_eq!(view.columns[1].title, "In progress");
        assert_eq!(view.columns[2].title, "Completed");
        assert!(view.columns.iter().all(|c| c.cards.is_empty()));
    }

    #[test]
    fn test_cards_group_by_status_in_store_order() {
        let snapshot = Snapshot::at(
            t0(),
            vec![
                with_status("t1", TaskStatus::InProgress),
                with_status("t2", TaskStatus::Todo),
                with_status("t3", TaskStatus::InProgress),
            ],
            vec![],
        );
        let view = board_view(&snapshot);

        let in_progress: Vec<&str> = view.columns[1]
            .cards
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(in_progress, vec!["t1", "t3"]);
        assert_eq!(view.columns[0].cards.len(), 1);
        assert_eq!(view.columns[2].cards.len(), 0);
    }
}
