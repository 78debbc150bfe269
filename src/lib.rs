//! Headless view-model core for a local-first task planner.
//! Turns store snapshots into ready-to-render timeline, board, overview,
//! and workload projections; owns no state and performs no I/O of its own.

pub mod engine;
pub mod model;
pub mod timeline;
pub mod views;

pub use engine::{ProjectionEngine, SnapshotSender};
pub use model::config::{ConfigError, Granularity, LayoutConfig, ViewConfig};
pub use model::project::Project;
pub use model::snapshot::Snapshot;
pub use model::task::{Priority, Task, TaskStatus};
pub use timeline::{
    Color, DisplayRow, Palette, ProjectionResult, RowId, RowKind, StyleDescriptor, project,
};
pub use views::{BoardView, OverviewView, TaskCard, WorkloadView};
