pub mod board;
pub mod card;
pub mod overview;
pub mod workload;

pub use board::{BoardColumn, BoardView, board_view};
pub use card::TaskCard;
pub use overview::{OverviewView, ProjectOverview, StatusCounts, overview_view};
pub use workload::{AssigneeLoad, WorkloadView, workload_view};
