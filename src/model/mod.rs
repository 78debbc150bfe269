pub mod config;
pub mod project;
pub mod snapshot;
pub mod task;

pub use config::*;
pub use project::*;
pub use snapshot::*;
pub use task::*;
