pub mod layout;
pub mod progress;
pub mod projection;
pub mod range;
pub mod rows;
pub mod style;

pub use projection::{ProjectionResult, project};
pub use range::TimeRange;
pub use rows::{DisplayRow, PLACEHOLDER_NAME, RowId, RowKind, build_rows};
pub use style::{Color, Palette, StyleDescriptor};
