use serde::Serialize;

use crate::model::config::{Granularity, ViewConfig};
use crate::model::snapshot::Snapshot;
use crate::timeline::layout;
use crate::timeline::rows::{self, DisplayRow};
use crate::timeline::style::Palette;

/// The complete display model computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// Ordered rows, never empty
    pub rows: Vec<DisplayRow>,
    /// Chart pixel height for the row count
    pub height: u32,
    /// Time-axis zoom hint, passed through from config
    pub granularity: Granularity,
}

impl ProjectionResult {
    /// Serialize for the rendering surface across the embedding boundary
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Project one snapshot into the renderer's display model.
///
/// Stateless recompute from scratch: no diffing against previous output,
/// and every "now" default resolves against `snapshot.taken_at`, so the
/// same snapshot and config always produce the same result.
pub fn project(snapshot: &Snapshot, config: &ViewConfig) -> ProjectionResult {
    let palette = Palette::from_config(config);
    let rows = rows::build_rows(snapshot, &palette);
    let height = layout::height_for(rows.len(), &config.layout);
    ProjectionResult {
        rows,
        height,
        granularity: config.granularity,
    }
}
