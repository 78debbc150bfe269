use crate::model::config::LayoutConfig;

/// Pixel height for a chart with the given number of rows
///
/// Content height is `rows * row_height + header_height + padding`, floored
/// at `min_height`. Total, never fails; saturates instead of overflowing on
/// absurd row counts.
pub fn height_for(row_count: usize, layout: &LayoutConfig) -> u32 {
    let rows = u32::try_from(row_count).unwrap_or(u32::MAX);
    let content = rows
        .saturating_mul(layout.row_height)
        .saturating_add(layout.header_height)
        .saturating_add(layout.padding);
    content.max(layout.min_height)
}
