//! Classifier module - group-size tier tagging
//!
//! Recomputes every tile's tier as a pure function of its component's size
//! against the configured thresholds. Runs after every structural change;
//! has no effect on clearing rules.

use tileblast_types::TierThresholds;

use crate::connect::find_group;
use crate::grid::Grid;

/// Re-tag the whole board. Each component's size is computed once and the
/// resulting tier is written to every member.
pub fn classify(grid: &mut Grid, thresholds: TierThresholds) {
    let (rows, cols) = grid.dimensions();
    let mut processed = vec![false; rows * cols];

    for pos in grid.positions().collect::<Vec<_>>() {
        let idx = pos.row * cols + pos.col;
        if processed[idx] || !grid.is_occupied(pos.row, pos.col) {
            continue;
        }

        let group = find_group(grid, pos);
        let tier = thresholds.tier_for(group.len());

        for member in group {
            processed[member.row * cols + member.col] = true;
            if let Some(tile) = grid.get_mut(member.row, member.col) {
                tile.tier = tier;
            }
        }
    }
}
