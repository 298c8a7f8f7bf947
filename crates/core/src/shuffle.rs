//! Shuffle module - deadlock recovery by rearranging existing tiles
//!
//! Reassigns the tiles already on the board to new cells without changing
//! the color multiset. No guarantee the result is playable; the caller owns
//! the deadlock re-check policy.

use crate::grid::{Grid, Tile};
use crate::rng::SimpleRng;

/// Fisher-Yates permute the occupied cells' tiles and write them back in
/// row-major order. Occupancy pattern and grid dimensions are untouched.
pub fn shuffle(grid: &mut Grid, rng: &mut SimpleRng) {
    let (occupied, mut tiles): (Vec<_>, Vec<Tile>) = grid
        .positions()
        .filter_map(|pos| grid.get(pos.row, pos.col).map(|tile| (pos, *tile)))
        .unzip();

    rng.shuffle(&mut tiles);

    for (pos, tile) in occupied.into_iter().zip(tiles) {
        grid.set(pos.row, pos.col, Some(tile));
    }
}
