//! Connectivity module - same-color flood fill and the deadlock predicate
//!
//! A "group" is a maximal set of same-colored tiles reachable from a seed
//! through orthogonal adjacency (up, down, left, right - never diagonal).
//! Groups are ephemeral: recomputed on demand, never stored.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use tileblast_types::Position;

use crate::grid::Grid;

/// The orthogonal neighbors of `pos` that lie inside the grid.
fn neighbors(grid: &Grid, pos: Position) -> ArrayVec<Position, 4> {
    let mut out = ArrayVec::new();
    let (rows, cols) = grid.dimensions();

    if pos.row > 0 {
        out.push(Position::new(pos.row - 1, pos.col));
    }
    if pos.row + 1 < rows {
        out.push(Position::new(pos.row + 1, pos.col));
    }
    if pos.col > 0 {
        out.push(Position::new(pos.row, pos.col - 1));
    }
    if pos.col + 1 < cols {
        out.push(Position::new(pos.row, pos.col + 1));
    }

    out
}

/// Breadth-first search for the connected same-color group containing
/// `seed`. Returns positions in visit order; the seed is always first.
/// An empty or out-of-bounds seed yields an empty group.
///
/// Deterministic given grid state and O(rows * columns) worst case.
pub fn find_group(grid: &Grid, seed: Position) -> Vec<Position> {
    let Some(seed_color) = grid.color_at(seed.row, seed.col) else {
        return Vec::new();
    };

    let (rows, cols) = grid.dimensions();
    let mut visited = vec![false; rows * cols];
    let mut group = Vec::new();
    let mut queue = VecDeque::new();

    visited[seed.row * cols + seed.col] = true;
    queue.push_back(seed);

    while let Some(pos) = queue.pop_front() {
        group.push(pos);

        for neighbor in neighbors(grid, pos) {
            let idx = neighbor.row * cols + neighbor.col;
            if !visited[idx] && grid.color_at(neighbor.row, neighbor.col) == Some(seed_color) {
                visited[idx] = true;
                queue.push_back(neighbor);
            }
        }
    }

    group
}

/// The authoritative "a legal move exists" predicate: true as soon as any
/// occupied cell's group has size >= 2, false only once the whole board has
/// been scanned without finding one (deadlock).
///
/// Components are flood-filled at most once each, so the full scan stays
/// O(rows * columns).
pub fn has_any_move(grid: &Grid) -> bool {
    let (rows, cols) = grid.dimensions();
    let mut visited = vec![false; rows * cols];
    let mut queue = VecDeque::new();

    for seed in grid.positions() {
        let seed_idx = seed.row * cols + seed.col;
        if visited[seed_idx] {
            continue;
        }
        let Some(seed_color) = grid.color_at(seed.row, seed.col) else {
            continue;
        };

        // Flood the component rooted here and measure it.
        visited[seed_idx] = true;
        queue.clear();
        queue.push_back(seed);
        let mut size = 0;

        while let Some(pos) = queue.pop_front() {
            size += 1;
            for neighbor in neighbors(grid, pos) {
                let idx = neighbor.row * cols + neighbor.col;
                if !visited[idx] && grid.color_at(neighbor.row, neighbor.col) == Some(seed_color) {
                    visited[idx] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        if size >= 2 {
            return true;
        }
    }

    false
}
