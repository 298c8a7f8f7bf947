//! Connectivity tests - flood fill and the deadlock predicate

use tileblast::core::{find_group, has_any_move, Grid, SimpleRng};
use tileblast::types::{ColorId, Position};

fn color(id: u8) -> Option<ColorId> {
    Some(ColorId(id))
}

#[test]
fn test_group_is_maximal() {
    // A plus-shape of color 0 surrounded by color 1.
    let layout = [
        color(1), color(0), color(1), //
        color(0), color(0), color(0), //
        color(1), color(0), color(1), //
    ];
    let grid = Grid::from_colors(3, 3, &layout);

    let group = find_group(&grid, Position::new(1, 1));
    assert_eq!(group.len(), 5);

    // Maximality: no same-color orthogonal neighbor of any member is excluded.
    for &member in &group {
        for (dr, dc) in [(0i64, 1i64), (0, -1), (1, 0), (-1, 0)] {
            let row = member.row as i64 + dr;
            let col = member.col as i64 + dc;
            if row < 0 || col < 0 {
                continue;
            }
            let neighbor = Position::new(row as usize, col as usize);
            if grid.color_at(neighbor.row, neighbor.col) == Some(ColorId(0)) {
                assert!(group.contains(&neighbor), "missing member {:?}", neighbor);
            }
        }
    }
}

#[test]
fn test_group_idempotent_from_every_member() {
    let mut grid = Grid::new(6, 6);
    grid.refill(&mut SimpleRng::new(2), 3);

    let group = find_group(&grid, Position::new(3, 3));
    let mut canonical = group.clone();
    canonical.sort();

    for &member in &group {
        let mut from_member = find_group(&grid, member);
        from_member.sort();
        assert_eq!(from_member, canonical);
    }
}

#[test]
fn test_seed_is_first_in_visit_order() {
    let layout = [color(0), color(0), color(0)];
    let grid = Grid::from_colors(1, 3, &layout);

    let group = find_group(&grid, Position::new(0, 1));
    assert_eq!(group[0], Position::new(0, 1));
}

#[test]
fn test_deadlock_iff_all_singletons() {
    // Striped board: vertical neighbors always differ, horizontal too.
    let layout = [
        color(0), color(1), color(2), //
        color(1), color(2), color(0), //
        color(2), color(0), color(1), //
    ];
    let grid = Grid::from_colors(3, 3, &layout);

    assert!(!has_any_move(&grid));
    for pos in grid.positions() {
        assert_eq!(find_group(&grid, pos).len(), 1);
    }
}

#[test]
fn test_one_pair_is_enough() {
    let layout = [
        color(0), color(1), color(2), //
        color(1), color(2), color(0), //
        color(2), color(0), color(0), //
    ];
    let grid = Grid::from_colors(3, 3, &layout);
    assert!(has_any_move(&grid));
}

#[test]
fn test_single_color_board_is_one_component() {
    let mut grid = Grid::new(4, 4);
    grid.refill(&mut SimpleRng::new(1), 1);

    let group = find_group(&grid, Position::new(0, 0));
    assert_eq!(group.len(), 16);
    assert!(has_any_move(&grid));
}
