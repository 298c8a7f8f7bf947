//! Grid module - manages the game board
//!
//! The board is a `rows x columns` matrix where each cell is empty or holds
//! exactly one tile. Uses a flat row-major `Vec` for cache locality.
//! Coordinates: (row, col) with row 0 at the top; gravity pulls toward
//! larger row indices.
//!
//! Tiles are plain records owned by their cell. Clearing a tile means
//! emptying the slot; there is no tile identity outside the grid.

use tileblast_types::{ColorId, Position, SpawnedTile, Tier, TileMove};

use crate::rng::SimpleRng;

/// One playable unit. Color is fixed at spawn; the tier is re-derived
/// after every structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub color: ColorId,
    pub tier: Tier,
}

impl Tile {
    /// Create a tile with the default tier.
    pub fn new(color: ColorId) -> Self {
        Self {
            color,
            tier: Tier::Default,
        }
    }
}

/// The game board - a typed 2D store with no business rules of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col).
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create a new empty grid. Dimensions are fixed for the grid's lifetime.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Rebuild a grid from a row-major color layout.
    ///
    /// Tiles enter with the default tier; run the classifier afterwards if
    /// tiers matter. Panics if the layout length does not match.
    pub fn from_colors(rows: usize, cols: usize, layout: &[Option<ColorId>]) -> Self {
        assert_eq!(layout.len(), rows * cols, "layout length mismatch");
        Self {
            rows,
            cols,
            cells: layout.iter().map(|c| c.map(Tile::new)).collect(),
        }
    }

    /// Calculate flat index from (row, col). None if out of bounds.
    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check whether (row, col) lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the tile at (row, col). None for an empty cell or out of bounds;
    /// callers that need to distinguish the two bounds-check first.
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.index(row, col).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Mutable access to the tile at (row, col), if occupied.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        match self.index(row, col) {
            Some(idx) => self.cells[idx].as_mut(),
            None => None,
        }
    }

    /// Set or clear the cell at (row, col). Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Option<Tile>) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = cell;
        }
    }

    /// Check if (row, col) is within bounds and holds a tile.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Convenience color lookup for connectivity checks.
    pub fn color_at(&self, row: usize, col: usize) -> Option<ColorId> {
        self.get(row, col).map(|tile| tile.color)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Iterate all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |idx| Position::new(idx / cols, idx % cols))
    }

    /// Row-major snapshot of cell colors, used by shuffle reporting and tests.
    pub fn color_layout(&self) -> Vec<Option<ColorId>> {
        self.cells
            .iter()
            .map(|cell| cell.as_ref().map(|tile| tile.color))
            .collect()
    }

    /// Gravity-collapse every column independently: each tile moves straight
    /// down by the number of empty cells below it, preserving top-to-bottom
    /// relative order. Returns the relocations that happened.
    pub fn collapse_columns(&mut self) -> Vec<TileMove> {
        let mut moves = Vec::new();

        for col in 0..self.cols {
            let mut empty_count = 0;

            // Scan bottom to top, tracking accumulated gaps.
            for row in (0..self.rows).rev() {
                let idx = row * self.cols + col;
                match self.cells[idx] {
                    None => empty_count += 1,
                    Some(tile) if empty_count > 0 => {
                        let target = (row + empty_count) * self.cols + col;
                        self.cells[idx] = None;
                        self.cells[target] = Some(tile);
                        moves.push(TileMove {
                            from: Position::new(row, col),
                            to: Position::new(row + empty_count, col),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        moves
    }

    /// Fill every empty cell with a fresh tile whose color is drawn
    /// uniformly and independently from the first `num_colors` colors.
    /// Columns are filled left to right, top to bottom within a column.
    pub fn refill(&mut self, rng: &mut SimpleRng, num_colors: u8) -> Vec<SpawnedTile> {
        let mut spawned = Vec::new();

        for col in 0..self.cols {
            for row in 0..self.rows {
                let idx = row * self.cols + col;
                if self.cells[idx].is_none() {
                    let color = ColorId(rng.next_range(u32::from(num_colors)) as u8);
                    self.cells[idx] = Some(Tile::new(color));
                    spawned.push(SpawnedTile {
                        position: Position::new(row, col),
                        color,
                    });
                }
            }
        }

        spawned
    }
}
