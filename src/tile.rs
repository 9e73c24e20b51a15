use crate::gui::Choice;

/// Identifier of a tile texture, valid in `[1, max_tile]`
pub type TileId = u32;

/// Clamp `n` into `[min, max]`
///
/// Unlike `Ord::clamp` this never panics: if `min > max` the lower bound
/// wins.
pub fn clamp<T: PartialOrd>(n: T, min: T, max: T) -> T {
    if n < min {
        return min;
    }
    if n > max {
        return max;
    }
    n
}

/// Fixed-size 2D tile map, indexed as `tiles[row][col]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<TileId>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: TileId) -> Self {
        Grid {
            tiles: vec![vec![fill; width]; height],
            width,
            height,
        }
    }

    /// Build a grid from rows that are already known to be rectangular
    ///
    /// Returns `None` if the rows are ragged or there are none.
    pub fn from_rows(rows: Vec<Vec<TileId>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Grid {
            height: rows.len(),
            tiles: rows,
            width,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<TileId>] {
        &self.tiles
    }

    #[allow(dead_code)] // Read access for tests; the editor only paints
    pub fn get(&self, col: usize, row: usize) -> Option<TileId> {
        self.tiles.get(row)?.get(col).copied()
    }

    /// Set a cell, returning false if it is out of bounds
    pub fn set(&mut self, col: usize, row: usize, tile: TileId) -> bool {
        match self.tiles.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Grid cell under a pixel position, clamped onto the grid
    ///
    /// Positions outside the grid (including the status strip below it)
    /// map to the nearest edge cell.
    pub fn cell_at(&self, x: i32, y: i32, cell_size: u32) -> (usize, usize) {
        let size = cell_size.max(1) as i32;
        let col = clamp(x.div_euclid(size), 0, self.width as i32 - 1);
        let row = clamp(y.div_euclid(size), 0, self.height as i32 - 1);
        (col.max(0) as usize, row.max(0) as usize)
    }
}

/// Template used to seed a new level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Empty,
    Filled,
    Border,
}

impl Choice for Preset {
    const ALL: [Self; 3] = [Preset::Empty, Preset::Filled, Preset::Border];

    fn label(self) -> &'static str {
        match self {
            Preset::Empty => "EMPTY",
            Preset::Filled => "FILLED",
            Preset::Border => "BORDER",
        }
    }
}

impl Preset {
    /// Generate this preset when no template file is available
    ///
    /// EMPTY is all tile 1, FILLED all tile 2, BORDER has tile 2 on the
    /// edge and tile 1 inside. Values are clamped to the loaded tile range.
    pub fn builtin(self, width: usize, height: usize, max_tile: TileId) -> Grid {
        let floor = 1;
        let wall = clamp(2, 1, max_tile);
        match self {
            Preset::Empty => Grid::new(width, height, floor),
            Preset::Filled => Grid::new(width, height, wall),
            Preset::Border => {
                let mut grid = Grid::new(width, height, floor);
                for row in 0..height {
                    for col in 0..width {
                        if row == 0 || col == 0 || row + 1 == height || col + 1 == width {
                            grid.set(col, row, wall);
                        }
                    }
                }
                grid
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range_is_identity() {
        for n in 1..=7 {
            assert_eq!(clamp(n, 1, 7), n);
        }
    }

    #[test]
    fn test_clamp_bounds() {
        for n in -20i64..=20 {
            let c = clamp(n, -3, 5);
            assert!((-3..=5).contains(&c));
        }
        assert_eq!(clamp(-4, 1, 7), 1);
        assert_eq!(clamp(100, 1, 7), 7);
    }

    #[test]
    fn test_grid_set_and_get() {
        let mut grid = Grid::new(4, 3, 1);
        assert!(grid.set(3, 2, 5));
        assert_eq!(grid.get(3, 2), Some(5));
        assert_eq!(grid.rows()[2][3], 5);
        assert!(!grid.set(4, 0, 5));
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Grid::from_rows(Vec::new()).is_none());
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
    }

    #[test]
    fn test_cell_at_clamps() {
        let grid = Grid::new(16, 16, 1);
        assert_eq!(grid.cell_at(175, 210, 50), (3, 4));
        assert_eq!(grid.cell_at(-5, -5, 50), (0, 0));
        // Status strip below the grid maps to the last row
        assert_eq!(grid.cell_at(799, 880, 50), (15, 15));
    }

    #[test]
    fn test_builtin_border() {
        let grid = Preset::Border.builtin(4, 3, 7);
        assert_eq!(grid.rows()[0], vec![2, 2, 2, 2]);
        assert_eq!(grid.rows()[1], vec![2, 1, 1, 2]);
        assert_eq!(grid.rows()[2], vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_builtin_respects_tile_range() {
        let grid = Preset::Filled.builtin(2, 2, 1);
        assert!(grid.rows().iter().flatten().all(|&t| t == 1));
    }

    #[test]
    fn test_preset_ids() {
        assert_eq!(Preset::Empty.id(), "empty");
        assert_eq!(Preset::Border.id(), "border");
    }
}
