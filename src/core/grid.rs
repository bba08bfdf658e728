//! Maze Grid - The cell arena
//!
//! A 2D array of cells stored row-major in one vector. Neighbor links are
//! indices into that vector, so cells never point at each other directly.
//! Shared walls are reconciled and adjacency derived when the grid is built;
//! afterwards the grid is read-only.

use serde::Serialize;

use super::cell::{Cell, Direction, Walls};

/// Glyph set of an ASCII maze dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGlyphs {
    pub horizontal: char, // South wall, or North wall on the top border
    pub vertical: char,   // East/West wall
    pub open: char,       // No wall
    pub marker: char,     // Path overlay, read as open
}

impl MazeGlyphs {
    /// First glyph outside ASCII, if any
    pub fn non_ascii(&self) -> Option<char> {
        [self.horizontal, self.vertical, self.open, self.marker]
            .into_iter()
            .find(|c| !c.is_ascii())
    }

    /// Glyph for a horizontal wall slot
    #[inline]
    pub fn horizontal_for(&self, wall: bool) -> char {
        if wall { self.horizontal } else { self.open }
    }

    /// Glyph for a vertical wall slot
    #[inline]
    pub fn vertical_for(&self, wall: bool) -> char {
        if wall { self.vertical } else { self.open }
    }
}

/// Predefined glyph sets
pub mod glyphs {
    use super::MazeGlyphs;

    pub const CLASSIC: MazeGlyphs = MazeGlyphs {
        horizontal: '_',
        vertical: '|',
        open: ' ',
        marker: '*',
    };
}

impl Default for MazeGlyphs {
    fn default() -> Self {
        glyphs::CLASSIC
    }
}

/// The maze grid - a 2D array of linked cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    /// Grid height in rows
    rows: usize,
    /// Grid width in columns
    cols: usize,
    /// The cell buffer (row-major order)
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from per-cell wall flags in row-major order.
    ///
    /// Shared walls are reconciled in favor of the cell scanned first: the
    /// west wall of every interior cell is replaced by the east wall of its
    /// left neighbor, and the north wall of every cell below the first row
    /// by the south wall of the cell above. Neighbor links are then derived
    /// from the final flags.
    pub(crate) fn from_walls(rows: usize, cols: usize, mut walls: Vec<Walls>) -> Self {
        debug_assert_eq!(walls.len(), rows * cols);

        for i in 0..rows {
            for j in 0..cols {
                let idx = i * cols + j;
                if j > 0 {
                    walls[idx].west = walls[idx - 1].east;
                }
                if i > 0 {
                    walls[idx].north = walls[idx - cols].south;
                }
            }
        }

        let mut cells: Vec<Cell> = walls
            .into_iter()
            .enumerate()
            .map(|(idx, w)| Cell::with_walls(idx / cols, idx % cols, w))
            .collect();

        // Only right and down links are decided here; left and up mirror them
        for i in 0..rows {
            for j in 0..cols {
                let idx = i * cols + j;
                if j + 1 < cols && !cells[idx].walls.east {
                    cells[idx].neighbors.set(Direction::East, Some(idx + 1));
                    cells[idx + 1].neighbors.set(Direction::West, Some(idx));
                }
                if i + 1 < rows && !cells[idx].walls.south {
                    cells[idx].neighbors.set(Direction::South, Some(idx + cols));
                    cells[idx + cols].neighbors.set(Direction::North, Some(idx));
                }
            }
        }

        Self { rows, cols, cells }
    }

    /// Grid height in rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the index for a position
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a reference to a cell
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Get a cell by its index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get one row of cells
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Follow the link from (row, col) in a direction
    pub fn neighbor(&self, row: usize, col: usize, dir: Direction) -> Option<&Cell> {
        self.get(row, col)?
            .neighbor(dir)
            .and_then(|i| self.cells.get(i))
    }

    /// Get iterator over all cells in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of undirected passages between cells
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.neighbors.east.is_some() as usize + c.neighbors.south.is_some() as usize)
            .sum()
    }

    /// Position of a cell one step away, if it lies inside the grid
    fn step(&self, row: usize, col: usize, dir: Direction) -> Option<usize> {
        let (dr, dc) = dir.delta();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.index(r, c)
    }

    /// Find the first cell/direction that breaks a grid invariant.
    ///
    /// Checks that shared walls agree, that a link exists exactly where the
    /// wall is open and a cell lies beyond it, and that links are mutual.
    pub fn check_invariants(&self) -> Option<(usize, usize, Direction)> {
        for cell in &self.cells {
            for dir in Direction::ALL {
                let beyond = self.step(cell.row, cell.col, dir);
                if let Some(other) = beyond {
                    if cell.has_wall(dir) != self.cells[other].has_wall(dir.opposite()) {
                        return Some((cell.row, cell.col, dir));
                    }
                }

                let expected = if cell.has_wall(dir) { None } else { beyond };
                if cell.neighbor(dir) != expected {
                    return Some((cell.row, cell.col, dir));
                }

                if let Some(other) = cell.neighbor(dir) {
                    let back = self.cells[other].neighbor(dir.opposite());
                    if back != self.index(cell.row, cell.col) {
                        return Some((cell.row, cell.col, dir));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls(north: bool, south: bool, east: bool, west: bool) -> Walls {
        Walls { north, south, east, west }
    }

    #[test]
    fn test_grid_new() {
        let grid = Grid::from_walls(2, 3, vec![Walls::closed(); 6]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.check_invariants().is_none());
    }

    #[test]
    fn test_grid_get_positions() {
        let grid = Grid::from_walls(2, 3, vec![Walls::closed(); 6]);
        let cell = grid.get(1, 2).unwrap();
        assert_eq!((cell.row, cell.col), (1, 2));
        assert_eq!(grid.index(1, 2), Some(5));
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 3).is_none());
        assert_eq!(grid.row(1).unwrap().len(), 3);
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn test_reconcile_prefers_earlier_cell() {
        // Left cell says open east, right cell claims a west wall
        let grid = Grid::from_walls(
            1,
            2,
            vec![walls(true, true, false, true), walls(true, true, true, true)],
        );
        assert!(!grid.get(0, 1).unwrap().walls.west);
        assert_eq!(grid.neighbor(0, 0, Direction::East).unwrap().col, 1);
        assert_eq!(grid.neighbor(0, 1, Direction::West).unwrap().col, 0);
        assert!(grid.check_invariants().is_none());
    }

    #[test]
    fn test_vertical_links() {
        let grid = Grid::from_walls(
            2,
            1,
            vec![walls(true, false, true, true), walls(true, true, true, true)],
        );
        assert!(!grid.get(1, 0).unwrap().walls.north);
        assert_eq!(grid.get(0, 0).unwrap().neighbors.south, Some(1));
        assert_eq!(grid.get(1, 0).unwrap().neighbors.north, Some(0));
        assert_eq!(grid.passage_count(), 1);
    }

    #[test]
    fn test_open_outer_wall_has_no_neighbor() {
        let grid = Grid::from_walls(1, 1, vec![Walls::open()]);
        let cell = grid.get(0, 0).unwrap();
        assert_eq!(cell.walls.count(), 0);
        assert_eq!(cell.neighbors.count(), 0);
        assert!(grid.check_invariants().is_none());
    }

    #[test]
    fn test_check_invariants_detects_broken_link() {
        let mut grid = Grid::from_walls(1, 2, vec![Walls::open(); 2]);
        grid.cells[1].neighbors.set(Direction::West, None);
        assert_eq!(grid.check_invariants(), Some((0, 0, Direction::East)));
    }

    #[test]
    fn test_classic_glyphs() {
        let g = glyphs::CLASSIC;
        assert_eq!(MazeGlyphs::default(), g);
        assert_eq!(g.non_ascii(), None);
        let boxed = MazeGlyphs { vertical: '│', ..g };
        assert_eq!(boxed.non_ascii(), Some('│'));
        assert_eq!(g.horizontal_for(true), '_');
        assert_eq!(g.vertical_for(false), ' ');
    }
}
