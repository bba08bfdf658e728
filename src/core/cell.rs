//! Maze Cell - The fundamental maze unit
//!
//! Each cell represents one position of the maze with:
//! - Its (row, col) coordinate
//! - Four wall flags (north, south, east, west)
//! - Up to four neighbor links, stored as indices into the owning grid

use serde::{Deserialize, Serialize};

/// Cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in N, S, E, W order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction facing the other way (North -> South)
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Row/column step taken when moving in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// Wall flags of a cell. `true` means a wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Default for Walls {
    /// A fresh cell is closed on every side
    fn default() -> Self {
        Self::closed()
    }
}

impl Walls {
    /// Walls on all four sides
    pub fn closed() -> Self {
        Self {
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }

    /// No walls at all
    pub fn open() -> Self {
        Self {
            north: false,
            south: false,
            east: false,
            west: false,
        }
    }

    /// Wall flag for a direction
    pub fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Set the wall flag for a direction
    pub fn set(&mut self, dir: Direction, wall: bool) {
        match dir {
            Direction::North => self.north = wall,
            Direction::South => self.south = wall,
            Direction::East => self.east = wall,
            Direction::West => self.west = wall,
        }
    }

    /// Number of walls present
    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| self.get(d)).count()
    }
}

/// Neighbor links of a cell, as indices into the owning grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub north: Option<usize>,
    pub south: Option<usize>,
    pub east: Option<usize>,
    pub west: Option<usize>,
}

impl Neighbors {
    pub fn get(&self, dir: Direction) -> Option<usize> {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub(crate) fn set(&mut self, dir: Direction, index: Option<usize>) {
        match dir {
            Direction::North => self.north = index,
            Direction::South => self.south = index,
            Direction::East => self.east = index,
            Direction::West => self.west = index,
        }
    }

    /// Number of linked neighbors
    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| self.get(d).is_some()).count()
    }

    /// Iterate over the linked neighbors with their direction
    pub fn iter(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|i| (d, i)))
    }
}

/// A single maze cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Row of the cell, 0 at the top
    pub row: usize,
    /// Column of the cell, 0 at the left
    pub col: usize,
    /// Wall flags
    pub walls: Walls,
    /// Links to open neighbors
    pub neighbors: Neighbors,
}

impl Cell {
    /// Create a closed, unlinked cell at the given position
    pub fn new(row: usize, col: usize) -> Self {
        Self::with_walls(row, col, Walls::closed())
    }

    /// Create an unlinked cell with the given walls
    pub fn with_walls(row: usize, col: usize, walls: Walls) -> Self {
        Self {
            row,
            col,
            walls,
            neighbors: Neighbors::default(),
        }
    }

    /// Whether a wall blocks the given direction
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.get(dir)
    }

    /// Index of the neighbor in the given direction, if linked
    pub fn neighbor(&self, dir: Direction) -> Option<usize> {
        self.neighbors.get(dir)
    }
}
