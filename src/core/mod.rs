//! Maze Core Module
//!
//! Core data structures for the maze graph:
//! - Cell: One maze position with walls and neighbor links
//! - Grid: Row-major cell arena with shared-wall invariants

pub mod cell;
pub mod grid;

pub use cell::{Cell, Direction, Neighbors, Walls};
pub use grid::{glyphs, Grid, MazeGlyphs};
