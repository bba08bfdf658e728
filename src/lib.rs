//! ASCII Maze - Parser and canonical renderer for text-drawn mazes
//!
//! # Overview
//!
//! The crate provides:
//! - An importer that turns `_`/`|` ASCII mazes into a grid of linked cells
//! - A renderer that writes a grid back in the same dialect, minus path markers
//! - A JSON report protocol for tooling
//!
//! # Example
//!
//! ```
//! use ascii_maze::{import, AsciiRenderer, Direction, Renderer};
//!
//! let grid = import(&["    _", "|_  |", "|*|_|"]).unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (2, 2));
//! assert!(grid.neighbor(0, 0, Direction::East).is_some());
//!
//! let lines = AsciiRenderer::classic().render(&grid);
//! assert_eq!(lines, vec!["    _", "|_  |", "| |_|"]);
//! ```

pub mod core;
pub mod importer;
pub mod renderer;
pub mod protocol;
pub mod sample;

// Re-export commonly used types
pub use crate::core::{Cell, Direction, Grid, MazeGlyphs, Neighbors, Walls};
pub use importer::{import, import_str, import_with, ImportError};
pub use renderer::{render, AsciiRenderer, Renderer};
pub use protocol::{Report, serialize_report};
