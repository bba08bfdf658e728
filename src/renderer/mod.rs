//! Maze Renderer Module
//!
//! Renderers convert a maze grid back to text.

pub mod ascii;

pub use ascii::AsciiRenderer;

use crate::core::Grid;

/// Trait for renderers
pub trait Renderer {
    /// Renderer name
    fn name(&self) -> &str;

    /// Render the grid, one string per output line
    fn render(&self, grid: &Grid) -> Vec<String>;

    /// Render the grid as one block of text with a trailing newline
    fn render_string(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for line in self.render(grid) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Render a grid in the canonical ASCII dialect
pub fn render(grid: &Grid) -> Vec<String> {
    AsciiRenderer::classic().render(grid)
}
