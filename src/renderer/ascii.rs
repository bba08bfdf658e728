//! Canonical ASCII Renderer
//!
//! Writes a grid in the same dialect the importer reads:
//! - Top border: a leading space, then `" _"` or `"  "` per column
//! - Body rows: the west wall of column 0, then south and east glyphs per column
//!
//! Path markers are never written, so the output is the clean maze.

use crate::core::{glyphs, Grid, MazeGlyphs};
use super::Renderer;

/// Canonical ASCII renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer {
    glyphs: MazeGlyphs,
}

impl AsciiRenderer {
    /// Create a renderer with a given glyph set
    pub fn new(glyphs: MazeGlyphs) -> Self {
        Self { glyphs }
    }

    /// Create a renderer for the classic `_`/`|` dialect
    pub fn classic() -> Self {
        Self::new(glyphs::CLASSIC)
    }

    fn top_border(&self, grid: &Grid) -> String {
        let mut line = String::with_capacity(1 + 2 * grid.cols());
        line.push(self.glyphs.open);
        for cell in grid.row(0).unwrap_or_default() {
            line.push(self.glyphs.open);
            line.push(self.glyphs.horizontal_for(cell.walls.north));
        }
        line
    }
}

impl Renderer for AsciiRenderer {
    fn name(&self) -> &str {
        "ascii"
    }

    fn render(&self, grid: &Grid) -> Vec<String> {
        let mut lines = Vec::with_capacity(grid.rows() + 1);
        lines.push(self.top_border(grid));

        for i in 0..grid.rows() {
            let cells = grid.row(i).unwrap_or_default();
            let mut line = String::with_capacity(1 + 2 * cells.len());
            let west = cells.first().map_or(false, |c| c.walls.west);
            line.push(self.glyphs.vertical_for(west));
            for cell in cells {
                line.push(self.glyphs.horizontal_for(cell.walls.south));
                line.push(self.glyphs.vertical_for(cell.walls.east));
            }
            lines.push(line);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::{import, import_str};
    use crate::sample::{example_text, EXAMPLE_MAZE};

    #[test]
    fn test_single_closed_cell() {
        let grid = import(&["  _", "|_|"]).unwrap();
        assert_eq!(AsciiRenderer::classic().render(&grid), vec!["  _", "|_|"]);
    }

    #[test]
    fn test_round_trip_clean() {
        let maze = ["    _ _", "|_  | |", "| |_ _|", "|_ _  |"];
        let grid = import(&maze).unwrap();
        assert_eq!(AsciiRenderer::classic().render(&grid), maze);
    }

    #[test]
    fn test_open_walls() {
        let maze = ["    _", "     "];
        let grid = import(&maze).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (1, 2));
        assert_eq!(grid.passage_count(), 1);
        assert!(grid.get(0, 0).unwrap().neighbors.north.is_none());
        assert_eq!(AsciiRenderer::classic().render(&grid), maze);
    }

    #[test]
    fn test_sample_strips_markers() {
        let grid = import(&EXAMPLE_MAZE).unwrap();
        let lines = AsciiRenderer::classic().render(&grid);

        let expected: Vec<String> = EXAMPLE_MAZE[1..].iter().map(|l| l.replace('*', " ")).collect();
        assert_eq!(lines, expected);
        assert!(lines.iter().all(|l| !l.contains('*')));
    }

    #[test]
    fn test_render_is_stable() {
        let grid = import_str(&example_text()).unwrap();
        let once = AsciiRenderer::classic().render(&grid);
        let twice = AsciiRenderer::classic().render(&import(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_render_string() {
        let grid = import(&["  _", "|_|"]).unwrap();
        assert_eq!(AsciiRenderer::classic().name(), "ascii");
        assert_eq!(AsciiRenderer::classic().render_string(&grid), "  _\n|_|\n");
        assert_eq!(crate::renderer::render(&grid), vec!["  _", "|_|"]);
    }
}
