//! Maze Importer
//!
//! Parses the ASCII maze dialect into a [`Grid`].
//!
//! ```text
//!     _ _     <- top border: '_' at offset 2+2j closes column j to the north
//! |_  | |     <- offset 0: west wall of column 0
//! |_ _ _|        offset 1+2j: south wall, offset 2+2j: east wall
//! ```
//!
//! `*` may appear anywhere a wall could be and reads as open; it marks a
//! drawn solution path and carries no structure.

use log::{debug, trace};

use crate::core::{glyphs, Grid, MazeGlyphs, Walls};

/// Reasons an import is rejected. Nothing is built when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The glyph set cannot be matched byte-for-byte against the input
    #[error("glyph {glyph:?} is not ASCII")]
    NonAsciiGlyph { glyph: char },

    /// Fewer than two lines left after dropping leading blank lines
    #[error("input is too short: need a top border and at least one row")]
    TooShort,

    /// Top border shorter than one boundary character plus one column
    #[error("top border is too short: {len} characters, need at least 3")]
    BorderTooShort { len: usize },

    /// A body line cannot hold every column
    #[error("row width mismatch: line {row} has {len} characters, need at least {expected}")]
    RowWidthMismatch {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl ImportError {
    /// Offending line (index after blank-line trimming), if any
    pub fn row(&self) -> Option<usize> {
        match self {
            ImportError::RowWidthMismatch { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// Import a maze from its lines using the classic glyphs
pub fn import<S: AsRef<str>>(lines: &[S]) -> Result<Grid, ImportError> {
    import_with(lines, &glyphs::CLASSIC)
}

/// Import a maze from a block of text (`\n` or `\r\n` line endings)
pub fn import_str(text: &str) -> Result<Grid, ImportError> {
    let lines: Vec<&str> = text.lines().collect();
    import(&lines)
}

/// Import a maze from its lines using a given glyph set.
///
/// Every glyph must be ASCII, since slots are matched one byte at a time.
pub fn import_with<S: AsRef<str>>(lines: &[S], glyphs: &MazeGlyphs) -> Result<Grid, ImportError> {
    if let Some(glyph) = glyphs.non_ascii() {
        return Err(ImportError::NonAsciiGlyph { glyph });
    }

    let skipped = lines
        .iter()
        .take_while(|l| l.as_ref().bytes().all(|b| b == b' '))
        .count();
    let lines: Vec<&[u8]> = lines[skipped..].iter().map(|l| l.as_ref().as_bytes()).collect();
    if skipped > 0 {
        debug!("Dropped {} leading blank line(s)", skipped);
    }

    if lines.len() < 2 {
        return Err(ImportError::TooShort);
    }

    let top = lines[0];
    if top.len() < 3 {
        return Err(ImportError::BorderTooShort { len: top.len() });
    }
    let cols = (top.len() - 1) / 2;
    let rows = lines.len() - 1;

    let expected = 1 + 2 * cols;
    for (row, line) in lines.iter().enumerate().skip(1) {
        if line.len() < expected {
            return Err(ImportError::RowWidthMismatch {
                row,
                len: line.len(),
                expected,
            });
        }
    }

    debug!("Importing {}x{} maze", rows, cols);

    let marker = glyphs.marker as u8;
    let markers: usize = lines
        .iter()
        .map(|l| l.iter().filter(|&&b| b == marker).count())
        .sum();
    if markers > 0 {
        debug!("Discarding {} path marker(s)", markers);
    }

    let horizontal = glyphs.horizontal as u8;
    let vertical = glyphs.vertical as u8;
    let mut walls = vec![Walls::closed(); rows * cols];

    for (j, w) in walls.iter_mut().take(cols).enumerate() {
        // A short border leaves the last column open to the north
        w.north = top.get(2 + 2 * j) == Some(&horizontal);
    }

    for i in 0..rows {
        let line = lines[i + 1];
        trace!("Row {}: {}", i, String::from_utf8_lossy(line));

        walls[i * cols].west = line[0] == vertical;
        for j in 0..cols {
            let w = &mut walls[i * cols + j];
            w.south = line[1 + 2 * j] == horizontal;
            w.east = line[2 + 2 * j] == vertical;
        }
    }

    let grid = Grid::from_walls(rows, cols, walls);
    debug!("Imported maze with {} passage(s)", grid.passage_count());
    Ok(grid)
}
