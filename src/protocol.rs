//! Maze Report Protocol
//!
//! JSON reports describing the result of importing a maze, for tools that
//! want more than the redrawn text. One report is produced per input.
//!
//! Example:
//! ```json
//! {"type": "maze", "source": "maze.txt", "rows": 1, "cols": 1, "passages": 0, "lines": ["  _", "|_|"]}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Grid};
use crate::importer::ImportError;
use crate::renderer::{AsciiRenderer, Renderer};

/// Reports emitted by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Report {
    /// Canonical rendering with its dimensions
    Maze {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        rows: usize,
        cols: usize,
        /// Undirected passages between cells
        passages: usize,
        lines: Vec<String>,
    },

    /// Every cell with its walls and neighbor indices
    Graph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        rows: usize,
        cols: usize,
        cells: Vec<Cell>,
    },

    /// Import failure
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        message: String,
        /// Offending line, for width mismatches
        #[serde(default, skip_serializing_if = "Option::is_none")]
        row: Option<usize>,
    },
}

impl Report {
    /// Canonical rendering report for a grid
    pub fn maze(grid: &Grid, source: Option<String>) -> Self {
        Report::Maze {
            source,
            rows: grid.rows(),
            cols: grid.cols(),
            passages: grid.passage_count(),
            lines: AsciiRenderer::classic().render(grid),
        }
    }

    /// Full cell graph report for a grid
    pub fn graph(grid: &Grid, source: Option<String>) -> Self {
        Report::Graph {
            source,
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.iter().cloned().collect(),
        }
    }

    /// Failure report for a rejected import
    pub fn error(err: &ImportError, source: Option<String>) -> Self {
        Report::Error {
            source,
            message: err.to_string(),
            row: err.row(),
        }
    }

    /// Failure report for an input that never reached the importer
    pub fn failure(message: impl Into<String>, source: Option<String>) -> Self {
        Report::Error {
            source,
            message: message.into(),
            row: None,
        }
    }

    /// Build the report for an import result
    pub fn from_import(result: &Result<Grid, ImportError>, include_graph: bool, source: Option<String>) -> Self {
        match result {
            Ok(grid) if include_graph => Report::graph(grid, source),
            Ok(grid) => Report::maze(grid, source),
            Err(err) => Report::error(err, source),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Report::Error { .. })
    }
}

/// Parse a report from JSON
pub fn parse_report(json: &str) -> Result<Report, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a report to JSON
pub fn serialize_report(report: &Report) -> String {
    serde_json::to_string(report).unwrap_or_else(|_| r#"{"type":"error","message":"Serialization failed"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::importer::import;
    use serde_json::Value;

    #[test]
    fn test_maze_report() {
        let grid = import(&["  _", "|_|"]).unwrap();
        let json = serialize_report(&Report::maze(&grid, Some("one.txt".to_string())));
        assert_eq!(
            json,
            r#"{"type":"maze","source":"one.txt","rows":1,"cols":1,"passages":0,"lines":["  _","|_|"]}"#
        );
    }

    #[test]
    fn test_graph_report() {
        let grid = import(&["  _ _", "|_ _|"]).unwrap();
        let json = serialize_report(&Report::from_import(&Ok(grid), true, None));
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "graph");
        assert!(value.get("source").is_none());
        assert_eq!(value["cells"].as_array().unwrap().len(), 2);
        assert_eq!(value["cells"][0]["neighbors"]["east"].as_u64(), Some(1));
        assert_eq!(value["cells"][1]["neighbors"]["west"].as_u64(), Some(0));
        assert_eq!(value["cells"][1]["walls"]["east"].as_bool(), Some(true));
        assert!(value["cells"][0]["neighbors"]["north"].is_null());
    }

    #[test]
    fn test_error_report() {
        let result = import(&["  _ _", "|_"]);
        let report = Report::from_import(&result, false, None);
        assert!(report.is_error());

        let json = serialize_report(&report);
        match parse_report(&json).unwrap() {
            Report::Error { message, row, .. } => {
                assert!(message.starts_with("row width mismatch"));
                assert_eq!(row, Some(1));
            }
            _ => panic!("Wrong report type"),
        }
    }

    #[test]
    fn test_failure_report() {
        let report = Report::failure("No such file", Some("gone.txt".to_string()));
        assert!(report.is_error());
        assert_eq!(
            serialize_report(&report),
            r#"{"type":"error","source":"gone.txt","message":"No such file"}"#
        );
    }

    #[test]
    fn test_parse_graph_cells() {
        let grid = import(&["  _ _", "|_ _|"]).unwrap();
        let report = parse_report(&serialize_report(&Report::graph(&grid, None))).unwrap();
        match report {
            Report::Graph { cells, .. } => {
                assert_eq!(cells[0].neighbor(Direction::East), Some(1));
                assert_eq!(&cells[..], grid.row(0).unwrap());
            }
            _ => panic!("Wrong report type"),
        }
    }
}
