//! Maze Clean Binary
//!
//! Run with: cargo run -- [options] [FILE...]
//!
//! Reads ASCII mazes (files, or stdin when none are given) and prints them
//! redrawn without path markers, or as JSON reports.

use std::env;
use std::fs;
use std::io;
use std::process;

use log::{debug, error, info};

use ascii_maze::protocol::{serialize_report, Report};
use ascii_maze::sample;
use ascii_maze::{import_str, AsciiRenderer, Renderer};

/// Output selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Text,
    Json,
    Graph,
}

fn print_help() {
    println!("maze-clean v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: maze-clean [options] [FILE...]");
    println!();
    println!("Reads mazes from FILEs (or stdin, or '-') and redraws them without '*' markers.");
    println!();
    println!("Options:");
    println!("  --sample      Use the built-in 15x27 example maze");
    println!("  --json        Print a JSON maze report per input");
    println!("  --graph       Print a JSON cell graph per input");
    println!("  --help, -h    Show this help");
    println!();
    println!("Set RUST_LOG=debug for import details.");
}

/// Read every requested input. A read failure is kept with its source so the
/// remaining inputs are still processed.
fn read_inputs(use_sample: bool, files: &[String]) -> Vec<(Option<String>, io::Result<String>)> {
    let mut inputs = Vec::new();
    if use_sample {
        inputs.push((Some("sample".to_string()), Ok(sample::example_text())));
    }
    for path in files {
        if path == "-" {
            inputs.push((None, io::read_to_string(io::stdin())));
        } else {
            inputs.push((Some(path.clone()), fs::read_to_string(path)));
        }
    }
    if inputs.is_empty() {
        inputs.push((None, io::read_to_string(io::stdin())));
    }
    inputs
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let mut output = Output::Text;
    let mut use_sample = false;
    let mut files: Vec<String> = Vec::new();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--sample" => use_sample = true,
            "--json" => output = Output::Json,
            "--graph" => output = Output::Graph,
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            flag if flag.starts_with("--") => {
                eprintln!("Error: unknown option {}", flag);
                process::exit(2);
            }
            path => files.push(path.to_string()),
        }
    }

    let renderer = AsciiRenderer::classic();
    debug!("Rendering with the {} renderer", renderer.name());
    let mut failed = 0;

    for (source, text) in read_inputs(use_sample, &files) {
        let name = source.clone().unwrap_or_else(|| "<stdin>".to_string());
        let text = match text {
            Ok(text) => text,
            Err(e) => {
                error!("{}: {}", name, e);
                failed += 1;
                if output != Output::Text {
                    println!("{}", serialize_report(&Report::failure(e.to_string(), source)));
                }
                continue;
            }
        };
        let result = import_str(&text);

        match &result {
            Ok(grid) => {
                info!("{}: {}x{} maze, {} passage(s)", name, grid.rows(), grid.cols(), grid.passage_count());
                if let Some((row, col, dir)) = grid.check_invariants() {
                    debug!("{}: invariant broken at ({}, {}) facing {:?}", name, row, col, dir);
                }
            }
            Err(e) => {
                error!("{}: {}", name, e);
                failed += 1;
            }
        }

        match (output, &result) {
            (Output::Text, Ok(grid)) => print!("{}", renderer.render_string(grid)),
            (Output::Text, Err(_)) => {}
            (Output::Json, _) => println!("{}", serialize_report(&Report::from_import(&result, false, source))),
            (Output::Graph, _) => println!("{}", serialize_report(&Report::from_import(&result, true, source))),
        }
    }

    if failed > 0 {
        process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_file_does_not_stop_others() {
        let files = vec!["does/not/exist.maze".to_string()];
        let inputs = read_inputs(true, &files);
        assert_eq!(inputs.len(), 2);

        let (source, text) = &inputs[0];
        assert_eq!(source.as_deref(), Some("sample"));
        assert!(import_str(text.as_ref().unwrap()).is_ok());

        let (source, text) = &inputs[1];
        assert_eq!(source.as_deref(), Some("does/not/exist.maze"));
        assert!(text.is_err());
    }
}
