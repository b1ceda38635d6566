//! Reads whitespace-separated edge lists into an in-memory graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::graph::TransitGraph;
use crate::types::error::TransitResult;

/// Counters describing one load operation.
///
/// Malformed lines are skipped rather than failing the load, but the skip is
/// not silent: each one is logged and counted so callers can surface data
/// quality problems.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LoadReport {
    /// Well-formed edges inserted into the graph.
    pub edges_loaded: usize,
    /// Non-blank lines rejected as malformed.
    pub lines_skipped: usize,
}

/// Reader for plain-text edge list files.
///
/// One edge per line, three whitespace-separated tokens:
/// `<stationA> <stationB> <distance>`, where the distance parses as a
/// non-negative finite decimal number. Anything else is skipped, so the
/// graph never receives an out-of-contract edge. Blank lines are ignored
/// without counting as skipped.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge list file into a TransitGraph.
    pub fn read_from_file(path: &Path) -> TransitResult<(TransitGraph, LoadReport)> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read from any buffered reader into a TransitGraph.
    pub fn read_from(reader: impl BufRead) -> TransitResult<(TransitGraph, LoadReport)> {
        let mut graph = TransitGraph::new();
        let mut report = LoadReport::default();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_edge_line(&line) {
                Some((from, to, distance)) => {
                    // parse_edge_line only accepts in-contract weights, so
                    // insertion cannot fail here.
                    graph.add_edge(from, to, distance)?;
                    report.edges_loaded += 1;
                }
                None => {
                    log::warn!("skipping malformed edge line {}: {:?}", line_no + 1, line);
                    report.lines_skipped += 1;
                }
            }
        }

        Ok((graph, report))
    }
}

/// Parse one edge line, returning None unless it is exactly three tokens
/// with a finite, non-negative distance.
fn parse_edge_line(line: &str) -> Option<(&str, &str, f64)> {
    let mut tokens = line.split_whitespace();
    let from = tokens.next()?;
    let to = tokens.next()?;
    let distance: f64 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    if !distance.is_finite() || distance < 0.0 {
        return None;
    }
    Some((from, to, distance))
}
