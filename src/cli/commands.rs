//! CLI command implementations.

use std::path::Path;

use crate::format::EdgeListReader;
use crate::graph::traversal::find_within_distance;
use crate::types::TransitResult;

/// Display information about an edge list file.
pub fn cmd_info(path: &Path, json: bool) -> TransitResult<()> {
    let (graph, report) = EdgeListReader::read_from_file(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "stations": graph.station_count(),
            "edges": graph.edge_count(),
            "edges_loaded": report.edges_loaded,
            "lines_skipped": report.lines_skipped,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Stations: {}", graph.station_count());
        println!("Edges: {}", graph.edge_count());
        println!("Lines skipped: {}", report.lines_skipped);
    }
    Ok(())
}

/// List station names in first-seen order.
pub fn cmd_stations(path: &Path, limit: usize, json: bool) -> TransitResult<()> {
    let (graph, _) = EdgeListReader::read_from_file(path)?;
    let stations: Vec<&str> = graph.stations().take(limit).collect();

    if json {
        let info = serde_json::json!({
            "total": graph.station_count(),
            "stations": stations,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "{} stations (showing {}):",
            graph.station_count(),
            stations.len()
        );
        for name in stations {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Show the adjacency entries of one station, in insertion order.
pub fn cmd_neighbors(path: &Path, station: &str, json: bool) -> TransitResult<()> {
    let (graph, _) = EdgeListReader::read_from_file(path)?;
    let neighbors: Vec<(&str, f64)> = graph.neighbors(station).collect();

    if json {
        let entries: Vec<serde_json::Value> = neighbors
            .iter()
            .map(|(name, dist)| serde_json::json!({"station": name, "distance": dist}))
            .collect();
        let info = serde_json::json!({
            "station": station,
            "known": graph.has_station(station),
            "neighbors": entries,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else if !graph.has_station(station) {
        println!("Station {:?} is not in the network", station);
    } else if neighbors.is_empty() {
        println!("Station {:?} has no connections", station);
    } else {
        println!("Neighbors of {:?}:", station);
        for (name, dist) in neighbors {
            println!("  {} ({})", name, dist);
        }
    }
    Ok(())
}

/// Run the bounded reachability query.
pub fn cmd_reachable(
    path: &Path,
    start: &str,
    max_distance: f64,
    json: bool,
) -> TransitResult<()> {
    let (graph, _) = EdgeListReader::read_from_file(path)?;
    let reachable = find_within_distance(&graph, start, max_distance);

    if json {
        let info = serde_json::json!({
            "start": start,
            "max_distance": max_distance,
            "count": reachable.len(),
            "reachable": reachable,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else if reachable.is_empty() {
        println!(
            "No stations within {} of {:?}",
            max_distance, start
        );
    } else {
        println!(
            "{} stations within {} of {:?}:",
            reachable.len(),
            max_distance,
            start
        );
        for r in &reachable {
            println!("  {} ({})", r.station, r.distance);
        }
    }
    Ok(())
}
