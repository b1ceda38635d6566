//! Bounded shortest-path traversal (Dijkstra with a distance ceiling).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::types::StationId;

use super::TransitGraph;

/// A station found within the distance bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reachable {
    /// Station name.
    pub station: String,
    /// Shortest cumulative distance from the start station.
    pub distance: f64,
}

/// A frontier entry awaiting relaxation.
///
/// Ordered by ascending tentative distance so the `BinaryHeap` (a max-heap)
/// pops the smallest distance first. Equal distances fall back to insertion
/// sequence; any stable tie-break is fine since relaxation is confluent, but
/// a deterministic one keeps traversal order reproducible.
struct FrontierEntry {
    distance: f64,
    station: StationId,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smaller distance sorts greater, so the max-heap pops it
        // first. Weights are validated finite on insertion, so total_cmp
        // agrees with the usual numeric order here.
        other
            .distance
            .total_cmp(&self.distance)
            .then(other.seq.cmp(&self.seq))
    }
}

/// Find every station whose shortest-path distance from `start` is at most
/// `max_distance`, excluding the start station itself.
///
/// This must be a true shortest-path computation: edge weights are
/// non-uniform, so a first-in-first-out queue would report whatever distance
/// happens to be discovered first. The frontier is instead a min-heap keyed
/// by tentative distance, and a popped entry whose distance no longer
/// matches the best recorded one is stale and discarded.
///
/// An unknown start station yields an empty result, as does a negative (or
/// NaN) bound — both are degenerate queries, not errors. A zero bound still
/// includes stations connected by zero-weight edges.
///
/// The distance table and frontier are local to the call, so any number of
/// traversals may run in parallel against the same graph as long as nobody
/// mutates it.
pub fn find_within_distance(
    graph: &TransitGraph,
    start: &str,
    max_distance: f64,
) -> Vec<Reachable> {
    let Some(start_id) = graph.station_id(start) else {
        return Vec::new();
    };
    if max_distance.is_nan() || max_distance < 0.0 {
        return Vec::new();
    }

    // best[station] = best known distance from start; NAN = unreached.
    let mut best: Vec<f64> = vec![f64::NAN; graph.station_count()];
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    best[start_id as usize] = 0.0;
    frontier.push(FrontierEntry {
        distance: 0.0,
        station: start_id,
        seq,
    });

    while let Some(entry) = frontier.pop() {
        // Stale entry: this station was already settled at a shorter distance.
        if entry.distance > best[entry.station as usize] {
            continue;
        }

        for hop in graph.hops(entry.station) {
            let candidate = entry.distance + hop.distance;
            if candidate > max_distance {
                continue;
            }
            let recorded = best[hop.station as usize];
            if recorded.is_nan() || candidate < recorded {
                best[hop.station as usize] = candidate;
                seq += 1;
                frontier.push(FrontierEntry {
                    distance: candidate,
                    station: hop.station,
                    seq,
                });
            }
        }
    }

    let mut result: Vec<Reachable> = best
        .iter()
        .enumerate()
        .filter(|&(id, d)| !d.is_nan() && id as StationId != start_id)
        .map(|(id, &distance)| Reachable {
            station: graph.station_name(id as StationId).to_string(),
            distance,
        })
        .collect();

    // Deterministic output: ascending distance, ties by name.
    result.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.station.cmp(&b.station))
    });

    result
}
