//! Bounded shortest-path traversal tests.

use std::collections::HashSet;

use transit_reach::graph::{find_within_distance, GraphBuilder, Reachable, TransitGraph};

// ==================== Helpers ====================

fn station_names(result: &[Reachable]) -> HashSet<String> {
    result.iter().map(|r| r.station.clone()).collect()
}

fn distance_of(result: &[Reachable], station: &str) -> Option<f64> {
    result
        .iter()
        .find(|r| r.station == station)
        .map(|r| r.distance)
}

/// A small network with cycles and a shortcut:
///   A-B 10, A-C 1, C-B 1, B-D 2, C-D 5
fn sample_graph() -> TransitGraph {
    GraphBuilder::new()
        .edge("A", "B", 10.0)
        .edge("A", "C", 1.0)
        .edge("C", "B", 1.0)
        .edge("B", "D", 2.0)
        .edge("C", "D", 5.0)
        .build()
        .unwrap()
}

// ==================== Shortest-path correctness ====================

#[test]
fn test_triangle_shortcut() {
    // The direct A-B edge (10) exceeds the bound, but B is reachable at
    // distance 2 via C. Relaxation, not discovery order, decides inclusion.
    let graph = GraphBuilder::new()
        .edge("A", "B", 10.0)
        .edge("A", "C", 1.0)
        .edge("C", "B", 1.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 2.0);
    assert_eq!(station_names(&result), HashSet::from(["C".into(), "B".into()]));
    assert_eq!(distance_of(&result, "C"), Some(1.0));
    assert_eq!(distance_of(&result, "B"), Some(2.0));
}

#[test]
fn test_distance_improved_after_queueing() {
    // C is queued at 4 via the direct edge before the cheaper route through
    // B improves it to 2. The stale frontier entry must not resurrect the
    // worse distance, and D must be settled from the improved one.
    let graph = GraphBuilder::new()
        .edge("A", "C", 4.0)
        .edge("A", "B", 1.0)
        .edge("B", "C", 1.0)
        .edge("C", "D", 1.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 3.0);
    assert_eq!(distance_of(&result, "C"), Some(2.0));
    assert_eq!(distance_of(&result, "D"), Some(3.0));
}

#[test]
fn test_parallel_edges_shortest_wins() {
    let graph = GraphBuilder::new()
        .edge("A", "B", 5.0)
        .edge("A", "B", 3.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 4.0);
    assert_eq!(distance_of(&result, "B"), Some(3.0));
}

#[test]
fn test_equal_cost_paths_converge() {
    // Two equal-cost routes to D; either processing order gives distance 2.
    let graph = GraphBuilder::new()
        .edge("A", "B", 1.0)
        .edge("A", "C", 1.0)
        .edge("B", "D", 1.0)
        .edge("C", "D", 1.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 10.0);
    assert_eq!(distance_of(&result, "D"), Some(2.0));
}

#[test]
fn test_cycle_terminates() {
    let graph = GraphBuilder::new()
        .edge("A", "B", 1.0)
        .edge("B", "C", 1.0)
        .edge("C", "A", 1.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 100.0);
    assert_eq!(result.len(), 2);
    assert_eq!(distance_of(&result, "B"), Some(1.0));
    assert_eq!(distance_of(&result, "C"), Some(1.0));
}

#[test]
fn test_sample_graph_distances() {
    let graph = sample_graph();
    let result = find_within_distance(&graph, "A", 10.0);

    assert_eq!(distance_of(&result, "C"), Some(1.0));
    assert_eq!(distance_of(&result, "B"), Some(2.0));
    assert_eq!(distance_of(&result, "D"), Some(4.0)); // A-C-B-D, not A-C-D
}

// ==================== Bound semantics ====================

#[test]
fn test_exact_bound_included() {
    let graph = GraphBuilder::new().edge("A", "B", 2.0).build().unwrap();
    let result = find_within_distance(&graph, "A", 2.0);
    assert_eq!(distance_of(&result, "B"), Some(2.0));
}

#[test]
fn test_zero_bound_usually_empty() {
    let graph = sample_graph();
    assert!(find_within_distance(&graph, "A", 0.0).is_empty());
}

#[test]
fn test_zero_bound_includes_zero_weight_neighbors() {
    let graph = GraphBuilder::new()
        .edge("A", "B", 0.0)
        .edge("B", "C", 0.0)
        .edge("C", "D", 1.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 0.0);
    assert_eq!(station_names(&result), HashSet::from(["B".into(), "C".into()]));
}

#[test]
fn test_negative_bound_is_empty() {
    let graph = sample_graph();
    assert!(find_within_distance(&graph, "A", -1.0).is_empty());
}

#[test]
fn test_nan_bound_is_empty() {
    let graph = sample_graph();
    assert!(find_within_distance(&graph, "A", f64::NAN).is_empty());
}

#[test]
fn test_monotonicity() {
    let graph = sample_graph();
    let bounds = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 20.0];

    for window in bounds.windows(2) {
        let smaller = station_names(&find_within_distance(&graph, "A", window[0]));
        let larger = station_names(&find_within_distance(&graph, "A", window[1]));
        assert!(
            smaller.is_subset(&larger),
            "result at bound {} not a subset of result at bound {}",
            window[0],
            window[1]
        );
    }
}

// ==================== Degenerate inputs ====================

#[test]
fn test_unknown_start_is_empty() {
    let graph = sample_graph();
    assert!(find_within_distance(&graph, "Nonexistent", 100.0).is_empty());
}

#[test]
fn test_empty_graph() {
    let graph = TransitGraph::new();
    assert!(find_within_distance(&graph, "A", 100.0).is_empty());
}

#[test]
fn test_start_excluded_from_result() {
    let graph = sample_graph();
    let result = find_within_distance(&graph, "A", 100.0);
    assert!(distance_of(&result, "A").is_none());
}

#[test]
fn test_start_excluded_with_zero_weight_cycle() {
    // A zero-weight loop back to the start must not put A in its own result.
    let graph = GraphBuilder::new()
        .edge("A", "B", 0.0)
        .edge("B", "A", 0.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 5.0);
    assert_eq!(station_names(&result), HashSet::from(["B".into()]));
}

#[test]
fn test_disconnected_component_excluded() {
    let graph = GraphBuilder::new()
        .edge("A", "B", 1.0)
        .edge("X", "Y", 1.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 1000.0);
    assert_eq!(station_names(&result), HashSet::from(["B".into()]));
}

// ==================== Result ordering ====================

#[test]
fn test_result_sorted_by_distance_then_name() {
    let graph = GraphBuilder::new()
        .edge("A", "C", 2.0)
        .edge("A", "B", 2.0)
        .edge("A", "D", 1.0)
        .build()
        .unwrap();

    let result = find_within_distance(&graph, "A", 5.0);
    let names: Vec<&str> = result.iter().map(|r| r.station.as_str()).collect();
    assert_eq!(names, vec!["D", "B", "C"]);
}
