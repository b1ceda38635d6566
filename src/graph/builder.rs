//! Fluent API for building TransitGraph instances.

use crate::types::TransitResult;

use super::TransitGraph;

/// Fluent builder for constructing a TransitGraph.
///
/// Collects edge records and inserts them on `build`, surfacing the first
/// invalid weight. Mostly a convenience for tests and benches; production
/// callers load graphs through `format::EdgeListReader`.
pub struct GraphBuilder {
    edges: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Queue an undirected edge between two stations.
    pub fn edge(mut self, from: &str, to: &str, weight: f64) -> Self {
        self.edges.push((from.to_string(), to.to_string(), weight));
        self
    }

    /// Build the final TransitGraph.
    pub fn build(self) -> TransitResult<TransitGraph> {
        let mut graph = TransitGraph::new();
        for (from, to, weight) in &self.edges {
            graph.add_edge(from, to, *weight)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
