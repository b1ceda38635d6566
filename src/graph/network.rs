//! Core graph structure — interned stations with weighted adjacency lists.

use std::collections::HashMap;

use crate::types::{validate_weight, StationId, TransitResult};

/// A single adjacency entry: the neighboring station and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    /// Interned ID of the neighboring station.
    pub station: StationId,
    /// Non-negative edge weight (travel distance).
    pub distance: f64,
}

/// The core in-memory graph of stations and their weighted connections.
///
/// Stations are created implicitly the first time they appear as an edge
/// endpoint and are never removed. Names are opaque and case-sensitive;
/// internally each name is interned to a dense `StationId` so adjacency
/// lists store integers instead of strings.
///
/// The graph is undirected: one `add_edge` call pushes two adjacency
/// entries with identical weight. Parallel edges between the same pair are
/// kept independently — each one is a separate traversal candidate.
#[derive(Debug)]
pub struct TransitGraph {
    /// Station names, indexed by StationId.
    names: Vec<String>,
    /// Name -> StationId interning map.
    ids: HashMap<String, StationId>,
    /// Adjacency lists in insertion order, indexed by StationId.
    adjacency: Vec<Vec<Hop>>,
    /// Number of undirected edge records inserted.
    edge_count: usize,
}

impl TransitGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            ids: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known network size.
    pub fn with_capacity(station_count: usize) -> Self {
        Self {
            names: Vec::with_capacity(station_count),
            ids: HashMap::with_capacity(station_count),
            adjacency: Vec::with_capacity(station_count),
            edge_count: 0,
        }
    }

    /// Intern a station name, creating the station if it is new.
    fn intern(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len() as StationId;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert an undirected connection between two stations.
    ///
    /// Creates both endpoints if absent and pushes one adjacency entry in
    /// each direction with the same weight. Calling twice with identical
    /// arguments adds two independent parallel edges.
    ///
    /// Fails with `InvalidWeight` if the weight is negative, NaN, or
    /// infinite. Validation happens before any mutation, so a rejected edge
    /// leaves the graph unchanged — it does not even create the stations.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> TransitResult<()> {
        validate_weight(weight)?;

        let from_id = self.intern(from);
        let to_id = self.intern(to);

        self.adjacency[from_id as usize].push(Hop {
            station: to_id,
            distance: weight,
        });
        self.adjacency[to_id as usize].push(Hop {
            station: from_id,
            distance: weight,
        });
        self.edge_count += 1;

        Ok(())
    }

    /// Whether a station exists in the graph.
    pub fn has_station(&self, station: &str) -> bool {
        self.ids.contains_key(station)
    }

    /// Adjacency entries for a station as (neighbor name, weight) pairs, in
    /// the order the edges were inserted.
    ///
    /// An unknown station yields an empty iterator, never an error — absent
    /// and isolated stations both have no neighbors.
    pub fn neighbors<'a>(&'a self, station: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        let hops = self
            .station_id(station)
            .map(|id| self.hops(id))
            .unwrap_or(&[]);
        hops.iter()
            .map(|hop| (self.station_name(hop.station), hop.distance))
    }

    /// All station names, in interning (first-seen) order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_str())
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edge records.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Resolve a station name to its interned ID.
    pub(crate) fn station_id(&self, station: &str) -> Option<StationId> {
        self.ids.get(station).copied()
    }

    /// Resolve an interned ID back to the station name.
    pub(crate) fn station_name(&self, id: StationId) -> &str {
        &self.names[id as usize]
    }

    /// ID-level adjacency list for the traversal.
    pub(crate) fn hops(&self, id: StationId) -> &[Hop] {
        &self.adjacency[id as usize]
    }
}

impl Default for TransitGraph {
    fn default() -> Self {
        Self::new()
    }
}
