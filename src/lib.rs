//! transit-reach — weighted station graph with distance-bounded reachability.
//!
//! Stores an undirected network of named stations with non-negative edge
//! weights, and answers the question "which stations can I reach from here
//! without travelling more than X?" with a ceiling-restricted shortest-path
//! traversal.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeListReader, LoadReport};
pub use graph::{find_within_distance, GraphBuilder, Reachable, TransitGraph};
pub use types::{StationId, TransitError, TransitResult};
