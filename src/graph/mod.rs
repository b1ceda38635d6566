//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod network;
pub mod traversal;

pub use builder::GraphBuilder;
pub use network::TransitGraph;
pub use traversal::{find_within_distance, Reachable};
