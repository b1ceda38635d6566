//! Edge-list file format support.

pub mod loader;

pub use loader::{EdgeListReader, LoadReport};
