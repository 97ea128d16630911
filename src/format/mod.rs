//! File I/O for JSON graph definitions.

pub mod graph_file;

pub use graph_file::{GraphFile, DEMO_EDGES, DEMO_NODE_COUNT};
