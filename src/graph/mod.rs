//! Core graph container implementation
//!
//! This module implements a directed-graph data model with:
//! - Nodes carrying opaque content, keyed by string-or-numeric identifiers
//! - Directed, weighted edges between existing nodes
//! - Insertion-ordered in-memory storage with hash-based identifier lookup

pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::Identifier;
