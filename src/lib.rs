//! Jaala
//!
//! An in-memory directed-graph container with insertion-ordered storage,
//! weighted edges, and flexible string-or-numeric identifiers.
//!
//! Nodes carry opaque content of any type; edges are directed, carry a
//! numeric weight, and may only connect nodes that already exist. Removing
//! a node cascades to every edge touching it. Identifiers compare by their
//! canonical string form, so a node registered under `1` is the same node
//! as `"1"`.
//!
//! ## Example Usage
//!
//! ```rust
//! use jaala::graph::GraphStore;
//!
//! // Create a new graph store
//! let mut store = GraphStore::new();
//!
//! // Add nodes holding arbitrary content
//! store.add_node("Alice", "alice").unwrap();
//! store.add_node("Bob", "bob").unwrap();
//!
//! // Connect them with a directed edge
//! store.add_edge("alice", "bob", "knows").unwrap();
//!
//! // Walk the adjacency
//! let friends = store.get_successors("alice");
//! assert_eq!(friends.len(), 1);
//! assert_eq!(*friends[0].content(), "Bob");
//!
//! // Removing a node removes its edges too
//! store.remove_node("bob");
//! assert_eq!(store.edge_count(), 0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{Edge, GraphError, GraphResult, GraphStore, Identifier, Node};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
