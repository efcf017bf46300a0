//! In-memory graph storage
//!
//! Keeps the node and edge collections in insertion order while enforcing
//! identifier uniqueness within each collection and referential integrity
//! between them (edge endpoints must exist at creation time; removing a
//! node removes every edge touching it).

use super::edge::Edge;
use super::node::Node;
use super::types::Identifier;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when inserting into the graph.
///
/// Removal and lookup never fail: absent entries surface as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} already exists")]
    NodeAlreadyExists(Identifier),

    #[error("Edge {0} already exists")]
    EdgeAlreadyExists(Identifier),

    #[error("Invalid edge: start node {0} does not exist")]
    UnknownStartNode(Identifier),

    #[error("Invalid edge: end node {0} does not exist")]
    UnknownEndNode(Identifier),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Insertion-ordered map keyed by the canonical identifier form.
type IdMap<V> = IndexMap<String, V, FxBuildHasher>;

/// In-memory directed-graph store
///
/// Two insertion-ordered maps, each keyed by the canonical string form of
/// the identifier (see [`Identifier::canonical_key`]):
/// - nodes: canonical id -> `Node<T>`
/// - edges: canonical id -> `Edge`
///
/// Keying by canonical form gives O(1) average lookups while keeping the
/// cross-type equality rule (`1` and `"1"` name the same entry), and the
/// ordered maps preserve insertion order for enumeration; removal shifts
/// later entries down without any other reordering.
///
/// Mutating operations either fully succeed or leave the store untouched,
/// and no failure poisons the store — it stays usable after any rejected
/// call.
#[derive(Debug)]
pub struct GraphStore<T> {
    /// Node storage, insertion-ordered.
    nodes: IdMap<Node<T>>,

    /// Edge storage, insertion-ordered.
    edges: IdMap<Edge>,
}

impl<T> GraphStore<T> {
    /// Create a new empty graph store.
    pub fn new() -> Self {
        GraphStore {
            nodes: IdMap::default(),
            edges: IdMap::default(),
        }
    }

    /// Create a store with pre-allocated capacity for both collections.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        GraphStore {
            nodes: IdMap::with_capacity_and_hasher(nodes, FxBuildHasher::default()),
            edges: IdMap::with_capacity_and_hasher(edges, FxBuildHasher::default()),
        }
    }

    /// Check if a node with an equal identifier exists.
    pub fn has_node(&self, id: impl Into<Identifier>) -> bool {
        self.nodes.contains_key(&id.into().canonical_key())
    }

    /// Check if an edge with an equal identifier exists.
    pub fn has_edge(&self, id: impl Into<Identifier>) -> bool {
        self.edges.contains_key(&id.into().canonical_key())
    }

    /// Add a node holding `content` under `id`.
    ///
    /// Fails with [`GraphError::NodeAlreadyExists`] if a node with an
    /// equal identifier is present; the store is unchanged on failure.
    /// On success the node is appended at the end of the node sequence.
    pub fn add_node(&mut self, content: T, id: impl Into<Identifier>) -> GraphResult<()> {
        let id = id.into();
        let key = id.canonical_key();

        if self.nodes.contains_key(&key) {
            warn!("Rejected node {}: identifier already in use", id);
            return Err(GraphError::NodeAlreadyExists(id));
        }

        debug!("Added node {}", id);
        self.nodes.insert(key, Node::new(id, content));
        Ok(())
    }

    /// Add an edge from `start` to `end` under `id`, with the default
    /// weight of [`Edge::DEFAULT_WEIGHT`].
    pub fn add_edge(
        &mut self,
        start: impl Into<Identifier>,
        end: impl Into<Identifier>,
        id: impl Into<Identifier>,
    ) -> GraphResult<()> {
        self.add_edge_with_weight(start, end, id, Edge::DEFAULT_WEIGHT)
    }

    /// Add an edge from `start` to `end` under `id` with an explicit
    /// weight.
    ///
    /// Both endpoints must name existing nodes ([`GraphError::UnknownStartNode`]
    /// / [`GraphError::UnknownEndNode`], checked in that order), and `id`
    /// must be free ([`GraphError::EdgeAlreadyExists`]). The store is
    /// unchanged on any failure.
    ///
    /// The endpoints are resolved once, here: the edge records the stored
    /// nodes' own identifiers, so an edge created with `1` against a node
    /// registered as `"1"` carries the `"1"` spelling.
    pub fn add_edge_with_weight(
        &mut self,
        start: impl Into<Identifier>,
        end: impl Into<Identifier>,
        id: impl Into<Identifier>,
        weight: f64,
    ) -> GraphResult<()> {
        let start = start.into();
        let end = end.into();
        let id = id.into();

        let start = match self.resolve(&start) {
            Some(node) => node.id().clone(),
            None => {
                warn!("Rejected edge {}: start node {} does not exist", id, start);
                return Err(GraphError::UnknownStartNode(start));
            }
        };
        let end = match self.resolve(&end) {
            Some(node) => node.id().clone(),
            None => {
                warn!("Rejected edge {}: end node {} does not exist", id, end);
                return Err(GraphError::UnknownEndNode(end));
            }
        };

        let key = id.canonical_key();
        if self.edges.contains_key(&key) {
            warn!("Rejected edge {}: identifier already in use", id);
            return Err(GraphError::EdgeAlreadyExists(id));
        }

        debug!("Added edge {} ({} -> {})", id, start, end);
        self.edges.insert(key, Edge::new(id, start, end, weight));
        Ok(())
    }

    /// Get a node by identifier.
    pub fn get_node(&self, id: impl Into<Identifier>) -> Option<&Node<T>> {
        self.nodes.get(&id.into().canonical_key())
    }

    /// Get a mutable node by identifier (the identifier itself stays
    /// immutable; only content can be changed through the returned
    /// reference).
    pub fn get_node_mut(&mut self, id: impl Into<Identifier>) -> Option<&mut Node<T>> {
        self.nodes.get_mut(&id.into().canonical_key())
    }

    /// Get an edge by identifier.
    pub fn get_edge(&self, id: impl Into<Identifier>) -> Option<&Edge> {
        self.edges.get(&id.into().canonical_key())
    }

    /// Get a mutable edge by identifier (only the weight can be changed
    /// through the returned reference).
    pub fn get_edge_mut(&mut self, id: impl Into<Identifier>) -> Option<&mut Edge> {
        self.edges.get_mut(&id.into().canonical_key())
    }

    /// Remove the node with a matching identifier and every edge touching
    /// it, returning the node.
    ///
    /// Removing an absent identifier is a silent no-op returning `None` —
    /// deliberately lenient where the `add_*` calls are strict. Surviving
    /// entries keep their relative order.
    pub fn remove_node(&mut self, id: impl Into<Identifier>) -> Option<Node<T>> {
        let id = id.into();
        let node = self.nodes.shift_remove(&id.canonical_key())?;

        let before = self.edges.len();
        self.edges.retain(|_, edge| !edge.touches(node.id()));
        debug!(
            "Removed node {} and {} touching edge(s)",
            node.id(),
            before - self.edges.len()
        );

        Some(node)
    }

    /// Remove the edge with a matching identifier, returning it.
    ///
    /// Removing an absent identifier is a silent no-op returning `None`.
    pub fn remove_edge(&mut self, id: impl Into<Identifier>) -> Option<Edge> {
        let edge = self.edges.shift_remove(&id.into().canonical_key())?;
        debug!("Removed edge {}", edge.id());
        Some(edge)
    }

    /// All nodes that are the start of some edge ending at `id`.
    ///
    /// Returned in edge insertion order; a node appears once per edge, so
    /// duplicates are possible in multi-edge topologies.
    pub fn get_predecessors(&self, id: impl Into<Identifier>) -> Vec<&Node<T>> {
        let id = id.into();
        self.edges
            .values()
            .filter(|edge| edge.ends_at(&id))
            .filter_map(|edge| self.resolve(edge.start()))
            .collect()
    }

    /// All nodes that are the end of some edge starting from `id`.
    ///
    /// Same ordering and duplicate behavior as [`GraphStore::get_predecessors`].
    pub fn get_successors(&self, id: impl Into<Identifier>) -> Vec<&Node<T>> {
        let id = id.into();
        self.edges
            .values()
            .filter(|edge| edge.starts_from(&id))
            .filter_map(|edge| self.resolve(edge.end()))
            .collect()
    }

    /// All edges starting from the node named by `id`, in insertion order.
    pub fn get_outgoing_edges(&self, id: impl Into<Identifier>) -> Vec<&Edge> {
        let id = id.into();
        self.edges
            .values()
            .filter(|edge| edge.starts_from(&id))
            .collect()
    }

    /// All edges ending at the node named by `id`, in insertion order.
    pub fn get_incoming_edges(&self, id: impl Into<Identifier>) -> Vec<&Edge> {
        let id = id.into();
        self.edges
            .values()
            .filter(|edge| edge.ends_at(&id))
            .collect()
    }

    /// All nodes in insertion order.
    pub fn all_nodes(&self) -> Vec<&Node<T>> {
        self.nodes.values().collect()
    }

    /// All edges in insertion order.
    pub fn all_edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the store holds no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Resolve an identifier to its live node, if any.
    fn resolve(&self, id: &Identifier) -> Option<&Node<T>> {
        self.nodes.get(&id.canonical_key())
    }
}

impl<T> Default for GraphStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
