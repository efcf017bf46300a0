//! Edge record: a directed, weighted connection between two nodes

use super::types::Identifier;
use serde::{Deserialize, Serialize};

/// A directed, weighted edge between two nodes.
///
/// The endpoints are stored as the identifiers of the start and end
/// nodes, captured once when the edge is created (after both endpoints
/// have been resolved against the store). They act as non-owning handles:
/// the store keeps them valid by removing the edge whenever either
/// endpoint node is removed.
///
/// The weight is the only mutable part of an edge; identifier and
/// endpoints are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    id: Identifier,
    start: Identifier,
    end: Identifier,
    weight: f64,
}

impl Edge {
    /// Weight assigned to edges created without an explicit one.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub(crate) fn new(id: Identifier, start: Identifier, end: Identifier, weight: f64) -> Self {
        Edge {
            id,
            start,
            end,
            weight,
        }
    }

    /// Returns the edge's identifier.
    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Returns the identifier of the node this edge starts from.
    pub fn start(&self) -> &Identifier {
        &self.start
    }

    /// Returns the identifier of the node this edge ends at.
    pub fn end(&self) -> &Identifier {
        &self.end
    }

    /// Returns the edge's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replaces the edge's weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// True if this edge starts from the node named by `id`.
    pub fn starts_from(&self, id: &Identifier) -> bool {
        &self.start == id
    }

    /// True if this edge ends at the node named by `id`.
    pub fn ends_at(&self, id: &Identifier) -> bool {
        &self.end == id
    }

    /// True if either endpoint is the node named by `id`.
    pub fn touches(&self, id: &Identifier) -> bool {
        self.starts_from(id) || self.ends_at(id)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
