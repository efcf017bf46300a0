//! Node record: an identifier paired with opaque content

use super::types::Identifier;
use serde::{Deserialize, Serialize};

/// A stored vertex pairing an identifier with opaque content.
///
/// The content type `T` is never inspected by the store; it is owned by
/// the node and handed back by reference (or by value on removal). The
/// identifier is fixed for the lifetime of the node — only the content
/// can be touched through a mutable reference.
///
/// Nodes are created exclusively by [`GraphStore::add_node`], which is
/// where identifier uniqueness is enforced.
///
/// [`GraphStore::add_node`]: super::store::GraphStore::add_node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<T> {
    id: Identifier,
    content: T,
}

impl<T> Node<T> {
    pub(crate) fn new(id: Identifier, content: T) -> Self {
        Node { id, content }
    }

    /// Returns the node's identifier.
    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Returns a shared reference to the node's content.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Returns a mutable reference to the node's content.
    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Consumes the node and returns its content.
    pub fn into_content(self) -> T {
        self.content
    }
}

// Content is opaque and need not be comparable; two nodes are the same
// node exactly when their identifiers are equal.
impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Node<T> {}
