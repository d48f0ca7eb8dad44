//! GraphEngine: the shared entry point for the knowledge graph

use super::edge::EdgeType;
use super::node::{Attributes, Node, NodeType};
use super::store::Graph;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use thiserror::Error;

/// Errors that can occur in graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// Upsert without a required attribute; `kind` is the node or edge type name
    #[error("{kind} upsert missing required attribute '{field}'")]
    MissingAttribute {
        kind: &'static str,
        field: &'static str,
    },

    #[error("match score '{field}' must be non-negative")]
    NegativeScore { field: &'static str },

    #[error("PLAYS_FOR {from} -> {to} has end_date before start_date")]
    InvalidDateRange { from: String, to: String },

    /// Edge upsert referencing a node that has not been loaded yet
    #[error("{edge_type} edge references missing node '{id}'")]
    DanglingReference { edge_type: EdgeType, id: String },

    /// Identifier lookup with no matching node; distinct from a query
    /// matching zero results, which is an empty collection, not an error
    #[error("{node_type} with id '{id}' not found")]
    NotFound { node_type: NodeType, id: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// A shared, lock-guarded graph store
///
/// All reads take the read lock, so a reader sees the snapshot either
/// entirely before or entirely after a `reset` or bulk load, never a
/// mixture. Construct one per process (or per test) and pass it by
/// reference; there is no process-wide singleton.
#[derive(Debug, Default)]
pub struct GraphEngine {
    inner: RwLock<Graph>,
}

impl GraphEngine {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Graph::new()),
        }
    }

    pub fn upsert_node(
        &self,
        node_type: NodeType,
        id: impl Into<String>,
        attributes: Attributes,
    ) -> GraphResult<()> {
        self.write().upsert_node(node_type, id, attributes)
    }

    pub fn upsert_edge(
        &self,
        edge_type: EdgeType,
        from: impl Into<String>,
        to: impl Into<String>,
        attributes: Attributes,
    ) -> GraphResult<()> {
        self.write().upsert_edge(edge_type, from, to, attributes)
    }

    pub fn get_node(&self, node_type: NodeType, id: &str) -> Option<Node> {
        self.read().get_node(node_type, id).cloned()
    }

    /// Atomically clear all nodes and edges
    pub fn reset(&self) {
        self.write().reset();
    }

    /// Read access to the current snapshot
    ///
    /// Analytics operations take `&Graph`, so the usual pattern is
    /// `let graph = engine.read(); analytics::team_roster(&graph, ...)`.
    pub fn read(&self) -> RwLockReadGuard<'_, Graph> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Owned copy of the current snapshot, detached from later mutation
    pub fn snapshot(&self) -> Graph {
        self.read().clone()
    }

    pub fn node_count(&self) -> usize {
        self.read().node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.read().edge_count()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Graph> {
        // Upserts validate before mutating, so a panicked writer cannot
        // have left a torn graph behind; recover instead of propagating.
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
