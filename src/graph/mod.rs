//! Core graph data structures

mod edge;
mod engine;
mod index;
mod node;
mod store;

pub use edge::{Edge, EdgeKey, EdgeType};
pub use engine::{GraphEngine, GraphError, GraphResult};
pub use node::{attrs, AttrValue, Attributes, Node, NodeType};
pub use store::Graph;

/// Whether (node type, attribute) pairs are equality-indexed
pub(crate) fn index_supports(node_type: NodeType, attr: &str) -> bool {
    index::Indexes::is_equality_indexed(node_type, attr).is_some()
}
