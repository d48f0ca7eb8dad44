//! Traversal types and result structures

use crate::graph::{AttrValue, Attributes, Graph, Node, NodeType};
use chrono::NaiveDate;

/// Direction for edge traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow outgoing edges (source -> target)
    #[default]
    Outgoing,
    /// Follow incoming edges (target <- source)
    Incoming,
}

/// One traversed edge: the node it was entered from, the node reached,
/// and the edge's attributes
#[derive(Debug, Clone)]
pub struct Hop {
    /// Node the hop started at
    pub from: String,
    /// Node reached
    pub node: String,
    /// Attributes of the traversed edge
    pub attributes: Attributes,
}

impl Hop {
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub fn str_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(AttrValue::as_str)
    }

    pub fn int_attr(&self, key: &str) -> Option<i64> {
        self.attributes.get(key).and_then(AttrValue::as_int)
    }

    pub fn date_attr(&self, key: &str) -> Option<NaiveDate> {
        self.attributes.get(key).and_then(AttrValue::as_date)
    }
}

/// An ordered bag of hops produced by `expand`
///
/// Hop order is adjacency insertion order; callers needing a
/// caller-visible ordering sort explicitly downstream.
#[derive(Debug, Clone)]
pub struct Traversal {
    /// Node type every hop lands on, fixed by the expanded edge type
    pub target_type: NodeType,
    pub hops: Vec<Hop>,
}

impl Traversal {
    pub fn new(target_type: NodeType) -> Self {
        Self {
            target_type,
            hops: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Keep hops whose edge attributes satisfy the predicate
    pub fn filter_edges(mut self, pred: impl Fn(&Hop) -> bool) -> Self {
        self.hops.retain(|hop| pred(hop));
        self
    }

    /// Keep hops whose reached node satisfies the predicate
    ///
    /// A hop to a node missing from the graph is dropped.
    pub fn filter_nodes(mut self, graph: &Graph, pred: impl Fn(&Node) -> bool) -> Self {
        let target_type = self.target_type;
        self.hops.retain(|hop| {
            graph
                .get_node(target_type, &hop.node)
                .map_or(false, &pred)
        });
        self
    }

    /// Distinct reached node ids, first-seen order preserved
    pub fn node_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.hops
            .iter()
            .filter(|hop| seen.insert(hop.node.clone()))
            .map(|hop| hop.node.clone())
            .collect()
    }
}
