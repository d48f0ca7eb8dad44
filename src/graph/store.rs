//! The in-memory graph snapshot
//!
//! `Graph` owns every node, every edge, and the index layer, and is the
//! value all traversal and analytics operations read from. Mutation happens
//! only through the two upsert entry points and `reset`; each upsert
//! validates fully before touching any structure, so a failed call leaves
//! the graph untouched.

use super::edge::{Edge, EdgeKey, EdgeType};
use super::engine::{GraphError, GraphResult};
use super::index::Indexes;
use super::node::{Attributes, Node, NodeType};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeType, HashMap<String, Node>>,
    /// Slot-stable edge storage in insertion order; adjacency lists refer
    /// to slots here.
    edges: Vec<Edge>,
    edge_slots: HashMap<EdgeKey, usize>,
    indexes: Indexes,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or merge-update a node
    ///
    /// SET semantics: provided attributes overwrite same-named ones, other
    /// attributes survive, `AttrValue::Null` removes a key. Required
    /// attributes are checked against the post-merge view, so a partial
    /// update of an existing node stays valid.
    pub fn upsert_node(
        &mut self,
        node_type: NodeType,
        id: impl Into<String>,
        attributes: Attributes,
    ) -> GraphResult<()> {
        let id = id.into();
        let existing = self.nodes.get(&node_type).and_then(|m| m.get(&id));
        let old_attrs = existing.map(|n| n.attributes.clone());

        let mut merged = old_attrs.clone().unwrap_or_default();
        for (key, value) in &attributes {
            if value.is_null() {
                merged.remove(key);
            } else {
                merged.insert(key.clone(), value.clone());
            }
        }

        for field in node_type.required_attrs() {
            if !merged.contains_key(*field) {
                return Err(GraphError::MissingAttribute {
                    kind: node_type.as_str(),
                    field,
                });
            }
        }
        if node_type == NodeType::Match {
            for field in ["home_score", "away_score"] {
                if let Some(score) = merged.get(field).and_then(|v| v.as_int()) {
                    if score < 0 {
                        return Err(GraphError::NegativeScore { field });
                    }
                }
            }
        }

        let by_id = self.nodes.entry(node_type).or_default();
        match by_id.get_mut(&id) {
            Some(node) => node.merge(attributes),
            None => {
                debug!(%node_type, %id, "insert node");
                let mut node = Node::new(node_type, id.clone());
                node.merge(attributes);
                by_id.insert(id.clone(), node);
            }
        }
        self.indexes
            .note_node(node_type, &id, old_attrs.as_ref(), &merged);
        Ok(())
    }

    /// Insert or merge-update the edge identified by (type, from, to)
    ///
    /// Both endpoints must already exist with the node types the edge type
    /// declares; ingestion is expected to load nodes before edges.
    pub fn upsert_edge(
        &mut self,
        edge_type: EdgeType,
        from: impl Into<String>,
        to: impl Into<String>,
        attributes: Attributes,
    ) -> GraphResult<()> {
        let (from_type, to_type) = edge_type.endpoints();
        let from = from.into();
        let to = to.into();
        if self.get_node(from_type, &from).is_none() {
            return Err(GraphError::DanglingReference {
                edge_type,
                id: from,
            });
        }
        if self.get_node(to_type, &to).is_none() {
            return Err(GraphError::DanglingReference { edge_type, id: to });
        }

        let key = EdgeKey {
            edge_type,
            from: from.clone(),
            to: to.clone(),
        };
        let existing_slot = self.edge_slots.get(&key).copied();
        let mut merged = existing_slot
            .map(|slot| self.edges[slot].attributes.clone())
            .unwrap_or_default();
        for (k, v) in &attributes {
            if v.is_null() {
                merged.remove(k);
            } else {
                merged.insert(k.clone(), v.clone());
            }
        }

        for field in edge_type.required_attrs() {
            if !merged.contains_key(*field) {
                return Err(GraphError::MissingAttribute {
                    kind: edge_type.as_str(),
                    field,
                });
            }
        }
        if edge_type == EdgeType::PlaysFor {
            let start = merged.get("start_date").and_then(|v| v.as_date());
            let end = merged.get("end_date").and_then(|v| v.as_date());
            if let (Some(start), Some(end)) = (start, end) {
                if end < start {
                    return Err(GraphError::InvalidDateRange { from, to });
                }
            }
        }

        match existing_slot {
            Some(slot) => self.edges[slot].merge(attributes),
            None => {
                debug!(%edge_type, %from, %to, "insert edge");
                let mut edge = Edge::new(edge_type, from, to);
                edge.merge(attributes);
                let slot = self.edges.len();
                self.indexes.note_edge(slot, &edge);
                self.edge_slots.insert(key, slot);
                self.edges.push(edge);
            }
        }
        Ok(())
    }

    pub fn get_node(&self, node_type: NodeType, id: &str) -> Option<&Node> {
        self.nodes.get(&node_type).and_then(|m| m.get(id))
    }

    /// Like `get_node` but with the NotFound signal identifier queries need
    pub fn require_node(&self, node_type: NodeType, id: &str) -> GraphResult<&Node> {
        self.get_node(node_type, id)
            .ok_or_else(|| GraphError::NotFound {
                node_type,
                id: id.to_string(),
            })
    }

    pub fn get_edge(&self, edge_type: EdgeType, from: &str, to: &str) -> Option<&Edge> {
        let key = EdgeKey {
            edge_type,
            from: from.to_string(),
            to: to.to_string(),
        };
        self.edge_slots.get(&key).map(|&slot| &self.edges[slot])
    }

    /// Edges leaving `id`, in insertion order
    pub fn edges_from(&self, id: &str, edge_type: EdgeType) -> impl Iterator<Item = &Edge> {
        self.indexes
            .outgoing(id, edge_type)
            .iter()
            .map(move |&slot| &self.edges[slot])
    }

    /// Edges arriving at `id`, in insertion order
    pub fn edges_to(&self, id: &str, edge_type: EdgeType) -> impl Iterator<Item = &Edge> {
        self.indexes
            .incoming(id, edge_type)
            .iter()
            .map(move |&slot| &self.edges[slot])
    }

    pub fn nodes_of(&self, node_type: NodeType) -> impl Iterator<Item = &Node> {
        self.nodes.get(&node_type).into_iter().flat_map(|m| m.values())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.values().map(|m| m.len()).sum()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Clear all nodes, edges, and indexes
    pub fn reset(&mut self) {
        debug!("reset graph");
        self.nodes.clear();
        self.edges.clear();
        self.edge_slots.clear();
        self.indexes.clear();
    }

    pub(crate) fn indexes(&self) -> &Indexes {
        &self.indexes
    }
}
