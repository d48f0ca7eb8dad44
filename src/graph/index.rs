//! Secondary lookup structures, kept consistent as the store mutates
//!
//! Three index families, per the query patterns the analytics layer needs:
//! a per-type lowercase name map for substring search, adjacency lists
//! keyed by (node id, edge type) in both directions, and an equality index
//! for attributes queried by exact match.

use super::edge::{Edge, EdgeType};
use super::node::{Attributes, NodeType};
use std::collections::{HashMap, HashSet};

/// Attributes indexed for exact-match lookup, per node type
const EQUALITY_INDEXED: &[(NodeType, &str)] = &[
    (NodeType::Competition, "season"),
    (NodeType::Player, "position"),
];

/// Incrementally maintained secondary indexes
#[derive(Debug, Clone, Default)]
pub(crate) struct Indexes {
    /// node id → lowercase name, per node type
    names: HashMap<NodeType, HashMap<String, String>>,
    /// (source id, edge type) → edge slots, in insertion order
    outgoing: HashMap<(String, EdgeType), Vec<usize>>,
    /// (target id, edge type) → edge slots, in insertion order
    incoming: HashMap<(String, EdgeType), Vec<usize>>,
    /// (node type, attribute, lowercase value) → node ids
    equality: HashMap<(NodeType, &'static str, String), HashSet<String>>,
}

impl Indexes {
    /// Re-index a node after its attributes changed
    ///
    /// `old` carries the attribute map prior to the merge so stale name and
    /// equality entries can be withdrawn first.
    pub fn note_node(
        &mut self,
        node_type: NodeType,
        id: &str,
        old: Option<&Attributes>,
        new: &Attributes,
    ) {
        if let Some(name) = new.get("name").and_then(|v| v.as_str()) {
            self.names
                .entry(node_type)
                .or_default()
                .insert(id.to_string(), name.to_lowercase());
        }

        for &(indexed_type, attr) in EQUALITY_INDEXED {
            if indexed_type != node_type {
                continue;
            }
            let old_value = old
                .and_then(|a| a.get(attr))
                .and_then(|v| v.as_str())
                .map(str::to_lowercase);
            let new_value = new
                .get(attr)
                .and_then(|v| v.as_str())
                .map(str::to_lowercase);
            if old_value == new_value {
                continue;
            }
            if let Some(value) = old_value {
                if let Some(ids) = self.equality.get_mut(&(node_type, attr, value)) {
                    ids.remove(id);
                }
            }
            if let Some(value) = new_value {
                self.equality
                    .entry((node_type, attr, value))
                    .or_default()
                    .insert(id.to_string());
            }
        }
    }

    /// Record adjacency for a newly inserted edge
    ///
    /// Attribute merges on an existing edge never call this: the key, and
    /// therefore the adjacency, is unchanged.
    pub fn note_edge(&mut self, slot: usize, edge: &Edge) {
        self.outgoing
            .entry((edge.from.clone(), edge.edge_type))
            .or_default()
            .push(slot);
        self.incoming
            .entry((edge.to.clone(), edge.edge_type))
            .or_default()
            .push(slot);
    }

    /// Edge slots leaving `id` via `edge_type`, in insertion order
    pub fn outgoing(&self, id: &str, edge_type: EdgeType) -> &[usize] {
        self.outgoing
            .get(&(id.to_string(), edge_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Edge slots arriving at `id` via `edge_type`, in insertion order
    pub fn incoming(&self, id: &str, edge_type: EdgeType) -> &[usize] {
        self.incoming
            .get(&(id.to_string(), edge_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Node ids of `node_type` whose name contains `pattern` (case-insensitive)
    pub fn name_matches(&self, node_type: NodeType, pattern: &str) -> Vec<String> {
        let pattern = pattern.to_lowercase();
        let mut ids: Vec<String> = self
            .names
            .get(&node_type)
            .map(|names| {
                names
                    .iter()
                    .filter(|(_, name)| name.contains(&pattern))
                    .map(|(id, _)| id.clone())
                    .collect()
            })
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Node ids with an exact (case-insensitive) attribute value
    ///
    /// Only valid for attributes listed in `EQUALITY_INDEXED`.
    pub fn attr_matches(&self, node_type: NodeType, attr: &'static str, value: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .equality
            .get(&(node_type, attr, value.to_lowercase()))
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    pub fn is_equality_indexed(node_type: NodeType, attr: &str) -> Option<&'static str> {
        EQUALITY_INDEXED
            .iter()
            .find(|&&(t, a)| t == node_type && a == attr)
            .map(|&(_, a)| a)
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.outgoing.clear();
        self.incoming.clear();
        self.equality.clear();
    }
}
