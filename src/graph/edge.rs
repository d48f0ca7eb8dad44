//! Directed, typed, attributed relationships

use super::node::{AttrValue, Attributes, NodeType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed set of relationship types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    /// Player → Team, with start_date and optional end_date (a "stint")
    PlaysFor,
    /// Team → Match (home side)
    PlayedHome,
    /// Team → Match (away side)
    PlayedAway,
    /// Match → Competition
    PartOf,
    /// Player → Match, with minute and goal_type
    ScoredIn,
    /// Player → Match, with minute
    YellowCardIn,
    /// Player → Match, with minute
    RedCardIn,
}

impl EdgeType {
    /// (source, target) node types for this relationship
    pub fn endpoints(&self) -> (NodeType, NodeType) {
        match self {
            EdgeType::PlaysFor => (NodeType::Player, NodeType::Team),
            EdgeType::PlayedHome | EdgeType::PlayedAway => (NodeType::Team, NodeType::Match),
            EdgeType::PartOf => (NodeType::Match, NodeType::Competition),
            EdgeType::ScoredIn | EdgeType::YellowCardIn | EdgeType::RedCardIn => {
                (NodeType::Player, NodeType::Match)
            }
        }
    }

    /// Attributes that must be present (and non-null) after an upsert
    pub fn required_attrs(&self) -> &'static [&'static str] {
        match self {
            EdgeType::PlaysFor => &["start_date"],
            EdgeType::ScoredIn | EdgeType::YellowCardIn | EdgeType::RedCardIn => &["minute"],
            EdgeType::PlayedHome | EdgeType::PlayedAway | EdgeType::PartOf => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::PlaysFor => "PLAYS_FOR",
            EdgeType::PlayedHome => "PLAYED_HOME",
            EdgeType::PlayedAway => "PLAYED_AWAY",
            EdgeType::PartOf => "PART_OF",
            EdgeType::ScoredIn => "SCORED_IN",
            EdgeType::YellowCardIn => "YELLOW_CARD_IN",
            EdgeType::RedCardIn => "RED_CARD_IN",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identity of an edge: (type, source id, target id)
///
/// A second upsert for the same key merges attributes over the first edge
/// instead of adding a parallel edge. For PLAYS_FOR this means repeated
/// stints between the same player and team collapse into one edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub edge_type: EdgeType,
    pub from: String,
    pub to: String,
}

/// A directed edge with typed attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub edge_type: EdgeType,
    pub from: String,
    pub to: String,
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(edge_type: EdgeType, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            edge_type,
            from: from.into(),
            to: to.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            edge_type: self.edge_type,
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }

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

    /// Same SET semantics as node merge
    pub(crate) fn merge(&mut self, attributes: Attributes) {
        for (key, value) in attributes {
            if value.is_null() {
                self.attributes.remove(&key);
            } else {
                self.attributes.insert(key, value);
            }
        }
    }
}
