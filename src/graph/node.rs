//! Node representation in the knowledge graph

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed set of node types in the football graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Player,
    Team,
    Match,
    Competition,
    Stadium,
    Coach,
}

impl NodeType {
    /// Attributes that must be present (and non-null) after an upsert
    pub fn required_attrs(&self) -> &'static [&'static str] {
        match self {
            NodeType::Player => &["name", "nationality", "position"],
            NodeType::Team => &["name", "city"],
            NodeType::Match => &["date", "home_score", "away_score"],
            NodeType::Competition => &["name", "season", "type"],
            NodeType::Stadium => &["name", "city"],
            NodeType::Coach => &["name", "nationality"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Player => "Player",
            NodeType::Team => "Team",
            NodeType::Match => "Match",
            NodeType::Competition => "Competition",
            NodeType::Stadium => "Stadium",
            NodeType::Coach => "Coach",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed attribute values
///
/// `Null` is meaningful on upsert: merging a `Null` removes the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    String(String),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Date value, accepting either the `Date` variant or an ISO-8601 string
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            AttrValue::Date(d) => Some(*d),
            AttrValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<NaiveDate> for AttrValue {
    fn from(d: NaiveDate) -> Self {
        AttrValue::Date(d)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

/// Attributes collection
pub type Attributes = HashMap<String, AttrValue>;

/// Build an attribute map from key/value pairs
pub fn attrs<const N: usize>(pairs: [(&str, AttrValue); N]) -> Attributes {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// A node in the knowledge graph
///
/// Identity is (node_type, id); ids are opaque caller-supplied strings,
/// unique within their type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub node_type: NodeType,
    pub id: String,
    pub attributes: Attributes,
}

impl Node {
    pub fn new(node_type: NodeType, id: impl Into<String>) -> Self {
        Self {
            node_type,
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
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

    /// Merge attributes in (SET semantics): provided keys overwrite,
    /// absent keys survive, `Null` removes the key.
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
