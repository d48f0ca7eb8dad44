//! Ginga: In-Memory Football Knowledge Graph Engine
//!
//! Answers analytical questions over a football knowledge graph: players,
//! teams, matches, competitions, stadiums, coaches, and the typed
//! relationships connecting them.
//!
//! # Core Concepts
//!
//! - **Nodes**: typed entities keyed by opaque string ids, unique per type
//! - **Edges**: directed, typed, attributed relationships keyed by
//!   (type, source, target); re-upserting merges attributes in place
//! - **Traversal**: one-hop expansion, attribute filters, and shared-node
//!   joins, composed into a fixed set of analytics operations
//!
//! # Example
//!
//! ```
//! use ginga::{attrs, GraphEngine, NodeType};
//!
//! let engine = GraphEngine::new();
//! engine
//!     .upsert_node(
//!         NodeType::Team,
//!         "T001",
//!         attrs([("name", "Flamengo".into()), ("city", "Rio de Janeiro".into())]),
//!     )
//!     .unwrap();
//!
//! let graph = engine.read();
//! let hits = ginga::analytics::search_teams(&graph, "fla");
//! assert_eq!(hits.len(), 1);
//! ```

pub mod analytics;
mod graph;
pub mod query;

pub use graph::{
    attrs, AttrValue, Attributes, Edge, EdgeKey, EdgeType, Graph, GraphEngine, GraphError,
    GraphResult, Node, NodeType,
};
pub use query::{expand, join_on_target, Direction, FindNodes, Hop, Traversal};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
