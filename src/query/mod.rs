//! Traversal engine for the football knowledge graph
//!
//! Provides the composable primitives the analytics operations are built
//! from: node finding, one-hop expansion, and shared-node joins.

mod find;
mod traverse;
mod types;

pub use find::FindNodes;
pub use traverse::{expand, join_on_target};
pub use types::{Direction, Hop, Traversal};
