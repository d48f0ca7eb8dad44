//! Graph traversal primitives
//!
//! The analytics layer composes these instead of interpreting a query
//! language: one-hop expansion over a typed relationship, attribute
//! filters on the result, and a join on the shared reached node for
//! two-hop-via-shared-node patterns.

use super::types::{Direction, Hop, Traversal};
use crate::graph::{EdgeType, Graph};

/// Follow one hop of `edge_type` from every node in `origins`
///
/// Returns one `Hop` per traversed edge, in origin order then adjacency
/// insertion order. Origins with no matching edges contribute nothing;
/// origins that do not exist contribute nothing either (no error).
pub fn expand<S: AsRef<str>>(
    graph: &Graph,
    origins: &[S],
    edge_type: EdgeType,
    direction: Direction,
) -> Traversal {
    let (source_type, target_type) = edge_type.endpoints();
    let reached_type = match direction {
        Direction::Outgoing => target_type,
        Direction::Incoming => source_type,
    };

    let mut traversal = Traversal::new(reached_type);
    for origin in origins {
        let origin = origin.as_ref();
        match direction {
            Direction::Outgoing => {
                for edge in graph.edges_from(origin, edge_type) {
                    traversal.hops.push(Hop {
                        from: origin.to_string(),
                        node: edge.to.clone(),
                        attributes: edge.attributes.clone(),
                    });
                }
            }
            Direction::Incoming => {
                for edge in graph.edges_to(origin, edge_type) {
                    traversal.hops.push(Hop {
                        from: origin.to_string(),
                        node: edge.from.clone(),
                        attributes: edge.attributes.clone(),
                    });
                }
            }
        }
    }
    traversal
}

/// Pairs of hops from two traversals that reached the same node
///
/// Used for shared-node patterns: two teams meeting in the same match,
/// one player on each end of the same team. Pair order follows `a`.
pub fn join_on_target(a: &Traversal, b: &Traversal) -> Vec<(Hop, Hop)> {
    let mut pairs = Vec::new();
    for hop_a in &a.hops {
        for hop_b in &b.hops {
            if hop_a.node == hop_b.node {
                pairs.push((hop_a.clone(), hop_b.clone()));
            }
        }
    }
    pairs
}
