//! Find queries for locating entry-point nodes

use crate::graph::{Graph, Node, NodeType};

/// Query for finding nodes by name substring and exact attribute match
///
/// Results come back sorted by node id, so repeated runs over the same
/// snapshot are deterministic.
#[derive(Debug, Clone)]
pub struct FindNodes {
    node_type: NodeType,
    /// Case-insensitive substring on the `name` attribute
    name_contains: Option<String>,
    /// Exact (case-insensitive) attribute match
    attr_equals: Option<(&'static str, String)>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl FindNodes {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            name_contains: None,
            attr_equals: None,
            limit: None,
            offset: None,
        }
    }

    pub fn name_contains(mut self, pattern: impl Into<String>) -> Self {
        self.name_contains = Some(pattern.into());
        self
    }

    pub fn attr_eq(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attr_equals = Some((key, value.into()));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Execute the query against a graph snapshot
    pub fn execute<'a>(&self, graph: &'a Graph) -> Vec<&'a Node> {
        let candidate_ids = self.candidate_ids(graph);

        let mut nodes: Vec<&Node> = candidate_ids
            .iter()
            .filter_map(|id| graph.get_node(self.node_type, id))
            .filter(|node| self.matches(node))
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        if let Some(offset) = self.offset {
            nodes = nodes.into_iter().skip(offset).collect();
        }
        if let Some(limit) = self.limit {
            nodes.truncate(limit);
        }
        nodes
    }

    /// Narrow the scan through whichever index applies
    fn candidate_ids(&self, graph: &Graph) -> Vec<String> {
        if let Some(ref pattern) = self.name_contains {
            return graph.indexes().name_matches(self.node_type, pattern);
        }
        if let Some((key, ref value)) = self.attr_equals {
            if crate::graph::index_supports(self.node_type, key) {
                return graph.indexes().attr_matches(self.node_type, key, value);
            }
        }
        graph
            .nodes_of(self.node_type)
            .map(|node| node.id.clone())
            .collect()
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(ref pattern) = self.name_contains {
            let pattern = pattern.to_lowercase();
            if !node
                .str_attr("name")
                .map_or(false, |name| name.to_lowercase().contains(&pattern))
            {
                return false;
            }
        }
        if let Some((key, ref expected)) = self.attr_equals {
            if !node
                .str_attr(key)
                .map_or(false, |value| value.eq_ignore_ascii_case(expected))
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::attrs;

    fn fixture() -> Graph {
        let mut graph = Graph::new();
        for (id, name, season) in [
            ("C001", "Campeonato Brasileiro Série A", "2023"),
            ("C002", "Campeonato Brasileiro Série A", "2022"),
            ("C003", "Copa do Brasil", "2023"),
        ] {
            graph
                .upsert_node(
                    NodeType::Competition,
                    id,
                    attrs([
                        ("name", name.into()),
                        ("season", season.into()),
                        ("type", "league".into()),
                    ]),
                )
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_find_by_name_substring_case_insensitive() {
        let graph = fixture();
        let found = FindNodes::new(NodeType::Competition)
            .name_contains("COPA")
            .execute(&graph);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "C003");
    }

    #[test]
    fn test_find_by_indexed_attribute() {
        let graph = fixture();
        let found = FindNodes::new(NodeType::Competition)
            .attr_eq("season", "2023")
            .execute(&graph);
        let ids: Vec<&str> = found.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["C001", "C003"]);
    }

    #[test]
    fn test_find_no_match_is_empty_not_error() {
        let graph = fixture();
        let found = FindNodes::new(NodeType::Competition)
            .name_contains("libertadores")
            .execute(&graph);
        assert!(found.is_empty());
    }

    #[test]
    fn test_limit_and_offset() {
        let graph = fixture();
        let found = FindNodes::new(NodeType::Competition)
            .offset(1)
            .limit(1)
            .execute(&graph);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "C002");
    }
}
