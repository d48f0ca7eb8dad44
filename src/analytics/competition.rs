//! Competition analytics: top-scorer ranking

use super::matches::match_sides;
use super::records::ScorerEntry;
use crate::graph::{EdgeType, Graph, GraphError, GraphResult, NodeType};
use crate::query::{expand, Direction, FindNodes};
use std::collections::BTreeMap;
use tracing::debug;

/// Goal-count ranking over one competition season
///
/// Counts SCORED_IN edges into matches whose PART_OF edge targets the
/// competition with the given id and season. Descending by goals; equal
/// counts order by player id ascending, so the ranking is deterministic.
/// The attached team is the player's first PLAYS_FOR edge in insertion
/// order, which is not necessarily the team played for that season.
pub fn top_scorers(
    graph: &Graph,
    competition_id: &str,
    season: &str,
    limit: usize,
) -> GraphResult<Vec<ScorerEntry>> {
    debug!(competition_id, season, limit, "top scorers");
    let competition = FindNodes::new(NodeType::Competition)
        .attr_eq("season", season)
        .execute(graph)
        .into_iter()
        .find(|node| node.id == competition_id)
        .ok_or_else(|| GraphError::NotFound {
            node_type: NodeType::Competition,
            id: format!("{competition_id} (season {season})"),
        })?;

    let fixtures = expand(
        graph,
        &[competition.id.as_str()],
        EdgeType::PartOf,
        Direction::Incoming,
    );
    let match_ids: Vec<String> = fixtures
        .node_ids()
        .into_iter()
        .filter(|match_id| match_sides(graph, match_id).is_some())
        .collect();

    let mut goals_by_player: BTreeMap<String, u32> = BTreeMap::new();
    for hop in expand(graph, &match_ids, EdgeType::ScoredIn, Direction::Incoming).hops {
        *goals_by_player.entry(hop.node).or_default() += 1;
    }

    let mut ranked: Vec<(String, u32)> = goals_by_player.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(limit);

    Ok(ranked
        .into_iter()
        .map(|(player_id, goals)| {
            let name = graph
                .get_node(NodeType::Player, &player_id)
                .and_then(|p| p.str_attr("name"))
                .unwrap_or_default()
                .to_string();
            let team = graph
                .edges_from(&player_id, EdgeType::PlaysFor)
                .next()
                .and_then(|edge| graph.get_node(NodeType::Team, &edge.to))
                .and_then(|t| t.str_attr("name"))
                .map(str::to_string);
            ScorerEntry {
                player_id,
                name,
                goals,
                team,
            }
        })
        .collect())
}
