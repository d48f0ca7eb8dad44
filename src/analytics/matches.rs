//! Match analytics: details, filtered search, head-to-head

use super::records::{HeadToHead, MatchDetails, MatchFilter, MatchScorer, MatchSummary};
use crate::graph::{EdgeType, Graph, GraphError, GraphResult, NodeType};
use crate::query::{expand, join_on_target, Direction};
use tracing::debug;

/// Default result cap for `search_matches`
const MATCH_SEARCH_LIMIT: usize = 20;

/// Home and away team ids of a match
///
/// None when either side edge is missing; such a match is an integrity
/// violation and is treated as absent from team- and competition-scoped
/// results rather than a fault.
pub(crate) fn match_sides(graph: &Graph, match_id: &str) -> Option<(String, String)> {
    let home = graph
        .edges_to(match_id, EdgeType::PlayedHome)
        .next()?
        .from
        .clone();
    let away = graph
        .edges_to(match_id, EdgeType::PlayedAway)
        .next()?
        .from
        .clone();
    Some((home, away))
}

/// Whether the match's competition (via PART_OF) is in `season`
pub(crate) fn in_season(graph: &Graph, match_id: &str, season: &str) -> bool {
    graph
        .edges_from(match_id, EdgeType::PartOf)
        .next()
        .and_then(|edge| graph.get_node(NodeType::Competition, &edge.to))
        .and_then(|comp| comp.str_attr("season"))
        .map_or(false, |s| s == season)
}

fn team_name(graph: &Graph, team_id: &str) -> Option<String> {
    graph
        .get_node(NodeType::Team, team_id)?
        .str_attr("name")
        .map(str::to_string)
}

/// Resolve a match node into a summary, or None when its team edges are
/// missing or its required fields do not decode
pub(crate) fn match_summary(graph: &Graph, match_id: &str) -> Option<MatchSummary> {
    let node = graph.get_node(NodeType::Match, match_id)?;
    let (home_id, away_id) = match_sides(graph, match_id)?;
    let competition = graph
        .edges_from(match_id, EdgeType::PartOf)
        .next()
        .and_then(|edge| graph.get_node(NodeType::Competition, &edge.to));

    Some(MatchSummary {
        match_id: match_id.to_string(),
        date: node.date_attr("date")?,
        home_team: team_name(graph, &home_id)?,
        away_team: team_name(graph, &away_id)?,
        home_score: node.int_attr("home_score")?,
        away_score: node.int_attr("away_score")?,
        competition: competition.and_then(|c| c.str_attr("name").map(str::to_string)),
        season: competition.and_then(|c| c.str_attr("season").map(str::to_string)),
    })
}

/// Full record of one match, scorers ascending by minute
///
/// A match whose home or away edge is missing is reported as NotFound:
/// it cannot be presented as a meeting of two teams.
pub fn match_details(graph: &Graph, match_id: &str) -> GraphResult<MatchDetails> {
    let node = graph.require_node(NodeType::Match, match_id)?;
    let (home_id, away_id) = match_sides(graph, match_id).ok_or_else(|| GraphError::NotFound {
        node_type: NodeType::Match,
        id: match_id.to_string(),
    })?;
    let summary = match_summary(graph, match_id).ok_or_else(|| GraphError::NotFound {
        node_type: NodeType::Match,
        id: match_id.to_string(),
    })?;

    let mut scorers = Vec::new();
    for hop in expand(graph, &[match_id], EdgeType::ScoredIn, Direction::Incoming).hops {
        let Some(player) = graph.get_node(NodeType::Player, &hop.node) else {
            continue;
        };
        // Attribute the goal to whichever of the match's two sides the
        // player has a PLAYS_FOR edge to, home side first.
        let team = [&home_id, &away_id]
            .into_iter()
            .find(|team_id| {
                graph
                    .get_edge(EdgeType::PlaysFor, &hop.node, team_id)
                    .is_some()
            })
            .and_then(|team_id| team_name(graph, team_id));
        scorers.push(MatchScorer {
            player_id: hop.node.clone(),
            name: player.str_attr("name").unwrap_or_default().to_string(),
            minute: hop.int_attr("minute").unwrap_or(0),
            goal_type: hop.str_attr("goal_type").unwrap_or("regular").to_string(),
            team,
        });
    }
    scorers.sort_by(|a, b| a.minute.cmp(&b.minute).then(a.player_id.cmp(&b.player_id)));

    Ok(MatchDetails {
        match_id: match_id.to_string(),
        date: summary.date,
        home_team: summary.home_team,
        away_team: summary.away_team,
        home_score: summary.home_score,
        away_score: summary.away_score,
        attendance: node.int_attr("attendance"),
        competition: summary.competition,
        season: summary.season,
        scorers,
    })
}

/// Matches passing all of `filter`, descending by date
///
/// Matches lacking home, away, or PART_OF edges are omitted. Zero matches
/// is an empty list, not an error.
pub fn search_matches(graph: &Graph, filter: &MatchFilter) -> Vec<MatchSummary> {
    debug!(?filter, "search matches");
    let mut match_ids: Vec<&str> = graph
        .nodes_of(NodeType::Match)
        .map(|node| node.id.as_str())
        .collect();
    match_ids.sort_unstable();

    let mut results = Vec::new();
    for match_id in match_ids {
        let Some(summary) = match_summary(graph, match_id) else {
            continue;
        };
        if summary.competition.is_none() {
            continue;
        }
        if let Some(ref team) = filter.team {
            let pattern = team.to_lowercase();
            if !summary.home_team.to_lowercase().contains(&pattern)
                && !summary.away_team.to_lowercase().contains(&pattern)
            {
                continue;
            }
        }
        if let Some(from) = filter.date_from {
            if summary.date < from {
                continue;
            }
        }
        if let Some(to) = filter.date_to {
            if summary.date > to {
                continue;
            }
        }
        if let Some(ref competition) = filter.competition {
            let pattern = competition.to_lowercase();
            let name = summary.competition.as_deref().unwrap_or_default();
            if !name.to_lowercase().contains(&pattern) {
                continue;
            }
        }
        results.push(summary);
    }

    results.sort_by(|a, b| b.date.cmp(&a.date).then(a.match_id.cmp(&b.match_id)));
    results.truncate(filter.limit.unwrap_or(MATCH_SEARCH_LIMIT));
    results
}

/// All meetings between two teams, regardless of who hosted
///
/// Each match's result is classified relative to team1; statistics are
/// order-independent sums, while the match list is descending by date.
pub fn head_to_head(graph: &Graph, team1_id: &str, team2_id: &str) -> GraphResult<HeadToHead> {
    let team1 = graph.require_node(NodeType::Team, team1_id)?;
    let team2 = graph.require_node(NodeType::Team, team2_id)?;
    debug!(team1_id, team2_id, "head to head");

    let home1 = expand(graph, &[team1_id], EdgeType::PlayedHome, Direction::Outgoing);
    let away1 = expand(graph, &[team1_id], EdgeType::PlayedAway, Direction::Outgoing);
    let home2 = expand(graph, &[team2_id], EdgeType::PlayedHome, Direction::Outgoing);
    let away2 = expand(graph, &[team2_id], EdgeType::PlayedAway, Direction::Outgoing);

    let mut meeting_ids: Vec<String> = join_on_target(&home1, &away2)
        .into_iter()
        .chain(join_on_target(&home2, &away1))
        .map(|(home_hop, _)| home_hop.node)
        .collect();
    let mut seen = std::collections::HashSet::new();
    meeting_ids.retain(|id| seen.insert(id.clone()));

    let mut record = HeadToHead {
        team1_id: team1_id.to_string(),
        team1_name: team1.str_attr("name").unwrap_or_default().to_string(),
        team2_id: team2_id.to_string(),
        team2_name: team2.str_attr("name").unwrap_or_default().to_string(),
        team1_wins: 0,
        team2_wins: 0,
        draws: 0,
        team1_goals: 0,
        team2_goals: 0,
        matches: Vec::new(),
    };

    for match_id in meeting_ids {
        let Some(summary) = match_summary(graph, &match_id) else {
            continue;
        };
        let Some((home_id, _)) = match_sides(graph, &match_id) else {
            continue;
        };
        let (team1_score, team2_score) = if home_id == team1_id {
            (summary.home_score, summary.away_score)
        } else {
            (summary.away_score, summary.home_score)
        };
        record.team1_goals += team1_score.max(0) as u32;
        record.team2_goals += team2_score.max(0) as u32;
        match team1_score.cmp(&team2_score) {
            std::cmp::Ordering::Greater => record.team1_wins += 1,
            std::cmp::Ordering::Less => record.team2_wins += 1,
            std::cmp::Ordering::Equal => record.draws += 1,
        }
        record.matches.push(summary);
    }

    record
        .matches
        .sort_by(|a, b| b.date.cmp(&a.date).then(a.match_id.cmp(&b.match_id)));
    Ok(record)
}
