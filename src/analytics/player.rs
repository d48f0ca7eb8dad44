//! Player analytics: search, statistics, career, common teammates

use super::matches::in_season;
use super::records::{CareerRecord, CommonTeammate, GoalDetail, PlayerHit, PlayerStats, Stint};
use crate::graph::{EdgeType, Graph, GraphResult, NodeType};
use crate::query::{expand, Direction, FindNodes};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Case-insensitive substring search on player names
///
/// `team` keeps only players with at least one PLAYS_FOR edge to a team
/// whose name matches the substring; `position` is an exact
/// case-insensitive match. Zero hits is an empty list, not an error.
pub fn search_players(
    graph: &Graph,
    name: &str,
    team: Option<&str>,
    position: Option<&str>,
) -> Vec<PlayerHit> {
    debug!(name, ?team, ?position, "search players");
    let mut hits = Vec::new();
    for player in FindNodes::new(NodeType::Player)
        .name_contains(name)
        .execute(graph)
    {
        if let Some(position) = position {
            let matches = player
                .str_attr("position")
                .map_or(false, |p| p.eq_ignore_ascii_case(position));
            if !matches {
                continue;
            }
        }

        let stints = expand(
            graph,
            &[player.id.as_str()],
            EdgeType::PlaysFor,
            Direction::Outgoing,
        );
        let teams: BTreeSet<String> = stints
            .node_ids()
            .iter()
            .filter_map(|id| graph.get_node(NodeType::Team, id))
            .filter_map(|node| node.str_attr("name").map(str::to_string))
            .collect();

        if let Some(team) = team {
            let pattern = team.to_lowercase();
            if !teams.iter().any(|t| t.to_lowercase().contains(&pattern)) {
                continue;
            }
        }

        hits.push(PlayerHit {
            player_id: player.id.clone(),
            name: player.str_attr("name").unwrap_or_default().to_string(),
            nationality: player.str_attr("nationality").unwrap_or_default().to_string(),
            position: player.str_attr("position").unwrap_or_default().to_string(),
            birth_date: player.date_attr("birth_date"),
            teams: teams.into_iter().collect(),
        });
    }
    hits
}

/// All stints of a player, ascending by start date
///
/// A stint without a start date sorts lowest (before every dated stint);
/// an open stint (no end date) is ongoing and keeps its start-date
/// position. Unknown players are NotFound, not an empty career.
pub fn player_career(graph: &Graph, player_id: &str) -> GraphResult<CareerRecord> {
    let player = graph.require_node(NodeType::Player, player_id)?;

    let mut stints: Vec<Stint> = expand(graph, &[player_id], EdgeType::PlaysFor, Direction::Outgoing)
        .hops
        .iter()
        .filter_map(|hop| {
            let team = graph.get_node(NodeType::Team, &hop.node)?;
            Some(Stint {
                team_id: team.id.clone(),
                team_name: team.str_attr("name").unwrap_or_default().to_string(),
                start_date: hop.date_attr("start_date"),
                end_date: hop.date_attr("end_date"),
            })
        })
        .collect();
    // Stable sort: equal start dates keep traversal (insertion) order.
    stints.sort_by_key(|stint| stint.start_date);

    Ok(CareerRecord {
        player_id: player_id.to_string(),
        name: player.str_attr("name").unwrap_or_default().to_string(),
        birth_date: player.date_attr("birth_date"),
        nationality: player.str_attr("nationality").unwrap_or_default().to_string(),
        position: player.str_attr("position").unwrap_or_default().to_string(),
        stints,
    })
}

/// Goal and card totals for a player
///
/// `season` restricts goals to matches whose PART_OF competition carries
/// that season. Card counts are career totals either way; the season
/// filter has never applied to them and downstream consumers rely on
/// the combined shape.
pub fn player_stats(
    graph: &Graph,
    player_id: &str,
    season: Option<&str>,
) -> GraphResult<PlayerStats> {
    let player = graph.require_node(NodeType::Player, player_id)?;
    debug!(player_id, ?season, "player stats");

    let mut goal_details: Vec<GoalDetail> = expand(
        graph,
        &[player_id],
        EdgeType::ScoredIn,
        Direction::Outgoing,
    )
    .filter_edges(|hop| season.map_or(true, |s| in_season(graph, &hop.node, s)))
    .hops
    .iter()
    .map(|hop| GoalDetail {
        match_id: hop.node.clone(),
        minute: hop.int_attr("minute").unwrap_or(0),
        goal_type: hop.str_attr("goal_type").unwrap_or("regular").to_string(),
    })
    .collect();
    goal_details.sort_by(|a, b| a.match_id.cmp(&b.match_id).then(a.minute.cmp(&b.minute)));

    let yellow_cards = expand(
        graph,
        &[player_id],
        EdgeType::YellowCardIn,
        Direction::Outgoing,
    )
    .len() as u32;
    let red_cards = expand(graph, &[player_id], EdgeType::RedCardIn, Direction::Outgoing).len() as u32;

    Ok(PlayerStats {
        player_id: player_id.to_string(),
        name: player.str_attr("name").unwrap_or_default().to_string(),
        position: player.str_attr("position").unwrap_or_default().to_string(),
        nationality: player.str_attr("nationality").unwrap_or_default().to_string(),
        season: season.map(str::to_string),
        goals: goal_details.len() as u32,
        goal_details,
        yellow_cards,
        red_cards,
    })
}

/// Players who shared a club with both given players
///
/// "Shared a club" means a PLAYS_FOR edge to the same team, with no check
/// that the tenures overlapped in time. Both input players are excluded
/// from the result. Results ascend by player id.
pub fn common_teammates(
    graph: &Graph,
    player1_id: &str,
    player2_id: &str,
) -> GraphResult<Vec<CommonTeammate>> {
    graph.require_node(NodeType::Player, player1_id)?;
    graph.require_node(NodeType::Player, player2_id)?;
    debug!(player1_id, player2_id, "common teammates");

    let with_player1 = clubmates(graph, player1_id, [player1_id, player2_id]);
    let with_player2 = clubmates(graph, player2_id, [player1_id, player2_id]);

    let mut common = Vec::new();
    for (teammate_id, teams1) in &with_player1 {
        let Some(teams2) = with_player2.get(teammate_id) else {
            continue;
        };
        let Some(teammate) = graph.get_node(NodeType::Player, teammate_id) else {
            continue;
        };
        common.push(CommonTeammate {
            player_id: teammate_id.clone(),
            name: teammate.str_attr("name").unwrap_or_default().to_string(),
            teams_with_player1: teams1.iter().cloned().collect(),
            teams_with_player2: teams2.iter().cloned().collect(),
        });
    }
    Ok(common)
}

/// Everyone who shares a club with `player_id` (except `exclude`),
/// mapped to the distinct names of the clubs they share
fn clubmates(
    graph: &Graph,
    player_id: &str,
    exclude: [&str; 2],
) -> BTreeMap<String, BTreeSet<String>> {
    let teams = expand(graph, &[player_id], EdgeType::PlaysFor, Direction::Outgoing);
    let teammates = expand(
        graph,
        &teams.node_ids(),
        EdgeType::PlaysFor,
        Direction::Incoming,
    );

    let mut by_teammate: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for hop in &teammates.hops {
        if exclude.contains(&hop.node.as_str()) {
            continue;
        }
        // hop.from is the shared team.
        let Some(team_name) = graph
            .get_node(NodeType::Team, &hop.from)
            .and_then(|t| t.str_attr("name"))
        else {
            continue;
        };
        by_teammate
            .entry(hop.node.clone())
            .or_default()
            .insert(team_name.to_string());
    }
    by_teammate
}
