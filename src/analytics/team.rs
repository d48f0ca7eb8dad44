//! Team analytics: search, roster, statistics, shared players

use super::matches::{in_season, match_sides};
use super::records::{DualStint, RosterEntry, Stint, TeamHit, TeamStats};
use crate::graph::{EdgeType, Graph, GraphResult, NodeType};
use crate::query::{expand, join_on_target, Direction, FindNodes, Hop};
use chrono::NaiveDate;
use tracing::debug;

/// Case-insensitive substring search on team names
pub fn search_teams(graph: &Graph, name: &str) -> Vec<TeamHit> {
    debug!(name, "search teams");
    FindNodes::new(NodeType::Team)
        .name_contains(name)
        .execute(graph)
        .into_iter()
        .map(|team| TeamHit {
            team_id: team.id.clone(),
            name: team.str_attr("name").unwrap_or_default().to_string(),
            city: team.str_attr("city").unwrap_or_default().to_string(),
            stadium: team.str_attr("stadium").map(str::to_string),
            founded_year: team.int_attr("founded_year"),
            colors: team.str_attr("colors").map(str::to_string),
        })
        .collect()
}

/// Players under contract with the team as of `as_of`
///
/// A player is on the roster when their stint's end date is absent
/// (ongoing) or on/after `as_of`; the start date does not participate.
/// Sorted by position, then name. Unknown teams are NotFound.
pub fn team_roster(graph: &Graph, team_id: &str, as_of: NaiveDate) -> GraphResult<Vec<RosterEntry>> {
    graph.require_node(NodeType::Team, team_id)?;
    debug!(team_id, %as_of, "team roster");

    let squad = expand(graph, &[team_id], EdgeType::PlaysFor, Direction::Incoming)
        .filter_edges(|hop| hop.date_attr("end_date").map_or(true, |end| end >= as_of));

    let mut roster: Vec<RosterEntry> = squad
        .hops
        .iter()
        .filter_map(|hop| {
            let player = graph.get_node(NodeType::Player, &hop.node)?;
            Some(RosterEntry {
                player_id: player.id.clone(),
                name: player.str_attr("name").unwrap_or_default().to_string(),
                position: player.str_attr("position").unwrap_or_default().to_string(),
                jersey_number: player.int_attr("jersey_number"),
                joined: hop.date_attr("start_date"),
            })
        })
        .collect();
    roster.sort_by(|a, b| a.position.cmp(&b.position).then(a.name.cmp(&b.name)));
    Ok(roster)
}

/// Win/draw/loss record for a team, optionally restricted to a season
///
/// Home and away edges are summed separately with the team's own score
/// taken as "for" in each orientation, then combined. Matches missing
/// either side edge are omitted as integrity violations.
pub fn team_stats(graph: &Graph, team_id: &str, season: Option<&str>) -> GraphResult<TeamStats> {
    let team = graph.require_node(NodeType::Team, team_id)?;
    debug!(team_id, ?season, "team stats");

    let mut stats = TeamStats {
        team_id: team_id.to_string(),
        team_name: team.str_attr("name").unwrap_or_default().to_string(),
        season: season.map(str::to_string),
        matches: 0,
        wins: 0,
        draws: 0,
        losses: 0,
        goals_for: 0,
        goals_against: 0,
    };

    for (edge_type, home_side) in [(EdgeType::PlayedHome, true), (EdgeType::PlayedAway, false)] {
        for hop in expand(graph, &[team_id], edge_type, Direction::Outgoing).hops {
            let match_id = hop.node.as_str();
            if match_sides(graph, match_id).is_none() {
                continue;
            }
            if let Some(season) = season {
                if !in_season(graph, match_id, season) {
                    continue;
                }
            }
            let Some(node) = graph.get_node(NodeType::Match, match_id) else {
                continue;
            };
            let (Some(home_score), Some(away_score)) =
                (node.int_attr("home_score"), node.int_attr("away_score"))
            else {
                continue;
            };
            let (goals_for, goals_against) = if home_side {
                (home_score, away_score)
            } else {
                (away_score, home_score)
            };

            stats.matches += 1;
            stats.goals_for += goals_for.max(0) as u32;
            stats.goals_against += goals_against.max(0) as u32;
            match goals_for.cmp(&goals_against) {
                std::cmp::Ordering::Greater => stats.wins += 1,
                std::cmp::Ordering::Equal => stats.draws += 1,
                std::cmp::Ordering::Less => stats.losses += 1,
            }
        }
    }
    Ok(stats)
}

/// Players with at least one stint at each of the two teams
///
/// Sorted ascending by the start date of the first team's stint (missing
/// dates lowest), then player id. Unknown teams are NotFound.
pub fn players_for_both_teams(
    graph: &Graph,
    team1_id: &str,
    team2_id: &str,
) -> GraphResult<Vec<DualStint>> {
    let team1 = graph.require_node(NodeType::Team, team1_id)?;
    let team2 = graph.require_node(NodeType::Team, team2_id)?;
    debug!(team1_id, team2_id, "players for both teams");

    let squad1 = expand(graph, &[team1_id], EdgeType::PlaysFor, Direction::Incoming);
    let squad2 = expand(graph, &[team2_id], EdgeType::PlaysFor, Direction::Incoming);

    let stint = |hop: &Hop, team_id: &str, team_name: &str| Stint {
        team_id: team_id.to_string(),
        team_name: team_name.to_string(),
        start_date: hop.date_attr("start_date"),
        end_date: hop.date_attr("end_date"),
    };
    let team1_name = team1.str_attr("name").unwrap_or_default();
    let team2_name = team2.str_attr("name").unwrap_or_default();

    let mut shared: Vec<DualStint> = join_on_target(&squad1, &squad2)
        .into_iter()
        .filter_map(|(hop1, hop2)| {
            let player = graph.get_node(NodeType::Player, &hop1.node)?;
            Some(DualStint {
                player_id: player.id.clone(),
                name: player.str_attr("name").unwrap_or_default().to_string(),
                first: stint(&hop1, team1_id, team1_name),
                second: stint(&hop2, team2_id, team2_name),
            })
        })
        .collect();
    shared.sort_by(|a, b| {
        a.first
            .start_date
            .cmp(&b.first.start_date)
            .then(a.player_id.cmp(&b.player_id))
    });
    Ok(shared)
}
