//! The fixed set of analytical operations
//!
//! Each operation is a pure function of a graph snapshot and its
//! parameters, composed from the `query` primitives with explicit sort
//! and tie-break rules. Identifier lookups with no matching node return
//! `GraphError::NotFound`; set-returning queries with zero matches return
//! empty collections.

mod competition;
mod matches;
mod player;
mod records;
mod team;

pub use competition::top_scorers;
pub use matches::{head_to_head, match_details, search_matches};
pub use player::{common_teammates, player_career, player_stats, search_players};
pub use records::{
    CareerRecord, CommonTeammate, DualStint, GoalDetail, HeadToHead, MatchDetails, MatchFilter,
    MatchScorer, MatchSummary, PlayerHit, PlayerStats, RosterEntry, ScorerEntry, Stint, TeamHit,
    TeamStats,
};
pub use team::{players_for_both_teams, search_teams, team_roster, team_stats};
