//! Typed result records returned by the analytics operations
//!
//! The presentation layer renders these; the core never returns raw
//! query strings or untyped maps.

use chrono::NaiveDate;
use serde::Serialize;

/// One player matched by `search_players`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerHit {
    pub player_id: String,
    pub name: String,
    pub nationality: String,
    pub position: String,
    pub birth_date: Option<NaiveDate>,
    /// Distinct names of teams reached via PLAYS_FOR, sorted
    pub teams: Vec<String>,
}

/// One team matched by `search_teams`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamHit {
    pub team_id: String,
    pub name: String,
    pub city: String,
    pub stadium: Option<String>,
    pub founded_year: Option<i64>,
    pub colors: Option<String>,
}

/// One continuous membership period of a player at a team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stint {
    pub team_id: String,
    pub team_name: String,
    pub start_date: Option<NaiveDate>,
    /// None means the stint is ongoing
    pub end_date: Option<NaiveDate>,
}

/// Career history of a player, stints ascending by start date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerRecord {
    pub player_id: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: String,
    pub position: String,
    pub stints: Vec<Stint>,
}

/// Aggregate player statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player_id: String,
    pub name: String,
    pub position: String,
    pub nationality: String,
    /// Season the goal figures are restricted to, when requested
    pub season: Option<String>,
    pub goals: u32,
    pub goal_details: Vec<GoalDetail>,
    /// Card counts are career totals regardless of `season`
    pub yellow_cards: u32,
    pub red_cards: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalDetail {
    pub match_id: String,
    pub minute: i64,
    pub goal_type: String,
}

/// One player in a team roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub player_id: String,
    pub name: String,
    pub position: String,
    pub jersey_number: Option<i64>,
    pub joined: Option<NaiveDate>,
}

/// Win/draw/loss record for a team, home and away combined
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub team_id: String,
    pub team_name: String,
    pub season: Option<String>,
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStats {
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Wins over matches as a percentage; None when no matches were played
    pub fn win_rate(&self) -> Option<f64> {
        (self.matches > 0).then(|| f64::from(self.wins) / f64::from(self.matches) * 100.0)
    }
}

/// One match as listed by `search_matches` and `head_to_head`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i64,
    pub away_score: i64,
    pub competition: Option<String>,
    pub season: Option<String>,
}

/// Full record for a single match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetails {
    pub match_id: String,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i64,
    pub away_score: i64,
    pub attendance: Option<i64>,
    pub competition: Option<String>,
    pub season: Option<String>,
    /// Goals in the match, ascending by minute
    pub scorers: Vec<MatchScorer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchScorer {
    pub player_id: String,
    pub name: String,
    pub minute: i64,
    pub goal_type: String,
    /// Name of the side the scorer belongs to, when resolvable through
    /// PLAYS_FOR against the match's two teams
    pub team: Option<String>,
}

/// All meetings between two teams, classified relative to team1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub team1_id: String,
    pub team1_name: String,
    pub team2_id: String,
    pub team2_name: String,
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub draws: u32,
    pub team1_goals: u32,
    pub team2_goals: u32,
    /// Meetings descending by date (statistics above are order-independent)
    pub matches: Vec<MatchSummary>,
}

/// One entry in a competition top-scorer ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerEntry {
    pub player_id: String,
    pub name: String,
    pub goals: u32,
    /// First associated team by PLAYS_FOR insertion order; not necessarily
    /// the team played for during the ranked season
    pub team: Option<String>,
}

/// One player who shared a club with both queried players
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonTeammate {
    pub player_id: String,
    pub name: String,
    pub teams_with_player1: Vec<String>,
    pub teams_with_player2: Vec<String>,
}

/// One player with stints at both queried teams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualStint {
    pub player_id: String,
    pub name: String,
    pub first: Stint,
    pub second: Stint,
}

/// Filters for `search_matches`
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    /// Substring matched against either side's team name
    pub team: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Substring matched against the competition name
    pub competition: Option<String>,
    /// Maximum results; defaults to 20
    pub limit: Option<usize>,
}

impl MatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn competition(mut self, competition: impl Into<String>) -> Self {
        self.competition = Some(competition.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
