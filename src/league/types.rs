//! Data shapes shared by the aggregation and ranking engine.

use crate::cli::types::{LeagueTier, Season, Week};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One franchise's result in one league tier in one year.
///
/// Snapshot files use camelCase keys; `franchiseId` is the raw platform id
/// and is resolved to a primary identity by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStanding {
    pub franchise_id: String,
    pub year: Season,
    #[serde(rename = "leagueTier", alias = "tier")]
    pub tier: LeagueTier,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    /// 1 = best, dense within its (year, tier) group
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_game: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_game: Option<f64>,
    /// Final bracket placement, distinct from regular-season `rank`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_finish: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_rating: Option<f64>,
    /// Team name used that season
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl SeasonStanding {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// A single weekly head-to-head result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupResult {
    pub year: Season,
    pub week: Week,
    pub home_id: String,
    pub away_id: String,
    pub home_points: f64,
    pub away_points: f64,
}

/// Per-season derived line kept in a career's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLine {
    pub year: Season,
    pub tier: LeagueTier,
    pub team_name: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub rank: u32,
    pub group_size: u32,
    pub playoff_finish: Option<u32>,
    pub win_percentage: f64,
    pub point_differential: f64,
    pub points_per_game: f64,
}

/// Cumulative statistics for one franchise across every season it played.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub primary_id: String,
    pub display_name: String,
    pub total_wins: u32,
    pub total_losses: u32,
    pub total_ties: u32,
    pub total_points_for: f64,
    pub total_points_against: f64,
    pub win_percentage: f64,
    pub point_differential: f64,
    pub average_points_per_game: f64,
    pub average_season_rank: f64,
    pub first_place_finishes: u32,
    pub second_place_finishes: u32,
    pub third_place_finishes: u32,
    pub last_place_finishes: u32,
    pub playoff_appearances: u32,
    pub playoff_wins: u32,
    pub playoff_losses: u32,
    pub championships: u32,
    pub seasons_played: u32,
    pub tier_seasons: BTreeMap<LeagueTier, u32>,
    pub high_game: Option<f64>,
    pub low_game: Option<f64>,
    pub average_power_rating: Option<f64>,
    /// Newest year first
    pub season_history: Vec<SeasonLine>,
}

impl CareerRecord {
    pub fn total_games(&self) -> u32 {
        self.total_wins + self.total_losses + self.total_ties
    }
}

/// Pairwise record between two franchises, from the perspective of `franchise_a`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead {
    pub franchise_a: String,
    pub franchise_b: String,
    pub a_wins: u32,
    pub b_wins: u32,
    pub ties: u32,
    pub a_points: f64,
    pub b_points: f64,
}

/// One entry of a power ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseScore {
    pub rank: u32,
    pub primary_id: String,
    pub display_name: String,
    pub score: f64,
    pub win_percentage: f64,
    pub points_for: f64,
    pub schedule_strength: f64,
}
