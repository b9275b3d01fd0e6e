//! Composite in-season power ratings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::identity::IdentityResolver;
use super::types::{FranchiseScore, MatchupResult, SeasonStanding};
use crate::error::{LeagueError, Result};


/// Blend weights for the power rating.
///
/// Only the ratios between weights matter; scores are normalized by their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerWeights {
    pub win_percentage: f64,
    pub points_for: f64,
    pub schedule_strength: f64,
}

impl Default for PowerWeights {
    fn default() -> Self {
        Self {
            win_percentage: 0.6,
            points_for: 0.3,
            schedule_strength: 0.1,
        }
    }
}

impl PowerWeights {
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("win_percentage", self.win_percentage),
            ("points_for", self.points_for),
            ("schedule_strength", self.schedule_strength),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(LeagueError::InvalidWeights {
                    message: format!("{} must be a non-negative number, got {}", name, value),
                });
            }
        }
        if self.total() == 0.0 {
            return Err(LeagueError::InvalidWeights {
                message: "at least one weight must be positive".to_string(),
            });
        }
        Ok(())
    }

    fn total(&self) -> f64 {
        self.win_percentage + self.points_for + self.schedule_strength
    }
}

fn win_fraction(standing: &SeasonStanding) -> f64 {
    let decided = standing.wins + standing.losses;
    if decided == 0 {
        0.0
    } else {
        standing.wins as f64 / decided as f64
    }
}

/// Rank one (year, tier) group by weighted win fraction, relative scoring and
/// strength of schedule.
///
/// Schedule strength is the mean win fraction of the opponents each franchise
/// faced in `matchups`; it is 0 for everyone when no matchups are supplied.
/// Ties fall back to points-for descending, then primary id ascending.
///
/// Two standings resolving to the same franchise (a legacy id next to its
/// primary id) are an `InvalidSnapshot` error.
pub fn power_rankings(
    standings: &[SeasonStanding],
    matchups: &[MatchupResult],
    resolver: &IdentityResolver,
    weights: &PowerWeights,
) -> Result<Vec<FranchiseScore>> {
    weights.validate()?;

    let mut win_fractions: HashMap<&str, f64> = HashMap::new();
    for standing in standings {
        let primary_id = resolver.resolve(&standing.franchise_id).primary_id();
        if win_fractions
            .insert(primary_id, win_fraction(standing))
            .is_some()
        {
            return Err(LeagueError::InvalidSnapshot {
                source_name: format!("{} {}", standing.year, standing.tier),
                message: format!(
                    "more than one standing resolves to franchise '{}'",
                    primary_id
                ),
            });
        }
    }

    let mut opponents: HashMap<&str, Vec<f64>> = HashMap::new();
    for matchup in matchups {
        let home = resolver.resolve(&matchup.home_id).primary_id();
        let away = resolver.resolve(&matchup.away_id).primary_id();
        if let Some(away_strength) = win_fractions.get(away) {
            opponents.entry(home).or_default().push(*away_strength);
        }
        if let Some(home_strength) = win_fractions.get(home) {
            opponents.entry(away).or_default().push(*home_strength);
        }
    }

    let best_points = standings
        .iter()
        .map(|s| s.points_for)
        .fold(0.0_f64, f64::max);
    let total_weight = weights.total();

    let mut scores: Vec<FranchiseScore> = standings
        .iter()
        .map(|standing| {
            let primary_id = resolver.resolve(&standing.franchise_id).primary_id();
            let win_pct = win_fraction(standing);
            let relative_points = if best_points > 0.0 {
                standing.points_for / best_points
            } else {
                0.0
            };
            let schedule_strength = opponents
                .get(primary_id)
                .filter(|faced| !faced.is_empty())
                .map(|faced| faced.iter().sum::<f64>() / faced.len() as f64)
                .unwrap_or(0.0);

            let blended = weights.win_percentage * win_pct
                + weights.points_for * relative_points
                + weights.schedule_strength * schedule_strength;

            FranchiseScore {
                rank: 0,
                primary_id: primary_id.to_string(),
                display_name: resolver.display_name(primary_id, standing.team_name.as_deref()),
                score: 100.0 * blended / total_weight,
                win_percentage: win_pct * 100.0,
                points_for: standing.points_for,
                schedule_strength,
            }
        })
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.points_for.total_cmp(&a.points_for))
            .then_with(|| a.primary_id.cmp(&b.primary_id))
    });
    for (position, score) in scores.iter_mut().enumerate() {
        score.rank = position as u32 + 1;
    }

    Ok(scores)
}
