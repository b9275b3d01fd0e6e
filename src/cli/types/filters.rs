//! Sorting and filter types for CLI commands.

use std::fmt;

/// Metric used to order a career leaderboard.
///
/// Every metric sorts best-first: descending for totals and ratios,
/// ascending for average rank (a lower rank is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CareerMetric {
    /// Career regular-season win percentage
    #[default]
    WinPercentage,
    /// Total regular-season wins
    Wins,
    /// Total points scored
    PointsFor,
    /// Points scored minus points allowed
    PointDifferential,
    /// Playoff titles
    Championships,
    /// Mean regular-season finish
    AverageRank,
}

impl fmt::Display for CareerMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CareerMetric::WinPercentage => "Win %",
            CareerMetric::Wins => "Wins",
            CareerMetric::PointsFor => "Points For",
            CareerMetric::PointDifferential => "Point Differential",
            CareerMetric::Championships => "Championships",
            CareerMetric::AverageRank => "Average Rank",
        };
        write!(f, "{}", s)
    }
}
