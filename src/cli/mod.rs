//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{CareerMetric, LeagueId, LeagueTier, Season, Week};

#[derive(Debug, Parser)]
#[clap(name = "union-ffl", about = "Union fantasy league career stats and rankings")]
pub struct UnionCli {
    /// Path to league.toml (or set `UNION_FFL_CONFIG` env var).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Career records aggregated across every snapshot.
    Career {
        /// Only count this season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Only count seasons played in this tier.
        #[clap(long, short, value_enum)]
        tier: Option<LeagueTier>,

        /// Leaderboard ordering.
        #[clap(long, value_enum, default_value_t = CareerMetric::WinPercentage)]
        sort: CareerMetric,

        /// Show at most this many franchises.
        #[clap(long, short = 'n')]
        limit: Option<usize>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Power rankings for one season and tier.
    Power {
        /// Season year (defaults to the live season).
        #[clap(long, short)]
        season: Option<Season>,

        /// League tier.
        #[clap(long, short, value_enum)]
        tier: LeagueTier,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Live-season week calendar and result-coloring state.
    Schedule {
        /// Evaluate at this local time instead of now (e.g. 2025-10-02T21:00:00).
        #[clap(long)]
        at: Option<NaiveDateTime>,

        /// Report whether results for this week should be colored.
        #[clap(long, short)]
        week: Option<Week>,

        /// Season the `--week` query refers to (defaults to the live season).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch the live season from Sleeper and write it as a snapshot.
    Fetch {
        /// League tier to fetch.
        #[clap(long, short, value_enum)]
        tier: LeagueTier,

        /// Sleeper league id (defaults to the one configured for the tier).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Also fetch matchups for completed weeks up to and including this one.
        #[clap(long)]
        through_week: Option<Week>,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },
}
