//! Union Fantasy League statistics library
//!
//! Turns per-season standings snapshots for a three-tier league
//! (Premier/Masters/National) into career records, power rankings and
//! live-season schedule decisions.
//!
//! ## Features
//!
//! - **Identity Resolution**: Map legacy, historical and current platform ids to one franchise
//! - **Career Aggregation**: Order-independent folds of season standings into career records
//! - **Power Rankings**: Configurable blend of win percentage, scoring and schedule strength
//! - **Week Calendar**: Decide when a live-season week's results are final for display
//! - **Snapshots**: Validated JSON files per season and tier, fetchable from Sleeper
//!
//! ## Quick Start
//!
//! ```rust
//! use union_ffl::league::{aggregate, IdentityResolver, SeasonStanding};
//! use union_ffl::{LeagueTier, Season};
//!
//! let standing = SeasonStanding {
//!     franchise_id: "734122".to_string(),
//!     year: Season::new(2024),
//!     tier: LeagueTier::Premier,
//!     wins: 10,
//!     losses: 4,
//!     ties: 0,
//!     points_for: 1710.5,
//!     points_against: 1502.0,
//!     rank: 1,
//!     high_game: None,
//!     low_game: None,
//!     playoff_finish: Some(1),
//!     power_rating: None,
//!     team_name: Some("Gridiron Gang".to_string()),
//! };
//!
//! let records = aggregate(&[standing], &IdentityResolver::default());
//! assert_eq!(records["734122"].championships, 1);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at your league file to avoid passing `--config` every time:
//! ```bash
//! export UNION_FFL_CONFIG=~/leagues/union/league.toml
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod league;
pub mod sleeper;
pub mod snapshot;

// Re-export commonly used types
pub use cli::types::{CareerMetric, LeagueId, LeagueTier, Season, Week};
pub use error::{LeagueError, Result};
pub use league::{CareerRecord, FranchiseScore, IdentityResolver, LeagueCalendar, SeasonStanding};

pub const CONFIG_ENV_VAR: &str = "UNION_FFL_CONFIG";
