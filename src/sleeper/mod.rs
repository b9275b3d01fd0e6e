//! Live-season adapter for the Sleeper platform
//!
//! - `http`: raw API calls
//! - `types`: response shapes
//! - `convert`: responses into `SeasonStanding` / `MatchupResult`

pub mod convert;
pub mod http;
pub mod types;

pub use convert::{matchups_from_entries, standings_from_rosters};
pub use http::{SleeperClient, SLEEPER_BASE_URL};
