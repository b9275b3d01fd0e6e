//! Type-safe wrappers and enums for league data.

pub mod filters;
pub mod ids;
pub mod tier;
pub mod time;

pub use filters::CareerMetric;
pub use ids::LeagueId;
pub use tier::LeagueTier;
pub use time::{Season, Week, WEEKS_PER_SEASON};
