//! Season aggregation and ranking engine
//!
//! Pure, synchronous transformations over already-loaded league data:
//! - `identity`: raw platform ids to stable franchise identities
//! - `aggregate`: season standings folded into career records
//! - `power`: composite in-season power rankings
//! - `schedule`: live-season week calendar and result-coloring rules
//! - `types`: the shared data shapes

pub mod aggregate;
pub mod identity;
pub mod power;
pub mod schedule;
pub mod types;

pub use aggregate::{aggregate, head_to_head, leaderboard, playoff_record, PLAYOFF_CUTOFF};
pub use identity::{Era, FranchiseIdentity, IdentityResolver, LegacyId, Resolution};
pub use power::{power_rankings, PowerWeights};
pub use schedule::{LeagueCalendar, WeekState, WeekWindow};
pub use types::*;
