//! ID types for platform leagues.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a Sleeper league id.
///
/// Sleeper league ids are large numeric strings; keeping them as `u64`
/// catches typos at argument-parsing time.
///
/// # Examples
///
/// ```rust
/// use union_ffl::LeagueId;
///
/// let league_id: LeagueId = "1048270456340086784".parse().unwrap();
/// assert_eq!(league_id.as_u64(), 1048270456340086784);
/// assert_eq!(league_id.to_string(), "1048270456340086784");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u64);

impl LeagueId {
    /// Create a new LeagueId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse().map_err(|_| LeagueError::Config {
            message: format!("invalid league id '{}'", s),
        })?))
    }
}
