//! League tier types.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The competitive divisions a franchise can play in for a season.
///
/// Ordered top tier first, so sorting a list of tiers yields
/// Premier, Masters, National.
///
/// # Examples
///
/// ```rust
/// use union_ffl::LeagueTier;
///
/// let tier: LeagueTier = "masters".parse().unwrap();
/// assert_eq!(tier, LeagueTier::Masters);
/// assert_eq!(tier.to_string(), "Masters");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LeagueTier {
    Premier,
    Masters,
    National,
}

impl LeagueTier {
    pub const ALL: [LeagueTier; 3] = [LeagueTier::Premier, LeagueTier::Masters, LeagueTier::National];

    /// Lowercase key used in snapshot file names and config tables.
    pub fn key(&self) -> &'static str {
        match self {
            LeagueTier::Premier => "premier",
            LeagueTier::Masters => "masters",
            LeagueTier::National => "national",
        }
    }
}

impl fmt::Display for LeagueTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeagueTier::Premier => "Premier",
            LeagueTier::Masters => "Masters",
            LeagueTier::National => "National",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LeagueTier {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "premier" | "prem" => Ok(LeagueTier::Premier),
            "masters" => Ok(LeagueTier::Masters),
            "national" | "nat" => Ok(LeagueTier::National),
            _ => Err(LeagueError::InvalidTier {
                tier: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing_accepts_aliases() {
        assert_eq!("Premier".parse::<LeagueTier>().unwrap(), LeagueTier::Premier);
        assert_eq!("prem".parse::<LeagueTier>().unwrap(), LeagueTier::Premier);
        assert_eq!("NATIONAL".parse::<LeagueTier>().unwrap(), LeagueTier::National);
        assert!("championship".parse::<LeagueTier>().is_err());
    }

    #[test]
    fn test_tier_ordering_is_top_first() {
        let mut tiers = vec![LeagueTier::National, LeagueTier::Premier, LeagueTier::Masters];
        tiers.sort();
        assert_eq!(tiers, LeagueTier::ALL.to_vec());
    }

    #[test]
    fn test_tier_serde_lowercase() {
        assert_eq!(serde_json::to_string(&LeagueTier::Masters).unwrap(), "\"masters\"");
        let tier: LeagueTier = serde_json::from_str("\"national\"").unwrap();
        assert_eq!(tier, LeagueTier::National);
        assert_eq!(LeagueTier::Premier.key(), "premier");
    }
}
