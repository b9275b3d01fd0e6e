//! Response shapes from the Sleeper v1 API.

use serde::{Deserialize, Serialize};

/// Entry of `/league/{id}/rosters`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u32,
    /// Null for orphaned rosters
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub settings: RosterSettings,
}

/// Season-to-date record. Points are split into whole and hundredths parts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub fpts: u32,
    #[serde(default)]
    pub fpts_decimal: u32,
    #[serde(default)]
    pub fpts_against: u32,
    #[serde(default)]
    pub fpts_against_decimal: u32,
}

impl RosterSettings {
    pub fn points_for(&self) -> f64 {
        self.fpts as f64 + self.fpts_decimal as f64 / 100.0
    }

    pub fn points_against(&self) -> f64 {
        self.fpts_against as f64 + self.fpts_against_decimal as f64 / 100.0
    }
}

/// Entry of `/league/{id}/users`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

impl LeagueUser {
    /// Team name when set, otherwise the account display name.
    pub fn team_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .or(self.display_name.as_deref())
    }
}

/// Entry of `/league/{id}/matchups/{week}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchupEntry {
    pub roster_id: u32,
    /// Null during bye weeks and for consolation brackets
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: f64,
}
