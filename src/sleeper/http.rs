//! HTTP calls against the Sleeper v1 API.
//!
//! Requests are single-shot; retries and caching belong to the caller.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{LeagueUser, MatchupEntry, Roster};
use crate::cli::types::{LeagueId, Week};
use crate::error::{LeagueError, Result};


/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Thin client carrying the base URL so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl Default for SleeperClient {
    fn default() -> Self {
        Self::new(SLEEPER_BASE_URL)
    }
}

impl SleeperClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        // Sleeper answers unknown leagues with a literal `null`.
        if value.is_null() {
            return Err(LeagueError::NoData);
        }
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_league_rosters(&self, league_id: LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("/league/{}/rosters", league_id)).await
    }

    pub async fn get_league_users(&self, league_id: LeagueId) -> Result<Vec<LeagueUser>> {
        self.get_json(&format!("/league/{}/users", league_id)).await
    }

    pub async fn get_league_matchups(
        &self,
        league_id: LeagueId,
        week: Week,
    ) -> Result<Vec<MatchupEntry>> {
        self.get_json(&format!("/league/{}/matchups/{}", league_id, week))
            .await
    }
}
