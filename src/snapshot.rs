//! Per-season JSON snapshot files.
//!
//! One file holds one (year, tier) group: its final standings and, when
//! available, its weekly matchups. Files are validated on load so malformed
//! groups never reach the aggregator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::types::{LeagueTier, Season};
use crate::error::{LeagueError, Result};
use crate::league::{MatchupResult, SeasonStanding};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub year: Season,
    pub tier: LeagueTier,
    pub standings: Vec<SeasonStanding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matchups: Vec<MatchupResult>,
}

impl Snapshot {
    /// Conventional file name, e.g. `2024-premier.json`.
    pub fn file_name(&self) -> String {
        format!("{}-{}.json", self.year, self.tier.key())
    }

    /// Check the group invariants: consistent year/tier, unique franchises,
    /// and ranks forming exactly `1..=N`.
    pub fn validate(&self, source_name: &str) -> Result<()> {
        let invalid = |message: String| LeagueError::InvalidSnapshot {
            source_name: source_name.to_string(),
            message,
        };

        let mut franchises = BTreeSet::new();
        let mut ranks = BTreeSet::new();
        for standing in &self.standings {
            if standing.year != self.year || standing.tier != self.tier {
                return Err(invalid(format!(
                    "standing for '{}' is {} {} but the file is {} {}",
                    standing.franchise_id, standing.year, standing.tier, self.year, self.tier
                )));
            }
            if !franchises.insert(standing.franchise_id.as_str()) {
                return Err(invalid(format!(
                    "franchise '{}' appears twice",
                    standing.franchise_id
                )));
            }
            if !ranks.insert(standing.rank) {
                return Err(invalid(format!("duplicate rank {}", standing.rank)));
            }
            if !standing.points_for.is_finite() || !standing.points_against.is_finite() {
                return Err(invalid(format!(
                    "non-finite points for '{}'",
                    standing.franchise_id
                )));
            }
        }

        let expected: BTreeSet<u32> = (1..=self.standings.len() as u32).collect();
        if ranks != expected {
            return Err(invalid(format!(
                "ranks must run 1..={} without gaps",
                self.standings.len()
            )));
        }

        if let Some(matchup) = self.matchups.iter().find(|m| m.year != self.year) {
            return Err(invalid(format!(
                "week {} matchup belongs to {}",
                matchup.week, matchup.year
            )));
        }
        Ok(())
    }
}

/// Read and validate one snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&text)?;
    snapshot.validate(&path.display().to_string())?;
    debug!(
        "Loaded {} ({} standings, {} matchups)",
        path.display(),
        snapshot.standings.len(),
        snapshot.matchups.len()
    );
    Ok(snapshot)
}

/// Read every `*.json` snapshot in `dir`, in file-name order.
pub fn load_snapshot_dir(dir: &Path) -> Result<Vec<Snapshot>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let snapshots = paths
        .iter()
        .map(|path| load_snapshot(path))
        .collect::<Result<Vec<_>>>()?;
    info!("Loaded {} snapshots from {}", snapshots.len(), dir.display());
    Ok(snapshots)
}

/// Validate then write a snapshot as pretty JSON, creating parent directories.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    snapshot.validate(&path.display().to_string())?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
    info!("Wrote snapshot {}", path.display());
    Ok(())
}

/// All standings across snapshots, optionally narrowed to one season and/or tier.
pub fn collect_standings(
    snapshots: &[Snapshot],
    season: Option<Season>,
    tier: Option<LeagueTier>,
) -> Vec<SeasonStanding> {
    snapshots
        .iter()
        .filter(|s| season.map_or(true, |year| s.year == year))
        .filter(|s| tier.map_or(true, |t| s.tier == t))
        .flat_map(|s| s.standings.iter().cloned())
        .collect()
}
