//! Common utilities and helpers shared across commands.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use crate::{
    config::{load_config, Config},
    league::{IdentityResolver, SeasonStanding},
    snapshot::{load_snapshot_dir, Snapshot},
    Result,
};

/// Config plus every snapshot it points at.
pub struct CommandContext {
    pub config: Config,
    pub snapshots: Vec<Snapshot>,
}

impl CommandContext {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = load_config(config_path)?;
        let snapshots = if config.snapshot_dir.is_dir() {
            load_snapshot_dir(&config.snapshot_dir)?
        } else {
            warn!(
                "Snapshot directory {} does not exist; no seasons loaded",
                config.snapshot_dir.display()
            );
            Vec::new()
        };
        Ok(Self { config, snapshots })
    }

    pub fn from_parts(config: Config, snapshots: Vec<Snapshot>) -> Self {
        Self { config, snapshots }
    }
}

/// Log every raw id the roster table could not map.
///
/// Unmapped ids still aggregate under their raw id; this only surfaces drift
/// between the roster table and the data.
pub fn warn_unresolved(standings: &[SeasonStanding], resolver: &IdentityResolver) -> usize {
    let unresolved: BTreeSet<&str> = standings
        .iter()
        .filter(|s| resolver.resolve(&s.franchise_id).is_unresolved())
        .map(|s| s.franchise_id.as_str())
        .collect();
    for raw_id in &unresolved {
        warn!("Franchise id '{}' is not in the roster table", raw_id);
    }
    if !unresolved.is_empty() {
        info!("{} unresolved franchise ids", unresolved.len());
    }
    unresolved.len()
}

/// Fixed-precision formatting for table cells.
pub fn fmt_points(points: f64) -> String {
    format!("{:.2}", points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{LeagueTier, Season};
    use crate::league::FranchiseIdentity;

    fn standing(id: &str) -> SeasonStanding {
        SeasonStanding {
            franchise_id: id.to_string(),
            year: Season::new(2024),
            tier: LeagueTier::National,
            wins: 1,
            losses: 0,
            ties: 0,
            points_for: 100.0,
            points_against: 90.0,
            rank: 1,
            high_game: None,
            low_game: None,
            playoff_finish: None,
            power_rating: None,
            team_name: None,
        }
    }

    #[test]
    fn test_warn_unresolved_counts_distinct_ids() {
        let resolver = IdentityResolver::new(vec![FranchiseIdentity {
            primary_id: "known".to_string(),
            legacy_ids: Vec::new(),
            display_name: "Known".to_string(),
            abbreviation: "KNO".to_string(),
            is_active: true,
        }])
        .unwrap();

        let standings = vec![
            standing("known"),
            standing("stray"),
            standing("stray"),
            standing("other"),
        ];
        assert_eq!(warn_unresolved(&standings, &resolver), 2);
    }

    #[test]
    fn test_fmt_points() {
        assert_eq!(fmt_points(1234.5), "1234.50");
        assert_eq!(fmt_points(0.0), "0.00");
    }
}
