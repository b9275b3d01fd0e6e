//! Conversion of Sleeper responses into league standings and matchups.

use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use super::types::{LeagueUser, MatchupEntry, Roster};
use crate::cli::types::{LeagueTier, Season, Week};
use crate::league::{MatchupResult, SeasonStanding};

/// Owner id for a roster; orphaned rosters get a stable placeholder.
fn roster_owner(roster: &Roster) -> String {
    roster
        .owner_id
        .clone()
        .unwrap_or_else(|| format!("orphan-roster-{}", roster.roster_id))
}

/// Build ranked standings from season-to-date roster records.
///
/// Rank order is wins descending, then points-for descending, then owner id.
pub fn standings_from_rosters(
    rosters: &[Roster],
    users: &[LeagueUser],
    season: Season,
    tier: LeagueTier,
) -> Vec<SeasonStanding> {
    let names: HashMap<&str, &str> = users
        .iter()
        .filter_map(|u| u.team_name().map(|name| (u.user_id.as_str(), name)))
        .collect();

    let mut standings: Vec<SeasonStanding> = rosters
        .iter()
        .map(|roster| {
            if roster.owner_id.is_none() {
                warn!("roster {} has no owner", roster.roster_id);
            }
            let franchise_id = roster_owner(roster);
            SeasonStanding {
                team_name: names.get(franchise_id.as_str()).map(|n| n.to_string()),
                franchise_id,
                year: season,
                tier,
                wins: roster.settings.wins,
                losses: roster.settings.losses,
                ties: roster.settings.ties,
                points_for: roster.settings.points_for(),
                points_against: roster.settings.points_against(),
                rank: 0,
                high_game: None,
                low_game: None,
                playoff_finish: None,
                power_rating: None,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.points_for.total_cmp(&a.points_for))
            .then_with(|| a.franchise_id.cmp(&b.franchise_id))
    });
    for (position, standing) in standings.iter_mut().enumerate() {
        standing.rank = position as u32 + 1;
    }
    standings
}

/// Pair a week's matchup entries by `matchup_id`.
///
/// The lower roster id is recorded as home. Unpaired entries (byes) are dropped.
pub fn matchups_from_entries(
    entries: &[MatchupEntry],
    rosters: &[Roster],
    season: Season,
    week: Week,
) -> Vec<MatchupResult> {
    let owners: HashMap<u32, String> = rosters
        .iter()
        .map(|r| (r.roster_id, roster_owner(r)))
        .collect();

    let mut pairs: BTreeMap<u32, Vec<&MatchupEntry>> = BTreeMap::new();
    for entry in entries {
        if let Some(matchup_id) = entry.matchup_id {
            pairs.entry(matchup_id).or_default().push(entry);
        }
    }

    pairs
        .into_values()
        .filter_map(|mut pair| {
            if pair.len() != 2 {
                warn!("week {}: skipping matchup with {} entries", week, pair.len());
                return None;
            }
            pair.sort_by_key(|e| e.roster_id);
            let home = owners.get(&pair[0].roster_id)?;
            let away = owners.get(&pair[1].roster_id)?;
            Some(MatchupResult {
                year: season,
                week,
                home_id: home.clone(),
                away_id: away.clone(),
                home_points: pair[0].points,
                away_points: pair[1].points,
            })
        })
        .collect()
}
