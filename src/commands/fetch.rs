//! Fetch command: pull the live season from Sleeper into a snapshot file.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::common::{warn_unresolved, CommandContext};
use crate::{
    cli::types::{LeagueId, LeagueTier, Week},
    league::WeekState,
    sleeper::{matchups_from_entries, standings_from_rosters, SleeperClient},
    snapshot::{write_snapshot, Snapshot},
    LeagueError, Result,
};

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub tier: LeagueTier,
    pub league_id: Option<LeagueId>,
    pub through_week: Option<Week>,
    pub verbose: bool,
}

/// Build a live-season snapshot from Sleeper.
///
/// Matchups are only included for calendar weeks whose window has closed;
/// weeks outside the calendar are never fetched.
pub async fn fetch_snapshot(
    ctx: &CommandContext,
    client: &SleeperClient,
    params: &FetchParams,
    now: NaiveDateTime,
) -> Result<Snapshot> {
    let league_id = params
        .league_id
        .or_else(|| ctx.config.sleeper.for_tier(params.tier))
        .ok_or_else(|| LeagueError::Config {
            message: format!(
                "no --league-id given and no Sleeper league configured for {}",
                params.tier
            ),
        })?;
    let season = ctx.config.live_season;

    let rosters = client.get_league_rosters(league_id).await?;
    if rosters.is_empty() {
        return Err(LeagueError::NoData);
    }
    let users = client.get_league_users(league_id).await?;
    let standings = standings_from_rosters(&rosters, &users, season, params.tier);
    warn_unresolved(&standings, &ctx.config.resolver);

    let mut matchups = Vec::new();
    if let Some(through) = params.through_week {
        for week in (1..=through.as_u16()).map(Week::new) {
            match ctx.config.calendar.week_state(week, now) {
                Some(WeekState::Final) => {}
                Some(_) => {
                    warn!("Week {} is not final yet; skipping its matchups", week);
                    continue;
                }
                None => {
                    warn!("Week {} is not in the calendar; skipping its matchups", week);
                    continue;
                }
            }
            let entries = client.get_league_matchups(league_id, week).await?;
            let week_matchups = matchups_from_entries(&entries, &rosters, season, week);
            if params.verbose {
                println!("✓ Week {}: {} matchups", week, week_matchups.len());
            }
            matchups.extend(week_matchups);
        }
    }

    info!(
        "Fetched {} {}: {} rosters, {} matchups",
        season,
        params.tier,
        standings.len(),
        matchups.len()
    );
    Ok(Snapshot {
        year: season,
        tier: params.tier,
        standings,
        matchups,
    })
}

pub async fn handle_fetch(
    ctx: &CommandContext,
    params: FetchParams,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    let client = SleeperClient::default();
    let snapshot = fetch_snapshot(ctx, &client, &params, now).await?;

    let path = ctx.config.snapshot_dir.join(snapshot.file_name());
    write_snapshot(&path, &snapshot)?;
    println!("✓ Snapshot written to {}", path.display()); // tarpaulin::skip
    Ok(path)
}
