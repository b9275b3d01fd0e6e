//! Power rankings command.

use super::common::{fmt_points, warn_unresolved, CommandContext};
use crate::{
    cli::types::{LeagueTier, Season},
    league::{power_rankings, FranchiseScore},
    LeagueError, Result,
};

/// Power rankings for one (season, tier) snapshot.
pub fn power_table(
    ctx: &CommandContext,
    season: Season,
    tier: LeagueTier,
) -> Result<Vec<FranchiseScore>> {
    let snapshot = ctx
        .snapshots
        .iter()
        .find(|s| s.year == season && s.tier == tier)
        .ok_or_else(|| LeagueError::Config {
            message: format!("no snapshot for {} {}", season, tier),
        })?;

    warn_unresolved(&snapshot.standings, &ctx.config.resolver);
    power_rankings(
        &snapshot.standings,
        &snapshot.matchups,
        &ctx.config.resolver,
        &ctx.config.power,
    )
}

pub fn handle_power(
    ctx: &CommandContext,
    season: Option<Season>,
    tier: LeagueTier,
    as_json: bool,
) -> Result<()> {
    let season = season.unwrap_or(ctx.config.live_season);
    let table = power_table(ctx, season, tier)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&table)?); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("{} {} power rankings", season, tier);
    println!(
        "{:>3}  {:<28} {:>7} {:>7} {:>10} {:>6}",
        "#", "Franchise", "Score", "Win%", "PF", "SoS"
    );
    for score in &table {
        println!(
            "{:>3}  {:<28} {:>7.2} {:>7.2} {:>10} {:>6.3}",
            score.rank,
            score.display_name,
            score.score,
            score.win_percentage,
            fmt_points(score.points_for),
            score.schedule_strength,
        );
    }
    Ok(())
}
