//! Career leaderboard command.

use tracing::info;

use super::common::{fmt_points, warn_unresolved, CommandContext};
use crate::{
    cli::types::{CareerMetric, LeagueTier, Season},
    league::{aggregate, leaderboard, CareerRecord},
    snapshot::collect_standings,
    Result,
};

#[derive(Debug, Clone, Default)]
pub struct CareerParams {
    pub season: Option<Season>,
    pub tier: Option<LeagueTier>,
    pub metric: CareerMetric,
    pub limit: Option<usize>,
    pub as_json: bool,
}

/// Aggregate the selected seasons and order them into a leaderboard.
pub fn career_board(ctx: &CommandContext, params: &CareerParams) -> Vec<CareerRecord> {
    let standings = collect_standings(&ctx.snapshots, params.season, params.tier);
    warn_unresolved(&standings, &ctx.config.resolver);

    let records = aggregate(&standings, &ctx.config.resolver);
    info!(
        "{} standings aggregated into {} careers",
        standings.len(),
        records.len()
    );

    leaderboard(&records, params.metric)
        .into_iter()
        .take(params.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

pub fn handle_career(ctx: &CommandContext, params: CareerParams) -> Result<()> {
    let board = career_board(ctx, &params);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&board)?); // tarpaulin::skip
        return Ok(());
    }

    if board.is_empty() {
        println!("No seasons found.");
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("Sorted by {}", params.metric);
    println!(
        "{:>3}  {:<28} {:>4} {:>8} {:>7} {:>10} {:>8} {:>7} {:>5} {:>5} {:>4}",
        "#", "Franchise", "Yrs", "W-L-T", "Win%", "PF", "PPG", "AvgRk", "PO", "PO W-L", "Ch"
    );
    for (position, record) in board.iter().enumerate() {
        println!(
            "{:>3}  {:<28} {:>4} {:>8} {:>7.2} {:>10} {:>8.2} {:>7.2} {:>5} {:>5} {:>4}",
            position + 1,
            record.display_name,
            record.seasons_played,
            format!(
                "{}-{}-{}",
                record.total_wins, record.total_losses, record.total_ties
            ),
            record.win_percentage,
            fmt_points(record.total_points_for),
            record.average_points_per_game,
            record.average_season_rank,
            record.playoff_appearances,
            format!("{}-{}", record.playoff_wins, record.playoff_losses),
            record.championships,
        );
    }

    Ok(())
}
