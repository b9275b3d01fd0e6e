//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use union_ffl::{
    cli::{Commands, UnionCli},
    commands::{
        career::{handle_career, CareerParams},
        common::CommandContext,
        fetch::{handle_fetch, FetchParams},
        power::handle_power,
        resolve_config_path,
        schedule::handle_schedule,
    },
};

/// Log to stderr so JSON output on stdout stays clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("union_ffl=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let app = UnionCli::parse();

    let config_path = resolve_config_path(app.config)?;
    let ctx = CommandContext::load(&config_path)
        .with_context(|| format!("failed to load league from {}", config_path.display()))?;

    match app.command {
        Commands::Career {
            season,
            tier,
            sort,
            limit,
            json,
        } => handle_career(
            &ctx,
            CareerParams {
                season,
                tier,
                metric: sort,
                limit,
                as_json: json,
            },
        )?,

        Commands::Power { season, tier, json } => handle_power(&ctx, season, tier, json)?,

        Commands::Schedule {
            at,
            week,
            season,
            json,
        } => {
            let now = at.unwrap_or_else(|| Local::now().naive_local());
            handle_schedule(&ctx, now, week, season, json)?
        }

        Commands::Fetch {
            tier,
            league_id,
            through_week,
            verbose,
        } => {
            let now = Local::now().naive_local();
            handle_fetch(
                &ctx,
                FetchParams {
                    tier,
                    league_id,
                    through_week,
                    verbose,
                },
                now,
            )
            .await
            .context("failed to fetch live season")?;
        }
    }

    Ok(())
}
