//! League configuration loading (`league.toml`).
//!
//! The file carries the static tables the engine needs: the franchise
//! roster, the live-season week calendar and the power-rating weights.

use chrono::{Duration, NaiveDateTime};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::types::{LeagueId, LeagueTier, Season, WEEKS_PER_SEASON};
use crate::error::{LeagueError, Result};
use crate::league::{FranchiseIdentity, IdentityResolver, LeagueCalendar, PowerWeights, WeekWindow};


/// Raw deserialization target for the whole file.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    league: LeagueSection,
    #[serde(default)]
    calendar: CalendarSection,
    #[serde(default)]
    power: PowerWeights,
    #[serde(default)]
    franchises: Vec<FranchiseIdentity>,
}

#[derive(Debug, Deserialize)]
struct LeagueSection {
    name: String,
    live_season: Season,
    #[serde(default = "default_snapshot_dir")]
    snapshot_dir: PathBuf,
    #[serde(default)]
    sleeper: SleeperLeagues,
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Sleeper league ids of the live season, one per tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SleeperLeagues {
    pub premier: Option<LeagueId>,
    pub masters: Option<LeagueId>,
    pub national: Option<LeagueId>,
}

impl SleeperLeagues {
    pub fn for_tier(&self, tier: LeagueTier) -> Option<LeagueId> {
        match tier {
            LeagueTier::Premier => self.premier,
            LeagueTier::Masters => self.masters,
            LeagueTier::National => self.national,
        }
    }
}

/// Either a generated weekly table or an explicit window list.
///
/// Datetimes are quoted ISO strings, e.g. `"2025-09-04T20:00:00"`.
#[derive(Debug, Deserialize)]
struct CalendarSection {
    first_week_start: Option<NaiveDateTime>,
    #[serde(default = "default_weeks")]
    weeks: u16,
    #[serde(default = "default_grace_days")]
    grace_days: i64,
    #[serde(default)]
    windows: Vec<WeekWindow>,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            first_week_start: None,
            weeks: default_weeks(),
            grace_days: default_grace_days(),
            windows: Vec::new(),
        }
    }
}

fn default_weeks() -> u16 {
    WEEKS_PER_SEASON
}

fn default_grace_days() -> i64 {
    7
}

/// Fully validated league configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub live_season: Season,
    pub snapshot_dir: PathBuf,
    pub sleeper: SleeperLeagues,
    pub calendar: LeagueCalendar,
    pub power: PowerWeights,
    pub resolver: IdentityResolver,
}

/// Load and validate the config file at `path`.
///
/// A relative `snapshot_dir` is resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path).map_err(|e| LeagueError::Config {
        message: format!("cannot read {}: {}", path.display(), e),
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let config = parse_config(&text, base_dir)?;
    info!(
        "Config loaded: league={}, live season {}, {} franchises",
        config.name,
        config.live_season,
        config.resolver.len()
    );
    Ok(config)
}

/// Parse and validate config text.
pub fn parse_config(text: &str, base_dir: &Path) -> Result<Config> {
    let file: ConfigFile = toml::from_str(text)?;

    if file.league.name.trim().is_empty() {
        return Err(LeagueError::Config {
            message: "league.name must not be empty".to_string(),
        });
    }
    file.power.validate()?;

    let calendar = build_calendar(file.league.live_season, file.calendar)?;
    let resolver = IdentityResolver::new(file.franchises)?;

    let snapshot_dir = if file.league.snapshot_dir.is_absolute() {
        file.league.snapshot_dir
    } else {
        base_dir.join(file.league.snapshot_dir)
    };

    Ok(Config {
        name: file.league.name,
        live_season: file.league.live_season,
        snapshot_dir,
        sleeper: file.league.sleeper,
        calendar,
        power: file.power,
        resolver,
    })
}

fn build_calendar(live_season: Season, section: CalendarSection) -> Result<LeagueCalendar> {
    if !section.windows.is_empty() {
        if section.first_week_start.is_some() {
            return Err(LeagueError::Config {
                message: "calendar: set either first_week_start or windows, not both".to_string(),
            });
        }
        return LeagueCalendar::new(live_season, section.windows);
    }

    match section.first_week_start {
        Some(first_start) => {
            if !(1..=7).contains(&section.grace_days) {
                return Err(LeagueError::Config {
                    message: format!(
                        "calendar.grace_days must be between 1 and 7, got {}",
                        section.grace_days
                    ),
                });
            }
            LeagueCalendar::weekly(
                live_season,
                first_start,
                section.weeks,
                Duration::days(section.grace_days),
            )
        }
        None => LeagueCalendar::new(live_season, Vec::new()),
    }
}
