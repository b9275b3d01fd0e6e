//! Schedule command: where the live season stands at a point in time.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::common::CommandContext;
use crate::{
    cli::types::{Season, Week},
    league::WeekState,
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekStatus {
    pub week: Week,
    pub start: NaiveDateTime,
    pub grace_end: NaiveDateTime,
    pub state: WeekState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    pub live_season: Season,
    pub now: NaiveDateTime,
    pub current_week: Option<Week>,
    pub display_week: Week,
    pub weeks: Vec<WeekStatus>,
    /// Present when a specific week was queried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_result_coloring: Option<bool>,
}

pub fn schedule_report(
    ctx: &CommandContext,
    now: NaiveDateTime,
    week: Option<Week>,
    season: Option<Season>,
) -> ScheduleReport {
    let calendar = &ctx.config.calendar;
    let season = season.unwrap_or(calendar.live_season());

    ScheduleReport {
        live_season: calendar.live_season(),
        now,
        current_week: calendar.current_week(now),
        display_week: calendar.display_week(now),
        weeks: calendar
            .windows()
            .iter()
            .map(|w| WeekStatus {
                week: w.week,
                start: w.start,
                grace_end: w.grace_end,
                state: w.state_at(now),
            })
            .collect(),
        show_result_coloring: week
            .map(|week| calendar.should_show_result_coloring(season, week, now)),
    }
}

pub fn handle_schedule(
    ctx: &CommandContext,
    now: NaiveDateTime,
    week: Option<Week>,
    season: Option<Season>,
    as_json: bool,
) -> Result<()> {
    let report = schedule_report(ctx, now, week, season);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("Live season: {}", report.live_season);
    match report.current_week {
        Some(current) => println!("Current week: {}", current),
        None => println!("Current week: none (outside the season)"),
    }
    println!("Display week: {}", report.display_week);
    if let (Some(week), Some(colored)) = (week, report.show_result_coloring) {
        println!(
            "Week {} results colored: {}",
            week,
            if colored { "yes" } else { "no" }
        );
    }
    for status in &report.weeks {
        println!(
            "  Week {:>2}  {}  ->  {}  {:?}",
            status.week, status.start, status.grace_end, status.state
        );
    }
    Ok(())
}
