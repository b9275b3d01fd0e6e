//! Week calendar for the live season.
//!
//! Every query is a pure function of the static window table and a
//! caller-supplied `now`; nothing here reads the system clock.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::cli::types::{Season, Week, WEEKS_PER_SEASON};
use crate::error::{LeagueError, Result};


/// One game week: `[start, grace_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub week: Week,
    /// Thursday kickoff of the game week
    pub start: NaiveDateTime,
    /// From here on the week's results are final for display
    pub grace_end: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekState {
    Upcoming,
    InProgress,
    Final,
}

impl WeekWindow {
    pub fn state_at(&self, now: NaiveDateTime) -> WeekState {
        if now < self.start {
            WeekState::Upcoming
        } else if now < self.grace_end {
            WeekState::InProgress
        } else {
            WeekState::Final
        }
    }

    pub fn contains(&self, now: NaiveDateTime) -> bool {
        self.state_at(now) == WeekState::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueCalendar {
    live_season: Season,
    windows: Vec<WeekWindow>,
}

impl LeagueCalendar {
    /// Build a calendar from an explicit table.
    ///
    /// Windows must be numbered 1..=N in order with N at most
    /// `WEEKS_PER_SEASON`, each non-empty, and must not overlap.
    pub fn new(live_season: Season, windows: Vec<WeekWindow>) -> Result<Self> {
        if windows.len() > WEEKS_PER_SEASON as usize {
            return Err(LeagueError::InvalidCalendar {
                message: format!(
                    "{} weeks exceeds the {}-week season",
                    windows.len(),
                    WEEKS_PER_SEASON
                ),
            });
        }
        for (index, window) in windows.iter().enumerate() {
            let expected = Week::new(index as u16 + 1);
            if window.week != expected {
                return Err(LeagueError::InvalidCalendar {
                    message: format!("expected week {} but found week {}", expected, window.week),
                });
            }
            if window.start >= window.grace_end {
                return Err(LeagueError::InvalidCalendar {
                    message: format!("week {} ends before it starts", window.week),
                });
            }
        }
        for pair in windows.windows(2) {
            if pair[1].start < pair[0].grace_end {
                return Err(LeagueError::InvalidCalendar {
                    message: format!("weeks {} and {} overlap", pair[0].week, pair[1].week),
                });
            }
        }

        Ok(Self {
            live_season,
            windows,
        })
    }

    /// Build `weeks` consecutive weekly windows from a Thursday kickoff.
    ///
    /// A seven-day grace keeps the windows contiguous.
    pub fn weekly(
        live_season: Season,
        first_start: NaiveDateTime,
        weeks: u16,
        grace: Duration,
    ) -> Result<Self> {
        if first_start.weekday() != Weekday::Thu {
            return Err(LeagueError::InvalidCalendar {
                message: format!(
                    "first week must kick off on a Thursday, got {} ({})",
                    first_start.date(),
                    first_start.weekday()
                ),
            });
        }
        if weeks > WEEKS_PER_SEASON {
            return Err(LeagueError::InvalidCalendar {
                message: format!("{} weeks exceeds the {}-week season", weeks, WEEKS_PER_SEASON),
            });
        }
        if grace > Duration::days(7) {
            return Err(LeagueError::InvalidCalendar {
                message: format!("grace period of {} days exceeds a week", grace.num_days()),
            });
        }

        let out_of_range = || LeagueError::InvalidCalendar {
            message: format!("week table starting {} runs past the supported dates", first_start),
        };
        let windows = (0..weeks)
            .map(|offset| {
                let start = first_start
                    .checked_add_signed(Duration::days(7 * offset as i64))
                    .ok_or_else(out_of_range)?;
                let grace_end = start.checked_add_signed(grace).ok_or_else(out_of_range)?;
                Ok(WeekWindow {
                    week: Week::new(offset + 1),
                    start,
                    grace_end,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(live_season, windows)
    }

    pub fn live_season(&self) -> Season {
        self.live_season
    }

    pub fn windows(&self) -> &[WeekWindow] {
        &self.windows
    }

    pub fn window(&self, week: Week) -> Option<&WeekWindow> {
        self.windows.iter().find(|w| w.week == week)
    }

    /// The week whose window contains `now`, if any.
    pub fn current_week(&self, now: NaiveDateTime) -> Option<Week> {
        self.windows
            .iter()
            .find(|w| w.contains(now))
            .map(|w| w.week)
    }

    pub fn week_state(&self, week: Week, now: NaiveDateTime) -> Option<WeekState> {
        self.window(week).map(|w| w.state_at(now))
    }

    /// Unknown weeks count as complete.
    pub fn is_week_complete(&self, week: Week, now: NaiveDateTime) -> bool {
        self.week_state(week, now)
            .map_or(true, |state| state == WeekState::Final)
    }

    /// Past seasons are always colored; the live season only once a week is final.
    pub fn should_show_result_coloring(
        &self,
        season: Season,
        week: Week,
        now: NaiveDateTime,
    ) -> bool {
        if season != self.live_season {
            return true;
        }
        self.is_week_complete(week, now)
    }

    /// Week a view should default to: the current week in season, week 1
    /// before kickoff, the final week once the season is over.
    pub fn display_week(&self, now: NaiveDateTime) -> Week {
        if let Some(week) = self.current_week(now) {
            return week;
        }
        let (Some(first), Some(last)) = (self.windows.first(), self.windows.last()) else {
            return Week::default();
        };
        if now < first.start {
            return first.week;
        }
        if now >= last.grace_end {
            return last.week;
        }
        // Between two windows: the next one to kick off.
        self.windows
            .iter()
            .find(|w| w.start > now)
            .map_or(last.week, |w| w.week)
    }
}
