//! Career aggregation over season standings.
//!
//! `aggregate` is a full fold: it never updates a previous result, and the
//! output is identical for every ordering of its input.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::identity::IdentityResolver;
use super::types::{CareerRecord, HeadToHead, MatchupResult, SeasonLine, SeasonStanding};
use crate::cli::types::{CareerMetric, LeagueTier, Season};

#[cfg(test)]
mod tests;

/// Regular-season rank at or above which a franchise makes the playoffs.
pub const PLAYOFF_CUTOFF: u32 = 6;

/// Approximate playoff record for a final placement.
///
/// Models a six-team single-elimination bracket with byes for the top two
/// seeds and a third-place game. Eras with other bracket shapes are not
/// replayed exactly.
pub fn playoff_record(placement: u32) -> (u32, u32) {
    match placement {
        1 => (2, 0),
        2 => (2, 1),
        3 | 4 => (1, 2),
        5 | 6 => (0, 1),
        _ => (0, 0),
    }
}

/// Zero-safe ratio.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn win_percentage(wins: u32, losses: u32) -> f64 {
    ratio(wins as f64, (wins + losses) as f64) * 100.0
}

#[derive(Default)]
struct Accumulator {
    record: CareerRecord,
    ranked_seasons: u32,
    rank_sum: u32,
    power_sum: f64,
    power_seasons: u32,
    latest_name: Option<String>,
}

/// Fold standings into one career record per primary id.
///
/// A group's size is the larger of its standings count and its highest rank.
/// The bottom rank is a last-place finish only when the group has more than
/// one team; a lone team's season counts as a first-place finish alone.
pub fn aggregate(
    standings: &[SeasonStanding],
    resolver: &IdentityResolver,
) -> BTreeMap<String, CareerRecord> {
    let mut group_sizes: HashMap<(Season, LeagueTier), u32> = HashMap::new();
    for standing in standings {
        let size = group_sizes.entry((standing.year, standing.tier)).or_insert(0);
        *size += 1;
    }
    for standing in standings {
        let size = group_sizes.entry((standing.year, standing.tier)).or_insert(0);
        *size = (*size).max(standing.rank);
    }

    let mut resolved: Vec<(&str, &SeasonStanding)> = standings
        .iter()
        .map(|s| (resolver.resolve(&s.franchise_id).primary_id(), s))
        .collect();
    resolved.sort_by(|(a_id, a), (b_id, b)| {
        a_id.cmp(b_id)
            .then(a.year.cmp(&b.year))
            .then(a.tier.cmp(&b.tier))
            .then(a.rank.cmp(&b.rank))
            .then(a.franchise_id.cmp(&b.franchise_id))
            .then(a.points_for.total_cmp(&b.points_for))
    });

    let mut accumulators: BTreeMap<String, Accumulator> = BTreeMap::new();
    for (primary_id, standing) in resolved {
        let group_size = group_sizes
            .get(&(standing.year, standing.tier))
            .copied()
            .unwrap_or(0);
        let acc = accumulators.entry(primary_id.to_string()).or_default();
        fold_standing(acc, standing, group_size);
    }

    debug!(
        "aggregated {} standings into {} career records",
        standings.len(),
        accumulators.len()
    );

    accumulators
        .into_iter()
        .map(|(primary_id, acc)| {
            let record = finish(primary_id.clone(), acc, resolver);
            (primary_id, record)
        })
        .collect()
}

fn fold_standing(acc: &mut Accumulator, standing: &SeasonStanding, group_size: u32) {
    let record = &mut acc.record;
    record.total_wins += standing.wins;
    record.total_losses += standing.losses;
    record.total_ties += standing.ties;
    record.total_points_for += standing.points_for;
    record.total_points_against += standing.points_against;
    record.seasons_played += 1;
    *record.tier_seasons.entry(standing.tier).or_insert(0) += 1;

    match standing.rank {
        1 => record.first_place_finishes += 1,
        2 => record.second_place_finishes += 1,
        3 => record.third_place_finishes += 1,
        _ => {}
    }
    if group_size > 1 && standing.rank == group_size {
        record.last_place_finishes += 1;
    }

    if standing.rank <= PLAYOFF_CUTOFF {
        record.playoff_appearances += 1;
        let placement = standing.playoff_finish.unwrap_or(standing.rank);
        let (wins, losses) = playoff_record(placement);
        record.playoff_wins += wins;
        record.playoff_losses += losses;
        if placement == 1 {
            record.championships += 1;
        }
    }

    if let Some(high) = standing.high_game {
        record.high_game = Some(record.high_game.map_or(high, |h| h.max(high)));
    }
    if let Some(low) = standing.low_game {
        record.low_game = Some(record.low_game.map_or(low, |l| l.min(low)));
    }

    if standing.games_played() > 0 {
        acc.ranked_seasons += 1;
        acc.rank_sum += standing.rank;
    }
    if let Some(rating) = standing.power_rating {
        acc.power_sum += rating;
        acc.power_seasons += 1;
    }

    // Input arrives sorted by year, so the last standing seen is the newest.
    if standing.team_name.is_some() {
        acc.latest_name = standing.team_name.clone();
    }

    let games = standing.games_played() as f64;
    record.season_history.push(SeasonLine {
        year: standing.year,
        tier: standing.tier,
        team_name: standing.team_name.clone(),
        wins: standing.wins,
        losses: standing.losses,
        ties: standing.ties,
        points_for: standing.points_for,
        points_against: standing.points_against,
        rank: standing.rank,
        group_size,
        playoff_finish: standing.playoff_finish,
        win_percentage: win_percentage(standing.wins, standing.losses),
        point_differential: standing.points_for - standing.points_against,
        points_per_game: ratio(standing.points_for, games),
    });
}

fn finish(primary_id: String, acc: Accumulator, resolver: &IdentityResolver) -> CareerRecord {
    let Accumulator {
        mut record,
        ranked_seasons,
        rank_sum,
        power_sum,
        power_seasons,
        latest_name,
    } = acc;

    record.display_name = resolver.display_name(&primary_id, latest_name.as_deref());
    record.primary_id = primary_id;

    record.win_percentage = win_percentage(record.total_wins, record.total_losses);
    record.point_differential = record.total_points_for - record.total_points_against;
    record.average_points_per_game =
        ratio(record.total_points_for, record.total_games() as f64);
    record.average_season_rank = ratio(rank_sum as f64, ranked_seasons as f64);
    record.average_power_rating = if power_seasons == 0 {
        None
    } else {
        Some(power_sum / power_seasons as f64)
    };

    record
        .season_history
        .sort_by(|a, b| b.year.cmp(&a.year).then(a.tier.cmp(&b.tier)));
    record
}

/// Order career records best-first by `metric`, ties broken by primary id.
pub fn leaderboard(
    records: &BTreeMap<String, CareerRecord>,
    metric: CareerMetric,
) -> Vec<&CareerRecord> {
    let mut board: Vec<&CareerRecord> = records.values().collect();
    board.sort_by(|a, b| {
        compare_metric(a, b, metric).then_with(|| a.primary_id.cmp(&b.primary_id))
    });
    board
}

fn compare_metric(a: &CareerRecord, b: &CareerRecord, metric: CareerMetric) -> Ordering {
    match metric {
        CareerMetric::WinPercentage => b.win_percentage.total_cmp(&a.win_percentage),
        CareerMetric::Wins => b.total_wins.cmp(&a.total_wins),
        CareerMetric::PointsFor => b.total_points_for.total_cmp(&a.total_points_for),
        CareerMetric::PointDifferential => b.point_differential.total_cmp(&a.point_differential),
        CareerMetric::Championships => b.championships.cmp(&a.championships),
        // Franchises with no ranked season sort last.
        CareerMetric::AverageRank => match (a.average_season_rank, b.average_season_rank) {
            (x, y) if x == 0.0 && y == 0.0 => Ordering::Equal,
            (x, _) if x == 0.0 => Ordering::Greater,
            (_, y) if y == 0.0 => Ordering::Less,
            (x, y) => x.total_cmp(&y),
        },
    }
}

/// Fold weekly matchups into pairwise records keyed by `(lower id, higher id)`.
pub fn head_to_head(
    matchups: &[MatchupResult],
    resolver: &IdentityResolver,
) -> BTreeMap<(String, String), HeadToHead> {
    let mut ordered: Vec<&MatchupResult> = matchups.iter().collect();
    ordered.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then(a.week.cmp(&b.week))
            .then(a.home_id.cmp(&b.home_id))
            .then(a.away_id.cmp(&b.away_id))
    });

    let mut records: BTreeMap<(String, String), HeadToHead> = BTreeMap::new();
    for matchup in ordered {
        let home = resolver.resolve(&matchup.home_id).primary_id();
        let away = resolver.resolve(&matchup.away_id).primary_id();
        if home == away {
            continue;
        }

        let (a, b, a_points, b_points) = if home < away {
            (home, away, matchup.home_points, matchup.away_points)
        } else {
            (away, home, matchup.away_points, matchup.home_points)
        };

        let entry = records
            .entry((a.to_string(), b.to_string()))
            .or_insert_with(|| HeadToHead {
                franchise_a: a.to_string(),
                franchise_b: b.to_string(),
                ..HeadToHead::default()
            });
        entry.a_points += a_points;
        entry.b_points += b_points;
        match a_points.total_cmp(&b_points) {
            Ordering::Greater => entry.a_wins += 1,
            Ordering::Less => entry.b_wins += 1,
            Ordering::Equal => entry.ties += 1,
        }
    }
    records
}
