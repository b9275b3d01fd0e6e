//! Unit tests for career aggregation

use super::*;
use crate::league::identity::{Era, FranchiseIdentity, LegacyId};

fn standing(id: &str, year: u16, rank: u32, wins: u32, losses: u32, pf: f64) -> SeasonStanding {
    SeasonStanding {
        franchise_id: id.to_string(),
        year: Season::new(year),
        tier: LeagueTier::Premier,
        wins,
        losses,
        ties: 0,
        points_for: pf,
        points_against: pf - 50.0,
        rank,
        high_game: None,
        low_game: None,
        playoff_finish: None,
        power_rating: None,
        team_name: None,
    }
}

/// A full 12-team group with `target` placed at `rank`.
fn twelve_team_group(year: u16, target: SeasonStanding) -> Vec<SeasonStanding> {
    let mut group = vec![target.clone()];
    for rank in (1..=12).filter(|r| *r != target.rank) {
        group.push(standing(&format!("filler-{}", rank), year, rank, 7, 6, 1300.0));
    }
    group
}

fn empty_resolver() -> IdentityResolver {
    IdentityResolver::default()
}

#[test]
fn test_two_season_career_scenario() {
    let mut standings = twelve_team_group(2022, standing("A", 2022, 1, 10, 3, 1500.0));
    standings.extend(twelve_team_group(2023, standing("A", 2023, 11, 4, 9, 1100.0)));

    let records = aggregate(&standings, &empty_resolver());
    let a = &records["A"];

    assert_eq!(a.total_wins, 14);
    assert_eq!(a.total_losses, 12);
    assert!((a.win_percentage - 53.846).abs() < 0.01);
    assert_eq!(a.first_place_finishes, 1);
    assert_eq!(a.last_place_finishes, 0);
    assert_eq!(a.average_season_rank, 6.0);
    assert_eq!(a.seasons_played, 2);
    assert_eq!(a.total_points_for, 2600.0);
    assert_eq!(a.point_differential, 100.0);
    assert_eq!(a.average_points_per_game, 100.0);
    assert_eq!(a.tier_seasons.get(&LeagueTier::Premier), Some(&2));
}

#[test]
fn test_season_history_is_newest_first() {
    let standings = vec![
        standing("A", 2019, 2, 9, 4, 1400.0),
        standing("A", 2023, 4, 8, 5, 1350.0),
        standing("A", 2021, 3, 8, 5, 1380.0),
    ];
    let records = aggregate(&standings, &empty_resolver());
    let years: Vec<u16> = records["A"]
        .season_history
        .iter()
        .map(|line| line.year.as_u16())
        .collect();
    assert_eq!(years, vec![2023, 2021, 2019]);
}

#[test]
fn test_aggregation_is_order_independent() {
    let mut standings = twelve_team_group(2021, standing("A", 2021, 3, 8, 5, 1401.37));
    standings.extend(twelve_team_group(2022, standing("A", 2022, 9, 5, 8, 1210.11)));
    standings.push(standing("B", 2020, 5, 7, 6, 1333.33));

    let forward = aggregate(&standings, &empty_resolver());
    standings.reverse();
    let reversed = aggregate(&standings, &empty_resolver());
    standings.rotate_left(7);
    let rotated = aggregate(&standings, &empty_resolver());

    assert_eq!(forward, reversed);
    assert_eq!(forward, rotated);
}

#[test]
fn test_zero_game_season_is_safe() {
    let standings = vec![standing("A", 2024, 1, 0, 0, 0.0)];
    let records = aggregate(&standings, &empty_resolver());
    let a = &records["A"];

    assert_eq!(a.win_percentage, 0.0);
    assert_eq!(a.average_points_per_game, 0.0);
    assert_eq!(a.average_season_rank, 0.0);
    assert!(!a.win_percentage.is_nan());
    assert_eq!(a.season_history[0].points_per_game, 0.0);
}

#[test]
fn test_zero_game_season_excluded_from_rank_average() {
    let standings = vec![
        standing("A", 2023, 4, 8, 5, 1300.0),
        standing("A", 2024, 12, 0, 0, 0.0),
    ];
    let records = aggregate(&standings, &empty_resolver());
    assert_eq!(records["A"].average_season_rank, 4.0);
}

#[test]
fn test_renamed_franchise_merges_into_one_record() {
    let resolver = IdentityResolver::new(vec![FranchiseIdentity {
        primary_id: "owner-1".to_string(),
        legacy_ids: vec![LegacyId {
            id: "legacy-owner-1".to_string(),
            era: Era::Legacy,
        }],
        display_name: "Current Name".to_string(),
        abbreviation: "CUR".to_string(),
        is_active: true,
    }])
    .unwrap();

    let mut old = standing("legacy-owner-1", 2018, 2, 9, 4, 1400.0);
    old.team_name = Some("Old Name".to_string());
    let new = standing("owner-1", 2024, 5, 7, 6, 1350.0);

    let records = aggregate(&[old, new], &resolver);
    assert_eq!(records.len(), 1);
    let record = &records["owner-1"];
    assert_eq!(record.seasons_played, 2);
    assert_eq!(record.total_wins, 16);
    assert_eq!(record.display_name, "Current Name");
    assert_eq!(record.season_history[1].team_name.as_deref(), Some("Old Name"));
}

#[test]
fn test_exactly_one_last_place_per_group() {
    let standings = twelve_team_group(2022, standing("A", 2022, 12, 1, 12, 1000.0));
    let records = aggregate(&standings, &empty_resolver());

    let last_place_total: u32 = records.values().map(|r| r.last_place_finishes).sum();
    assert_eq!(last_place_total, 1);
    assert_eq!(records["A"].last_place_finishes, 1);
}

#[test]
fn test_single_team_group_has_no_last_place() {
    let records = aggregate(&[standing("A", 2022, 1, 10, 3, 1500.0)], &empty_resolver());
    assert_eq!(records["A"].last_place_finishes, 0);
    assert_eq!(records["A"].first_place_finishes, 1);
}

#[test]
fn test_playoff_record_table() {
    assert_eq!(playoff_record(1), (2, 0));
    assert_eq!(playoff_record(2), (2, 1));
    assert_eq!(playoff_record(3), (1, 2));
    assert_eq!(playoff_record(4), (1, 2));
    assert_eq!(playoff_record(5), (0, 1));
    assert_eq!(playoff_record(6), (0, 1));
    assert_eq!(playoff_record(7), (0, 0));
    assert_eq!(playoff_record(0), (0, 0));
}

#[test]
fn test_playoff_finish_preferred_over_rank() {
    let mut champion = standing("A", 2021, 5, 8, 5, 1380.0);
    champion.playoff_finish = Some(1);
    let records = aggregate(&[champion], &empty_resolver());
    let a = &records["A"];

    assert_eq!(a.playoff_appearances, 1);
    assert_eq!((a.playoff_wins, a.playoff_losses), (2, 0));
    assert_eq!(a.championships, 1);
}

#[test]
fn test_rank_used_when_playoff_finish_missing() {
    let standings = vec![
        standing("A", 2020, 2, 10, 3, 1500.0),
        standing("A", 2021, 6, 7, 6, 1300.0),
        standing("A", 2022, 7, 6, 7, 1250.0),
    ];
    let records = aggregate(&standings, &empty_resolver());
    let a = &records["A"];

    assert_eq!(a.playoff_appearances, 2);
    assert_eq!(a.playoff_wins, 2);
    assert_eq!(a.playoff_losses, 2);
    assert_eq!(a.championships, 0);
}

#[test]
fn test_non_qualifier_gets_no_playoff_record() {
    let mut outside = standing("A", 2021, 8, 6, 7, 1250.0);
    outside.playoff_finish = Some(1);
    let records = aggregate(&[outside], &empty_resolver());
    assert_eq!(records["A"].playoff_appearances, 0);
    assert_eq!(records["A"].playoff_wins, 0);
    assert_eq!(records["A"].championships, 0);
}

#[test]
fn test_high_low_and_power_rating() {
    let mut first = standing("A", 2021, 3, 8, 5, 1380.0);
    first.high_game = Some(171.2);
    first.low_game = Some(72.4);
    first.power_rating = Some(64.0);
    let mut second = standing("A", 2022, 4, 8, 5, 1390.0);
    second.high_game = Some(158.9);
    second.low_game = Some(65.0);
    second.power_rating = Some(70.0);
    let third = standing("B", 2022, 5, 7, 6, 1290.0);

    let records = aggregate(&[first, second, third], &empty_resolver());
    assert_eq!(records["A"].high_game, Some(171.2));
    assert_eq!(records["A"].low_game, Some(65.0));
    assert_eq!(records["A"].average_power_rating, Some(67.0));
    assert_eq!(records["B"].average_power_rating, None);
    assert_eq!(records["B"].high_game, None);
}

#[test]
fn test_ties_count_as_games_not_losses() {
    let mut tied = standing("A", 2021, 4, 6, 6, 1300.0);
    tied.ties = 1;
    let records = aggregate(&[tied], &empty_resolver());
    let a = &records["A"];
    assert_eq!(a.win_percentage, 50.0);
    assert_eq!(a.average_points_per_game, 100.0);
}

#[test]
fn test_leaderboard_orders_and_breaks_ties() {
    let standings = vec![
        standing("zeta", 2022, 2, 9, 4, 1400.0),
        standing("alpha", 2022, 3, 9, 4, 1390.0),
        standing("mid", 2022, 1, 11, 2, 1500.0),
    ];
    let records = aggregate(&standings, &empty_resolver());

    let by_pct: Vec<&str> = leaderboard(&records, CareerMetric::WinPercentage)
        .iter()
        .map(|r| r.primary_id.as_str())
        .collect();
    assert_eq!(by_pct, vec!["mid", "alpha", "zeta"]);

    let by_rank: Vec<&str> = leaderboard(&records, CareerMetric::AverageRank)
        .iter()
        .map(|r| r.primary_id.as_str())
        .collect();
    assert_eq!(by_rank, vec!["mid", "zeta", "alpha"]);
}

#[test]
fn test_head_to_head_merges_legacy_ids() {
    let resolver = IdentityResolver::new(vec![FranchiseIdentity {
        primary_id: "b".to_string(),
        legacy_ids: vec![LegacyId {
            id: "legacy-b".to_string(),
            era: Era::Legacy,
        }],
        display_name: "B".to_string(),
        abbreviation: "B".to_string(),
        is_active: true,
    }])
    .unwrap();

    let matchup = |week: u16, home: &str, away: &str, hp: f64, ap: f64| MatchupResult {
        year: Season::new(2023),
        week: crate::cli::types::Week::new(week),
        home_id: home.to_string(),
        away_id: away.to_string(),
        home_points: hp,
        away_points: ap,
    };
    let matchups = vec![
        matchup(1, "a", "b", 120.0, 100.0),
        matchup(5, "legacy-b", "a", 130.0, 90.0),
        matchup(9, "a", "b", 101.5, 101.5),
    ];

    let records = head_to_head(&matchups, &resolver);
    assert_eq!(records.len(), 1);
    let record = &records[&("a".to_string(), "b".to_string())];
    assert_eq!((record.a_wins, record.b_wins, record.ties), (1, 1, 1));
    assert_eq!(record.a_points, 311.5);
    assert_eq!(record.b_points, 331.5);
}
