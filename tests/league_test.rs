//! Integration tests for the aggregation engine through the public API

use std::path::Path;
use union_ffl::{
    config::parse_config,
    league::{aggregate, head_to_head, leaderboard, MatchupResult, Resolution},
    CareerMetric, LeagueTier, Season, SeasonStanding, Week,
};

const ROSTER: &str = r#"
[league]
name = "Union"
live_season = 2025

[[franchises]]
primary_id = "734122"
display_name = "Gridiron Gang"
legacy_ids = [
    { id = "legacy-17", era = "legacy" },
    { id = "historical-mason", era = "historical" },
]

[[franchises]]
primary_id = "880011"
display_name = "Blitz Brigade"
"#;

fn standing(id: &str, year: u16, tier: LeagueTier, rank: u32, wins: u32, pf: f64) -> SeasonStanding {
    SeasonStanding {
        franchise_id: id.to_string(),
        year: Season::new(year),
        tier,
        wins,
        losses: 14 - wins,
        ties: 0,
        points_for: pf,
        points_against: 1500.0,
        rank,
        high_game: None,
        low_game: None,
        playoff_finish: None,
        power_rating: None,
        team_name: None,
    }
}

fn history() -> Vec<SeasonStanding> {
    vec![
        standing("legacy-17", 2016, LeagueTier::National, 1, 11, 1620.7),
        standing("880011", 2016, LeagueTier::National, 2, 9, 1555.1),
        standing("historical-mason", 2020, LeagueTier::Masters, 2, 9, 1588.3),
        standing("880011", 2020, LeagueTier::Masters, 1, 12, 1701.9),
        standing("734122", 2024, LeagueTier::Premier, 2, 8, 1499.99),
        standing("880011", 2024, LeagueTier::Premier, 1, 10, 1610.45),
    ]
}

#[test]
fn test_every_era_merges_into_one_career() {
    let config = parse_config(ROSTER, Path::new(".")).unwrap();
    assert_eq!(
        config.resolver.resolve("historical-mason"),
        Resolution::Legacy("734122")
    );

    let records = aggregate(&history(), &config.resolver);
    assert_eq!(records.len(), 2);

    let gang = &records["734122"];
    assert_eq!(gang.seasons_played, 3);
    assert_eq!(gang.tier_seasons.len(), 3);
    assert_eq!(gang.first_place_finishes, 1);
    assert_eq!(gang.second_place_finishes, 2);
    assert_eq!(gang.championships, 1);
    assert_eq!(gang.season_history[0].year, Season::new(2024));
}

#[test]
fn test_aggregate_ignores_input_order() {
    let config = parse_config(ROSTER, Path::new(".")).unwrap();
    let forward = aggregate(&history(), &config.resolver);

    let mut reversed = history();
    reversed.reverse();
    assert_eq!(aggregate(&reversed, &config.resolver), forward);

    let mut rotated = history();
    rotated.rotate_left(2);
    assert_eq!(aggregate(&rotated, &config.resolver), forward);
}

#[test]
fn test_leaderboard_by_championships() {
    let config = parse_config(ROSTER, Path::new(".")).unwrap();
    let records = aggregate(&history(), &config.resolver);

    let board = leaderboard(&records, CareerMetric::Championships);
    assert_eq!(board[0].primary_id, "880011");
    assert_eq!(board[0].championships, 2);
}

#[test]
fn test_head_to_head_across_eras() {
    let config = parse_config(ROSTER, Path::new(".")).unwrap();
    let game = |year: u16, home: &str, away: &str, home_points: f64, away_points: f64| {
        MatchupResult {
            year: Season::new(year),
            week: Week::new(1),
            home_id: home.to_string(),
            away_id: away.to_string(),
            home_points,
            away_points,
        }
    };
    let matchups = vec![
        game(2016, "legacy-17", "880011", 120.0, 100.0),
        game(2024, "880011", "734122", 130.0, 90.0),
        game(2024, "734122", "880011", 95.0, 95.0),
    ];

    let records = head_to_head(&matchups, &config.resolver);
    let rivalry = &records[&("734122".to_string(), "880011".to_string())];
    assert_eq!(rivalry.a_wins, 1);
    assert_eq!(rivalry.b_wins, 1);
    assert_eq!(rivalry.ties, 1);
    assert_eq!(rivalry.a_points, 305.0);
}
