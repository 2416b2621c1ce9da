//! Integration tests for the CLI commands.
//!
//! Tests loading league files and running both commands end to end.

use chrono::NaiveDate;
use lc_cli::commands::{BracketOptions, ScheduleOptions, load_league, run_bracket, run_schedule};
use lc_cli::config::CliConfig;
use league_core::PlayDays;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

const LEAGUE_JSON: &str = r#"{
    "name": "Harbor League",
    "teams": [
        { "name": "Gulls", "wins": 9, "losses": 3 },
        { "name": "Pelicans", "wins": 7, "losses": 5 },
        { "name": "Herons", "wins": 7, "losses": 4 },
        { "name": "Terns", "wins": 2, "losses": 10 },
        { "name": "Ospreys", "wins": 5, "losses": 7 }
    ]
}"#;

/// Write `contents` to a file unique to this test and return its path
fn league_file(test: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lc_cli_{}_{test}.json", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_schedule_from_file() {
    let path = league_file("schedule", LEAGUE_JSON);
    let config = CliConfig::default();
    let mut league = load_league(&path, &config.league).unwrap();

    let options = ScheduleOptions {
        start: ymd(2025, 1, 1),
        play_days: PlayDays::parse("sat").unwrap(),
        json: false,
    };
    let out = run_schedule(&mut league, &options).unwrap();

    assert!(out.starts_with("Regular season for Harbor League: 20 games\n\n2025-01-04\n"));
    assert!(!out.contains("BYE"));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_bracket_from_file_json() {
    let path = league_file("bracket_json", LEAGUE_JSON);
    let config = CliConfig::default();
    let mut league = load_league(&path, &config.league).unwrap();

    let options = BracketOptions {
        first_round: ymd(2025, 4, 5),
        top: Some(4),
        simulate: true,
        json: true,
    };
    let mut rng = StdRng::seed_from_u64(2025);
    let out = run_bracket(&mut league, &options, &config.score_range(), &mut rng).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["league"], "Harbor League");
    assert_eq!(value["complete"], true);
    assert!(value["champion"].is_string());
    assert_ne!(value["champion"], value["runner_up"]);

    // Herons (7-4) outrank Pelicans (7-5), Terns miss the cut
    let opening = &value["bracket"]["rounds"][0]["games"];
    assert_eq!(opening[0]["home"], "Gulls");
    assert_eq!(opening[0]["away"], "Ospreys");
    assert_eq!(opening[1]["home"], "Herons");
    assert_eq!(opening[1]["away"], "Pelicans");
    assert!(!out.contains("Terns"));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_names_the_path() {
    let config = CliConfig::default();
    let err = load_league(
        std::path::Path::new("/nonexistent/league.json"),
        &config.league,
    )
    .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/league.json"));
}

#[test]
fn test_malformed_file() {
    let path = league_file("malformed", "{ \"name\": ");
    let config = CliConfig::default();
    let err = load_league(&path, &config.league).unwrap_err();
    assert!(format!("{err:#}").contains("Serialization error"));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_too_many_qualifiers() {
    let path = league_file("top_n", LEAGUE_JSON);
    let config = CliConfig::default();
    let mut league = load_league(&path, &config.league).unwrap();

    let options = BracketOptions {
        first_round: ymd(2025, 4, 5),
        top: Some(8),
        simulate: false,
        json: false,
    };
    let err = run_bracket(&mut league, &options, &config.score_range(), &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert!(err.to_string().contains("requested 8, available 5"));
    std::fs::remove_file(path).ok();
}
