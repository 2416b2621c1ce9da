//! Bracket lifecycle tests: seeding, byes, advancement and results.

use chrono::NaiveDate;
use league_core::{
    Advancement, BracketBuilder, BracketSeeder, LeagueConfig, LeagueError, MatchRef, MatchState,
    Participant, Side, Team,
};
use league_core::bracket::RoundLabel;

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn standings() -> Vec<Team> {
    vec![
        Team::with_record("Wolves", 4, 8),
        Team::with_record("Hawks", 11, 1),
        Team::with_record("Foxes", 6, 6),
        Team::with_record("Owls", 9, 3),
        Team::with_record("Bears", 6, 5),
        Team::with_record("Stags", 9, 2),
    ]
}

#[test]
fn test_six_team_bracket_lifecycle() {
    let seeds = BracketSeeder::seed(&standings()).unwrap();
    let seed_names: Vec<&str> = seeds.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        seed_names,
        vec!["Hawks", "Stags", "Owls", "Bears", "Foxes", "Wolves"]
    );

    let mut bracket = BracketBuilder::default().build(&seeds, march(1)).unwrap();
    assert_eq!(bracket.round_count(), 3);
    assert_eq!(bracket.round_label(1), RoundLabel::Quarterfinals);
    assert_eq!(bracket.round_label(2), RoundLabel::Semifinals);
    assert_eq!(bracket.round_label(3), RoundLabel::Final);

    // Two byes, two real games
    let opening = bracket.rounds()[0].games();
    assert_eq!(opening.iter().filter(|g| g.is_bye()).count(), 2);
    assert_eq!(opening.iter().filter(|g| !g.has_result()).count(), 2);

    // Bye winners already meet in the first semifinal
    let semi = bracket.get(MatchRef::new(1, 0)).unwrap();
    assert_eq!(semi.home(), &Participant::team("Hawks"));
    assert_eq!(semi.away(), &Participant::team("Stags"));
    assert_eq!(semi.date(), march(8));
    assert_eq!(
        bracket.get(MatchRef::new(1, 1)).unwrap().state(),
        MatchState::Unscheduled
    );

    // Owls vs Wolves, Bears vs Foxes
    assert_eq!(
        bracket.record_and_advance(MatchRef::new(0, 2), 77, 80).unwrap(),
        Advancement::Advanced {
            target: MatchRef::new(1, 1),
            side: Side::Home
        }
    );
    bracket.record_and_advance(MatchRef::new(0, 3), 68, 59).unwrap();

    let semi = bracket.get(MatchRef::new(1, 1)).unwrap();
    assert_eq!(semi.home(), &Participant::team("Wolves"));
    assert_eq!(semi.away(), &Participant::team("Bears"));

    bracket.record_and_advance(MatchRef::new(1, 0), 90, 82).unwrap();
    bracket.record_and_advance(MatchRef::new(1, 1), 71, 73).unwrap();
    assert!(!bracket.is_complete());
    assert_eq!(bracket.pending_games().len(), 1);

    assert_eq!(
        bracket.record_and_advance(MatchRef::new(2, 0), 64, 66).unwrap(),
        Advancement::FinalRound
    );
    assert!(bracket.is_complete());
    assert_eq!(bracket.champion(), Some("Bears"));
    assert_eq!(bracket.runner_up(), Some("Hawks"));
    assert!(bracket.results_summary().contains("Champion: Bears"));
}

#[test]
fn test_result_cannot_be_entered_twice() {
    let seeds = BracketSeeder::seed(&standings()).unwrap();
    let mut bracket = BracketBuilder::default().build(&seeds, march(1)).unwrap();

    bracket.record_and_advance(MatchRef::new(0, 2), 80, 70).unwrap();
    let err = bracket
        .record_and_advance(MatchRef::new(0, 2), 70, 80)
        .unwrap_err();
    assert!(matches!(err, LeagueError::ResultAlreadyRecorded(_)));

    // Bye games are already decided
    let err = bracket.record_result(MatchRef::new(0, 0), 1, 0).unwrap_err();
    assert!(matches!(err, LeagueError::UnresolvedMatchup(_)));
}

#[test]
fn test_top_four_of_six() {
    let seeds = BracketSeeder::seed_top(&standings(), 4).unwrap();
    let bracket = BracketBuilder::default().build(&seeds, march(1)).unwrap();

    let matchups: Vec<String> = bracket.rounds()[0]
        .games()
        .iter()
        .map(|g| format!("{} vs {}", g.home(), g.away()))
        .collect();
    assert_eq!(matchups, vec!["Hawks vs Bears", "Stags vs Owls"]);
    assert!(bracket.rounds()[0].games().iter().all(|g| !g.is_bye()));
}

#[test]
fn test_round_spacing_from_config() {
    let config = LeagueConfig {
        round_spacing_days: 2,
        ..Default::default()
    };
    let seeds = BracketSeeder::seed(&standings()).unwrap();
    let bracket = BracketBuilder::new(config).build(&seeds, march(1)).unwrap();

    let dates: Vec<NaiveDate> = bracket.rounds().iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![march(1), march(3), march(5)]);
}

#[test]
fn test_bracket_survives_json() {
    let seeds = BracketSeeder::seed(&standings()).unwrap();
    let mut bracket = BracketBuilder::default().build(&seeds, march(1)).unwrap();
    bracket.record_and_advance(MatchRef::new(0, 2), 80, 70).unwrap();

    let json = serde_json::to_string(&bracket).unwrap();
    assert!(json.contains("\"BYE\""));
    assert!(json.contains("\"TBD\""));

    let restored: league_core::Bracket = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bracket);
}
