//! Command implementations.
//!
//! Commands work on a loaded [`League`] and return the text to show;
//! printing is left to `main`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use league_core::{Bracket, League, LeagueConfig, LeagueResult, Match, MatchRef, PlayDays};
use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use std::fmt::Write as _;
use std::ops::RangeInclusive;
use std::path::Path;

/// Options for the `schedule` command
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    pub start: NaiveDate,
    pub play_days: PlayDays,
    pub json: bool,
}

/// Options for the `bracket` command
#[derive(Debug, Clone)]
pub struct BracketOptions {
    pub first_round: NaiveDate,
    pub top: Option<usize>,
    pub simulate: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct ScheduleReport<'a> {
    league: &'a str,
    games: &'a [Match],
}

#[derive(Serialize)]
struct BracketReport<'a> {
    league: &'a str,
    bracket: &'a Bracket,
    complete: bool,
    champion: Option<&'a str>,
    runner_up: Option<&'a str>,
}

/// Read and parse a league description file.
pub fn load_league(path: &Path, config: &LeagueConfig) -> Result<League> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read league file {}", path.display()))?;
    let league = League::from_json(&json, config.clone())
        .with_context(|| format!("Failed to load league from {}", path.display()))?;
    Ok(league)
}

/// Generate the regular season and render it.
pub fn run_schedule(league: &mut League, options: &ScheduleOptions) -> Result<String> {
    league.generate_schedule(&options.play_days, options.start)?;

    if options.json {
        let report = ScheduleReport {
            league: league.name(),
            games: league.games(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(
        out,
        "Regular season for {}: {} games",
        league.name(),
        league.games().len()
    )?;

    let mut current: Option<NaiveDate> = None;
    for game in league.games() {
        if current != Some(game.date()) {
            current = Some(game.date());
            writeln!(out, "\n{}", game.date())?;
        }
        writeln!(out, "  {} vs {}", game.home(), game.away())?;
    }
    Ok(out)
}

/// Seed, build and optionally play out the bracket, then render it.
pub fn run_bracket<R: Rng>(
    league: &mut League,
    options: &BracketOptions,
    scores: &RangeInclusive<u32>,
    rng: &mut R,
) -> Result<String> {
    league.create_bracket(options.top, options.first_round)?;

    if options.simulate {
        let played = simulate_playoffs(league, scores, rng)?;
        info!("Simulated {played} playoff games");
    }

    let bracket = league
        .bracket()
        .context("Bracket missing after creation")?;

    if options.json {
        let report = BracketReport {
            league: league.name(),
            bracket,
            complete: bracket.is_complete(),
            champion: bracket.champion(),
            runner_up: bracket.runner_up(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(format!("{bracket}{}", bracket.results_summary()))
}

/// Play every open bracket game with random, never tied, scores.
///
/// Returns the number of games played. `scores` must hold at least two
/// values.
pub fn simulate_playoffs<R: Rng>(
    league: &mut League,
    scores: &RangeInclusive<u32>,
    rng: &mut R,
) -> LeagueResult<usize> {
    let mut played = 0;

    loop {
        let pending: Vec<MatchRef> = league
            .bracket()
            .map(|bracket| {
                bracket
                    .pending_games()
                    .into_iter()
                    .map(|(at, _)| at)
                    .collect()
            })
            .unwrap_or_default();
        if pending.is_empty() {
            return Ok(played);
        }

        for at in pending {
            let (home, away) = random_scores(scores, rng);
            debug!("Simulating {at}: {home}-{away}");
            league.record_bracket_result(at, home, away)?;
            played += 1;
        }
    }
}

fn random_scores<R: Rng>(scores: &RangeInclusive<u32>, rng: &mut R) -> (u32, u32) {
    let home = rng.random_range(scores.clone());
    let mut away = rng.random_range(scores.clone());
    while away == home {
        away = rng.random_range(scores.clone());
    }
    (home, away)
}
