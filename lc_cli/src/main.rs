//! League scheduling and playoff bracket tool.
//!
//! Loads a league description, runs one command against it and prints the
//! result as text or JSON.

use std::path::PathBuf;

use anyhow::{Error, bail};
use chrono::NaiveDate;
use lc_cli::{
    commands::{BracketOptions, ScheduleOptions, load_league, run_bracket, run_schedule},
    config::CliConfig,
    logging,
};
use league_core::{PlayDays, schedule::parse_date};
use log::info;
use pico_args::Arguments;
use rand::{SeedableRng, rngs::StdRng};

const HELP: &str = "\
Schedule a league season and run its playoff bracket

USAGE:
  lc_cli schedule --league FILE --start DATE [--days DAYS] [--json]
  lc_cli bracket  --league FILE --date DATE [--top N] [--simulate] [--seed N] [--json]

COMMANDS:
  schedule                 Generate the double round-robin regular season
  bracket                  Seed teams by record and build the playoff bracket

OPTIONS:
  --league     FILE        League description (JSON: name, teams[name, wins, losses])
  --start      DATE        First possible game date, YYYY-MM-DD
  --days       DAYS        Comma separated play days, e.g. tue,sat  [default: env LEAGUE_PLAY_DAYS or start weekday]
  --date       DATE        First round date of the bracket, YYYY-MM-DD
  --top        N           Only the best N teams qualify  [default: all]
  --seed       N           RNG seed for --simulate  [default: env SIM_SEED or random]

FLAGS:
  --simulate               Play out the bracket with random scores
  --json                   Print JSON instead of text
  -v, --verbose            Debug logging
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                     Log filter, overrides --verbose
  LEAGUE_ROUND_SPACING_DAYS    Days between bracket rounds  [default: 7]
  LEAGUE_MAX_DATE_SEARCH_DAYS  Longest gap between season dates  [default: 3660]
  SIM_MIN_SCORE / SIM_MAX_SCORE  Simulated score range  [default: 80-120]
  (A .env file in the working directory is loaded first)
";

enum Command {
    Schedule { start: NaiveDate, days: PlayDays },
    Bracket {
        date: NaiveDate,
        top: Option<usize>,
        simulate: bool,
    },
}

struct Args {
    command: Command,
    league: PathBuf,
    json: bool,
    verbose: bool,
    seed: Option<u64>,
}

fn parse_args(mut pargs: Arguments) -> Result<Args, Error> {
    let Some(subcommand) = pargs.subcommand()? else {
        bail!("Missing command, see --help");
    };

    let command = match subcommand.as_str() {
        "schedule" => Command::Schedule {
            start: pargs.value_from_fn("--start", parse_date)?,
            days: pargs
                .opt_value_from_fn("--days", PlayDays::parse)?
                .unwrap_or_default(),
        },
        "bracket" => Command::Bracket {
            date: pargs.value_from_fn("--date", parse_date)?,
            top: pargs.opt_value_from_str("--top")?,
            simulate: pargs.contains("--simulate"),
        },
        other => bail!("Unknown command {other:?}, see --help"),
    };

    let args = Args {
        command,
        league: pargs.value_from_str("--league")?,
        json: pargs.contains("--json"),
        verbose: pargs.contains(["-v", "--verbose"]),
        seed: pargs.opt_value_from_str("--seed")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("Unexpected arguments: {remaining:?}");
    }
    Ok(args)
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = parse_args(pargs)?;
    logging::init(args.verbose);

    let config = CliConfig::from_env(args.seed)?;
    let mut league = load_league(&args.league, &config.league)?;
    info!(
        "Loaded {} ({} teams) from {}",
        league.name(),
        league.team_count(),
        args.league.display()
    );

    let output = match args.command {
        Command::Schedule { start, days } => {
            let options = ScheduleOptions {
                start,
                play_days: days,
                json: args.json,
            };
            run_schedule(&mut league, &options)?
        }
        Command::Bracket {
            date,
            top,
            simulate,
        } => {
            let options = BracketOptions {
                first_round: date,
                top,
                simulate,
                json: args.json,
            };
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            run_bracket(&mut league, &options, &config.score_range(), &mut rng)?
        }
    };

    println!("{output}");
    Ok(())
}
