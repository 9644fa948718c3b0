//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use secret_santa::adapters::file::FileRoster;
use secret_santa::config::Settings;
use secret_santa::output::{DrawResult, ErrorResult, OutputMode};
use secret_santa::{Draw, RosterSource, SantaError};

/// secret-santa - Draw gift-exchange pairs
#[derive(Parser, Debug)]
#[command(
    name = "secret-santa",
    version,
    about = "Assign Secret Santa pairs.",
    long_about = "Assign Secret Santa pairs.\n\n\
                  Reads one participant per line and prints who gives to whom.\n\
                  Nobody draws themselves, and pairings listed in the exclusion\n\
                  file (giver,receiver per line) are never drawn."
)]
pub struct Cli {
    /// File of participants for Secret Santa. One per line.
    pub participants: PathBuf,

    /// Comma separated file of excluded pairings. One pairing per line.
    #[arg(long)]
    pub exclude: Option<PathBuf>,

    /// TOML settings file (max_attempts, seed)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shuffles to try before giving up
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Exit with a failure code when no draw is produced
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match execute(&cli) {
        Ok(draw) => {
            DrawResult::from(&draw).render(output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            debug!("Draw failed: {err:?}");
            ErrorResult::from(&err).render(output_mode)?;
            Ok(if cli.strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        },
    }
}

fn execute(cli: &Cli) -> Result<Draw, SantaError> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_overrides(cli.max_attempts, cli.seed)?;
    debug!("Settings: {settings:?}");

    let mut roster = FileRoster::new(&cli.participants);
    if let Some(path) = &cli.exclude {
        roster = roster.with_exclusions(path);
    }
    let roster = roster.load()?;

    let mut rng = settings.rng();
    settings.assigner().draw(&roster, &mut rng)
}
