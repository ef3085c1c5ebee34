//! `goldbach` command-line entry point
//!
//! Wraps a [`Database`] with argument parsing, logging setup and per-phase
//! timing.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use goldbach_core::GoldbachError;
use goldbach_engine::{Database, DurabilityMode, GoldbachConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::Level;

use output::{CheckOutput, Format, InfoView, PairsOutput, PrimesOutput, RunOutput};

/// Default bound for `run` when none is given
const DEFAULT_RUN_BOUND: u64 = 10_000;

#[derive(Debug, Parser)]
#[command(name = "goldbach", version, about = "Incremental prime sieve and Goldbach pair enumeration")]
struct Cli {
    /// Data directory holding the prime and pair logs
    #[arg(long, short = 'd', default_value = "goldbach-data", global = true)]
    data_dir: PathBuf,

    /// Override the configured durability mode (buffered | always)
    #[arg(long, global = true)]
    durability: Option<DurabilityMode>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ensure primes are known up to N
    Primes {
        /// Upper bound (inclusive)
        n: u64,
    },
    /// Enumerate Goldbach pairs for every even number up to N
    Pairs {
        /// Upper bound (inclusive, at least 4)
        n: u64,
    },
    /// Primes then pairs up to N, timing each phase
    Run {
        /// Upper bound (inclusive, at least 4)
        #[arg(default_value_t = DEFAULT_RUN_BOUND)]
        n: u64,
    },
    /// Show what the data directory holds
    Info,
    /// Report whether X is prime (X must be within the known bound)
    Check {
        /// Value to test
        x: u64,
    },
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            Format::Text
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            if let Some(GoldbachError::OutOfRange { .. }) = err.downcast_ref::<GoldbachError>() {
                eprintln!("hint: run `goldbach primes <N>` first to extend the known bound");
            }
            ExitCode::FAILURE
        }
    }
}

fn open_database(cli: &Cli) -> Result<Database> {
    let mut config = GoldbachConfig::load(&cli.data_dir)
        .with_context(|| format!("loading config from {}", cli.data_dir.display()))?;
    if let Some(mode) = cli.durability {
        config = config.with_durability(mode);
    }
    Database::open_with_config(&cli.data_dir, config)
        .with_context(|| format!("opening data directory {}", cli.data_dir.display()))
}

fn execute(cli: &Cli) -> Result<()> {
    let mut db = open_database(cli)?;
    let format = cli.format();

    match cli.command {
        Command::Primes { n } => {
            let started = Instant::now();
            let new_primes = db.ensure_primes_up_to(n)?;
            format.print(&PrimesOutput {
                known_bound: db.known_bound(),
                new_primes,
                total_primes: db.primes().len(),
                elapsed_ms: started.elapsed().as_millis(),
            })?;
        }
        Command::Pairs { n } => {
            let started = Instant::now();
            let report = db.enumerate_goldbach_up_to(n)?;
            format.print(&PairsOutput {
                up_to: n,
                report,
                elapsed_ms: started.elapsed().as_millis(),
            })?;
        }
        Command::Run { n } => {
            if n < goldbach_core::MIN_GOLDBACH_EVEN {
                return Err(GoldbachError::InvalidRange { up_to: n }.into());
            }
            let started = Instant::now();
            let new_primes = db.ensure_primes_up_to(n)?;
            let primes_ms = started.elapsed().as_millis();

            let started = Instant::now();
            let report = db.enumerate_goldbach_up_to(n)?;
            let pairs_ms = started.elapsed().as_millis();

            format.print(&RunOutput {
                up_to: n,
                new_primes,
                total_primes: db.primes().len(),
                report,
                primes_ms,
                pairs_ms,
            })?;
        }
        Command::Info => {
            format.print(&InfoView(&db.info()?))?;
        }
        Command::Check { x } => {
            format.print(&CheckOutput {
                value: x,
                is_prime: db.is_prime(x)?,
            })?;
        }
    }
    Ok(())
}
