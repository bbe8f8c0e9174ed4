//! fsmkit CLI
//!
//! Drives the library from the command line.
//!
//! # Commands
//!
//! - `mod3 [BITS]...`: evaluate bit-strings on the modulo-3 machine
//! - `threshold [--records FILE] [--min-recall R]`: pick the best threshold

use anyhow::Result;
use clap::{Parser, Subcommand};
use fsmkit::cli::{run_mod_three, run_threshold};
use fsmkit::threshold::DEFAULT_MIN_RECALL;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "fsmkit")]
#[command(version)]
#[command(about = "Deterministic finite-state-machine executor")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate binary strings on the modulo-3 machine
    Mod3 {
        /// Bit-strings to evaluate; runs the built-in cases when omitted
        bits: Vec<String>,
    },
    /// Pick the highest threshold meeting a recall floor
    Threshold {
        /// JSON array of records with threshold/TP/TN/FP/FN keys
        #[arg(long)]
        records: Option<PathBuf>,

        /// Minimum acceptable recall
        #[arg(long, default_value_t = DEFAULT_MIN_RECALL)]
        min_recall: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Mod3 { bits } => run_mod_three(&bits, &mut stdout),
        Commands::Threshold {
            records,
            min_recall,
        } => run_threshold(records.as_deref(), min_recall, &mut stdout),
    }
}
