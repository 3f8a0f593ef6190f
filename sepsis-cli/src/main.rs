//! # Sepsis CLI - Target Prioritization Pipeline
//!
//! Scores the sepsis host gene signature, ranks the targets and writes the
//! ranked target and compound tables.
//!
//! ## Usage
//!
//! ```bash
//! # Run against the current directory
//! sepsis
//!
//! # Run against another project checkout
//! sepsis --root /srv/sepsis-hdt
//!
//! # Show the top 25 targets, scoring on 4 threads
//! sepsis --top 25 --threads 4
//! ```
//!
//! ## Options
//!
//! - `-r, --root <DIR>`: Project root holding `data/` (default: `.`)
//! - `-n, --top <N>`: Targets listed in the report (default: 15)
//! - `-j, --threads <N>`: Scoring threads (default: all cores)
//! - `-q, --quiet`: Write the tables without printing the report
//!
//! ## Files
//!
//! - reads `<root>/data/gene_signature.csv`
//! - writes `<root>/outputs/tables/targets_ranked.csv`
//! - writes `<root>/outputs/tables/compounds_ranked.csv`
//!
//! Log verbosity follows `SEPSIS_LOG` (an `EnvFilter` directive) when set.

use clap::{Arg, ArgAction, Command, value_parser};
use sepsis_core::config::SepsisConfig;
use sepsis_core::output::write_report;
use sepsis_core::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn command() -> Command {
    Command::new("sepsis")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sepsis host-directed-therapy target prioritization")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value(".")
                .help("Project root containing data/gene_signature.csv"),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("15")
                .help("Number of targets listed in the report"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Scoring threads (default: all cores)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
}

fn init_tracing(quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if quiet { "error" } else { "info" };
    let filter = EnvFilter::try_from_env("SEPSIS_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {e}"))?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Parses command-line arguments, runs the pipeline and prints the report
/// to stdout unless `--quiet` is given.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = command().get_matches();

    let quiet = matches.get_flag("quiet");
    init_tracing(quiet)?;

    let mut config = SepsisConfig {
        quiet,
        num_threads: matches.get_one::<usize>("threads").copied(),
        ..Default::default()
    };
    if let Some(root) = matches.get_one::<PathBuf>("root") {
        config.root = root.clone();
    }
    if let Some(&top_n) = matches.get_one::<usize>("top") {
        config.top_n = top_n;
    }
    if config.num_threads == Some(0) {
        return Err("Invalid thread count: must be at least 1".into());
    }

    let prioritizer = TargetPrioritizer::new(config);
    let results = prioritizer.run()?;

    if !prioritizer.config.quiet {
        let mut writer = BufWriter::new(io::stdout());
        write_report(&mut writer, &results, prioritizer.config.top_n)?;
        writer.flush()?;
    }

    Ok(())
}
