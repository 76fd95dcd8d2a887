//! Out-of-order pipeline simulator CLI.
//!
//! This binary runs a program through the pipeline model and writes the per-cycle
//! state trace. It performs:
//! 1. **Load:** Decodes the input program (a JSON array of instruction strings).
//! 2. **Run:** Simulates cycle by cycle until the pipeline drains.
//! 3. **Trace:** Writes one state snapshot per cycle (plus the boot state) as JSON.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing_subscriber::EnvFilter;

use oosim_core::sim::trace::write_json;
use oosim_core::stats::STATS_SECTIONS;
use oosim_core::{Config, Program, SimError, SimStats, Simulator, StateSnapshot};

#[derive(Parser, Debug)]
#[command(
    name = "oosim",
    author,
    version,
    about = "Cycle-by-cycle out-of-order pipeline simulator",
    long_about = "Run an integer program through a 4-wide out-of-order pipeline model and dump the state of every cycle.\n\nExamples:\n  oosim tests/input.json trace.json\n  oosim input.json trace.json --stats -v\n  oosim input.json trace.json --stats-sections summary,recovery\n  oosim input.json trace.json --config wide.json --max-cycles 10000"
)]
struct Cli {
    /// Program to simulate (JSON array of instruction strings).
    input: PathBuf,

    /// Destination of the per-cycle state trace (JSON array).
    output: PathBuf,

    /// Pipeline configuration (JSON); omitted fields use the defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort if the pipeline has not drained after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print run statistics to stdout.
    #[arg(long)]
    stats: bool,

    /// Print only these statistics sections (comma-separated); implies --stats.
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats_sections: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(stats) => {
            if cli.stats || !cli.stats_sections.is_empty() {
                stats.print_sections(&cli.stats_sections);
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the program and configuration, simulates, and writes the trace.
///
/// The trace collected so far is written even when the run fails part-way.
fn run(cli: &Cli) -> Result<SimStats, SimError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }

    let program = Program::load(&cli.input)?;
    let mut sim = Simulator::new(program, config)?;
    let mut trace: Vec<StateSnapshot> = Vec::new();
    let result = sim.run(&mut trace);
    write_json(&cli.output, &trace)?;
    result
}

/// Reads and validates a JSON configuration file.
fn load_config(path: &Path) -> Result<Config, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text)
}
