//! Gladiator Arena Headless Balance Simulator
//!
//! Plays many sessions with an autopilot and reports win rates, levels,
//! and gold, using the same battle code as the interactive game.
//!
//! Usage:
//!   cargo run --bin arena-sim -- [OPTIONS]

use anyhow::Context;
use clap::Parser;
use gladiator_arena::simulator::{run_simulation, SimConfig};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arena-sim", about = "Gladiator Arena headless balance simulator")]
struct Cli {
    /// Number of sessions to simulate
    #[arg(long, default_value_t = SimConfig::default().num_runs)]
    runs: u32,

    /// Battles fought in each session
    #[arg(long, default_value_t = SimConfig::default().battles_per_run)]
    battles: u32,

    /// RNG seed; run N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Never visit the armory
    #[arg(long)]
    no_shop: bool,

    /// Rest once after every defeat
    #[arg(long)]
    rest_after_loss: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn to_config(&self) -> SimConfig {
        SimConfig {
            num_runs: self.runs,
            battles_per_run: self.battles,
            seed: self.seed,
            buy_gear: !self.no_shop,
            rest_after_loss: self.rest_after_loss,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();
    config.validate().context("invalid simulation settings")?;

    let report = run_simulation(&config);

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        let json = report.to_json().context("failed to serialize report")?;
        writeln!(stdout, "{json}").context("failed to write report")?;
    } else {
        writeln!(stdout, "{report}").context("failed to write report")?;
    }
    Ok(())
}
