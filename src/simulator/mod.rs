//! Headless balance simulator.
//!
//! Plays many complete sessions without a console to measure:
//! - Win rate and fight length as the arena tiers up
//! - How fast gladiators level and how much gold they hold
//! - Whether buying gear or resting after defeats pays off
//!
//! Sessions run through `ArenaState`, so results match real play.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, SimConfigError, MAX_RUNS};
pub use report::{RunStats, SimReport};
pub use runner::{buy_affordable_gear, run_simulation, simulate_single_run};
