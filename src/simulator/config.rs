//! Simulation configuration.

use thiserror::Error;

/// Upper bound on sessions in one simulation.
pub const MAX_RUNS: u32 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimConfigError {
    #[error("at least one run is required")]
    NoRuns,
    #[error("at most {max} runs are allowed, got {0}", max = MAX_RUNS)]
    TooManyRuns(u32),
    #[error("at least one battle per run is required")]
    NoBattles,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of independent sessions to play
    pub num_runs: u32,

    /// Battles fought in each session
    pub battles_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Buy the cheapest affordable gear before every battle
    pub buy_gear: bool,

    /// Rest once after every defeat
    pub rest_after_loss: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            battles_per_run: 40,
            seed: None,
            buy_gear: true,
            rest_after_loss: false,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimConfigError> {
        if self.num_runs == 0 {
            return Err(SimConfigError::NoRuns);
        }
        if self.num_runs > MAX_RUNS {
            return Err(SimConfigError::TooManyRuns(self.num_runs));
        }
        if self.battles_per_run == 0 {
            return Err(SimConfigError::NoBattles);
        }
        Ok(())
    }

    /// Fighting only, no shopping or resting
    pub fn bare_hands(num_runs: u32, battles_per_run: u32) -> Self {
        Self {
            num_runs,
            battles_per_run,
            buy_gear: false,
            ..Default::default()
        }
    }
}
