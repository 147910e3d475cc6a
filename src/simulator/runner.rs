//! Main simulation runner. Plays whole sessions through `ArenaState`, the
//! same code path the interactive game uses, minus the console.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::arena::ArenaState;
use crate::combat::StrikeRoll;
use crate::core::progression::BattleResult;
use crate::shop::{buy_entry, catalog};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::new();

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        debug!(
            run = run_idx + 1,
            victories = run.victories,
            defeats = run.defeats,
            level = run.final_level,
            "run finished"
        );
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

/// Plays one session of `battles_per_run` battles with the autopilot.
pub fn simulate_single_run<S: StrikeRoll + ?Sized>(config: &SimConfig, strikes: &mut S) -> RunStats {
    let mut state = ArenaState::default();
    let mut stats = RunStats::default();

    for _ in 0..config.battles_per_run {
        if config.buy_gear {
            buy_affordable_gear(&mut state);
        }

        let report = state.fight(strikes);
        stats.total_rounds += u64::from(report.record.rounds);
        match report.record.result {
            BattleResult::Victory => {
                stats.victories += 1;
                stats.longest_streak = stats.longest_streak.max(state.gladiator.win_streak);
            }
            BattleResult::Defeat => {
                stats.defeats += 1;
                if stats.first_defeat.is_none() {
                    stats.first_defeat = Some(report.record.number);
                }
                if config.rest_after_loss {
                    state.rest();
                }
            }
        }
    }

    stats.final_level = state.gladiator.level;
    stats.final_gold = state.gladiator.gold;
    stats.items_owned = state.gladiator.equipment.len() as u32;
    stats
}

/// Buys the cheapest unowned item the gladiator can pay for, repeatedly.
/// Returns how many items were bought.
pub fn buy_affordable_gear(state: &mut ArenaState) -> u32 {
    let mut bought = 0;
    loop {
        let gladiator = &state.gladiator;
        let cheapest = catalog()
            .iter()
            .filter(|entry| !gladiator.owns(entry.name) && gladiator.gold >= entry.stats.cost)
            .min_by_key(|entry| entry.stats.cost);

        let Some(entry) = cheapest else {
            return bought;
        };
        if buy_entry(&mut state.gladiator, entry).is_err() {
            return bought;
        }
        bought += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{FixedStrikes, StrikeValue};

    #[test]
    fn test_buy_affordable_gear_cheapest_first() {
        let mut state = ArenaState::default();
        state.gladiator.gold = 80;
        // 30 + 45 = 75, then 5 left buys nothing
        assert_eq!(buy_affordable_gear(&mut state), 2);
        assert!(state.gladiator.owns("Bronze Sword"));
        assert!(state.gladiator.owns("Iron Shield"));
        assert_eq!(state.gladiator.gold, 5);
        assert_eq!(buy_affordable_gear(&mut state), 0);
    }

    #[test]
    fn test_buy_affordable_gear_buys_everything_when_rich() {
        let mut state = ArenaState::default();
        state.gladiator.gold = 1_000;
        assert_eq!(buy_affordable_gear(&mut state), 5);
        assert_eq!(state.gladiator.gold, 1_000 - 335);
    }

    #[test]
    fn test_single_run_with_fixed_losses() {
        let config = SimConfig {
            rest_after_loss: true,
            ..SimConfig::bare_hands(1, 3)
        };
        let mut strikes = FixedStrikes::new(StrikeValue::Exact(0), StrikeValue::Highest);
        let stats = simulate_single_run(&config, &mut strikes);
        assert_eq!(stats.victories, 0);
        assert_eq!(stats.defeats, 3);
        assert_eq!(stats.first_defeat, Some(1));
        assert_eq!(stats.longest_streak, 0);
        // Every defeat empties the purse before the rest tribute refills it
        assert_eq!(stats.final_gold, 5);
        assert_eq!(stats.final_level, 1);
    }

    #[test]
    fn test_single_run_midpoint_first_battle_is_a_win() {
        let config = SimConfig::bare_hands(1, 1);
        let stats = simulate_single_run(&config, &mut FixedStrikes::midpoint());
        assert_eq!(stats.victories, 1);
        assert_eq!(stats.final_gold, 23);
        assert_eq!(stats.total_rounds, 6);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.first_defeat, None);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig {
            num_runs: 5,
            battles_per_run: 20,
            seed: Some(42),
            ..Default::default()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.run_stats, b.run_stats);
        assert_eq!(a.num_runs, 5);
        assert_eq!(a.total_battles, 100);
    }
}
