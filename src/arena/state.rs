use tracing::info;

use crate::character::Gladiator;
use crate::combat::{build_opponent, resolve_battle, BattleOutcome, Opponent, StrikeRoll};
use crate::core::constants::{REST_GOLD, SCOREBOARD_RECENT};
use crate::core::progression::{apply_battle_results, BattleRecord};

/// Everything a session owns: the gladiator, the battle history, and the
/// number of the next battle. Passed explicitly to every operation.
#[derive(Debug, Clone)]
pub struct ArenaState {
    pub gladiator: Gladiator,
    history: Vec<BattleRecord>,
    battle_number: u32,
}

/// What a single fight produced, for the caller to report.
#[derive(Debug, Clone)]
pub struct FightReport {
    pub opponent: Opponent,
    pub outcome: BattleOutcome,
    pub record: BattleRecord,
}

impl Default for ArenaState {
    fn default() -> Self {
        Self::new(Gladiator::default())
    }
}

impl ArenaState {
    pub fn new(gladiator: Gladiator) -> Self {
        Self {
            gladiator,
            history: Vec::new(),
            battle_number: 1,
        }
    }

    /// 1-based number of the battle the menu is offering.
    pub fn battle_number(&self) -> u32 {
        self.battle_number
    }

    pub fn current_opponent(&self) -> Opponent {
        build_opponent(self.battle_number)
    }

    /// Full history, oldest first.
    pub fn history(&self) -> &[BattleRecord] {
        &self.history
    }

    /// Up to `SCOREBOARD_RECENT` records, most recent first.
    pub fn recent_records(&self) -> impl Iterator<Item = &BattleRecord> {
        self.history.iter().rev().take(SCOREBOARD_RECENT)
    }

    /// Runs the offered battle: generate, resolve, apply, record, advance.
    pub fn fight<S: StrikeRoll + ?Sized>(&mut self, strikes: &mut S) -> FightReport {
        let opponent = self.current_opponent();
        let outcome = resolve_battle(&self.gladiator, &opponent, strikes);
        let record = apply_battle_results(&mut self.gladiator, &opponent, &outcome, self.battle_number);
        self.history.push(record.clone());
        self.battle_number += 1;

        FightReport {
            opponent,
            outcome,
            record,
        }
    }

    /// Resets the win streak and pays the rest tribute. No cost, no cooldown.
    pub fn rest(&mut self) {
        self.gladiator.win_streak = 0;
        self.gladiator.gold = self.gladiator.gold.saturating_add(REST_GOLD);
        info!(gold = self.gladiator.gold, "gladiator rested");
    }
}
