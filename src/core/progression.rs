//! Applies battle outcomes to the gladiator and records them.

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::character::Gladiator;
use crate::combat::{BattleOutcome, Opponent};
use crate::core::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BattleResult {
    Victory,
    Defeat,
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleResult::Victory => write!(f, "Victory"),
            BattleResult::Defeat => write!(f, "Defeat"),
        }
    }
}

/// One line of arena history. Never modified after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleRecord {
    pub number: u32,
    pub opponent: String,
    pub result: BattleResult,
    /// Gold credited for the battle; zero on defeat.
    pub gold: u32,
    pub rounds: u32,
}

/// XP awarded for beating an opponent of the given tier.
pub fn victory_xp(tier: u32) -> u32 {
    WIN_XP_BASE + WIN_XP_PER_TIER * tier
}

/// Gold lost to a defeat before flooring at zero.
pub fn defeat_penalty(opponent: &Opponent) -> u32 {
    opponent.bounty / 2
}

/// Applies a resolved battle to the gladiator and returns its record.
pub fn apply_battle_results(
    gladiator: &mut Gladiator,
    opponent: &Opponent,
    outcome: &BattleOutcome,
    battle_number: u32,
) -> BattleRecord {
    let (result, gold) = if outcome.won {
        gladiator.win_streak += 1;
        gladiator.gold = gladiator.gold.saturating_add(outcome.gold_earned);
        let levels = gladiator.gain_xp(victory_xp(opponent.tier));
        if levels > 0 {
            info!(
                level = gladiator.level,
                power = gladiator.power,
                max_health = gladiator.max_health,
                "gladiator leveled up"
            );
        }
        (BattleResult::Victory, outcome.gold_earned)
    } else {
        gladiator.losses += 1;
        gladiator.win_streak = 0;
        gladiator.gold = gladiator.gold.saturating_sub(defeat_penalty(opponent));
        (BattleResult::Defeat, 0)
    };

    BattleRecord {
        number: battle_number,
        opponent: opponent.title.to_string(),
        result,
        gold,
        rounds: outcome.rounds,
    }
}
