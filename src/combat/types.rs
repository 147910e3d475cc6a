use crate::core::constants::*;

/// A fresh challenger built for one battle and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    pub title: &'static str,
    pub tier: u32,
    pub power: u32,
    pub max_health: u32,
    pub bounty: u32,
}

/// Difficulty bracket for a 1-based battle number: one tier per four
/// battles, capped at `MAX_TIER`.
pub fn arena_tier(battle_number: u32) -> u32 {
    (battle_number.saturating_sub(1) / BATTLES_PER_TIER + 1).min(MAX_TIER)
}

pub fn opponent_title(battle_number: u32) -> &'static str {
    let index = battle_number.saturating_sub(1) as usize % OPPONENT_TITLES.len();
    OPPONENT_TITLES[index]
}

/// Builds the opponent for a 1-based battle number. Pure: the same number
/// always yields the same opponent.
pub fn build_opponent(battle_number: u32) -> Opponent {
    let tier = arena_tier(battle_number);
    Opponent {
        title: opponent_title(battle_number),
        tier,
        power: OPPONENT_POWER_BASE
            + OPPONENT_POWER_PER_TIER * tier
            + OPPONENT_POWER_PER_BATTLE * battle_number,
        max_health: OPPONENT_HEALTH_BASE
            + OPPONENT_HEALTH_PER_TIER * tier
            + OPPONENT_HEALTH_PER_BATTLE * battle_number,
        bounty: OPPONENT_BOUNTY_BASE
            + OPPONENT_BOUNTY_PER_TIER * tier
            + OPPONENT_BOUNTY_PER_BATTLE * battle_number,
    }
}
