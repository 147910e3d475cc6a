use rand::Rng;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

use super::types::Opponent;
use crate::character::Gladiator;
use crate::core::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Striker {
    Gladiator,
    Opponent,
}

/// Source of strike values. Any `Rng` draws uniformly from the range;
/// `FixedStrikes` makes battles reproducible.
pub trait StrikeRoll {
    fn roll(&mut self, striker: Striker, range: RangeInclusive<i64>) -> i64;
}

impl<R: Rng + ?Sized> StrikeRoll for R {
    fn roll(&mut self, _striker: Striker, range: RangeInclusive<i64>) -> i64 {
        self.gen_range(range)
    }
}

/// How a `FixedStrikes` picks a value for one striker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeValue {
    /// Returned as-is, even outside the strike range.
    Exact(i64),
    Lowest,
    Midpoint,
    Highest,
}

impl StrikeValue {
    fn pick(self, range: &RangeInclusive<i64>) -> i64 {
        match self {
            StrikeValue::Exact(value) => value,
            StrikeValue::Lowest => *range.start(),
            StrikeValue::Midpoint => (range.start() + range.end()) / 2,
            StrikeValue::Highest => *range.end(),
        }
    }
}

/// Deterministic strikes, one policy per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStrikes {
    pub gladiator: StrikeValue,
    pub opponent: StrikeValue,
}

impl FixedStrikes {
    pub fn new(gladiator: StrikeValue, opponent: StrikeValue) -> Self {
        Self {
            gladiator,
            opponent,
        }
    }

    pub fn midpoint() -> Self {
        Self::new(StrikeValue::Midpoint, StrikeValue::Midpoint)
    }
}

impl StrikeRoll for FixedStrikes {
    fn roll(&mut self, striker: Striker, range: RangeInclusive<i64>) -> i64 {
        match striker {
            Striker::Gladiator => self.gladiator.pick(&range),
            Striker::Opponent => self.opponent.pick(&range),
        }
    }
}

/// Result of one resolved battle. Nothing is applied to the gladiator yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub won: bool,
    /// Gold a win would pay. The caller decides whether to credit it.
    pub gold_earned: u32,
    pub rounds: u32,
    /// Remaining health on both sides; either may be negative.
    pub gladiator_health: i64,
    pub opponent_health: i64,
}

pub fn gladiator_strike_range(total_power: u32) -> RangeInclusive<i64> {
    let power = i64::from(total_power);
    (power + GLADIATOR_STRIKE_SPREAD.0)..=(power + GLADIATOR_STRIKE_SPREAD.1)
}

pub fn opponent_strike_range(power: u32) -> RangeInclusive<i64> {
    let power = i64::from(power);
    (power + OPPONENT_STRIKE_SPREAD.0)..=(power + OPPONENT_STRIKE_SPREAD.1)
}

/// Gold for beating `opponent` with the given streak going in.
pub fn victory_gold(opponent: &Opponent, win_streak: u32) -> u32 {
    opponent
        .bounty
        .saturating_add(STREAK_GOLD_BONUS.saturating_mul(win_streak))
}

/// Simulates up to `MAX_ROUNDS` rounds of simultaneous blows.
///
/// Each round both strikes are drawn (gladiator first) and both health pools
/// are reduced from their values at the start of the round, so a round in
/// which both sides drop to zero or below still completes. The loop stops
/// once either pool is at or below zero, or at the round cap.
///
/// The gladiator wins only with strictly more remaining health than the
/// opponent; a tie is a loss. Remaining health is compared even when both
/// are negative, so a gladiator at -50 beats an opponent at -60.
pub fn resolve_battle<S: StrikeRoll + ?Sized>(
    gladiator: &Gladiator,
    opponent: &Opponent,
    strikes: &mut S,
) -> BattleOutcome {
    let mut gladiator_health = i64::from(gladiator.total_health());
    let mut opponent_health = i64::from(opponent.max_health);
    let gladiator_range = gladiator_strike_range(gladiator.total_power());
    let opponent_range = opponent_strike_range(opponent.power);
    let mut rounds = 0;

    while gladiator_health > 0 && opponent_health > 0 && rounds < MAX_ROUNDS {
        rounds += 1;
        let gladiator_strike = strikes.roll(Striker::Gladiator, gladiator_range.clone());
        let opponent_strike = strikes.roll(Striker::Opponent, opponent_range.clone());
        opponent_health -= gladiator_strike;
        gladiator_health -= opponent_strike;
        trace!(
            round = rounds,
            gladiator_strike,
            opponent_strike,
            gladiator_health,
            opponent_health,
            "combat round"
        );
    }

    let won = gladiator_health > opponent_health;
    let outcome = BattleOutcome {
        won,
        gold_earned: victory_gold(opponent, gladiator.win_streak),
        rounds,
        gladiator_health,
        opponent_health,
    };
    debug!(opponent = opponent.title, ?outcome, "battle resolved");
    outcome
}
