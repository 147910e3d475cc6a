use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::constants::*;
use crate::shop::EquipmentStats;

/// The player-controlled fighter. Lives for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gladiator {
    pub name: String,
    pub level: u32,
    /// Base power before equipment.
    pub power: u32,
    /// Base max health before equipment.
    pub max_health: u32,
    pub gold: u32,
    /// Consecutive wins. Reset by a defeat or by resting.
    pub win_streak: u32,
    pub losses: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    /// Owned equipment keyed by catalog name.
    pub equipment: BTreeMap<String, EquipmentStats>,
}

impl Default for Gladiator {
    fn default() -> Self {
        Self::new(STARTING_NAME.to_string())
    }
}

impl Gladiator {
    pub fn new(name: String) -> Self {
        Self {
            name,
            level: STARTING_LEVEL,
            power: STARTING_POWER,
            max_health: STARTING_MAX_HEALTH,
            gold: 0,
            win_streak: 0,
            losses: 0,
            xp: 0,
            xp_to_next: STARTING_XP_TO_NEXT,
            equipment: BTreeMap::new(),
        }
    }

    /// Base power plus every owned item's power bonus.
    pub fn total_power(&self) -> u32 {
        self.power
            + self
                .equipment
                .values()
                .map(|item| item.power_bonus)
                .sum::<u32>()
    }

    /// Base max health plus every owned item's health bonus.
    pub fn total_health(&self) -> u32 {
        self.max_health
            + self
                .equipment
                .values()
                .map(|item| item.health_bonus)
                .sum::<u32>()
    }

    pub fn owns(&self, item_name: &str) -> bool {
        self.equipment.contains_key(item_name)
    }

    /// Adds experience and applies every level-up it pays for.
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u32) -> u32 {
        self.xp += amount;
        let mut levels_gained = 0;

        while self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            self.xp_to_next = next_xp_threshold(self.xp_to_next);
            // Growth uses the level just reached
            self.power += LEVEL_UP_POWER_BASE + self.level / 2;
            self.max_health += LEVEL_UP_HEALTH_BASE + LEVEL_UP_HEALTH_PER_LEVEL * self.level;
            levels_gained += 1;
        }

        levels_gained
    }
}

/// floor(current * 1.25 + 6), computed in integers.
pub fn next_xp_threshold(current: u32) -> u32 {
    current * XP_GROWTH_NUMERATOR / XP_GROWTH_DENOMINATOR + XP_GROWTH_FLAT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_gladiator() {
        let g = Gladiator::default();
        assert_eq!(g.name, "Valeria the Bold");
        assert_eq!(g.level, 1);
        assert_eq!(g.total_power(), 12);
        assert_eq!(g.total_health(), 90);
        assert_eq!(g.gold, 0);
        assert_eq!(g.xp_to_next, 10);
        assert!(g.equipment.is_empty());
    }

    #[test]
    fn test_effective_stats_include_equipment() {
        let mut g = Gladiator::default();
        g.equipment.insert(
            "Iron Shield".to_string(),
            EquipmentStats {
                cost: 45,
                power_bonus: 1,
                health_bonus: 12,
            },
        );
        g.equipment.insert(
            "Bronze Sword".to_string(),
            EquipmentStats {
                cost: 30,
                power_bonus: 3,
                health_bonus: 0,
            },
        );
        assert_eq!(g.total_power(), 16);
        assert_eq!(g.total_health(), 102);
        // Base stats untouched
        assert_eq!(g.power, 12);
        assert_eq!(g.max_health, 90);
    }

    #[test]
    fn test_next_xp_threshold_floors() {
        assert_eq!(next_xp_threshold(10), 18); // 12.5 + 6
        assert_eq!(next_xp_threshold(18), 28); // 22.5 + 6
        assert_eq!(next_xp_threshold(28), 41);
        assert_eq!(next_xp_threshold(41), 57); // 51.25 + 6
    }

    #[test]
    fn test_gain_xp_below_threshold() {
        let mut g = Gladiator::default();
        assert_eq!(g.gain_xp(8), 0);
        assert_eq!(g.level, 1);
        assert_eq!(g.xp, 8);
    }

    #[test]
    fn test_gain_xp_single_level_up() {
        let mut g = Gladiator::default();
        assert_eq!(g.gain_xp(25), 1);
        assert_eq!(g.level, 2);
        assert_eq!(g.xp, 15);
        assert_eq!(g.xp_to_next, 18);
        assert!(g.xp < g.xp_to_next);
        assert_eq!(g.power, 12 + 3);
        assert_eq!(g.max_health, 90 + 14);
    }

    #[test]
    fn test_gain_xp_multiple_level_ups_in_one_call() {
        let mut g = Gladiator::default();
        // 30 -> pay 10 (L2, next 18) -> pay 18 (L3, next 28) -> 2 left
        assert_eq!(g.gain_xp(30), 2);
        assert_eq!(g.level, 3);
        assert_eq!(g.xp, 2);
        assert_eq!(g.xp_to_next, 28);
        // L2: +2+1 power, +10+4 health. L3: +2+1 power, +10+6 health
        assert_eq!(g.power, 18);
        assert_eq!(g.max_health, 120);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let mut g = Gladiator::default();
        assert_eq!(g.gain_xp(10), 1);
        assert_eq!(g.xp, 0);
        assert_eq!(g.level, 2);
    }
}
