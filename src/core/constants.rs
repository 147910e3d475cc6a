// Starting gladiator
pub const STARTING_NAME: &str = "Valeria the Bold";
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_POWER: u32 = 12;
pub const STARTING_MAX_HEALTH: u32 = 90;
pub const STARTING_XP_TO_NEXT: u32 = 10;

// Opponent scaling: stat = base + tier * per_tier + battle * per_battle
pub const MAX_TIER: u32 = 6;
pub const BATTLES_PER_TIER: u32 = 4;
pub const OPPONENT_POWER_BASE: u32 = 8;
pub const OPPONENT_POWER_PER_TIER: u32 = 3;
pub const OPPONENT_POWER_PER_BATTLE: u32 = 1;
pub const OPPONENT_HEALTH_BASE: u32 = 70;
pub const OPPONENT_HEALTH_PER_TIER: u32 = 18;
pub const OPPONENT_HEALTH_PER_BATTLE: u32 = 4;
pub const OPPONENT_BOUNTY_BASE: u32 = 12;
pub const OPPONENT_BOUNTY_PER_TIER: u32 = 8;
pub const OPPONENT_BOUNTY_PER_BATTLE: u32 = 3;

pub const OPPONENT_TITLES: [&str; 7] = [
    "Bronze Spear",
    "Crimson Blade",
    "Sandstorm Duelist",
    "Steel Lotus",
    "Lionheart",
    "Obsidian Guard",
    "Phantom Strike",
];

// Combat
pub const MAX_ROUNDS: u32 = 6;
pub const GLADIATOR_STRIKE_SPREAD: (i64, i64) = (-2, 4);
pub const OPPONENT_STRIKE_SPREAD: (i64, i64) = (-3, 3);
pub const STREAK_GOLD_BONUS: u32 = 2;

// XP and leveling
pub const WIN_XP_BASE: u32 = 6;
pub const WIN_XP_PER_TIER: u32 = 2;
/// Threshold growth is floor(xp_to_next * 5/4 + 6).
pub const XP_GROWTH_NUMERATOR: u32 = 5;
pub const XP_GROWTH_DENOMINATOR: u32 = 4;
pub const XP_GROWTH_FLAT: u32 = 6;
pub const LEVEL_UP_POWER_BASE: u32 = 2;
pub const LEVEL_UP_HEALTH_BASE: u32 = 10;
pub const LEVEL_UP_HEALTH_PER_LEVEL: u32 = 2;

// Arena
pub const REST_GOLD: u32 = 5;
pub const SCOREBOARD_RECENT: usize = 5;
