//! Gladiator stats, equipment bonuses, and leveling.

pub mod types;

pub use types::*;
