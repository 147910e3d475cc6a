//! Core constants and battle-outcome progression.

pub mod constants;
pub mod progression;
