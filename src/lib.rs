//! Gladiator Arena - Text-Based Battle Simulator Library
//!
//! This module exposes the game logic for testing and for the headless
//! balance simulator.

pub mod arena;
pub mod character;
pub mod combat;
pub mod core;
pub mod shop;
pub mod simulator;

pub use arena::{run_arena, ArenaState};
pub use character::Gladiator;
pub use crate::core::constants::*;
