//! The interactive arena session: state, menu, console screens, and loop.

pub mod game_loop;
pub mod menu;
pub mod render;
pub mod state;

pub use game_loop::*;
pub use menu::*;
pub use state::*;
