//! The armory: fixed equipment catalog and purchase validation.

pub mod catalog;
pub mod logic;

pub use catalog::*;
pub use logic::*;
