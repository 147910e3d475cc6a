use thiserror::Error;
use tracing::info;

use super::catalog::{entry_by_number, CatalogEntry};
use crate::character::Gladiator;

/// Menu input that leaves the armory without buying.
pub const CANCEL_CHOICE: &str = "0";

/// Why a purchase was refused. The text is what the armory tells the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Invalid choice. Returning to arena.")]
    InvalidChoice,
    #[error("You already own this equipment.")]
    AlreadyOwned(&'static str),
    #[error("Not enough gold. Win more battles to afford this item.")]
    InsufficientGold { cost: u32, gold: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Cancelled,
    Purchased(&'static CatalogEntry),
}

/// Validates a raw armory selection and, if every check passes, pays for
/// the item and adds it to the gladiator's equipment.
///
/// Checks run in order: cancel, parse/range, already owned, affordability.
/// A rejected purchase leaves the gladiator untouched.
pub fn purchase(gladiator: &mut Gladiator, choice: &str) -> Result<PurchaseOutcome, PurchaseError> {
    let choice = choice.trim();
    if choice == CANCEL_CHOICE {
        return Ok(PurchaseOutcome::Cancelled);
    }

    let entry = parse_choice(choice)
        .and_then(entry_by_number)
        .ok_or(PurchaseError::InvalidChoice)?;

    buy_entry(gladiator, entry)?;
    Ok(PurchaseOutcome::Purchased(entry))
}

/// Pays for a specific catalog entry. Shared by the armory menu and the
/// simulator's autopilot.
pub fn buy_entry(gladiator: &mut Gladiator, entry: &'static CatalogEntry) -> Result<(), PurchaseError> {
    if gladiator.owns(entry.name) {
        return Err(PurchaseError::AlreadyOwned(entry.name));
    }
    if gladiator.gold < entry.stats.cost {
        return Err(PurchaseError::InsufficientGold {
            cost: entry.stats.cost,
            gold: gladiator.gold,
        });
    }

    gladiator.gold -= entry.stats.cost;
    gladiator
        .equipment
        .insert(entry.name.to_string(), entry.stats);
    info!(item = entry.name, cost = entry.stats.cost, gold_left = gladiator.gold, "equipment purchased");
    Ok(())
}

/// Digits only; anything else (signs, spaces, words) is not a menu number.
fn parse_choice(choice: &str) -> Option<usize> {
    if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    choice.parse().ok()
}
