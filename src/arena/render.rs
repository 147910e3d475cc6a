//! Console text for every arena screen. All writers take `impl Write` so the
//! screens can be captured in tests.

use std::io::{self, Write};

use super::menu::MenuChoice;
use super::state::{ArenaState, FightReport};
use crate::character::Gladiator;
use crate::combat::Opponent;
use crate::shop::{catalog, PurchaseError, PurchaseOutcome, CANCEL_CHOICE};

pub const WELCOME_BANNER: &str = "Welcome to the Gladiator Arena!";
pub const FAREWELL: &str = "You retire from the arena. Your legend lives on!";
pub const INVALID_OPTION: &str = "Invalid option. Choose a number from the menu.";
pub const REST_MESSAGE: &str = "You rest between battles, regain focus, and collect 5 gold tribute.";
pub const EMPTY_HISTORY: &str = "No battles yet. Head to the arena!";
pub const MENU_PROMPT: &str = "Selection: ";
pub const ARMORY_PROMPT: &str = "Choose equipment to buy: ";

pub fn write_matchup(out: &mut impl Write, gladiator: &Gladiator, opponent: &Opponent) -> io::Result<()> {
    writeln!(out, "\n=== ARENA MATCHUP ===")?;
    writeln!(out, "Enemy: {} (Tier {})", opponent.title, opponent.tier)?;
    writeln!(
        out,
        "Enemy Power: {} | Enemy Health: {}",
        opponent.power, opponent.max_health
    )?;
    writeln!(out, "\nYour Gladiator")?;
    writeln!(out, "Name: {} | Level: {}", gladiator.name, gladiator.level)?;
    writeln!(
        out,
        "Power: {} | Health: {}",
        gladiator.total_power(),
        gladiator.total_health()
    )?;
    writeln!(
        out,
        "Gold: {} | Win Streak: {}",
        gladiator.gold, gladiator.win_streak
    )
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nChoose an action:")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    write!(out, "{MENU_PROMPT}")?;
    out.flush()
}

pub fn write_fight_summary(out: &mut impl Write, report: &FightReport) -> io::Result<()> {
    let headline = if report.outcome.won {
        "Victory!"
    } else {
        "Defeat..."
    };
    writeln!(
        out,
        "\n{} {} battle completed in {} rounds. Gold earned: {}.",
        headline, report.opponent.title, report.record.rounds, report.record.gold
    )
}

pub fn write_armory(out: &mut impl Write, gladiator: &Gladiator) -> io::Result<()> {
    writeln!(out, "\n=== GLADIATOR ARMORY ===")?;
    writeln!(out, "Gold: {}", gladiator.gold)?;
    for (number, entry) in catalog().iter().enumerate() {
        let owned = if gladiator.owns(entry.name) {
            " (owned)"
        } else {
            ""
        };
        writeln!(
            out,
            "{}. {} - Cost {} | Power +{} | Health +{}{}",
            number + 1,
            entry.name,
            entry.stats.cost,
            entry.stats.power_bonus,
            entry.stats.health_bonus,
            owned
        )?;
    }
    writeln!(out, "{CANCEL_CHOICE}. Return to arena")?;
    write!(out, "{ARMORY_PROMPT}")?;
    out.flush()
}

/// Prints the armory's answer. Cancelling prints nothing.
pub fn write_purchase_result(
    out: &mut impl Write,
    result: &Result<PurchaseOutcome, PurchaseError>,
) -> io::Result<()> {
    match result {
        Ok(PurchaseOutcome::Cancelled) => Ok(()),
        Ok(PurchaseOutcome::Purchased(entry)) => writeln!(
            out,
            "Purchased {}! Your stats improved for the next fight.",
            entry.name
        ),
        Err(err) => writeln!(out, "{err}"),
    }
}

pub fn write_scoreboard(out: &mut impl Write, state: &ArenaState) -> io::Result<()> {
    let gladiator = &state.gladiator;
    writeln!(out, "\n=== SCOREBOARD ===")?;
    writeln!(out, "Gladiator: {}", gladiator.name)?;
    writeln!(
        out,
        "Level {} | Wins {} | Losses {}",
        gladiator.level, gladiator.win_streak, gladiator.losses
    )?;
    writeln!(
        out,
        "Power {} | Max Health {}",
        gladiator.total_power(),
        gladiator.total_health()
    )?;
    writeln!(out, "Treasure Collected: {} gold", gladiator.gold)?;
    writeln!(out, "\nRecent Battles:")?;

    let mut any = false;
    for record in state.recent_records() {
        any = true;
        writeln!(
            out,
            "  #{} vs {} - {} (+{} gold, {} rounds)",
            record.number, record.opponent, record.result, record.gold, record.rounds
        )?;
    }
    if !any {
        writeln!(out, "  {EMPTY_HISTORY}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{FixedStrikes, StrikeValue};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_matchup_text() {
        let state = ArenaState::default();
        let text = render(|out| write_matchup(out, &state.gladiator, &state.current_opponent()));
        assert!(text.contains("Enemy: Bronze Spear (Tier 1)"));
        assert!(text.contains("Enemy Power: 12 | Enemy Health: 92"));
        assert!(text.contains("Name: Valeria the Bold | Level: 1"));
        assert!(text.contains("Power: 12 | Health: 90"));
        assert!(text.contains("Gold: 0 | Win Streak: 0"));
    }

    #[test]
    fn test_menu_lists_five_options() {
        let text = render(|out| write_menu(out));
        assert!(text.contains("1. Fight the next battle"));
        assert!(text.contains("4. Rest (+5 gold, reset streak)"));
        assert!(text.contains("5. Retire"));
        assert!(text.ends_with(MENU_PROMPT));
    }

    #[test]
    fn test_armory_marks_owned_items() {
        let mut state = ArenaState::default();
        state.gladiator.gold = 30;
        crate::shop::purchase(&mut state.gladiator, "1").unwrap();
        let text = render(|out| write_armory(out, &state.gladiator));
        assert!(text.contains("1. Bronze Sword - Cost 30 | Power +3 | Health +0 (owned)"));
        assert!(text.contains("2. Iron Shield - Cost 45 | Power +1 | Health +12\n"));
        assert!(text.contains("0. Return to arena"));
    }

    #[test]
    fn test_scoreboard_empty_placeholder() {
        let state = ArenaState::default();
        let text = render(|out| write_scoreboard(out, &state));
        assert!(text.contains("Gladiator: Valeria the Bold"));
        assert!(text.contains("Level 1 | Wins 0 | Losses 0"));
        assert!(text.contains("Treasure Collected: 0 gold"));
        assert!(text.contains(EMPTY_HISTORY));
    }

    #[test]
    fn test_scoreboard_shows_five_newest_first() {
        let mut state = ArenaState::default();
        let mut lose = FixedStrikes::new(StrikeValue::Exact(0), StrikeValue::Highest);
        for _ in 0..7 {
            state.fight(&mut lose);
        }
        let text = render(|out| write_scoreboard(out, &state));
        let lines: Vec<&str> = text.lines().filter(|l| l.starts_with("  #")).collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  #7 vs Phantom Strike - Defeat (+0 gold, 4 rounds)");
        assert!(lines[4].starts_with("  #3 vs Sandstorm Duelist"));
        assert!(!text.contains(EMPTY_HISTORY));
    }

    #[test]
    fn test_fight_summary() {
        let mut state = ArenaState::default();
        let report = state.fight(&mut FixedStrikes::midpoint());
        let text = render(|out| write_fight_summary(out, &report));
        assert_eq!(
            text,
            "\nVictory! Bronze Spear battle completed in 6 rounds. Gold earned: 23.\n"
        );
    }
}
