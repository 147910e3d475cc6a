use std::io::{self, BufRead, Write};
use tracing::debug;

use super::menu::MenuChoice;
use super::render::*;
use super::state::ArenaState;
use crate::combat::StrikeRoll;
use crate::shop::purchase;

/// Reads one line. `None` once the input is exhausted.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Runs the armory sub-menu once: list, read a selection, report.
pub fn visit_armory(state: &mut ArenaState, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    write_armory(out, &state.gladiator)?;
    // Closed input leaves the armory like cancelling does
    let Some(choice) = read_line(input)? else {
        return writeln!(out);
    };
    let result = purchase(&mut state.gladiator, &choice);
    write_purchase_result(out, &result)
}

/// The interactive menu loop. Renders the upcoming matchup and the menu,
/// reads a selection, dispatches it, and repeats until the player retires
/// or the input ends.
pub fn run_arena<S: StrikeRoll + ?Sized>(
    state: &mut ArenaState,
    input: &mut impl BufRead,
    out: &mut impl Write,
    strikes: &mut S,
) -> io::Result<()> {
    writeln!(out, "{WELCOME_BANNER}")?;

    loop {
        write_matchup(out, &state.gladiator, &state.current_opponent())?;
        write_menu(out)?;

        let Some(line) = read_line(input)? else {
            debug!("input closed, retiring");
            writeln!(out)?;
            writeln!(out, "{FAREWELL}")?;
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Fight) => {
                let report = state.fight(strikes);
                write_fight_summary(out, &report)?;
            }
            Some(MenuChoice::Armory) => visit_armory(state, input, out)?,
            Some(MenuChoice::Scoreboard) => write_scoreboard(out, state)?,
            Some(MenuChoice::Rest) => {
                state.rest();
                writeln!(out, "{REST_MESSAGE}")?;
            }
            Some(MenuChoice::Retire) => {
                writeln!(out, "{FAREWELL}")?;
                return Ok(());
            }
            None => writeln!(out, "{INVALID_OPTION}")?,
        }
    }
}
