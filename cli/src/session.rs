use std::io::{BufRead, Write};

use sweeper_core::{Board, GameOutcome, GlyphSet, MarkOutcome, RevealOutcome};

use crate::command::{Command, HELP, ParseError};

const PROMPT: &str = "Your move (h for help): ";

/// Drives one game over line-based input until it ends, the player quits or input runs out.
///
/// Returns the final outcome, or `None` when the game was abandoned.
pub fn play(
    board: &mut Board,
    glyphs: GlyphSet,
    mut input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<Option<GameOutcome>> {
    let mut line = String::new();

    while !board.is_finished() {
        writeln!(output, "{}", board.display(glyphs).with_axes())?;
        writeln!(output, "Mines left: {}", board.mines_left())?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::info!("Input closed, abandoning game");
            return Ok(None);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                writeln!(output, "{err}, type h for help")?;
                continue;
            }
        };
        log::debug!("Command: {:?}", command);

        match command {
            Command::Reveal(coords) => match board.reveal(coords) {
                Ok(RevealOutcome::NoChange) => writeln!(output, "Already revealed")?,
                Ok(_) => {}
                Err(err) => writeln!(output, "{err}")?,
            },
            Command::Mark(coords, kind) => match board.mark(coords, kind) {
                Ok(MarkOutcome::NoChange) => writeln!(output, "Revealed cells cannot be marked")?,
                Ok(MarkOutcome::Changed) => {}
                Err(err) => writeln!(output, "{err}")?,
            },
            Command::Unmark(coords) => match board.unmark(coords) {
                Ok(MarkOutcome::NoChange) => writeln!(output, "Nothing to unmark")?,
                Ok(MarkOutcome::Changed) => {}
                Err(err) => writeln!(output, "{err}")?,
            },
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => {
                log::info!("Player quit");
                return Ok(None);
            }
        }
    }

    board.reveal_mines()?;
    writeln!(output, "{}", board.display(glyphs).with_axes())?;
    writeln!(output, "The game is over!")?;
    let outcome = board.outcome();
    match outcome {
        GameOutcome::Won => writeln!(output, "You won!")?,
        GameOutcome::Lost => writeln!(output, "You lost!")?,
        GameOutcome::InProgress => {}
    }
    Ok(Some(outcome))
}
