//! Line-oriented game loop over a [`MatchController`].

use anyhow::Result;
use noughts::{MatchController, Outcome};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at a board index (0-8).
    Place(usize),
    /// Clear the board, keep the scores.
    Restart,
    /// Clear the board and the scores.
    NewSession,
    /// Print the score tally.
    Scores,
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parses a line; cells are numbered 1-9 as shown on the board.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "r" | "restart" => Some(Command::Restart),
            "n" | "new" => Some(Command::NewSession),
            "s" | "scores" => Some(Command::Scores),
            "q" | "quit" => Some(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(cell @ 1..=9) => Some(Command::Place(cell - 1)),
                _ => None,
            },
        }
    }
}

const HELP: &str = "Enter 1-9 to play, r to restart, n for a new session, s for scores, q to quit.";

/// Runs the shell until `q` or end of input.
#[instrument(skip_all)]
pub fn run<R: Rng, I: BufRead, O: Write>(
    session: &mut MatchController<R>,
    input: I,
    output: &mut O,
) -> Result<()> {
    info!(mode = %session.mode(), "Shell started");
    writeln!(
        output,
        "{} vs {} ({})",
        session.names().player1(),
        session.names().player2(),
        session.mode()
    )?;
    writeln!(output, "{}", HELP)?;
    render(session, output)?;

    // Undecodable bytes become U+FFFD and fall through to the help text.
    for line in input.split(b'\n') {
        let line = line?;
        let Some(command) = Command::parse(&String::from_utf8_lossy(&line)) else {
            writeln!(output, "{}", HELP)?;
            continue;
        };
        debug!(?command, "Command received");

        match command {
            Command::Place(index) => {
                // Illegal clicks are ignored, as on the board itself.
                if let Err(error) = session.apply_human_move(index) {
                    debug!(%error, "Ignoring move");
                    continue;
                }
            }
            Command::Restart => {
                session.restart_match();
            }
            Command::NewSession => {
                session.restart_session();
            }
            Command::Scores => {
                write_scores(session, output)?;
                continue;
            }
            Command::Quit => break,
        }
        render(session, output)?;
    }

    info!("Shell finished");
    Ok(())
}

fn render<R: Rng, O: Write>(session: &MatchController<R>, output: &mut O) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", session.state().board())?;
    writeln!(output, "{}", session.status_line())?;
    if *session.state().status() != Outcome::InProgress {
        write_scores(session, output)?;
    }
    Ok(())
}

fn write_scores<R: Rng, O: Write>(session: &MatchController<R>, output: &mut O) -> Result<()> {
    let names = session.names();
    let tally = session.tally();
    writeln!(
        output,
        "{}: {}  {}: {}",
        names.player1(),
        tally.player1_wins(),
        names.player2(),
        tally.player2_wins()
    )?;
    Ok(())
}
