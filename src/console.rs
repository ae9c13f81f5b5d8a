//! Line-oriented terminal front end.
//!
//! Reads one command per line and redraws the board after every change.
//! The console only talks to [`GameState`] through its public commands.

use anyhow::Result;
use noughts_core::{GameState, HUMAN, Mode, Position, Snapshot};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9 or a square name   place your mark (e.g. 5, center, top-left)
  restart                start the next game
  mode <name|1-4>        player-vs-player (1), ai-easy (2), ai-medium (3), ai-hard (4)
  score                  show the score
  help                   show this help
  quit                   leave";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Square(Position),
    /// Start the next game.
    Restart,
    /// Switch mode.
    Mode(Mode),
    /// Show the score.
    Score,
    /// Show help.
    Help,
    /// Leave.
    Quit,
    /// Anything unrecognised, with the reason.
    Invalid(String),
}

impl Input {
    /// Parses one line.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let lower = line.to_ascii_lowercase();
        match lower.as_str() {
            "restart" | "r" | "next" => return Input::Restart,
            "score" | "s" => return Input::Score,
            "help" | "h" | "?" => return Input::Help,
            "quit" | "q" | "exit" => return Input::Quit,
            _ => {}
        }

        if let Some(rest) = lower.strip_prefix("mode") {
            return match Mode::parse(rest) {
                Ok(mode) => Input::Mode(mode),
                Err(e) => Input::Invalid(e.to_string()),
            };
        }

        match Position::from_label_or_number(line) {
            Some(pos) => Input::Square(pos),
            None => Input::Invalid(format!("Unrecognised command {:?}, try 'help'", line)),
        }
    }
}

/// Interactive console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    game: GameState,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console driving `game`.
    pub fn new(input: R, output: W, game: GameState) -> Self {
        Self {
            input,
            output,
            game,
        }
    }

    /// Returns the session.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!(mode = %self.game.mode(), "Console started");
        writeln!(self.output, "Mode: {}", self.game.mode())?;
        self.render()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Input::parse(&line) {
                Input::Quit => break,
                Input::Help => writeln!(self.output, "{}", HELP)?,
                Input::Score => {
                    let snapshot = self.game.snapshot();
                    self.render_score(&snapshot)?;
                }
                Input::Restart => {
                    self.game.restart();
                    self.render()?;
                }
                Input::Mode(mode) => {
                    self.game.set_mode(mode);
                    writeln!(self.output, "Mode: {}", mode)?;
                    self.render()?;
                }
                Input::Square(pos) => self.play(pos)?,
                Input::Invalid(reason) => writeln!(self.output, "{}", reason)?,
            }
        }

        info!(scores = ?self.game.scores(), "Console finished");
        Ok(())
    }

    fn play(&mut self, pos: Position) -> Result<()> {
        let player = if self.game.mode().has_computer() {
            HUMAN
        } else {
            self.game.to_move()
        };
        match self.game.make_move(pos.to_index(), player) {
            Ok(_) => self.render(),
            Err(e) => {
                writeln!(self.output, "Move not applied: {}", e)?;
                Ok(())
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let snapshot = self.game.snapshot();
        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.board())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.status())?;
        if snapshot.status().result.is_complete() {
            self.render_score(&snapshot)?;
            writeln!(self.output, "Type 'restart' for the next game.")?;
        }
        Ok(())
    }

    fn render_score(&mut self, snapshot: &Snapshot) -> Result<()> {
        let scores = snapshot.scores();
        writeln!(
            self.output,
            "Score  X: {}  O: {}  Draw: {}",
            scores.x_wins(),
            scores.o_wins(),
            scores.draws()
        )?;
        Ok(())
    }
}
