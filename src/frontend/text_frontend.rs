//! Line-oriented terminal front-end.
//!
//! Stands in for a graphical board: squares are typed in algebraic form
//! instead of clicked. One square per line follows the two-click flow; two
//! squares on one line make a whole move.

use std::io::{self, BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::config::GameConfig;
use crate::controller::turn_controller::{AutomatedReply, MoveStatus, TurnController, TurnPhase};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_game_state::{render_game_state, render_with_highlights};

const HELP: &str = "commands: <from> <to> | <square> (select, then target) | moves <square> | board | help | quit";

pub fn run_stdio_loop(config: &GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TextSession::new(config.build_engine());

    session.greet(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TextSession {
    controller: TurnController,
}

impl TextSession {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            controller: TurnController::new(engine),
        }
    }

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    pub fn greet(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "You play {:?} against {}.",
            self.controller.human(),
            self.controller.engine_name()
        )?;
        writeln!(out, "{HELP}")?;
        writeln!(out, "{}", render_game_state(self.controller.game_state()))
    }

    /// Handle one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => return Ok(true),
            ["help"] => writeln!(out, "{HELP}")?,
            ["board"] => writeln!(out, "{}", render_game_state(self.controller.game_state()))?,
            ["moves", square] => match parse_square(square) {
                Ok(square) => {
                    let targets = self.controller.playable_targets(square);
                    writeln!(out, "{square}: {}", join_squares(&targets))?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            [square] => match parse_square(square) {
                Ok(square) => self.click(square, out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            [from, to] => match (parse_square(from), parse_square(to)) {
                (Ok(from), Ok(to)) => {
                    let result = self.controller.attempt_move(from, to);
                    self.report(result, out)?;
                }
                (Err(e), _) | (_, Err(e)) => writeln!(out, "{e}")?,
            },
            _ => writeln!(out, "unrecognised input: {}", line.trim())?,
        }

        Ok(false)
    }

    fn click(&mut self, square: Square, out: &mut impl Write) -> io::Result<()> {
        if matches!(self.controller.phase(), TurnPhase::AwaitingDestination { .. }) {
            let result = self.controller.select_destination(square);
            return self.report(result, out);
        }

        match self.controller.select_origin(square) {
            Ok(targets) => {
                writeln!(out, "{square} selected: {}", join_squares(&targets))?;
                writeln!(
                    out,
                    "{}",
                    render_with_highlights(self.controller.game_state(), &targets)
                )
            }
            Err(status) => writeln!(out, "{}", describe_status(status)),
        }
    }

    fn report(
        &self,
        result: Result<MoveStatus, ChessErrors>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let status = match result {
            Ok(status) => status,
            Err(e) => return writeln!(out, "error: {e}"),
        };

        writeln!(out, "{}", describe_status(status))?;
        if status != MoveStatus::Accepted {
            return Ok(());
        }

        match self.controller.last_reply() {
            Some(AutomatedReply::Played {
                origin,
                destination,
                captured,
            }) => match captured {
                Some(piece) => writeln!(out, "reply: {origin} {destination} takes {:?}", piece.kind)?,
                None => writeln!(out, "reply: {origin} {destination}")?,
            },
            Some(AutomatedReply::RejectedSelfCheck {
                origin,
                destination,
            }) => writeln!(out, "reply {origin} {destination} left its king in check; turn passes")?,
            Some(AutomatedReply::NoCandidate) | None => writeln!(out, "reply: none")?,
        }

        writeln!(out, "{}", render_game_state(self.controller.game_state()))?;
        for color in [Color::White, Color::Black] {
            let checkers = self.controller.checking_pieces(color);
            if !checkers.is_empty() {
                writeln!(out, "{color:?} is in check from {}", join_squares(&checkers))?;
            }
        }
        Ok(())
    }
}

fn parse_square(token: &str) -> Result<Square, ChessErrors> {
    algebraic_to_square(token).map_err(ChessErrors::InvalidAlgebraicString)
}

fn join_squares(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "no moves".to_owned();
    }
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_status(status: MoveStatus) -> &'static str {
    match status {
        MoveStatus::Accepted => "ok",
        MoveStatus::RejectedNotTurn => "select one of your own pieces",
        MoveStatus::RejectedNoCandidate => "that piece cannot move there",
        MoveStatus::RejectedSelfCheck => "that move leaves your king in check",
    }
}
