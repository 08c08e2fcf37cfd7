//! Two-click turn state machine.
//!
//! The human side picks an origin, then a destination. An accepted move is
//! followed at once by the engine's reply for the other side, after which the
//! turn is handed back to the human.

use tracing::{debug, info, warn};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{targets_king, Engine};
use crate::game_state::chess_types::*;
use crate::move_generation::candidate_moves::candidate_moves;
use crate::move_generation::legal_move_checks::{attackers_of, is_king_in_check};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingOrigin,
    AwaitingDestination {
        origin: Square,
        candidates: Vec<Square>,
    },
}

/// Result of a move attempt. `Accepted` means the reply has already been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Accepted,
    /// The origin is empty or holds a piece of the side not to move.
    RejectedNotTurn,
    /// The destination is not among the origin's candidates.
    RejectedNoCandidate,
    /// The move would leave or put the mover's king in check; it was reverted.
    RejectedSelfCheck,
}

/// What the engine did after the last accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomatedReply {
    Played {
        origin: Square,
        destination: Square,
        captured: Option<Piece>,
    },
    /// The engine's move failed the post-move check and was reverted.
    RejectedSelfCheck { origin: Square, destination: Square },
    /// The engine's side had no candidate move.
    NoCandidate,
}

pub struct TurnController {
    game_state: GameState,
    phase: TurnPhase,
    human: Color,
    engine: Box<dyn Engine>,
    last_reply: Option<AutomatedReply>,
}

impl TurnController {
    /// Standard game with White as the human side.
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self::with_position(GameState::new_game(), engine)
    }

    /// The side to move in `game_state` becomes the human side.
    pub fn with_position(game_state: GameState, engine: Box<dyn Engine>) -> Self {
        let human = game_state.current_turn();
        Self {
            game_state,
            phase: TurnPhase::AwaitingOrigin,
            human,
            engine,
            last_reply: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    pub fn human(&self) -> Color {
        self.human
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn last_reply(&self) -> Option<AutomatedReply> {
        self.last_reply
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.game_state, color)
    }

    /// Origins of the pieces giving check to `color`; empty when not in check.
    pub fn checking_pieces(&self, color: Color) -> Vec<Square> {
        let king = self.game_state.king_location(color);
        attackers_of(&self.game_state, king, color.opposite())
    }

    /// Candidates of the piece on `origin`, minus squares holding a king.
    /// Kings are never removed from the board, so those are not playable.
    pub fn playable_targets(&self, origin: Square) -> Vec<Square> {
        let mut targets = candidate_moves(&self.game_state, origin);
        targets.retain(|&target| !targets_king(&self.game_state, target));
        targets
    }

    /// First click. Remembers the origin's candidates on success; on rejection
    /// the controller waits for a new origin.
    pub fn select_origin(&mut self, origin: Square) -> Result<Vec<Square>, MoveStatus> {
        let turn = self.game_state.current_turn();
        let owned = matches!(self.game_state.piece_at(origin), Some(piece) if piece.color == turn);
        if !owned {
            debug!(%origin, ?turn, "origin rejected");
            self.phase = TurnPhase::AwaitingOrigin;
            return Err(MoveStatus::RejectedNotTurn);
        }

        let candidates = self.playable_targets(origin);
        self.phase = TurnPhase::AwaitingDestination {
            origin,
            candidates: candidates.clone(),
        };
        Ok(candidates)
    }

    /// Second click. Always returns to `AwaitingOrigin`.
    pub fn select_destination(&mut self, destination: Square) -> Result<MoveStatus, ChessErrors> {
        let TurnPhase::AwaitingDestination { origin, candidates } =
            std::mem::replace(&mut self.phase, TurnPhase::AwaitingOrigin)
        else {
            debug!(%destination, "destination given before an origin");
            return Ok(MoveStatus::RejectedNoCandidate);
        };

        if !candidates.contains(&destination) {
            debug!(%origin, %destination, "destination rejected");
            return Ok(MoveStatus::RejectedNoCandidate);
        }

        let mover = self.game_state.current_turn();
        if self.play_checked(origin, destination)?.is_none() {
            info!(%origin, %destination, ?mover, "move leaves king in check, reverted");
            return Ok(MoveStatus::RejectedSelfCheck);
        }
        info!(%origin, %destination, ?mover, "move accepted");

        // The turn goes back to the human even when the engine fails.
        self.game_state.current_turn = mover.opposite();
        let reply = self.play_reply();
        self.game_state.current_turn = self.human;
        reply?;

        Ok(MoveStatus::Accepted)
    }

    /// Both clicks at once.
    pub fn attempt_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<MoveStatus, ChessErrors> {
        if let Err(status) = self.select_origin(origin) {
            return Ok(status);
        }
        self.select_destination(destination)
    }

    /// Apply for the side to move, then run the post-move check. Returns
    /// `Some(captured)` when the move stands and `None` when it was reverted.
    ///
    /// Only king moves and moves made while in check are re-checked; a move
    /// that uncovers an attack on an unmoved king is let through.
    fn play_checked(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<Option<Option<Piece>>, ChessErrors> {
        let mover = self.game_state.current_turn();
        let was_in_check = is_king_in_check(&self.game_state, mover);
        let moved_king = matches!(
            self.game_state.piece_at(origin),
            Some(Piece { kind: PieceKind::King, .. })
        );

        let captured = self.game_state.apply_move(origin, destination)?;

        let king_walked_into_attack = moved_king && is_king_in_check(&self.game_state, mover);
        let check_unresolved = was_in_check && is_king_in_check(&self.game_state, mover);
        if king_walked_into_attack || check_unresolved {
            self.game_state.revert_last_move()?;
            return Ok(None);
        }
        Ok(Some(captured))
    }

    fn play_reply(&mut self) -> Result<(), ChessErrors> {
        self.last_reply = None;
        let side = self.game_state.current_turn();
        let output = self.engine.choose_move(&mut self.game_state, side)?;

        let Some((origin, destination)) = output.best_move else {
            warn!(?side, engine = self.engine.name(), "no candidate move, reply skipped");
            self.last_reply = Some(AutomatedReply::NoCandidate);
            return Ok(());
        };

        let reply = match self.play_checked(origin, destination)? {
            Some(captured) => {
                info!(%origin, %destination, ?side, score = output.best_score, "engine replied");
                AutomatedReply::Played {
                    origin,
                    destination,
                    captured,
                }
            }
            None => {
                warn!(%origin, %destination, ?side, "engine reply leaves king in check, reverted");
                AutomatedReply::RejectedSelfCheck {
                    origin,
                    destination,
                }
            }
        };
        self.last_reply = Some(reply);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_trait::EngineOutput;

    fn sq(file: i16, rank: i16) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    /// Replies with a fixed move regardless of the position.
    struct ScriptedEngine(Option<(Square, Square)>);

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn choose_move(
            &mut self,
            _game_state: &mut GameState,
            _color: Color,
        ) -> Result<EngineOutput, ChessErrors> {
            Ok(EngineOutput {
                best_move: self.0,
                ..EngineOutput::default()
            })
        }
    }

    fn greedy() -> Box<dyn Engine> {
        Box::new(GreedyEngine::from_seed(Some(17)))
    }

    #[test]
    fn starts_awaiting_origin_with_white_to_move() {
        let controller = TurnController::new(greedy());

        assert_eq!(controller.phase(), &TurnPhase::AwaitingOrigin);
        assert_eq!(controller.game_state().current_turn(), Color::White);
        assert_eq!(controller.human(), Color::White);
    }

    #[test]
    fn origin_must_hold_a_piece_of_the_side_to_move() {
        let mut controller = TurnController::new(greedy());

        assert_eq!(controller.select_origin(sq(4, 4)), Err(MoveStatus::RejectedNotTurn));
        assert_eq!(controller.select_origin(sq(4, 1)), Err(MoveStatus::RejectedNotTurn));
        assert_eq!(controller.phase(), &TurnPhase::AwaitingOrigin);

        let candidates = controller.select_origin(sq(6, 7)).expect("own knight");
        assert_eq!(candidates.len(), 2);
        assert!(matches!(
            controller.phase(),
            TurnPhase::AwaitingDestination { origin, .. } if *origin == sq(6, 7)
        ));
    }

    #[test]
    fn bad_destination_returns_to_awaiting_origin() {
        let mut controller = TurnController::new(greedy());
        let board = *controller.game_state().board();

        controller.select_origin(sq(6, 7)).expect("own knight");
        let status = controller.select_destination(sq(6, 5)).expect("no contract breach");

        assert_eq!(status, MoveStatus::RejectedNoCandidate);
        assert_eq!(controller.phase(), &TurnPhase::AwaitingOrigin);
        assert_eq!(*controller.game_state().board(), board);

        // A destination with no origin selected is also rejected.
        let status = controller.select_destination(sq(5, 5)).expect("no contract breach");
        assert_eq!(status, MoveStatus::RejectedNoCandidate);
    }

    #[test]
    fn accepted_move_triggers_reply_and_hands_turn_back() {
        let engine = ScriptedEngine(Some((sq(4, 1), sq(4, 3))));
        let mut controller = TurnController::new(Box::new(engine));

        let status = controller.attempt_move(sq(4, 6), sq(4, 4)).expect("no contract breach");

        assert_eq!(status, MoveStatus::Accepted);
        assert_eq!(
            controller.last_reply(),
            Some(AutomatedReply::Played {
                origin: sq(4, 1),
                destination: sq(4, 3),
                captured: None,
            })
        );
        assert_eq!(controller.game_state().current_turn(), Color::White);
        assert!(controller.game_state().piece_at(sq(4, 3)).is_some());
        assert!(controller.game_state().derived_data_is_synchronized());
    }

    #[test]
    fn unresolved_check_is_rejected_and_reverted() {
        let fen = "4r2k/8/8/8/8/8/P7/4K3 w";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let board = *game.board();
        let mut controller = TurnController::with_position(game, greedy());

        let status = controller.attempt_move(sq(0, 6), sq(0, 5)).expect("no contract breach");

        assert_eq!(status, MoveStatus::RejectedSelfCheck);
        assert_eq!(*controller.game_state().board(), board);
        assert_eq!(controller.game_state().current_turn(), Color::White);
        assert!(controller.is_in_check(Color::White));
        assert_eq!(controller.last_reply(), None);
    }

    #[test]
    fn stepping_out_of_check_is_accepted() {
        let game = GameState::from_fen("4r2k/8/8/8/8/8/8/4K3 w").expect("FEN should parse");
        let engine = ScriptedEngine(Some((sq(7, 0), sq(6, 0))));
        let mut controller = TurnController::with_position(game, Box::new(engine));

        let status = controller.attempt_move(sq(4, 7), sq(3, 7)).expect("no contract breach");

        assert_eq!(status, MoveStatus::Accepted);
        assert_eq!(controller.game_state().king_location(Color::White), sq(3, 7));
        assert!(!controller.is_in_check(Color::White));
    }

    #[test]
    fn uncovering_an_attack_on_the_king_is_not_detected() {
        // The bishop on e2 shields the king from the rook on e8. Moving it away
        // exposes the king, which the post-move check does not look for.
        let game = GameState::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w").expect("FEN should parse");
        let engine = ScriptedEngine(Some((sq(7, 0), sq(6, 0))));
        let mut controller = TurnController::with_position(game, Box::new(engine));

        let status = controller.attempt_move(sq(4, 6), sq(3, 5)).expect("no contract breach");

        assert_eq!(status, MoveStatus::Accepted);
        assert!(controller.is_in_check(Color::White));
    }

    #[test]
    fn king_squares_are_left_out_of_the_selection() {
        // The rook's raw candidates reach the king on e8, but a king cannot be taken.
        let game = GameState::from_fen("R3k3/8/8/8/8/8/8/4K3 w").expect("FEN should parse");
        let mut controller = TurnController::with_position(game, greedy());
        assert!(candidate_moves(controller.game_state(), sq(0, 0)).contains(&sq(4, 0)));

        let candidates = controller.select_origin(sq(0, 0)).expect("own rook");
        assert!(!candidates.contains(&sq(4, 0)));
        assert!(candidates.contains(&sq(3, 0)));
        assert!(matches!(
            controller.phase(),
            TurnPhase::AwaitingDestination { candidates, .. } if !candidates.contains(&sq(4, 0))
        ));

        let status = controller.select_destination(sq(4, 0)).expect("no contract breach");
        assert_eq!(status, MoveStatus::RejectedNoCandidate);
        assert_eq!(controller.game_state().king_location(Color::Black), sq(4, 0));
    }

    #[test]
    fn failing_engine_still_hands_the_turn_back() {
        // d5 is empty, so the scripted reply breaks the executor's contract.
        let engine = ScriptedEngine(Some((sq(3, 3), sq(3, 4))));
        let mut controller = TurnController::new(Box::new(engine));

        let result = controller.attempt_move(sq(4, 6), sq(4, 4));

        assert_eq!(result, Err(ChessErrors::TryToViewOrEditEmptySquare(sq(3, 3))));
        assert_eq!(controller.game_state().current_turn(), Color::White);
        assert_eq!(controller.phase(), &TurnPhase::AwaitingOrigin);
        assert_eq!(controller.last_reply(), None);
        assert!(controller.game_state().piece_at(sq(4, 4)).is_some());
        assert!(controller.game_state().derived_data_is_synchronized());

        // The human can keep playing.
        let candidates = controller.select_origin(sq(3, 6)).expect("own pawn on d2");
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn checking_pieces_names_the_attackers() {
        let game = GameState::from_fen("4r2k/8/8/8/8/8/8/4K3 w").expect("FEN should parse");
        let controller = TurnController::with_position(game, greedy());

        assert_eq!(controller.checking_pieces(Color::White), vec![sq(4, 0)]);
        assert!(controller.checking_pieces(Color::Black).is_empty());
    }

    #[test]
    fn engine_reply_that_ignores_check_is_reverted() {
        // White's rook checks along the eighth rank; the scripted reply keeps the
        // black king on that rank.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w").expect("FEN should parse");
        let engine = ScriptedEngine(Some((sq(4, 0), sq(5, 0))));
        let mut controller = TurnController::with_position(game, Box::new(engine));

        let status = controller.attempt_move(sq(0, 7), sq(0, 0)).expect("no contract breach");

        assert_eq!(status, MoveStatus::Accepted);
        assert_eq!(
            controller.last_reply(),
            Some(AutomatedReply::RejectedSelfCheck {
                origin: sq(4, 0),
                destination: sq(5, 0),
            })
        );
        assert_eq!(controller.game_state().king_location(Color::Black), sq(4, 0));
        assert_eq!(controller.game_state().current_turn(), Color::White);
    }

    #[test]
    fn reply_is_skipped_when_engine_side_cannot_move() {
        let game = GameState::from_fen("4K3/8/8/8/8/8/pp6/kp6 w").expect("FEN should parse");
        let mut controller = TurnController::with_position(game, greedy());

        let status = controller.attempt_move(sq(4, 0), sq(4, 1)).expect("no contract breach");

        assert_eq!(status, MoveStatus::Accepted);
        assert_eq!(controller.last_reply(), Some(AutomatedReply::NoCandidate));
        assert_eq!(controller.game_state().current_turn(), Color::White);
    }
}
