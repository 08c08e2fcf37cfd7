//! Engine abstraction used by the turn controller.
//!
//! Engines pick a reply for one side. They may make tentative moves on the
//! state they are given but must hand it back unchanged.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `(origin, destination)`, or `None` when the side has no candidate move.
    pub best_move: Option<(Square, Square)>,
    pub best_score: Option<i32>,
    pub moves_considered: usize,
    /// Number of moves sharing the best score.
    pub tied_moves: usize,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        color: Color,
    ) -> Result<EngineOutput, ChessErrors>;
}

/// True when the destination holds a king, which no engine may capture.
#[inline]
pub(crate) fn targets_king(game_state: &GameState, destination: Square) -> bool {
    matches!(
        game_state.piece_at(destination),
        Some(Piece { kind: PieceKind::King, .. })
    )
}
