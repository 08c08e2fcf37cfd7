//! Material evaluation.
//!
//! The raw balance is Black-positive; `score_for` orients it so the given side
//! maximizes.

use crate::game_state::chess_types::*;

/// Fixed material table. Kings carry no material.
#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Black material minus White material.
pub fn evaluate(game_state: &GameState) -> i32 {
    game_state
        .pieces()
        .map(|(_, piece)| {
            let value = piece_value(piece.kind);
            match piece.color {
                Color::Black => value,
                Color::White => -value,
            }
        })
        .sum()
}

#[inline]
pub fn score_for(game_state: &GameState, color: Color) -> i32 {
    match color {
        Color::Black => evaluate(game_state),
        Color::White => -evaluate(game_state),
    }
}
