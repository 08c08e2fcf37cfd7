//! Pseudo-legal candidate generation.
//!
//! One entry point dispatches on the closed set of piece kinds. Results are
//! in bounds, never hold a same-color piece, and ignore self-check.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Candidate destinations for the piece on `origin`; empty when the square is empty.
pub fn candidate_moves(game_state: &GameState, origin: Square) -> Vec<Square> {
    let mut out = Vec::new();
    generate_candidate_moves(game_state, origin, &mut out);
    out
}

/// Appends the candidates for `origin` to `out`.
pub fn generate_candidate_moves(game_state: &GameState, origin: Square, out: &mut Vec<Square>) {
    let Some(piece) = game_state.piece_at(origin) else {
        return;
    };

    match piece.kind {
        PieceKind::King => generate_king_moves(game_state, origin, piece.color, out),
        PieceKind::Queen => generate_queen_moves(game_state, origin, piece.color, out),
        PieceKind::Rook => generate_rook_moves(game_state, origin, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, origin, piece.color, out),
        PieceKind::Knight => generate_knight_moves(game_state, origin, piece.color, out),
        PieceKind::Pawn => generate_pawn_moves(game_state, origin, piece, out),
    }
}

/// Every (origin, destination) pair available to `color`, origins in board order.
pub fn all_candidate_moves(game_state: &GameState, color: Color) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    let mut targets = Vec::new();
    for (origin, _) in game_state.pieces_of(color) {
        targets.clear();
        generate_candidate_moves(game_state, origin, &mut targets);
        moves.extend(targets.iter().map(|&target| (origin, target)));
    }
    moves
}
