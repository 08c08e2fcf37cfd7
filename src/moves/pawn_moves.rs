//! Pawn pushes and diagonal captures. No en passant, no promotion.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_open_for;

/// Forward is rank-decreasing for White and rank-increasing for Black. Reads
/// `piece.has_moved` but never writes it.
pub fn generate_pawn_moves(
    game_state: &GameState,
    origin: Square,
    piece: Piece,
    out: &mut Vec<Square>,
) {
    let step = piece.color.forward();

    if let Ok(one_step) = origin.offset(0, step) {
        if game_state.piece_at(one_step).is_none() {
            out.push(one_step);

            if !piece.has_moved {
                if let Ok(two_step) = one_step.offset(0, step) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let Ok(target) = origin.offset(file_delta, step) else {
            continue;
        };
        if game_state.color_mask_at(target) != 0 && is_open_for(game_state, target, piece.color) {
            out.push(target);
        }
    }
}
