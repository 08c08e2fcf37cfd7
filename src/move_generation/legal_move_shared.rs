//! Building blocks shared by the per-kind generators in `moves`.

use crate::game_state::chess_types::*;

/// True when `square` is empty or held by the other side, read from the
/// color mask.
#[inline]
pub fn is_open_for(game_state: &GameState, square: Square, color: Color) -> bool {
    game_state.color_mask_at(square) * color.sign() <= 0
}

/// Push every on-board, same-color-filtered square reached by one offset.
pub fn push_step_targets(
    game_state: &GameState,
    origin: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_file, d_rank) in offsets {
        if let Ok(target) = origin.offset(d_file, d_rank) {
            if is_open_for(game_state, target, color) {
                out.push(target);
            }
        }
    }
}

/// Walk one ray until the edge or the first occupied square. The blocker is
/// pushed only when it belongs to the other side.
pub fn trace_ray(
    game_state: &GameState,
    origin: Square,
    color: Color,
    file_step: i8,
    rank_step: i8,
    out: &mut Vec<Square>,
) {
    let mut current = origin;
    while let Ok(next) = current.offset(file_step, rank_step) {
        let occupant = game_state.color_mask_at(next);
        if occupant == 0 {
            out.push(next);
            current = next;
            continue;
        }
        if occupant != color.sign() {
            out.push(next);
        }
        break;
    }
}
