use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Four diagonal rays, each halting at the first occupied square.
pub fn generate_bishop_moves(
    game_state: &GameState,
    origin: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    for (file_step, rank_step) in BISHOP_DIRECTIONS {
        trace_ray(game_state, origin, color, file_step, rank_step, out);
    }
}
