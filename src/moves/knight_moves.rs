use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (-1, -2),
    (1, -2),
    (2, 1),
    (-2, 1),
    (-2, -1),
    (2, -1),
];

pub fn generate_knight_moves(
    game_state: &GameState,
    origin: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    push_step_targets(game_state, origin, color, &KNIGHT_OFFSETS, out);
}
