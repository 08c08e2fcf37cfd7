use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The eight adjacent squares, bounds- and same-color-filtered.
pub fn generate_king_moves(
    game_state: &GameState,
    origin: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    push_step_targets(game_state, origin, color, &KING_OFFSETS, out);
}
