use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Union of the rook rays and the bishop rays from the same origin.
pub fn generate_queen_moves(
    game_state: &GameState,
    origin: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    generate_rook_moves(game_state, origin, color, out);
    generate_bishop_moves(game_state, origin, color, out);
}
