use crate::game_state::chess_types::{Board, ColorMask, Square};

/// Single-slot record taken by `apply_move` and consumed by `revert_last_move`.
///
/// The board copy carries every piece's `has_moved` flag, so reverting a pawn
/// push also restores the pawn's double-step right.
#[derive(Debug, Clone)]
pub struct MoveSnapshot {
    pub board: Board,
    pub color_mask: ColorMask,
    pub king_locations: [Square; 2],
}
