//! Check detection by brute-force candidate scan.
//!
//! Every opposing piece's candidate set is generated and compared against the
//! target square. No attack maps are cached.

use crate::game_state::chess_types::*;
use crate::move_generation::candidate_moves::generate_candidate_moves;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_location(color), color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::new();
    for (origin, _) in game_state.pieces_of(attacker_color) {
        targets.clear();
        generate_candidate_moves(game_state, origin, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}

/// Origins of every `attacker_color` piece whose candidates include `square`.
pub fn attackers_of(game_state: &GameState, square: Square, attacker_color: Color) -> Vec<Square> {
    let mut attackers = Vec::new();
    let mut targets = Vec::new();
    for (origin, _) in game_state.pieces_of(attacker_color) {
        targets.clear();
        generate_candidate_moves(game_state, origin, &mut targets);
        if targets.contains(&square) {
            attackers.push(origin);
        }
    }
    attackers
}
