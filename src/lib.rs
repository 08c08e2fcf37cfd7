//! Crate root module declarations for the greedy chess core.
//!
//! Exposes the board model, per-piece movement rules, candidate generation,
//! check detection, move execution, the turn controller and the one-ply
//! engines, plus the text utilities and front-end used by the binary.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shapes;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod candidate_moves;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod controller {
    pub mod turn_controller;
}

pub mod frontend {
    pub mod text_frontend;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}
