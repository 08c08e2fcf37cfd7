//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the text
//! front-end. Optional highlights mark squares (for example candidate moves).

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_highlights(game_state, &[])
}

/// Render the board, drawing `*` on highlighted empty squares and wrapping
/// highlighted pieces in brackets.
pub fn render_with_highlights(game_state: &GameState, highlights: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in 0..BOARD_SIZE {
        let rank_char = char::from(b'8' - rank);
        out.push(rank_char);
        out.push(' ');

        for file in 0..BOARD_SIZE {
            let sq = Square::new_unchecked(file, rank);
            let marked = highlights.contains(&sq);
            match (game_state.piece_at(sq), marked) {
                (Some(piece), true) => {
                    out.push('[');
                    out.push(piece_to_unicode(piece));
                    out.push(']');
                }
                (Some(piece), false) => {
                    out.push(' ');
                    out.push(piece_to_unicode(piece));
                    out.push(' ');
                }
                (None, true) => out.push_str(" * "),
                (None, false) => out.push_str(" · "),
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
