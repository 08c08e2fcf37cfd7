//! Board-independent movement geometry per piece kind.
//!
//! Answers whether a displacement has the right shape for a piece, ignoring
//! blockers, captures and bounds beyond the two squares themselves. Pawn
//! diagonal captures are not a pushing shape and are reported as false.

use crate::game_state::chess_types::*;

pub fn is_valid_shape(piece: Piece, from: Square, to: Square) -> bool {
    let d_file = to.file() as i8 - from.file() as i8;
    let d_rank = to.rank() as i8 - from.rank() as i8;
    if d_file == 0 && d_rank == 0 {
        return false;
    }

    match piece.kind {
        PieceKind::King => d_file.abs() <= 1 && d_rank.abs() <= 1,
        PieceKind::Rook => is_orthogonal(d_file, d_rank),
        PieceKind::Bishop => is_diagonal(d_file, d_rank),
        PieceKind::Queen => is_orthogonal(d_file, d_rank) || is_diagonal(d_file, d_rank),
        PieceKind::Knight => {
            let (a, b) = (d_file.abs(), d_rank.abs());
            (a == 1 && b == 2) || (a == 2 && b == 1)
        }
        PieceKind::Pawn => {
            let forward = piece.color.forward();
            d_file == 0 && (d_rank == forward || (!piece.has_moved && d_rank == 2 * forward))
        }
    }
}

#[inline]
fn is_orthogonal(d_file: i8, d_rank: i8) -> bool {
    d_file == 0 || d_rank == 0
}

#[inline]
fn is_diagonal(d_file: i8, d_rank: i8) -> bool {
    d_file.abs() == d_rank.abs()
}

#[cfg(test)]
mod tests {
    use super::is_valid_shape;
    use crate::game_state::chess_types::*;
    use crate::move_generation::candidate_moves::candidate_moves;

    fn sq(file: i16, rank: i16) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn knight_shape_is_an_l() {
        let knight = Piece::new(PieceKind::Knight, Color::White);

        assert!(is_valid_shape(knight, sq(1, 7), sq(2, 5)));
        assert!(is_valid_shape(knight, sq(1, 7), sq(3, 6)));
        assert!(!is_valid_shape(knight, sq(1, 7), sq(1, 5)));
        assert!(!is_valid_shape(knight, sq(1, 7), sq(3, 5)));
    }

    #[test]
    fn pawn_shape_depends_on_color_and_has_moved() {
        let mut white = Piece::new(PieceKind::Pawn, Color::White);
        let black = Piece::new(PieceKind::Pawn, Color::Black);

        assert!(is_valid_shape(white, sq(4, 6), sq(4, 4)));
        assert!(!is_valid_shape(white, sq(4, 6), sq(4, 7)));
        assert!(is_valid_shape(black, sq(4, 1), sq(4, 3)));
        assert!(!is_valid_shape(black, sq(4, 1), sq(4, 0)));

        white.has_moved = true;
        assert!(is_valid_shape(white, sq(4, 5), sq(4, 4)));
        assert!(!is_valid_shape(white, sq(4, 5), sq(4, 3)));
        // The check is a pure function of its inputs.
        assert!(white.has_moved);
    }

    #[test]
    fn staying_put_is_never_a_move() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind, Color::Black);
            assert!(!is_valid_shape(piece, sq(3, 3), sq(3, 3)));
        }
    }

    #[test]
    fn generated_candidates_have_valid_shapes() {
        let game = GameState::from_fen("r3k2r/1pp2ppp/p1n1bn2/3qp3/3P4/2N1BN2/PPPQ1PPP/R3KB1R w")
            .expect("FEN should parse");

        for (origin, piece) in game.pieces() {
            for target in candidate_moves(&game, origin) {
                let pawn_capture = piece.kind == PieceKind::Pawn && target.file() != origin.file();
                if !pawn_capture {
                    assert!(
                        is_valid_shape(piece, origin, target),
                        "{piece:?} {origin} -> {target}"
                    );
                }
            }
        }
    }
}
