//! FEN-to-GameState parser.
//!
//! Reads the piece-placement field and the optional side-to-move field. Any
//! trailing castling/en-passant/clock fields are accepted and ignored, since
//! those rules are not modelled.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidPosition("Missing board layout in FEN".to_owned()))?;
    let side = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part).map_err(ChessErrors::InvalidPosition)?,
        None => Color::White,
    };

    let board = parse_board(board_part).map_err(ChessErrors::InvalidPosition)?;
    GameState::from_board(board, side)
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board: Board = [[None; 8]; 8];

    // FEN lists rank 8 first, which is rank index 0 here.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += step;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            let mut piece = Piece::new(kind, color);
            if kind == PieceKind::Pawn && rank != pawn_start_rank(color) as usize {
                piece.has_moved = true;
            }
            board[rank][file] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
