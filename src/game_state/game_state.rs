//! Core board state representation.
//!
//! `GameState` owns the authoritative piece grid together with the data derived
//! from it: the color-sign mask, the cached king squares, and the side to move.
//! Only `move_generation::legal_move_apply` mutates the grid after
//! construction, and it updates the derived data in the same step.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{back_rank, pawn_start_rank, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) color_mask: ColorMask,
    // [Color::index()]
    pub(crate) king_locations: [Square; 2],
    pub(crate) current_turn: Color,
    pub(crate) snapshot: Option<MoveSnapshot>,
}

impl GameState {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        let mut board: Board = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            let home = back_rank(color) as usize;
            let pawns = pawn_start_rank(color) as usize;
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board[home][file] = Some(Piece::new(*kind, color));
                board[pawns][file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        let king_file = 4;
        let king_locations = [
            Square::new_unchecked(king_file, back_rank(Color::White)),
            Square::new_unchecked(king_file, back_rank(Color::Black)),
        ];
        Self::assemble(board, king_locations, Color::White)
    }

    /// Build a position from the placement (and optional side-to-move) fields
    /// of a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Build a position from an arbitrary grid. Each side needs exactly one king.
    pub fn from_board(board: Board, current_turn: Color) -> Result<Self, ChessErrors> {
        let mut king_locations = [None, None];
        for color in [Color::White, Color::Black] {
            let kings: Vec<Square> = Square::all()
                .filter(|sq| {
                    matches!(
                        board[sq.rank() as usize][sq.file() as usize],
                        Some(Piece { kind: PieceKind::King, color: c, .. }) if c == color
                    )
                })
                .collect();
            if kings.len() != 1 {
                return Err(ChessErrors::PositionKingCount((color, kings.len())));
            }
            king_locations[color.index()] = kings.first().copied();
        }

        match king_locations {
            [Some(white), Some(black)] => Ok(Self::assemble(board, [white, black], current_turn)),
            _ => Err(ChessErrors::InvalidPosition("missing king".to_owned())),
        }
    }

    fn assemble(board: Board, king_locations: [Square; 2], current_turn: Color) -> Self {
        Self {
            color_mask: color_mask_of(&board),
            board,
            king_locations,
            current_turn,
            snapshot: None,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn color_mask_at(&self, square: Square) -> i8 {
        self.color_mask[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn color_mask(&self) -> &ColorMask {
        &self.color_mask
    }

    /// Whether a tentative move is waiting to be reverted.
    #[inline]
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Every occupied square with its piece, for renderers and scans.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// True when the mask and the king cache agree with the grid.
    pub fn derived_data_is_synchronized(&self) -> bool {
        if self.color_mask != color_mask_of(&self.board) {
            return false;
        }
        [Color::White, Color::Black].into_iter().all(|color| {
            matches!(
                self.piece_at(self.king_location(color)),
                Some(Piece { kind: PieceKind::King, color: c, .. }) if c == color
            )
        })
    }
}

fn color_mask_of(board: &Board) -> ColorMask {
    let mut mask: ColorMask = [[0; 8]; 8];
    for (rank, row) in board.iter().enumerate() {
        for (file, cell) in row.iter().enumerate() {
            mask[rank][file] = cell.map_or(0, |piece| piece.color.sign());
        }
    }
    mask
}
