//! Core value types shared by every subsystem: sides, piece kinds, pieces and
//! board coordinates.

use std::fmt;

use crate::chess_errors::ChessErrors;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::MoveSnapshot;

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

/// Side of a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Value stored in the color mask for squares held by this side.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank step of a pawn advancing for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// A piece on the board. `has_moved` only matters for pawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// Board coordinate. Rank 0 is Black's back rank, rank 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square, rejecting coordinates outside `0..=7`.
    pub fn new(file: i16, rank: i16) -> Result<Self, ChessErrors> {
        let size = BOARD_SIZE as i16;
        if !(0..size).contains(&file) || !(0..size).contains(&rank) {
            return Err(ChessErrors::InvalidFileOrRank((file, rank)));
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Callers guarantee `file < 8 && rank < 8`.
    #[inline]
    pub(crate) const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Moves the square by a file and rank offset.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Result<Self, ChessErrors> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        let size = BOARD_SIZE as i8;
        if (file < 0) | (file >= size) | (rank < 0) | (rank >= size) {
            Err(ChessErrors::TriedToMoveOutOfBounds((self, d_file, d_rank)))
        } else {
            Ok(Self::new_unchecked(file as u8, rank as u8))
        }
    }

    /// All 64 squares, rank by rank from Black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::new_unchecked(file, rank)))
    }
}

impl fmt::Display for Square {
    /// Algebraic name, e.g. `e2` for file 4 / rank 6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + self.file);
        let rank_char = char::from(b'8' - self.rank);
        write!(f, "{file_char}{rank_char}")
    }
}

/// Authoritative occupancy grid, indexed `[rank][file]`.
pub type Board = [[Option<Piece>; 8]; 8];

/// Derived grid of `Color::sign` per occupied square, 0 when empty.
pub type ColorMask = [[i8; 8]; 8];
