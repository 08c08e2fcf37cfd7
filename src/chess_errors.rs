//! Errors used throughout the chess core.
//!
//! `ChessErrors` is the single error type returned by game logic and position
//! construction. Each variant carries the offending location or token where
//! that helps diagnostics.
//!
//! Usage guidelines:
//! - Rejections a player can cause by clicking the wrong square are not errors;
//!   they are reported as `MoveStatus` values by the turn controller.
//! - The variants below are contract breaches (an out-of-range coordinate, a
//!   move from an empty square, a revert with nothing to revert) or malformed
//!   positions, and are not expected during normal play.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the chess core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Invalid file or rank indices were provided (outside 0..=7).
    ///
    /// Payload: (file_index, rank_index).
    InvalidFileOrRank((i16, i16)),

    /// Attempted to offset `Square` by `(d_file, d_rank)` which would place it
    /// off the board.
    TriedToMoveOutOfBounds((Square, i8, i8)),

    /// Attempted to move, view or edit a piece on an empty square.
    TryToViewOrEditEmptySquare(Square),

    /// Attempted to move onto a king. Kings are never removed from the board.
    ///
    /// Payload: the location of the king.
    CannotRemoveKings(Square),

    /// `revert_last_move` was called without a preceding `apply_move`.
    NoMoveToRevert,

    /// A position was built without exactly one king for the given side.
    ///
    /// Payload: the side and the number of kings found.
    PositionKingCount((Color, usize)),

    /// A position string could not be interpreted.
    InvalidPosition(String),

    /// A square coordinate such as `e4` could not be interpreted.
    InvalidAlgebraicString(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidFileOrRank((file, rank)) => {
                write!(f, "file {file} / rank {rank} is outside the board")
            }
            ChessErrors::TriedToMoveOutOfBounds((square, d_file, d_rank)) => write!(
                f,
                "offset ({d_file}, {d_rank}) from {square} leaves the board"
            ),
            ChessErrors::TryToViewOrEditEmptySquare(square) => {
                write!(f, "no piece on {square}")
            }
            ChessErrors::CannotRemoveKings(square) => {
                write!(f, "the king on {square} cannot be captured")
            }
            ChessErrors::NoMoveToRevert => write!(f, "there is no tentative move to revert"),
            ChessErrors::PositionKingCount((color, count)) => {
                write!(f, "{color:?} must have exactly one king, found {count}")
            }
            ChessErrors::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
            ChessErrors::InvalidAlgebraicString(msg) => write!(f, "invalid square: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
