//! Move execution with single-slot reversion.
//!
//! `apply_move` is the only path that changes the grid after construction. It
//! snapshots grid, color mask and king cache, then updates all three before
//! returning. `revert_last_move` restores them from that snapshot.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

impl GameState {
    /// Move the piece on `origin` to `destination`, returning any captured piece.
    ///
    /// No rule checking beyond the contract: `origin` must hold a piece and
    /// `destination` must not hold a king. On error nothing is changed and the
    /// previous snapshot is kept.
    pub fn apply_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<Option<Piece>, ChessErrors> {
        let mut piece = self
            .piece_at(origin)
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(origin))?;
        let captured = self.piece_at(destination);
        if matches!(captured, Some(Piece { kind: PieceKind::King, .. })) {
            return Err(ChessErrors::CannotRemoveKings(destination));
        }

        self.snapshot = Some(MoveSnapshot {
            board: self.board,
            color_mask: self.color_mask,
            king_locations: self.king_locations,
        });

        if piece.kind == PieceKind::Pawn {
            piece.has_moved = true;
        }

        let (from_rank, from_file) = (origin.rank() as usize, origin.file() as usize);
        let (to_rank, to_file) = (destination.rank() as usize, destination.file() as usize);

        self.board[from_rank][from_file] = None;
        self.board[to_rank][to_file] = Some(piece);
        self.color_mask[from_rank][from_file] = 0;
        self.color_mask[to_rank][to_file] = piece.color.sign();
        if piece.kind == PieceKind::King {
            self.king_locations[piece.color.index()] = destination;
        }

        Ok(captured)
    }

    /// Undo the most recent `apply_move`, including the pawn `has_moved` flag.
    /// The snapshot is consumed, so a second call fails with `NoMoveToRevert`.
    pub fn revert_last_move(&mut self) -> Result<(), ChessErrors> {
        let snapshot = self.snapshot.take().ok_or(ChessErrors::NoMoveToRevert)?;
        self.board = snapshot.board;
        self.color_mask = snapshot.color_mask;
        self.king_locations = snapshot.king_locations;
        Ok(())
    }
}
