//! One-ply greedy engine.
//!
//! Tries every candidate move of the searching side except king captures,
//! scores the resulting material, and picks uniformly among the moves sharing
//! the best score. The opponent's reply is ignored and self-check is not
//! avoided.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{targets_king, Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::move_generation::candidate_moves::all_candidate_moves;
use crate::search::board_scoring::score_for;

pub struct GreedyEngine<R: Rng> {
    rng: R,
}

impl<R: Rng> GreedyEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Exhaustive apply/evaluate/revert over every candidate of `color`.
    pub fn find_move(
        &mut self,
        game_state: &mut GameState,
        color: Color,
    ) -> Result<EngineOutput, ChessErrors> {
        let candidates = all_candidate_moves(game_state, color);

        let mut out = EngineOutput::default();
        let mut best_score = i32::MIN;
        let mut best_moves = Vec::new();

        for (origin, destination) in candidates {
            if targets_king(game_state, destination) {
                continue;
            }

            game_state.apply_move(origin, destination)?;
            let score = score_for(game_state, color);
            game_state.revert_last_move()?;
            out.moves_considered += 1;

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push((origin, destination));
            } else if score == best_score {
                best_moves.push((origin, destination));
            }
        }

        out.best_move = best_moves.as_slice().choose(&mut self.rng).copied();
        if out.best_move.is_some() {
            out.best_score = Some(best_score);
            out.tied_moves = best_moves.len();
        }

        debug!(
            ?color,
            considered = out.moves_considered,
            best_score = out.best_score,
            tied = out.tied_moves,
            "greedy search finished"
        );
        Ok(out)
    }
}

impl GreedyEngine<StdRng> {
    /// Seeded for reproducible games, OS-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng + Send> Engine for GreedyEngine<R> {
    fn name(&self) -> &str {
        "Greedy one-ply"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        color: Color,
    ) -> Result<EngineOutput, ChessErrors> {
        self.find_move(game_state, color)
    }
}
