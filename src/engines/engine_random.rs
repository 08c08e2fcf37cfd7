//! Random-move engine.
//!
//! Selects uniformly from all candidate moves not landing on a king. Used for
//! diagnostics and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{targets_king, Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::move_generation::candidate_moves::all_candidate_moves;

pub struct RandomEngine<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomEngine<StdRng> {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        color: Color,
    ) -> Result<EngineOutput, ChessErrors> {
        let moves: Vec<(Square, Square)> = all_candidate_moves(game_state, color)
            .into_iter()
            .filter(|&(_, destination)| !targets_king(game_state, destination))
            .collect();

        Ok(EngineOutput {
            best_move: moves.as_slice().choose(&mut self.rng).copied(),
            best_score: None,
            moves_considered: moves.len(),
            tied_moves: moves.len(),
        })
    }
}
