//! Runtime configuration parsed from environment variables.

use std::str::FromStr;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;

pub const DEFAULT_LOG_FILTER: &str = "greedy_chess=info";

/// Which strategy answers the human's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Greedy,
    Random,
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(EngineKind::Greedy),
            "random" => Ok(EngineKind::Random),
            other => Err(format!("unknown engine: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the engine's tie-break source; OS-seeded when absent.
    pub engine_seed: Option<u64>,
    pub engine: EngineKind,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl GameConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`. Unparseable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        GameConfig {
            engine_seed: lookup("CHESS_ENGINE_SEED").and_then(|v| v.trim().parse().ok()),
            engine: lookup("CHESS_ENGINE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.engine),
            log_filter: lookup("CHESS_LOG").unwrap_or(defaults.log_filter),
        }
    }

    pub fn build_engine(&self) -> Box<dyn Engine> {
        match self.engine {
            EngineKind::Greedy => Box::new(GreedyEngine::from_seed(self.engine_seed)),
            EngineKind::Random => Box::new(RandomEngine::from_seed(self.engine_seed)),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            engine_seed: None,
            engine: EngineKind::Greedy,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.engine_seed, None);
        assert_eq!(config.engine, EngineKind::Greedy);
        assert_eq!(config.log_filter, "greedy_chess=info");
        assert_eq!(config.build_engine().name(), "Greedy one-ply");
    }

    #[test]
    fn lookup_overrides_defaults() {
        let vars = HashMap::from([
            ("CHESS_ENGINE_SEED", "42"),
            ("CHESS_ENGINE", "Random"),
            ("CHESS_LOG", "greedy_chess=debug"),
        ]);
        let config = GameConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.engine_seed, Some(42));
        assert_eq!(config.engine, EngineKind::Random);
        assert_eq!(config.log_filter, "greedy_chess=debug");
        assert_eq!(config.build_engine().name(), "Random");
    }

    #[test]
    fn bad_values_fall_back() {
        let vars = HashMap::from([("CHESS_ENGINE_SEED", "soon"), ("CHESS_ENGINE", "minimax")]);
        let config = GameConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config, GameConfig::default());
    }
}
