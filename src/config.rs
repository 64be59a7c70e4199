//! Runtime configuration
//!
//! Collects the command-line flags shared by every mode into plain structs.

use crate::engine::GuessEngine;
use crate::solver::{Solver, StrategyType};
use std::path::PathBuf;

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Write logs to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// `EnvFilter` directive for the requested verbosity
    ///
    /// Returns `None` at verbosity 0, meaning `RUST_LOG` (or `warn`) applies.
    #[must_use]
    pub const fn filter_directive(&self) -> Option<&'static str> {
        match self.verbosity {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Settings shared by all commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed seed for reproducible secrets
    pub seed: Option<u64>,
    pub strategy: StrategyType,
    pub log: LogConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new(seed: Option<u64>, strategy_name: &str, log: LogConfig) -> Self {
        Self {
            seed,
            strategy: StrategyType::from_name(strategy_name),
            log,
        }
    }

    /// A fresh engine, seeded if a seed was configured
    #[must_use]
    pub fn engine(&self) -> GuessEngine {
        self.seed
            .map_or_else(GuessEngine::new, GuessEngine::seeded)
    }

    #[must_use]
    pub const fn solver(&self) -> Solver<StrategyType> {
        Solver::new(self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let mut log = LogConfig::default();
        assert_eq!(log.filter_directive(), None);
        log.verbosity = 1;
        assert_eq!(log.filter_directive(), Some("info"));
        log.verbosity = 2;
        assert_eq!(log.filter_directive(), Some("debug"));
        log.verbosity = 9;
        assert_eq!(log.filter_directive(), Some("trace"));
    }

    #[test]
    fn seeded_config_repeats_games() {
        let config = AppConfig::new(Some(5), "bisect", LogConfig::default());
        let a = config.engine();
        let b = config.engine();
        assert_eq!(a.target_rgb(), b.target_rgb());
    }

    #[test]
    fn strategy_from_config() {
        let config = AppConfig::new(None, "random", LogConfig::default());
        assert_eq!(config.strategy.name(), "random");
        assert_eq!(config.solver().strategy().name(), "random");
    }
}
