//! Engine configuration.
//!
//! Front ends build an `EngineConfig` once at startup and hand it to
//! `Engine::new`. Nothing in here changes the rule table.

use serde::{Deserialize, Serialize};

/// Environment variable read by [`EngineConfig::from_env`].
pub const SEED_ENV: &str = "RPSLS_SEED";

/// Largest simulation count the text front ends accept.
pub const DEFAULT_SIMULATION_CAP: u64 = 1_000_000;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the engine RNG. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Upper bound applied by input parsing. The engine itself never
    /// checks it.
    pub simulation_cap: u64,

    /// Most rounds between `SimulationProgress` events (0 = never).
    /// Small batches report more often.
    pub progress_interval: u64,

    /// Thread name given to simulation workers.
    pub worker_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            simulation_cap: DEFAULT_SIMULATION_CAP,
            progress_interval: 10_000,
            worker_name: "rpsls-simulation".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with `seed` taken from `RPSLS_SEED` when it parses.
    pub fn from_env() -> Self {
        let seed = std::env::var(SEED_ENV).ok().and_then(|s| s.trim().parse().ok());
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_simulation_cap(mut self, cap: u64) -> Self {
        self.simulation_cap = cap;
        self
    }

    #[must_use]
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    #[must_use]
    pub fn with_worker_name(mut self, name: impl Into<String>) -> Self {
        self.worker_name = name.into();
        self
    }
}
