//! Core types: elements, RNG, configuration, errors.

pub mod config;
pub mod element;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_SIMULATION_CAP, SEED_ENV};
pub use element::Element;
pub use error::{Error, Result, INVALID_COUNT_MESSAGE};
pub use rng::GameRng;
