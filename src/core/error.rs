//! Crate error type.

use thiserror::Error;

/// Message shown when a simulation count is rejected.
pub const INVALID_COUNT_MESSAGE: &str = "Please enter a valid number between 1 and 1,000,000.";

#[derive(Debug, Error)]
pub enum Error {
    /// Simulation count was empty, non-numeric, or zero.
    #[error("invalid simulation count {0:?}")]
    InvalidSimulationCount(String),

    /// Text did not name one of the five elements.
    #[error("unknown element {0:?}")]
    UnknownElement(String),

    /// The simulation worker thread could not be started.
    #[error("failed to spawn simulation worker: {0}")]
    Spawn(std::io::Error),

    /// Front-end I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The simulation worker panicked before reporting.
    #[error("simulation worker panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;
