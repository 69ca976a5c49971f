//! Background batch simulation.
//!
//! A simulation plays `games` rounds with uniformly random choices on both
//! sides, on its own named thread and with its own forked RNG. Rounds are
//! recorded into the shared session one at a time, so observers see the
//! counters move while the batch runs.
//!
//! ## Usage
//!
//! ```
//! use rpsls::session::Engine;
//!
//! let engine = Engine::with_seed(5);
//! let handle = engine.simulate(1_000, true).unwrap();
//! let report = handle.join().unwrap();
//!
//! assert_eq!(report.completed, 1_000);
//! assert_eq!(engine.scoreboard().total(), 1_000);
//! ```

pub mod report;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{info, trace};

use crate::core::{Error, Result};
use crate::rules;
use crate::session::{Engine, SessionEvent};

pub use report::SimulationReport;

/// Parameters for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationRequest {
    /// Rounds to play. Must be positive.
    pub games: u64,

    /// Zero the session counters before starting.
    pub reset_first: bool,
}

impl SimulationRequest {
    pub fn new(games: u64) -> Self {
        Self {
            games,
            reset_first: false,
        }
    }

    #[must_use]
    pub fn reset_first(mut self, reset: bool) -> Self {
        self.reset_first = reset;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidSimulationCount(self.games.to_string()));
        }
        Ok(())
    }
}

/// A running simulation.
///
/// Dropping the handle detaches the worker; it keeps running to completion.
#[derive(Debug)]
pub struct SimulationHandle {
    games: u64,
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<SimulationReport>,
}

impl SimulationHandle {
    /// Rounds requested.
    #[must_use]
    pub fn games(&self) -> u64 {
        self.games
    }

    /// Ask the worker to stop before its next round.
    ///
    /// Rounds already recorded stay counted.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the worker and take its report.
    pub fn join(self) -> Result<SimulationReport> {
        self.worker.join().map_err(|_| Error::WorkerPanicked)
    }
}

/// Start `request` on a new worker thread.
pub(crate) fn spawn(engine: Engine, request: SimulationRequest) -> Result<SimulationHandle> {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let name = engine.config().worker_name.clone();

    let worker = thread::Builder::new()
        .name(name)
        .spawn(move || run(&engine, request.games, &flag))
        .map_err(Error::Spawn)?;

    info!("simulating {} games", request.games);
    Ok(SimulationHandle {
        games: request.games,
        cancel,
        worker,
    })
}

/// Progress events a batch aims for when it is shorter than the
/// configured interval allows.
const MIN_UPDATES_PER_BATCH: u64 = 10;

/// Rounds between progress events for a batch of `games`.
///
/// The configured interval is an upper bound: small batches still report
/// about `MIN_UPDATES_PER_BATCH` times. Zero disables progress.
fn progress_cadence(configured: u64, games: u64) -> u64 {
    if configured == 0 {
        return 0;
    }
    configured.min((games / MIN_UPDATES_PER_BATCH).max(1))
}

/// Worker body.
fn run(engine: &Engine, games: u64, cancel: &AtomicBool) -> SimulationReport {
    engine.publish(&SessionEvent::SimulationStarted { games });

    let mut rng = engine.fork_rng();
    let interval = progress_cadence(engine.config().progress_interval, games);
    let started = Instant::now();
    let mut report = SimulationReport::new(games);

    for _ in 0..games {
        if cancel.load(Ordering::Relaxed) {
            report.cancelled = true;
            break;
        }

        let player = rng.gen_element();
        let computer = rng.gen_element();
        let outcome = rules::resolve(player, computer);
        report.observe(&outcome);
        engine.record_simulated(outcome);

        if interval > 0 && report.completed % interval == 0 {
            trace!("simulation progress {}/{}", report.completed, games);
            engine.publish_progress(report.completed, games);
        }
    }

    report.time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    report.session = engine.scoreboard();

    if report.cancelled {
        info!("simulation cancelled after {}/{} games", report.completed, games);
    } else {
        info!(
            "simulation finished: {} games in {} us ({})",
            report.completed, report.time_us, report.session
        );
    }

    engine.publish(&SessionEvent::SimulationFinished {
        report: report.clone(),
    });

    report
}
