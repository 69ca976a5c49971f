//! The outcome engine.
//!
//! `Engine` is a cheap, cloneable handle. Clones share one session, one
//! RNG, and one subscriber list, so a front end can hand a clone to each
//! view and to background simulations without any global state.
//!
//! ## Locking
//!
//! Session state and subscribers each sit behind a `parking_lot::Mutex`.
//! Events are published while the session lock is held so every
//! subscriber sees mutations in the order they happened.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;

use super::events::{SessionEvent, Subscribers};
use super::scoreboard::Scoreboard;
use crate::core::{Element, EngineConfig, GameRng, Result};
use crate::rules::{self, RoundOutcome};
use crate::simulation::{self, SimulationHandle, SimulationReport, SimulationRequest};

#[derive(Debug, Default)]
struct SessionState {
    scoreboard: Scoreboard,
    last_round: Option<RoundOutcome>,
}

#[derive(Debug)]
struct Shared {
    config: EngineConfig,
    session: Mutex<SessionState>,
    rng: Mutex<GameRng>,
    subscribers: Mutex<Subscribers>,
}

/// Handle to a game session.
#[derive(Clone, Debug)]
pub struct Engine {
    shared: Arc<Shared>,
}

impl Engine {
    /// Create an engine with a fresh session.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("engine created with rng seed {}", rng.seed());

        Self {
            shared: Arc::new(Shared {
                config,
                session: Mutex::new(SessionState::default()),
                rng: Mutex::new(rng),
                subscribers: Mutex::new(Subscribers::new()),
            }),
        }
    }

    /// Create an engine with default config and a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.shared.config
    }

    // === Rounds ===

    /// Play one round: the computer draws uniformly at random.
    pub fn resolve_round(&self, player: Element) -> RoundOutcome {
        let computer = self.shared.rng.lock().gen_element();
        self.resolve_against(player, computer)
    }

    /// Play one round against a computer choice supplied by the caller.
    pub fn resolve_against(&self, player: Element, computer: Element) -> RoundOutcome {
        let outcome = rules::resolve(player, computer);
        debug!("{} vs {}: {}", player, computer, outcome.message());

        let mut session = self.shared.session.lock();
        session.scoreboard.record(outcome.verdict);
        session.last_round = Some(outcome.clone());
        let scoreboard = session.scoreboard;
        self.publish(&SessionEvent::RoundResolved {
            outcome: outcome.clone(),
            scoreboard,
        });
        drop(session);

        outcome
    }

    /// Record a simulated round without a per-round event.
    pub(crate) fn record_simulated(&self, outcome: RoundOutcome) {
        let mut session = self.shared.session.lock();
        session.scoreboard.record(outcome.verdict);
        session.last_round = Some(outcome);
    }

    /// Zero the counters. Last selections and narration are kept.
    pub fn reset(&self) {
        let mut session = self.shared.session.lock();
        session.scoreboard.reset();
        self.publish(&SessionEvent::Reset);
        drop(session);
        info!("score reset");
    }

    // === Simulation ===

    /// Start `games` random rounds on a worker thread.
    ///
    /// With `reset_first`, counters are zeroed before this returns.
    pub fn simulate(&self, games: u64, reset_first: bool) -> Result<SimulationHandle> {
        self.submit(SimulationRequest::new(games).reset_first(reset_first))
    }

    /// Start a simulation described by `request`.
    pub fn submit(&self, request: SimulationRequest) -> Result<SimulationHandle> {
        request.validate()?;
        if request.reset_first {
            self.reset();
        }
        simulation::spawn(self.clone(), request)
    }

    /// Run a simulation and wait for it.
    pub fn simulate_blocking(&self, games: u64, reset_first: bool) -> Result<SimulationReport> {
        self.simulate(games, reset_first)?.join()
    }

    /// Fork an independent RNG for a simulation run.
    pub(crate) fn fork_rng(&self) -> GameRng {
        self.shared.rng.lock().fork()
    }

    // === Observation ===

    /// Current counters.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.shared.session.lock().scoreboard
    }

    /// Most recent round, if any.
    #[must_use]
    pub fn last_round(&self) -> Option<RoundOutcome> {
        self.shared.session.lock().last_round.clone()
    }

    #[must_use]
    pub fn player_selection(&self) -> Option<Element> {
        self.shared.session.lock().last_round.as_ref().map(|r| r.player)
    }

    #[must_use]
    pub fn computer_selection(&self) -> Option<Element> {
        self.shared.session.lock().last_round.as_ref().map(|r| r.computer)
    }

    /// Result text of the most recent round ("" before the first round).
    #[must_use]
    pub fn result_text(&self) -> String {
        self.shared
            .session
            .lock()
            .last_round
            .as_ref()
            .map(RoundOutcome::message)
            .unwrap_or_default()
    }

    /// Receive every subsequent `SessionEvent`.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        self.shared.subscribers.lock().subscribe()
    }

    pub(crate) fn publish(&self, event: &SessionEvent) {
        let mut subscribers = self.shared.subscribers.lock();
        if !subscribers.is_empty() {
            subscribers.publish(event);
        }
    }

    /// Publish while holding the session lock so progress events cannot
    /// interleave out of order with round events.
    pub(crate) fn publish_progress(&self, completed: u64, games: u64) {
        let session = self.shared.session.lock();
        self.publish(&SessionEvent::SimulationProgress {
            completed,
            games,
            scoreboard: session.scoreboard,
        });
    }
}
