//! # rpsls
//!
//! Outcome engine for Rock-Paper-Scissors-Lizard-Spock.
//!
//! ## Design Principles
//!
//! 1. **Fixed Rules**: One 5x5 table, total and anti-symmetric. Every pair
//!    of distinct elements has one winner and one narration sentence.
//!
//! 2. **Explicit Ownership**: No global session. Front ends construct an
//!    `Engine` and pass clones of the handle to whatever needs it.
//!
//! 3. **Observable State**: Every mutation publishes a `SessionEvent` so a
//!    display can refresh without polling.
//!
//! ## Modules
//!
//! - `core`: Elements, RNG, configuration, errors
//! - `rules`: Rule table and round resolution
//! - `session`: Engine handle, scoreboard, events
//! - `simulation`: Background batch play with cancellation
//! - `input`: Text-input rules for front ends
//!
//! ## Example
//!
//! ```
//! use rpsls::{Element, Engine, Verdict};
//!
//! let engine = Engine::with_seed(42);
//! let outcome = engine.resolve_against(Element::Rock, Element::Scissors);
//!
//! assert_eq!(outcome.verdict, Verdict::PlayerWins);
//! assert_eq!(outcome.message(), "Rock smashes scissors. You win!");
//! assert_eq!(engine.scoreboard().player_wins, 1);
//! ```

pub mod core;
pub mod input;
pub mod rules;
pub mod session;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{Element, EngineConfig, Error, GameRng, Result};

pub use crate::rules::{resolve, RoundOutcome, Verdict};

pub use crate::session::{Engine, Scoreboard, SessionEvent};

pub use crate::simulation::{SimulationHandle, SimulationReport, SimulationRequest};

pub use crate::input::{parse_simulation_count, shortcut, Command};
