//! Session state: the engine handle, its counters, and change events.

pub mod engine;
pub mod events;
pub mod scoreboard;

pub use engine::Engine;
pub use events::{SessionEvent, Subscribers};
pub use scoreboard::{group_thousands, Scoreboard};
