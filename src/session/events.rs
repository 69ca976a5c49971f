//! Change notification for presentation layers.
//!
//! The engine publishes a `SessionEvent` after every mutation. Subscribers
//! hold the receiving end of an unbounded channel and drain it on their
//! own thread; the engine never blocks on them.

use std::sync::mpsc::{channel, Receiver, Sender};

use super::scoreboard::Scoreboard;
use crate::rules::RoundOutcome;
use crate::simulation::SimulationReport;

/// Something observable changed.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// An interactive round was recorded.
    RoundResolved {
        outcome: RoundOutcome,
        scoreboard: Scoreboard,
    },

    /// Counters were zeroed.
    Reset,

    /// A simulation batch started on a worker.
    SimulationStarted { games: u64 },

    /// Periodic progress from a running simulation.
    SimulationProgress {
        completed: u64,
        games: u64,
        scoreboard: Scoreboard,
    },

    /// A simulation finished or was cancelled.
    SimulationFinished { report: SimulationReport },
}

/// Fan-out list of event channels.
#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Vec<Sender<SessionEvent>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        rx
    }

    /// Send `event` to every live listener, dropping closed ones.
    pub fn publish(&mut self, event: &SessionEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all() {
        let mut subs = Subscribers::new();
        let a = subs.subscribe();
        let b = subs.subscribe();

        subs.publish(&SessionEvent::Reset);

        assert!(matches!(a.try_recv(), Ok(SessionEvent::Reset)));
        assert!(matches!(b.try_recv(), Ok(SessionEvent::Reset)));
    }

    #[test]
    fn test_dropped_receivers_are_pruned() {
        let mut subs = Subscribers::new();
        let keep = subs.subscribe();
        drop(subs.subscribe());
        assert_eq!(subs.len(), 2);

        subs.publish(&SessionEvent::SimulationStarted { games: 3 });

        assert_eq!(subs.len(), 1);
        assert!(matches!(
            keep.try_recv(),
            Ok(SessionEvent::SimulationStarted { games: 3 })
        ));
    }
}
