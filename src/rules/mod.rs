//! Outcome rules: the fixed 5x5 table and round resolution.

pub mod outcome;
pub mod table;

pub use outcome::{resolve, RoundOutcome, Verdict, TIE_MESSAGE};
pub use table::{beats, defeats, narration, relation, Relation, RELATIONS};
