//! The two cooperating processes, written as explicit state machines.
//!
//! Each coordinator parks in a phase that corresponds to the signal it is waiting for.
//! Signals that arrive while a coordinator is not waiting for them are dropped.

pub mod game;
pub mod timer;

pub use game::{GameCoordinator, GamePhase, RoundLoop};
pub use timer::{TimerCoordinator, TimerPhase};
