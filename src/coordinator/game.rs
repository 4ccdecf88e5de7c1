use tracing::{debug, info};

use crate::game::{AttemptRecord, GameState};
use crate::signal::{LostReason, Notification, Signal};

/// Where the per-round loop is suspended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundLoop {
    AwaitingArrow,
    AwaitingNextStep,
    /// loop exited because the round was deactivated; terminal watchers still listen
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Round(RoundLoop),
}

/// Drives a `GameState` through rounds.
///
/// While a round is live, the win and loss watchers race each other: whichever terminal
/// signal arrives first ends the round and the other is never observed for that round.
#[derive(Debug)]
pub struct GameCoordinator {
    phase: GamePhase,
}

impl GameCoordinator {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Applies one signal. Returns the notification for the player when the round ends.
    pub fn handle(&mut self, signal: Signal, game: &mut GameState) -> Option<Notification> {
        match (self.phase, signal) {
            (GamePhase::Idle, Signal::Start) => {
                self.start_round(game);
                None
            }
            (GamePhase::Round(RoundLoop::AwaitingArrow), Signal::TypeArrow(code)) => {
                let arrow = code.arrow();
                let required = game.required_arrow();
                let is_correct = arrow.code == required.code;
                game.record_attempt(AttemptRecord::Typed { arrow, is_correct });
                debug!(typed = %code, required = %required.code, is_correct, "attempt recorded");
                self.phase = GamePhase::Round(RoundLoop::AwaitingNextStep);
                None
            }
            (GamePhase::Round(RoundLoop::AwaitingNextStep), Signal::NextStep) => {
                game.pick_required_arrow();
                self.phase = if game.is_active() {
                    GamePhase::Round(RoundLoop::AwaitingArrow)
                } else {
                    GamePhase::Round(RoundLoop::Done)
                };
                None
            }
            (GamePhase::Round(_), Signal::IsLost(reason)) => Some(self.lose(reason, game)),
            (GamePhase::Round(_), Signal::IsWon) => Some(self.win(game)),
            (GamePhase::Idle, s) if s.is_terminal() => {
                debug!(signal = ?s, "terminal signal with no round in progress; dropped");
                None
            }
            _ => None,
        }
    }

    fn start_round(&mut self, game: &mut GameState) {
        game.set_active(true);
        game.clear_attempts();
        game.pick_required_arrow();
        info!(required = %game.required_arrow().code, "round started");
        self.phase = GamePhase::Round(RoundLoop::AwaitingArrow);
    }

    fn lose(&mut self, reason: LostReason, game: &mut GameState) -> Notification {
        game.set_active(false);
        info!(%reason, attempts = game.attempts().len(), "round lost");
        self.phase = GamePhase::Idle;
        Notification::Lost(reason)
    }

    fn win(&mut self, game: &mut GameState) -> Notification {
        game.set_active(false);
        info!(attempts = game.attempts().len(), "round won");
        self.phase = GamePhase::Idle;
        Notification::Won
    }
}

impl Default for GameCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
