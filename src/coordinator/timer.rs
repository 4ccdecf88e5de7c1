use tracing::debug;

use crate::signal::Signal;
use crate::timer::TimerState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    /// countdown hit zero and emitted its stop; waiting for that stop to come back
    Expired,
}

/// Runs one countdown per `TimerRun`, refreshing on every tick.
#[derive(Debug)]
pub struct TimerCoordinator {
    phase: TimerPhase,
}

impl TimerCoordinator {
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Applies one signal. Returns `TimerStop` if the countdown expired on the spot.
    pub fn handle(&mut self, signal: Signal, timer: &mut TimerState) -> Option<Signal> {
        match (self.phase, signal) {
            (_, Signal::TimerInit { step_ms }) => {
                timer.set_step_limit(step_ms);
                timer.init_remaining();
                None
            }
            (TimerPhase::Idle, Signal::TimerRun) => {
                timer.init_deadline();
                timer.init_remaining();
                self.phase = TimerPhase::Running;
                debug!(step_ms = timer.step_limit_ms(), "timer running");
                self.expire_if_elapsed(timer)
            }
            (TimerPhase::Running | TimerPhase::Expired, Signal::TimerStop) => {
                debug!(remaining_ms = timer.remaining_ms(), "timer stopped");
                self.phase = TimerPhase::Idle;
                None
            }
            _ => None,
        }
    }

    /// One update interval elapsed.
    pub fn on_tick(&mut self, timer: &mut TimerState) -> Option<Signal> {
        if self.phase != TimerPhase::Running {
            return None;
        }
        timer.refresh_remaining();
        self.expire_if_elapsed(timer)
    }

    fn expire_if_elapsed(&mut self, timer: &TimerState) -> Option<Signal> {
        if timer.remaining_ms() > 0 {
            return None;
        }
        debug!(remaining_ms = timer.remaining_ms(), "timer expired");
        self.phase = TimerPhase::Expired;
        Some(Signal::TimerStop)
    }
}

impl Default for TimerCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
