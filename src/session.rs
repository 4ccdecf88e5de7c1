use std::collections::VecDeque;

use tracing::{info, trace};

use crate::arrow::{Arrow, ArrowCode};
use crate::coordinator::{GameCoordinator, GamePhase, TimerCoordinator, TimerPhase};
use crate::game::{AttemptRecord, GameState};
use crate::referee::Referee;
use crate::signal::{Notification, Signal};
use crate::timer::{Clock, SystemClock, TimerState};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub step_ms: u64,
    /// fixed seed for the arrow picker; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            step_ms: crate::config::DEFAULT_STEP_MS,
            seed: None,
        }
    }
}

/// Owns both state machines and both coordinators, and delivers signals to them in order.
///
/// Signals are applied one at a time from a FIFO queue. When the queue runs dry the
/// referee looks at the resulting state and may queue more; this repeats until quiet.
#[derive(Debug)]
pub struct Session {
    game: GameState,
    timer: TimerState,
    game_coordinator: GameCoordinator,
    timer_coordinator: TimerCoordinator,
    referee: Referee,
    queue: VecDeque<Signal>,
    notification: Option<Notification>,
    notifications: Vec<Notification>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: SessionConfig, clock: Box<dyn Clock>) -> Self {
        let game = match config.seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        };
        let mut session = Self {
            game,
            timer: TimerState::new(clock),
            game_coordinator: GameCoordinator::new(),
            timer_coordinator: TimerCoordinator::new(),
            referee: Referee::new(),
            queue: VecDeque::new(),
            notification: None,
            notifications: vec![],
        };
        session.dispatch(Signal::TimerInit {
            step_ms: config.step_ms,
        });
        session
    }

    /// Queues a signal and processes everything it leads to.
    pub fn dispatch(&mut self, signal: Signal) {
        self.queue.push_back(signal);
        self.pump();
    }

    /// What the start button does: a new round and a fresh countdown.
    pub fn start(&mut self) {
        self.queue.push_back(Signal::Start);
        self.queue.push_back(Signal::TimerRun);
        self.pump();
    }

    /// What an arrow key press does. Ignored when no round is accepting input.
    pub fn type_arrow(&mut self, code: ArrowCode) {
        if !self.game.is_active() {
            trace!(%code, "arrow typed outside a round");
            return;
        }
        self.queue.push_back(Signal::TypeArrow(code));
        self.queue.push_back(Signal::TimerStop);
        self.pump();
    }

    /// One timer update interval elapsed.
    pub fn tick(&mut self) {
        if let Some(signal) = self.timer_coordinator.on_tick(&mut self.timer) {
            self.queue.push_back(signal);
        }
        self.pump();
    }

    fn pump(&mut self) {
        loop {
            while let Some(signal) = self.queue.pop_front() {
                self.apply(signal);
            }
            self.run_effects();
            if self.queue.is_empty() {
                break;
            }
        }
    }

    fn apply(&mut self, signal: Signal) {
        trace!(?signal, "applying signal");

        if signal == Signal::Start && self.game_coordinator.phase() == GamePhase::Idle {
            self.notification = None;
        }

        if let Some(notification) = self.game_coordinator.handle(signal, &mut self.game) {
            info!(message = notification.message(), "round over");
            self.notification = Some(notification);
            self.notifications.push(notification);
        }

        if let Some(emitted) = self.timer_coordinator.handle(signal, &mut self.timer) {
            self.queue.push_back(emitted);
        }
    }

    fn run_effects(&mut self) {
        if let Some(signal) = self.referee.observe_remaining(self.timer.remaining_secs()) {
            self.queue.push_back(signal);
        }
        self.queue.extend(self.referee.observe_attempts(&self.game));
    }

    pub fn is_active(&self) -> bool {
        self.game.is_active()
    }

    pub fn required_arrow(&self) -> Arrow {
        self.game.required_arrow()
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        self.game.attempts()
    }

    pub fn remaining_ms(&self) -> i64 {
        self.timer.remaining_ms()
    }

    pub fn remaining_secs(&self) -> i64 {
        self.timer.remaining_secs()
    }

    pub fn step_ms(&self) -> u64 {
        self.timer.step_limit_ms()
    }

    /// Latest round outcome, cleared when the next round starts
    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    /// Every round outcome since the session began
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn timer_phase(&self) -> TimerPhase {
        self.timer_coordinator.phase()
    }
}
