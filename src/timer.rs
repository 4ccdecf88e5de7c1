use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant for countdowns
pub trait Clock: Debug {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same instant.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Per-step countdown state
#[derive(Debug)]
pub struct TimerState {
    step_limit_ms: u64,
    deadline: Option<Instant>,
    remaining_ms: i64,
    clock: Box<dyn Clock>,
}

impl TimerState {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            step_limit_ms: 0,
            deadline: None,
            remaining_ms: 0,
            clock,
        }
    }

    pub fn set_step_limit(&mut self, ms: u64) {
        self.step_limit_ms = ms;
    }

    pub fn init_deadline(&mut self) {
        self.deadline = Some(self.clock.now() + Duration::from_millis(self.step_limit_ms));
    }

    pub fn init_remaining(&mut self) {
        self.remaining_ms = i64::try_from(self.step_limit_ms).unwrap_or(i64::MAX);
    }

    /// Recomputes `deadline - now`. Goes negative once the deadline has passed.
    pub fn refresh_remaining(&mut self) {
        let Some(deadline) = self.deadline else {
            return;
        };
        let now = self.clock.now();
        self.remaining_ms = if deadline >= now {
            duration_ms(deadline - now)
        } else {
            -duration_ms(now - deadline)
        };
    }

    pub fn step_limit_ms(&self) -> u64 {
        self.step_limit_ms
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    /// Remaining time rounded up to whole seconds, as displayed.
    pub fn remaining_secs(&self) -> i64 {
        ceil_secs(self.remaining_ms)
    }
}

fn duration_ms(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}

fn ceil_secs(ms: i64) -> i64 {
    let whole = ms.div_euclid(1000);
    if ms.rem_euclid(1000) > 0 {
        whole + 1
    } else {
        whole
    }
}
