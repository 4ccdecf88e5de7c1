use crate::arrow::{random_arrow, Arrow};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptRecord {
    /// slot with no key press
    Missed,
    Typed { arrow: Arrow, is_correct: bool },
}

impl AttemptRecord {
    pub fn is_correct(&self) -> bool {
        matches!(
            self,
            AttemptRecord::Typed {
                is_correct: true,
                ..
            }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttemptRecord::Missed => "-",
            AttemptRecord::Typed { arrow, .. } => arrow.label,
        }
    }
}

/// Round state: whether input is accepted, what must be typed, and what was typed so far
#[derive(Debug)]
pub struct GameState {
    is_active: bool,
    required_arrow: Arrow,
    attempts: Vec<AttemptRecord>,
    attempts_revision: u64,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let required_arrow = random_arrow(&mut rng);
        Self {
            is_active: false,
            required_arrow,
            attempts: vec![],
            attempts_revision: 0,
            rng,
        }
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn pick_required_arrow(&mut self) {
        self.required_arrow = random_arrow(&mut self.rng);
    }

    pub fn record_attempt(&mut self, attempt: AttemptRecord) {
        self.attempts.push(attempt);
        self.attempts_revision += 1;
    }

    pub fn clear_attempts(&mut self) {
        self.attempts.clear();
        self.attempts_revision += 1;
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn required_arrow(&self) -> Arrow {
        self.required_arrow
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Bumped on every change to `attempts`, including a clear.
    pub fn attempts_revision(&self) -> u64 {
        self.attempts_revision
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
