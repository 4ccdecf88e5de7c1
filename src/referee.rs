use itertools::Itertools;
use tracing::debug;

use crate::game::{AttemptRecord, GameState};
use crate::signal::{LostReason, Signal};

/// Mistakes tolerated over the whole round; one more loses it.
pub const MAX_MISTAKES: usize = 2;
/// Consecutive correct attempts needed to win.
pub const WIN_STREAK: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Lost(LostReason),
    Won,
    Continue,
}

/// Judges a round from its attempt history. Mistakes are counted over all attempts,
/// not a sliding window.
pub fn judge(attempts: &[AttemptRecord]) -> Verdict {
    let mistakes = attempts.iter().filter(|a| !a.is_correct()).count();
    if mistakes > MAX_MISTAKES {
        return Verdict::Lost(LostReason::TooManyMistakes);
    }

    let streak = attempts.len() >= WIN_STREAK
        && attempts[attempts.len() - WIN_STREAK..]
            .iter()
            .all(AttemptRecord::is_correct);
    if streak {
        Verdict::Won
    } else {
        Verdict::Continue
    }
}

/// Watches observable state after each batch of signals and decides what happens next.
#[derive(Debug, Default)]
pub struct Referee {
    seen_attempts_revision: u64,
    last_remaining_secs: Option<i64>,
}

impl Referee {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires once each time the displayed seconds change to zero or below.
    /// The first observation only primes the watcher.
    pub fn observe_remaining(&mut self, remaining_secs: i64) -> Option<Signal> {
        let previous = self.last_remaining_secs.replace(remaining_secs);
        match previous {
            Some(prev) if prev != remaining_secs && remaining_secs <= 0 => {
                debug!(remaining_secs, "time is up");
                Some(Signal::IsLost(LostReason::TimeIsUp))
            }
            _ => None,
        }
    }

    /// Reacts to a change in the attempt history.
    pub fn observe_attempts(&mut self, game: &GameState) -> Vec<Signal> {
        if game.attempts_revision() == self.seen_attempts_revision {
            return vec![];
        }
        self.seen_attempts_revision = game.attempts_revision();

        let attempts = game.attempts();
        if attempts.is_empty() {
            return vec![];
        }

        let verdict = judge(attempts);
        debug!(
            ?verdict,
            history = %attempts.iter().map(AttemptRecord::label).join(""),
            "attempts judged"
        );
        match verdict {
            Verdict::Lost(reason) => vec![Signal::IsLost(reason)],
            Verdict::Won => vec![Signal::IsWon],
            Verdict::Continue => vec![Signal::NextStep, Signal::TimerRun],
        }
    }
}
