use crate::arrow::ArrowCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "camelCase")]
pub enum LostReason {
    TimeIsUp,
    TooManyMistakes,
}

/// Messages exchanged between the presentation, the coordinators and the referee
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Start,
    TypeArrow(ArrowCode),
    NextStep,
    IsLost(LostReason),
    IsWon,
    TimerInit { step_ms: u64 },
    TimerRun,
    TimerStop,
}

impl Signal {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Signal::IsLost(_) | Signal::IsWon)
    }
}

/// What the player is told when a round ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    Won,
    Lost(LostReason),
}

pub const TEXT_WIN: &str = "You win! Three in a row.";
pub const TEXT_LOST_BY_TIME: &str = "Time is up! You lose.";
pub const TEXT_LOST_BY_MISTAKES: &str = "Too many mistakes! You lose.";

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Won => TEXT_WIN,
            Notification::Lost(LostReason::TimeIsUp) => TEXT_LOST_BY_TIME,
            Notification::Lost(LostReason::TooManyMistakes) => TEXT_LOST_BY_MISTAKES,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Notification::Won)
    }
}
