#[derive(Debug, thiserror::Error)]
pub enum ArrowRushError {
    #[error("step duration must be greater than zero")]
    InvalidStep,

    #[error("tick interval must be greater than zero")]
    InvalidTick,

    #[error("stdin must be a tty")]
    NotATty,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
