use arrowrush::{
    config::{Config, ConfigStore, FileConfigStore},
    error::ArrowRushError,
    runtime::{Command, CrosstermEventSource, GameEvent, GameEventSource, Runner},
    session::{Session, SessionConfig},
    telemetry,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::{Duration, Instant},
};
use tracing::info;

/// type the required arrow before the countdown runs out, three times in a row
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal reflex game: press the arrow key shown on screen before each step's countdown expires. Three correct in a row wins; a third mistake or a timeout loses."
)]
pub struct Cli {
    /// milliseconds allowed to type each arrow
    #[clap(short = 's', long)]
    step_ms: Option<u64>,

    /// milliseconds between countdown refreshes
    #[clap(short = 't', long)]
    tick_ms: Option<u64>,

    /// write a JSON trace log (path from ARROWRUSH_TRACE_LOG, or the temp dir)
    #[clap(long)]
    log: bool,

    /// persist the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,

    /// seed for the arrow picker, for reproducible sequences
    #[clap(long)]
    seed: Option<u64>,
}

impl Cli {
    /// CLI values take precedence over the stored config
    fn apply(&self, stored: Config) -> Config {
        Config {
            step_ms: self.step_ms.unwrap_or(stored.step_ms),
            tick_ms: self.tick_ms.unwrap_or(stored.tick_ms),
            log: self.log || stored.log,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, ArrowRushError::NotATty).exit();
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    config.validate()?;
    if cli.save_config {
        store.save(&config)?;
    }

    telemetry::init_tracing(config.log).map_err(ArrowRushError::Io)?;
    info!(step_ms = config.step_ms, tick_ms = config.tick_ms, "starting");

    let mut session = Session::new(SessionConfig {
        step_ms: config.step_ms,
        seed: cli.seed,
    });
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(config.tick_ms),
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut session, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(rounds = session.notifications().len(), "exiting");
    result
}

fn start_tui<B: Backend, E: GameEventSource>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| f.render_widget(&*session, f.area()))?;

        match runner.step() {
            GameEvent::Tick | GameEvent::Resize => {}
            GameEvent::Key(key) => match Command::from_key(&key) {
                Some(Command::Quit) => break,
                Some(Command::Start) => session.start(),
                Some(Command::Arrow(code)) => session.type_arrow(code),
                None => {}
            },
        }

        // keys can keep the runner from timing out, so ticks are paced here
        if last_tick.elapsed() >= runner.tick_interval() {
            session.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrowrush::config::{DEFAULT_STEP_MS, DEFAULT_TICK_MS};
    use arrowrush::runtime::TestEventSource;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::sync::mpsc;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["arrowrush"]);

        assert_eq!(cli.step_ms, None);
        assert_eq!(cli.tick_ms, None);
        assert!(!cli.log);
        assert!(!cli.save_config);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_cli_step_ms() {
        let cli = Cli::parse_from(["arrowrush", "-s", "1500"]);
        assert_eq!(cli.step_ms, Some(1500));

        let cli = Cli::parse_from(["arrowrush", "--step-ms", "2500"]);
        assert_eq!(cli.step_ms, Some(2500));
    }

    #[test]
    fn test_cli_tick_ms() {
        let cli = Cli::parse_from(["arrowrush", "-t", "50"]);
        assert_eq!(cli.tick_ms, Some(50));
    }

    #[test]
    fn test_cli_overrides_stored_config() {
        let cli = Cli::parse_from(["arrowrush", "-s", "1000", "--log"]);
        let merged = cli.apply(Config::default());

        assert_eq!(merged.step_ms, 1000);
        assert_eq!(merged.tick_ms, DEFAULT_TICK_MS);
        assert!(merged.log);
    }

    #[test]
    fn test_stored_config_used_without_flags() {
        let cli = Cli::parse_from(["arrowrush"]);
        let stored = Config {
            step_ms: 4000,
            tick_ms: 20,
            log: true,
        };

        assert_eq!(cli.apply(stored.clone()), stored);
        assert_eq!(Config::default().step_ms, DEFAULT_STEP_MS);
    }

    #[test]
    fn test_start_tui_quits_on_esc() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
        tx.send(GameEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
            .unwrap();
        let runner = Runner::new(TestEventSource::new(rx), Duration::from_millis(5));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut session = Session::new(SessionConfig {
            step_ms: 3000,
            seed: Some(1),
        });

        start_tui(&mut terminal, &mut session, &runner).unwrap();

        assert!(session.is_active());
    }
}
