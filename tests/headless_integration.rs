use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use arrowrush::arrow::ArrowCode;
use arrowrush::coordinator::TimerPhase;
use arrowrush::runtime::{Command, GameEvent, Runner, TestEventSource};
use arrowrush::session::{Session, SessionConfig};
use arrowrush::signal::{LostReason, Notification, TEXT_LOST_BY_TIME, TEXT_WIN};
use arrowrush::timer::ManualClock;

fn manual_session(step_ms: u64) -> (Session, ManualClock) {
    let clock = ManualClock::new();
    let session = Session::with_clock(
        SessionConfig {
            step_ms,
            seed: Some(2024),
        },
        Box::new(clock.clone()),
    );
    (session, clock)
}

fn key(code: KeyCode) -> GameEvent {
    GameEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn arrow_key(code: ArrowCode) -> KeyCode {
    match code {
        ArrowCode::Up => KeyCode::Up,
        ArrowCode::Down => KeyCode::Down,
        ArrowCode::Left => KeyCode::Left,
        ArrowCode::Right => KeyCode::Right,
    }
}

fn apply(session: &mut Session, event: GameEvent) {
    match event {
        GameEvent::Tick => session.tick(),
        GameEvent::Resize => {}
        GameEvent::Key(k) => match Command::from_key(&k) {
            Some(Command::Start) => session.start(),
            Some(Command::Arrow(code)) => session.type_arrow(code),
            Some(Command::Quit) | None => {}
        },
    }
}

// Headless win: each key is chosen from what the session currently requires,
// so the events are fed one at a time through the runner.
#[test]
fn headless_three_correct_arrows_win() {
    let (mut session, _clock) = manual_session(3000);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx), Duration::from_millis(5));

    tx.send(key(KeyCode::Enter)).unwrap();
    apply(&mut session, runner.step());
    assert!(session.is_active());

    for _ in 0..3 {
        tx.send(key(arrow_key(session.required_arrow().code)))
            .unwrap();
        apply(&mut session, runner.step());
    }

    assert!(!session.is_active());
    assert_eq!(session.attempts().len(), 3);
    assert!(session.attempts().iter().all(|a| a.is_correct()));
    assert_eq!(session.notifications(), &[Notification::Won]);
    assert_eq!(session.notification().map(|n| n.message()), Some(TEXT_WIN));
}

#[test]
fn headless_three_wrong_arrows_lose_by_mistakes() {
    let (mut session, _clock) = manual_session(3000);
    session.start();

    for _ in 0..3 {
        let required = session.required_arrow().code;
        let wrong = ArrowCode::ALL
            .into_iter()
            .find(|c| *c != required)
            .unwrap();
        session.type_arrow(wrong);
    }

    assert!(!session.is_active());
    assert_eq!(session.attempts().len(), 3);
    assert!(session.attempts().iter().all(|a| !a.is_correct()));
    assert_eq!(
        session.notifications(),
        &[Notification::Lost(LostReason::TooManyMistakes)]
    );
}

#[test]
fn headless_idle_countdown_loses_by_time() {
    let (mut session, clock) = manual_session(1000);
    session.start();

    let mut previous = session.remaining_ms();
    for _ in 0..30 {
        clock.advance(Duration::from_millis(50));
        session.tick();
        if session.timer_phase() == TimerPhase::Running {
            assert!(session.remaining_ms() < previous);
            previous = session.remaining_ms();
        }
    }

    assert!(session.attempts().is_empty());
    assert!(!session.is_active());
    assert_eq!(
        session.notification().map(|n| n.message()),
        Some(TEXT_LOST_BY_TIME)
    );
    assert_eq!(session.notifications().len(), 1);
}

#[test]
fn headless_answer_stops_countdown_before_expiry() {
    let (mut session, clock) = manual_session(1000);
    session.start();
    clock.advance(Duration::from_millis(900));
    session.tick();

    session.type_arrow(session.required_arrow().code);
    clock.advance(Duration::from_millis(500));
    session.tick();

    assert!(session.is_active());
    assert!(session.notifications().is_empty());
    assert_eq!(session.remaining_ms(), 500);
}

#[test]
fn headless_mixed_round_wins_on_trailing_streak() {
    let (mut session, _clock) = manual_session(3000);
    session.start();

    let required = session.required_arrow().code;
    let wrong = ArrowCode::ALL
        .into_iter()
        .find(|c| *c != required)
        .unwrap();
    session.type_arrow(wrong);
    for _ in 0..3 {
        assert!(session.is_active());
        session.type_arrow(session.required_arrow().code);
    }

    assert_eq!(session.attempts().len(), 4);
    assert_eq!(session.notifications(), &[Notification::Won]);
}

#[test]
fn headless_rounds_can_be_replayed() {
    let (mut session, clock) = manual_session(500);

    session.start();
    clock.advance(Duration::from_millis(600));
    session.tick();
    assert_eq!(
        session.notification(),
        Some(Notification::Lost(LostReason::TimeIsUp))
    );

    session.start();
    for _ in 0..3 {
        session.type_arrow(session.required_arrow().code);
    }

    assert_eq!(
        session.notifications(),
        &[
            Notification::Lost(LostReason::TimeIsUp),
            Notification::Won
        ]
    );
}
