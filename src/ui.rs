use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::game::AttemptRecord;
use crate::session::Session;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;
const ATTEMPT_SEPARATOR: &str = " ";

pub const START_HINT: &str = "(enter) start game  (arrows) type  (esc) quit";
pub const TITLE: &str = "Type the arrow!";

impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        // the game area is dimmed whenever it does not accept input
        let game_style = if self.is_active() {
            bold_style
        } else {
            Style::default().patch(bold_style).add_modifier(Modifier::DIM)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // start hint
                Constraint::Length(1), // step length
                Constraint::Length(3), // notification
                Constraint::Min(0),    // spacer
                Constraint::Length(1), // title
                Constraint::Length(1), // remaining time
                Constraint::Length(3), // required arrow
                Constraint::Length(1), // attempts
                Constraint::Min(0),    // spacer
            ])
            .split(area);

        Paragraph::new(Span::styled(
            START_HINT,
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            format!("{} ms per arrow", self.step_ms()),
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        if let Some(notification) = self.notification() {
            let color = if notification.is_win() {
                Color::Green
            } else {
                Color::Red
            };
            Paragraph::new(Span::styled(
                notification.message(),
                Style::default().patch(bold_style).fg(color),
            ))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);
        }

        Paragraph::new(Span::styled(TITLE, game_style))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);

        Paragraph::new(Span::styled(
            format!("{} second(s) left", self.remaining_secs()),
            game_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);

        Paragraph::new(Span::styled(
            self.required_arrow().label,
            Style::default().patch(game_style).fg(Color::Cyan),
        ))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .render(centered(chunks[6], 7), buf);

        let spans = visible_attempts(self.attempts(), chunks[7].width as usize)
            .iter()
            .flat_map(|attempt| {
                let style = if attempt.is_correct() {
                    green_bold_style
                } else {
                    red_bold_style
                };
                [
                    Span::styled(attempt.label(), style),
                    Span::raw(ATTEMPT_SEPARATOR),
                ]
            })
            .collect::<Vec<Span>>();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chunks[7], buf);
    }
}

/// Latest attempts that fit on one line of `width` columns.
fn visible_attempts(attempts: &[AttemptRecord], width: usize) -> &[AttemptRecord] {
    let mut used = 0;
    let mut first = attempts.len();
    for (idx, attempt) in attempts.iter().enumerate().rev() {
        let cell = attempt.label().width() + ATTEMPT_SEPARATOR.width();
        if used + cell > width {
            break;
        }
        used += cell;
        first = idx;
    }
    &attempts[first..]
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
