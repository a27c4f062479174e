//! View rendering dispatch.

pub mod objections;
pub mod quotes;

use crate::nav::View;
use crate::notifications::NotificationLevel;
use crate::state::{App, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::Objections => objections::render(f, app, layout[1]),
        View::Quotes => quotes::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(modal) = &app.modal {
        render_modal(f, app, modal);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "RIPOSTE",
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    )];
    for &view in View::all() {
        spans.push(Span::raw(" | "));
        let style = if view == app.active_view {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(view.title(), style));
    }
    if let Some(motto) = &app.quote_view.motto {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            motto.clone(),
            Style::default()
                .fg(app.theme.secondary)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let header = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.input_mode {
        InputMode::Search => "type to search • Up/Down pick suggestion • Enter accept • Esc close",
        InputMode::Browse => {
            "j/k move • h/l response • / search • f favorites • s star • y copy • m more • Tab view • ? help • q quit"
        }
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(app.theme.notification_color(note.level)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, modal: &crate::state::Modal) {
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);
    let widget = Paragraph::new(modal.message.clone())
        .block(
            Block::default()
                .title(modal.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

pub const HELP_TEXT: &str = "\
Navigation
  j / Down       move down
  k / Up         move up
  h / Left       previous response
  l / Right      next response
  Tab / BackTab  switch view

Objections
  /              focus search
  f              toggle favorites-only filter
  s              star / unstar the selected objection
  y              copy the highlighted response
  m              load more results
  r / Ctrl-r     refresh from the server

General
  ?              this help
  Esc            close help or search
  q / Ctrl-c     quit";
