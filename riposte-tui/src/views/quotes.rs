//! Motivational quote view.

use crate::state::App;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let view = &app.quote_view;

    if view.quotes.is_empty() {
        let empty = Paragraph::new("No quotes loaded")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Quotes").borders(Borders::ALL));
        f.render_widget(empty, chunks[0]);
        return;
    }

    let items: Vec<ListItem> = view
        .quotes
        .iter()
        .map(|quote| ListItem::new(format!("{} -- {}", quote.text, quote.author)))
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = view.selected {
        if let Some(index) = view.quotes.iter().position(|q| q.id == selected) {
            state.select(Some(index));
        }
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Quotes ({})", view.quotes.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(quote) = view.selected_quote() {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(chunks[1]);

        let mut fields = vec![("Author", quote.author.clone())];
        if let Some(category) = &quote.category {
            fields.push(("Category", category.clone()));
        }
        fields.push(("Added", quote.created_at.to_rfc3339()));

        let detail = DetailPanel {
            title: "Details",
            fields,
            style: Style::default().fg(app.theme.secondary),
        };
        detail.render(f, right[0]);

        let body = Paragraph::new(format!("\"{}\"", quote.text))
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .block(Block::default().title("Quote").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(body, right[1]);
    }
}
