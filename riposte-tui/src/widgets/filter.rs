//! Search bar and suggestion dropdown widgets.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Single-line search input with an optional favorites-only badge.
pub struct FilterBar<'a> {
    pub term: &'a str,
    pub favorites_only: bool,
    pub focused: bool,
    pub border_color: Color,
    pub badge_color: Color,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![Span::raw(self.term.to_string())];
        if self.focused {
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        let mut title_spans = vec![Span::raw("Search [/]")];
        if self.favorites_only {
            title_spans.push(Span::raw(" "));
            title_spans.push(Span::styled(
                "* favorites",
                Style::default().fg(self.badge_color),
            ));
        }

        let widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(Line::from(title_spans))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.border_color)),
        );
        f.render_widget(widget, area);
    }
}

/// Dropdown of matching titles, overlaid just below the search bar.
pub struct SuggestionBox<'a> {
    pub suggestions: &'a [String],
    pub cursor: Option<usize>,
    pub highlight_color: Color,
}

impl<'a> SuggestionBox<'a> {
    /// Draw the dropdown directly under `anchor`, clamped to the space left
    /// between the anchor's bottom edge and the frame's bottom edge.
    pub fn render(&self, f: &mut Frame<'_>, anchor: Rect) {
        if self.suggestions.is_empty() {
            return;
        }
        let y = anchor.y.saturating_add(anchor.height);
        let below = f.size().bottom().saturating_sub(y);
        let height = (self.suggestions.len() as u16 + 2).min(below);
        if height < 3 {
            return;
        }
        let area = Rect {
            x: anchor.x,
            y,
            width: anchor.width,
            height,
        };

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|title| ListItem::new(title.clone()))
            .collect();
        let mut state = ListState::default();
        state.select(self.cursor);

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(self.highlight_color)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_dropdown_draws_below_search_bar_anchor() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let suggestions = vec!["Too expensive".to_string()];

        terminal
            .draw(|f| {
                // A height-3 search bar at the top of the frame.
                let anchor = Rect::new(0, 0, 40, 3);
                let dropdown = SuggestionBox {
                    suggestions: &suggestions,
                    cursor: Some(0),
                    highlight_color: Color::Blue,
                };
                dropdown.render(f, anchor);
            })
            .unwrap();

        assert!(
            buffer_text(&terminal).contains("Too expensive"),
            "suggestion title not drawn"
        );
    }

    #[test]
    fn test_dropdown_skipped_when_no_room_below_anchor() {
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        let suggestions = vec!["Too expensive".to_string()];

        terminal
            .draw(|f| {
                let anchor = Rect::new(0, 0, 40, 3);
                let dropdown = SuggestionBox {
                    suggestions: &suggestions,
                    cursor: None,
                    highlight_color: Color::Blue,
                };
                dropdown.render(f, anchor);
            })
            .unwrap();

        assert!(!buffer_text(&terminal).contains("Too expensive"));
    }
}
