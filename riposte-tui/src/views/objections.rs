//! Objection catalog view: search bar, windowed list and rebuttal detail.

use crate::state::{App, InputMode};
use crate::widgets::{DetailPanel, FilterBar, SuggestionBox};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let view = &app.objection_view;
    let search_focused = app.input_mode == InputMode::Search;

    let bar = FilterBar {
        term: &view.search_term,
        favorites_only: view.favorites_only,
        focused: search_focused,
        border_color: if search_focused {
            app.theme.border_focus
        } else {
            app.theme.border
        },
        badge_color: app.theme.accent,
    };
    bar.render(f, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    render_list(f, app, columns[0]);
    render_detail(f, app, columns[1]);

    // Suggestions overlay the list, anchored under the search bar.
    if search_focused && view.show_suggestions() {
        let dropdown = SuggestionBox {
            suggestions: &view.suggestions,
            cursor: view.suggestion_cursor,
            highlight_color: app.theme.primary,
        };
        dropdown.render(f, rows[0]);
    }
}

fn render_list(f: &mut Frame<'_>, app: &App, area: Rect) {
    let view = &app.objection_view;
    let visible = view.visible();

    if visible.is_empty() {
        let message = if view.loading {
            "Loading..."
        } else if !view.search_term.trim().is_empty() || view.favorites_only {
            "No objections match the current filter"
        } else {
            "No objections loaded"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Objections").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|objection| {
            let star = if objection.is_favorite { "*" } else { " " };
            let mut spans = vec![
                Span::styled(
                    format!("{} ", star),
                    Style::default().fg(app.theme.favorite_color(objection.is_favorite)),
                ),
                Span::raw(objection.title.clone()),
            ];
            if objection.usage_count > 0 {
                spans.push(Span::styled(
                    format!("  ({})", objection.usage_count),
                    Style::default().fg(app.theme.text_dim),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = view.selected {
        if let Some(index) = visible.iter().position(|o| o.id == selected) {
            state.select(Some(index));
        }
    }

    let mut title = format!("Objections ({}/{})", visible.len(), view.objections.len());
    if view.loading {
        title.push_str(" [loading]");
    }
    if view.can_load_more() {
        title.push_str(" [m: more]");
    }

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, area, &mut state);
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect) {
    let view = &app.objection_view;
    let Some(objection) = view.selected_objection() else {
        let hint = Paragraph::new("Select an objection to see its rebuttals")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Rebuttals").borders(Borders::ALL));
        f.render_widget(hint, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let mut fields = Vec::new();
    if let Some(category) = &objection.category {
        fields.push(("Category", category.clone()));
    }
    fields.push(("Tags", objection.tags.join(", ")));
    fields.push(("Used", objection.usage_count.to_string()));
    fields.push((
        "Favorite",
        if objection.is_favorite { "yes" } else { "no" }.to_string(),
    ));
    fields.push(("Updated", objection.updated_at.to_rfc3339()));

    let detail = DetailPanel {
        title: &objection.title,
        fields,
        style: Style::default().fg(app.theme.secondary),
    };
    detail.render(f, rows[0]);

    let mut lines: Vec<Line> = Vec::new();
    for (index, response) in objection.responses.iter().enumerate() {
        let highlighted = index == view.response_cursor;
        let marker = if highlighted { ">" } else { " " };
        let style = if highlighted {
            Style::default().fg(app.theme.text)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}. {}", marker, index + 1, response.text),
            style,
        )));
        lines.push(Line::raw(""));
    }
    if lines.is_empty() {
        lines.push(Line::styled(
            "No rebuttals recorded",
            Style::default().fg(app.theme.text_dim),
        ));
    }

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Rebuttals [h/l pick, y copy]")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(body, rows[1]);
}
