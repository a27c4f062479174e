//! Keybinding definitions for the TUI.
//!
//! Two maps: one for normal browsing, one for when the search box is
//! focused and printable characters must reach the search term.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    MoveUp,
    MoveDown,
    PrevResponse,
    NextResponse,
    ToggleFavorite,
    ToggleFavoritesOnly,
    CopyResponse,
    LoadMore,
    OpenSearch,
    Refresh,
    OpenHelp,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('f') => Some(Action::ToggleFavoritesOnly),
        KeyCode::Char('s') => Some(Action::ToggleFavorite),
        KeyCode::Char('y') => Some(Action::CopyResponse),
        KeyCode::Char('m') => Some(Action::LoadMore),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevResponse),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextResponse),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Insert(char),
    Backspace,
    SuggestionUp,
    SuggestionDown,
    Accept,
    Close,
}

pub fn map_search_key(event: KeyEvent) -> Option<SearchAction> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(SearchAction::Close),
            _ => None,
        };
    }

    match code {
        KeyCode::Char(c) => Some(SearchAction::Insert(c)),
        KeyCode::Backspace => Some(SearchAction::Backspace),
        KeyCode::Up => Some(SearchAction::SuggestionUp),
        KeyCode::Down => Some(SearchAction::SuggestionDown),
        KeyCode::Enter => Some(SearchAction::Accept),
        KeyCode::Esc => Some(SearchAction::Close),
        _ => None,
    }
}
