//! Application state and view state definitions.
//!
//! All state is owned by the controller loop in `main.rs` and mutated only
//! there. Rendering receives `&App` snapshots. Fetch results are applied
//! through generation-checked methods so responses for superseded filters
//! never overwrite newer state.

use crate::api_client::ApiClient;
use crate::config::TuiConfig;
use crate::nav::View;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::Theme;
use riposte_core::{query, Objection, ObjectionId, Quote, QuoteId, Rebuttal};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub api: ApiClient,
    pub active_view: View,
    pub input_mode: InputMode,

    pub objection_view: ObjectionViewState,
    pub quote_view: QuoteViewState,

    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
}

impl App {
    pub fn new(config: TuiConfig, api: ApiClient) -> Self {
        let page_size = config.page_size;
        Self {
            config,
            theme: Theme::midnight(),
            api,
            active_view: View::Objections,
            input_mode: InputMode::Browse,
            objection_view: ObjectionViewState::new(page_size),
            quote_view: QuoteViewState::new(),
            notifications: Vec::new(),
            modal: None,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn select_next(&mut self) {
        match self.active_view {
            View::Objections => self.objection_view.select_next(),
            View::Quotes => self.quote_view.select_next(),
        }
    }

    pub fn select_previous(&mut self) {
        match self.active_view {
            View::Objections => self.objection_view.select_previous(),
            View::Quotes => self.quote_view.select_previous(),
        }
    }
}

// ============================================================================
// OBJECTION VIEW STATE
// ============================================================================

#[derive(Debug, Clone)]
pub struct ObjectionViewState {
    /// Latest successful fetch for the current filter, replaced wholesale.
    pub objections: Vec<Objection>,
    pub selected: Option<ObjectionId>,
    /// Which rebuttal of the selected objection the copy action targets.
    pub response_cursor: usize,
    pub search_term: String,
    pub favorites_only: bool,
    /// Pagination windows revealed so far; reset by every new fetch.
    pub page_cursor: usize,
    pub page_size: usize,
    pub suggestions: Vec<String>,
    pub suggestion_cursor: Option<usize>,
    pub loading: bool,
    fetch_seq: u64,
}

impl ObjectionViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            objections: Vec::new(),
            selected: None,
            response_cursor: 0,
            search_term: String::new(),
            favorites_only: false,
            page_cursor: 0,
            page_size,
            suggestions: Vec::new(),
            suggestion_cursor: None,
            loading: false,
            fetch_seq: 0,
        }
    }

    /// Start a new fetch generation: bumps the sequence, raises the loading
    /// flag and resets the pagination window for the new filter.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.page_cursor = 0;
        self.fetch_seq
    }

    pub fn current_seq(&self) -> u64 {
        self.fetch_seq
    }

    /// Apply a fetch result. Returns false (and changes nothing) when the
    /// result belongs to a superseded generation.
    pub fn apply_fetch(&mut self, seq: u64, objections: Vec<Objection>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.objections = objections;
        self.loading = false;
        self.clamp_selection();
        true
    }

    /// Record a failed fetch: the previous collection stays untouched and
    /// the loading flag drops so any filter change can retry implicitly.
    pub fn fail_fetch(&mut self, seq: u64) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        true
    }

    /// Update the search term and recompute the suggestion dropdown from
    /// the currently loaded pool.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.suggestions = query::suggest(&self.search_term, &self.objections);
        self.suggestion_cursor = None;
    }

    pub fn show_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn suggestion_down(&mut self) {
        if self.suggestions.is_empty() {
            self.suggestion_cursor = None;
            return;
        }
        self.suggestion_cursor = Some(match self.suggestion_cursor {
            Some(i) => (i + 1) % self.suggestions.len(),
            None => 0,
        });
    }

    pub fn suggestion_up(&mut self) {
        if self.suggestions.is_empty() {
            self.suggestion_cursor = None;
            return;
        }
        let len = self.suggestions.len();
        self.suggestion_cursor = Some(match self.suggestion_cursor {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    /// Commit the highlighted suggestion: the term becomes the suggestion
    /// text verbatim and the panel closes. Returns true when a suggestion
    /// was actually taken (the caller then refetches).
    pub fn take_suggestion(&mut self) -> bool {
        let Some(index) = self.suggestion_cursor else {
            return false;
        };
        let Some(title) = self.suggestions.get(index).cloned() else {
            return false;
        };
        self.search_term = title;
        self.clear_suggestions();
        true
    }

    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestion_cursor = None;
    }

    /// Optimistic local flip, applied before the network call resolves.
    /// Returns the new flag value, or None when the id is not loaded.
    pub fn toggle_favorite_local(&mut self, id: ObjectionId) -> Option<bool> {
        let objection = self.objections.iter_mut().find(|o| o.id == id)?;
        objection.is_favorite = !objection.is_favorite;
        Some(objection.is_favorite)
    }

    pub fn visible(&self) -> &[Objection] {
        query::visible_slice(&self.objections, self.page_cursor, self.page_size)
    }

    pub fn can_load_more(&self) -> bool {
        query::can_load_more(self.objections.len(), self.page_cursor, self.page_size)
    }

    /// Reveal the next window. No-op once everything is visible.
    pub fn load_more(&mut self) -> bool {
        if !self.can_load_more() {
            return false;
        }
        self.page_cursor += 1;
        true
    }

    pub fn select_next(&mut self) {
        let next = next_id(self.visible(), self.selected.map(Uuid::from));
        self.selected = next.map(ObjectionId::from);
        self.response_cursor = 0;
    }

    pub fn select_previous(&mut self) {
        let prev = prev_id(self.visible(), self.selected.map(Uuid::from));
        self.selected = prev.map(ObjectionId::from);
        self.response_cursor = 0;
    }

    pub fn selected_objection(&self) -> Option<&Objection> {
        let id = self.selected?;
        self.objections.iter().find(|o| o.id == id)
    }

    pub fn selected_response(&self) -> Option<&Rebuttal> {
        let objection = self.selected_objection()?;
        objection
            .responses
            .get(self.response_cursor.min(objection.responses.len().saturating_sub(1)))
    }

    pub fn next_response(&mut self) {
        if let Some(objection) = self.selected_objection() {
            let len = objection.responses.len();
            if len > 0 && self.response_cursor + 1 < len {
                self.response_cursor += 1;
            }
        }
    }

    pub fn prev_response(&mut self) {
        self.response_cursor = self.response_cursor.saturating_sub(1);
    }

    /// Keep the selection inside the visible prefix after a wholesale
    /// replacement; fall back to the first visible entry.
    fn clamp_selection(&mut self) {
        let clamped = {
            let visible = self.visible();
            let still_visible = self
                .selected
                .map(|id| visible.iter().any(|o| o.id == id))
                .unwrap_or(false);
            if still_visible {
                self.selected
            } else {
                visible.first().map(|o| o.id)
            }
        };
        self.selected = clamped;
        self.response_cursor = 0;
    }
}

// ============================================================================
// QUOTE VIEW STATE
// ============================================================================

#[derive(Debug, Clone)]
pub struct QuoteViewState {
    pub quotes: Vec<Quote>,
    pub selected: Option<QuoteId>,
    /// One quote promoted to the header, chosen when the catalog loads.
    pub motto: Option<String>,
}

impl QuoteViewState {
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            selected: None,
            motto: None,
        }
    }

    pub fn set_quotes(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
        self.motto = pick_motto(&self.quotes);
        let still_loaded = self
            .selected
            .map(|id| self.quotes.iter().any(|q| q.id == id))
            .unwrap_or(false);
        if !still_loaded {
            self.selected = self.quotes.first().map(|q| q.id);
        }
    }

    pub fn select_next(&mut self) {
        let next = next_id(&self.quotes, self.selected.map(Uuid::from));
        self.selected = next.map(QuoteId::from);
    }

    pub fn select_previous(&mut self) {
        let prev = prev_id(&self.quotes, self.selected.map(Uuid::from));
        self.selected = prev.map(QuoteId::from);
    }

    pub fn selected_quote(&self) -> Option<&Quote> {
        let id = self.selected?;
        self.quotes.iter().find(|q| q.id == id)
    }
}

impl Default for QuoteViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pseudo-random pick keyed off the clock's sub-second noise. Good enough
/// for a decorative motto without pulling in an RNG.
fn pick_motto(quotes: &[Quote]) -> Option<String> {
    if quotes.is_empty() {
        return None;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_nanos(0))
        .subsec_nanos() as usize;
    let quote = &quotes[nanos % quotes.len()];
    Some(format!("\"{}\" -- {}", quote.text, quote.author))
}

// ============================================================================
// SELECTION HELPERS
// ============================================================================

fn next_id<T: HasEntityId>(items: &[T], selected: Option<Uuid>) -> Option<Uuid> {
    if items.is_empty() {
        return None;
    }
    let index = selected.and_then(|id| items.iter().position(|item| item.entity_id() == id));
    let next = match index {
        Some(i) => (i + 1) % items.len(),
        None => 0,
    };
    Some(items[next].entity_id())
}

fn prev_id<T: HasEntityId>(items: &[T], selected: Option<Uuid>) -> Option<Uuid> {
    if items.is_empty() {
        return None;
    }
    let index = selected
        .and_then(|id| items.iter().position(|item| item.entity_id() == id))
        .unwrap_or(0);
    let prev = if index == 0 { items.len() - 1 } else { index - 1 };
    Some(items[prev].entity_id())
}

trait HasEntityId {
    fn entity_id(&self) -> Uuid;
}

impl HasEntityId for Objection {
    fn entity_id(&self) -> Uuid {
        self.id.as_uuid()
    }
}

impl HasEntityId for Quote {
    fn entity_id(&self) -> Uuid {
        self.id.as_uuid()
    }
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
