//! Event types for the TUI event loop.
//!
//! Network work runs in spawned tasks; results come back through the event
//! channel tagged with the fetch generation that requested them, so the
//! controller can drop responses for superseded filters.

use crossterm::event::KeyEvent;
use riposte_core::{Objection, Quote};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    ObjectionsLoaded { seq: u64, objections: Vec<Objection> },
    ObjectionsFailed { seq: u64, message: String },
    QuotesLoaded(Vec<Quote>),
    QuotesFailed(String),
    ApiError(String),
}
