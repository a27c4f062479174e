//! Riposte Core - domain types and pure query logic.
//!
//! This crate holds the data shapes served by the objection catalog and the
//! two pieces of client-side logic with real invariants: search-suggestion
//! matching and the append-only pagination window. No I/O lives here.

pub mod identity;
pub mod query;
pub mod types;

pub use identity::{ObjectionId, QuoteId, ResponseId, Timestamp};
pub use query::{can_load_more, suggest, visible_len, visible_slice, DEFAULT_PAGE_SIZE, SUGGESTION_LIMIT};
pub use types::{Objection, Quote, Rebuttal};
