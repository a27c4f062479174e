//! Reusable widgets shared across views.

pub mod detail;
pub mod filter;

pub use detail::DetailPanel;
pub use filter::{FilterBar, SuggestionBox};
