//! Navigation between the two catalog views.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Objections,
    Quotes,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Objections => "Objections",
            View::Quotes => "Quotes",
        }
    }

    pub fn all() -> &'static [View] {
        &[View::Objections, View::Quotes]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}
