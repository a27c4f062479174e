//! Identity types for Riposte entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// Generate a fresh random id. Server-assigned ids arrive via
            /// deserialization; this is for tests and local fixtures.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

entity_id! {
    /// Identifier of an objection catalog entry. Server-assigned, immutable.
    ObjectionId
}

entity_id! {
    /// Identifier of a single rebuttal response under an objection.
    ResponseId
}

entity_id! {
    /// Identifier of a motivational quote.
    QuoteId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_matches_uuid() {
        let raw = Uuid::new_v4();
        let id = ObjectionId::new(raw);
        assert_eq!(id.to_string(), raw.to_string());
        assert_eq!(id.as_uuid(), raw);
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = QuoteId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let back: QuoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
