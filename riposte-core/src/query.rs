//! Client-side query logic: search suggestions and the pagination window.
//!
//! Both halves are pure functions over the currently loaded objection pool.
//! The authoritative search/filter runs server-side; `suggest` only feeds
//! the transient dropdown shown while the user types.

use crate::types::Objection;

/// Maximum number of suggestions shown in the dropdown.
pub const SUGGESTION_LIMIT: usize = 5;

/// Default number of items revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Whether an objection matches a lowercased search needle: case-insensitive
/// substring on the title or any tag. No tokenization, no fuzzy matching.
fn matches(objection: &Objection, needle_lower: &str) -> bool {
    objection.title.to_lowercase().contains(needle_lower)
        || objection
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle_lower))
}

/// Derive up to [`SUGGESTION_LIMIT`] candidate titles for `term` from `pool`.
///
/// A trimmed-empty term yields no suggestions; otherwise the term is matched
/// as typed, whitespace included. Candidates keep the pool's order
/// (server-determined) and duplicate titles are not de-duplicated: matching
/// is on title text only.
pub fn suggest(term: &str, pool: &[Objection]) -> Vec<String> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    pool.iter()
        .filter(|objection| matches(objection, &needle))
        .take(SUGGESTION_LIMIT)
        .map(|objection| objection.title.clone())
        .collect()
}

/// Length of the visible prefix for a given cursor: clamped, never asserted,
/// since the collection can shrink under a new fetch.
pub fn visible_len(total: usize, page_cursor: usize, page_size: usize) -> usize {
    page_cursor
        .saturating_add(1)
        .saturating_mul(page_size)
        .min(total)
}

/// The visible prefix of `pool`. Advancing the cursor only ever grows the
/// prefix, so previously revealed items never disappear.
pub fn visible_slice(pool: &[Objection], page_cursor: usize, page_size: usize) -> &[Objection] {
    &pool[..visible_len(pool.len(), page_cursor, page_size)]
}

/// True iff the visible prefix is strictly shorter than the collection.
pub fn can_load_more(total: usize, page_cursor: usize, page_size: usize) -> bool {
    visible_len(total, page_cursor, page_size) < total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{ObjectionId, ResponseId};
    use crate::types::Rebuttal;

    fn sample_objection(title: &str, tags: &[&str]) -> Objection {
        Objection {
            id: ObjectionId::generate(),
            title: title.to_string(),
            responses: vec![Rebuttal {
                id: ResponseId::generate(),
                text: format!("Response to {}", title),
                created_at: chrono::Utc::now(),
            }],
            category: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_favorite: false,
            usage_count: 0,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn pool_of(count: usize) -> Vec<Objection> {
        (0..count)
            .map(|i| sample_objection(&format!("Objection {}", i), &[]))
            .collect()
    }

    // ========================================================================
    // Suggestion Engine
    // ========================================================================

    #[test]
    fn test_suggest_empty_term_is_empty() {
        let pool = vec![sample_objection("Too expensive", &["price"])];
        assert!(suggest("", &pool).is_empty());
        assert!(suggest("   ", &pool).is_empty());
    }

    #[test]
    fn test_suggest_matches_title_substring() {
        let pool = vec![sample_objection("Too expensive", &["price"])];
        assert_eq!(suggest("expens", &pool), vec!["Too expensive"]);
    }

    #[test]
    fn test_suggest_matches_tag_substring() {
        let pool = vec![sample_objection("Too expensive", &["price"])];
        assert_eq!(suggest("pric", &pool), vec!["Too expensive"]);
    }

    #[test]
    fn test_suggest_is_case_insensitive() {
        let pool = vec![sample_objection("Too Expensive", &["Price"])];
        assert_eq!(suggest("EXPENS", &pool), vec!["Too Expensive"]);
        assert_eq!(suggest("pRiCe", &pool), vec!["Too Expensive"]);
    }

    #[test]
    fn test_suggest_no_match_is_empty() {
        let pool = vec![sample_objection("Too expensive", &["price"])];
        assert!(suggest("zzz", &pool).is_empty());
    }

    #[test]
    fn test_suggest_truncates_to_limit_in_pool_order() {
        let pool: Vec<Objection> = (0..8)
            .map(|i| sample_objection(&format!("Call me later {}", i), &[]))
            .collect();

        let suggestions = suggest("later", &pool);
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
        for (i, title) in suggestions.iter().enumerate() {
            assert_eq!(title, &format!("Call me later {}", i));
        }
    }

    #[test]
    fn test_suggest_keeps_duplicate_titles() {
        // Two objections may share a title; both surface.
        let pool = vec![
            sample_objection("Send me an email", &["stall"]),
            sample_objection("Send me an email", &["brushoff"]),
        ];
        let suggestions = suggest("email", &pool);
        assert_eq!(suggestions, vec!["Send me an email", "Send me an email"]);
    }

    #[test]
    fn test_suggest_matches_term_as_typed_including_padding() {
        // Surrounding whitespace is part of the needle, not stripped away:
        // "  expens  " is not a substring of "Too expensive".
        let pool = vec![sample_objection("Too expensive", &[])];
        assert!(suggest("  expens  ", &pool).is_empty());
        assert_eq!(suggest("too exp", &pool), vec!["Too expensive"]);
    }

    // ========================================================================
    // Pagination Window
    // ========================================================================

    #[test]
    fn test_visible_len_first_window() {
        assert_eq!(visible_len(12, 0, 10), 10);
    }

    #[test]
    fn test_visible_len_clamps_to_total() {
        assert_eq!(visible_len(12, 1, 10), 12);
        assert_eq!(visible_len(12, 5, 10), 12);
        assert_eq!(visible_len(0, 0, 10), 0);
    }

    #[test]
    fn test_visible_slice_is_prefix() {
        let pool = pool_of(12);
        let first = visible_slice(&pool, 0, 10);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].title, "Objection 0");
        assert_eq!(first[9].title, "Objection 9");
    }

    #[test]
    fn test_load_more_scenario_twelve_items() {
        // 12 objections, page size 10: one advance reveals everything.
        let pool = pool_of(12);

        assert_eq!(visible_slice(&pool, 0, 10).len(), 10);
        assert!(can_load_more(pool.len(), 0, 10));

        assert_eq!(visible_slice(&pool, 1, 10).len(), 12);
        assert!(!can_load_more(pool.len(), 1, 10));
    }

    #[test]
    fn test_can_load_more_false_iff_fully_visible() {
        assert!(!can_load_more(10, 0, 10));
        assert!(can_load_more(11, 0, 10));
        assert!(!can_load_more(0, 0, 10));
    }

    #[test]
    fn test_cursor_survives_pool_shrink() {
        // A new fetch can shrink the pool under a high cursor; the slice
        // clamps instead of panicking.
        let pool = pool_of(3);
        assert_eq!(visible_slice(&pool, 7, 10).len(), 3);
        assert!(!can_load_more(pool.len(), 7, 10));
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::identity::{ObjectionId, ResponseId};
    use crate::types::{Objection, Rebuttal};
    use proptest::prelude::*;

    fn arb_objection() -> impl Strategy<Value = Objection> {
        (
            "[a-zA-Z0-9 ]{1,30}",
            prop::collection::vec("[a-z]{1,10}", 0..4),
        )
            .prop_map(|(title, tags)| Objection {
                id: ObjectionId::generate(),
                title,
                responses: vec![Rebuttal {
                    id: ResponseId::generate(),
                    text: "response".to_string(),
                    created_at: chrono::Utc::now(),
                }],
                category: None,
                tags,
                is_favorite: false,
                usage_count: 0,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: suggestions are bounded and each one matches the term.
        #[test]
        fn prop_suggest_bounded_and_matching(
            term in "[a-zA-Z]{1,8}",
            pool in prop::collection::vec(arb_objection(), 0..20)
        ) {
            let suggestions = suggest(&term, &pool);
            prop_assert!(suggestions.len() <= SUGGESTION_LIMIT);

            let needle = term.to_lowercase();
            for title in &suggestions {
                let matched = pool.iter().any(|o| {
                    o.title == *title
                        && (o.title.to_lowercase().contains(&needle)
                            || o.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
                });
                prop_assert!(matched, "suggestion {:?} has no matching pool entry", title);
            }
        }

        /// Property: every suggestion title exists in the pool.
        #[test]
        fn prop_suggest_subset_of_pool(
            term in "[a-z]{1,6}",
            pool in prop::collection::vec(arb_objection(), 0..20)
        ) {
            let titles: Vec<&str> = pool.iter().map(|o| o.title.as_str()).collect();
            for title in suggest(&term, &pool) {
                prop_assert!(titles.contains(&title.as_str()));
            }
        }

        /// Property: visible_slice(k) is a prefix of visible_slice(k+1).
        #[test]
        fn prop_window_grows_as_prefix(
            pool in prop::collection::vec(arb_objection(), 0..40),
            cursor in 0usize..8,
            page_size in 1usize..15
        ) {
            let shorter = visible_slice(&pool, cursor, page_size);
            let longer = visible_slice(&pool, cursor + 1, page_size);
            prop_assert!(shorter.len() <= longer.len());
            prop_assert_eq!(shorter, &longer[..shorter.len()]);
        }

        /// Property: can_load_more is false exactly when everything is visible.
        #[test]
        fn prop_can_load_more_iff_hidden_remainder(
            total in 0usize..100,
            cursor in 0usize..12,
            page_size in 1usize..15
        ) {
            let visible = visible_len(total, cursor, page_size);
            prop_assert!(visible <= total);
            prop_assert_eq!(can_load_more(total, cursor, page_size), visible < total);
        }

        /// Property: advancing the cursor never hides a previously visible item.
        #[test]
        fn prop_window_is_append_only(
            total in 0usize..100,
            cursor in 0usize..12,
            page_size in 1usize..15
        ) {
            prop_assert!(
                visible_len(total, cursor, page_size)
                    <= visible_len(total, cursor + 1, page_size)
            );
        }
    }
}
