//! Pure folding of fetch results into view state.
//!
//! The dashboards delegate their result handling here so the policies
//! (per-source partial failure, full-replacement refetch) stay testable on
//! the host, like the gate and capability predicates.

use newsroom_articles::Article;
use newsroom_auth::User;

use crate::api::ApiError;

/// Outcome of the writer view's dual fetch.
///
/// Failure is per-source: one list failing leaves the other rendered and
/// adds an inline error naming the failed source, never an all-or-nothing
/// failure.
#[derive(Debug, Default)]
pub struct WriterData {
    pub articles: Vec<Article>,
    pub editors: Vec<User>,
    pub errors: Vec<String>,
}

impl WriterData {
    pub fn fold(
        mine: Result<Vec<Article>, ApiError>,
        editors: Result<Vec<User>, ApiError>,
    ) -> Self {
        let mut data = Self::default();
        match mine {
            Ok(items) => data.articles = items,
            Err(e) => data
                .errors
                .push(e.user_message("Failed to load your articles.")),
        }
        match editors {
            Ok(items) => data.editors = items,
            Err(e) => data.errors.push(e.user_message("Failed to load editors.")),
        }
        data
    }
}

/// Replace a list with a fresh fetch result.
///
/// The fetched list fully replaces the prior one, so refetching an unchanged
/// result is idempotent; a failure clears the list and yields the message to
/// display.
pub fn replace_list<T>(
    current: &mut Vec<T>,
    fetched: Result<Vec<T>, ApiError>,
    fallback: &str,
) -> Option<String> {
    match fetched {
        Ok(items) => {
            *current = items;
            None
        }
        Err(e) => {
            current.clear();
            Some(e.user_message(fallback))
        }
    }
}
