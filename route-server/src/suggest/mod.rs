//! Route suggestions.
//!
//! An optional side feature: something proposes origin/destination pairs
//! for the user to try. Suggestions are fed into the same search as typed
//! codes, so nothing here is needed for searching to work.

mod cache;
mod chat;
mod error;
mod parse;

use futures::future::BoxFuture;
use serde::Serialize;

use crate::domain::AirportCode;

pub use cache::CachedSuggester;
pub use chat::{ChatSuggester, SuggestConfig};
pub use error::SuggestError;
pub use parse::{DEFAULT_REASON, MAX_SUGGESTIONS, parse_suggestions};

/// A proposed route to search for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub from: AirportCode,
    pub to: AirportCode,
    pub reason: String,
}

/// Source of route suggestions.
///
/// This abstraction lets the web layer run with a live generator, a fixed
/// list, or nothing at all.
pub trait Suggester: Send + Sync {
    /// Produce a fresh batch of suggestions.
    fn suggest(&self) -> BoxFuture<'_, Result<Vec<Suggestion>, SuggestError>>;
}

/// Suggester that always returns the same list.
#[derive(Debug, Clone, Default)]
pub struct StaticSuggester {
    suggestions: Vec<Suggestion>,
}

impl StaticSuggester {
    /// Create a suggester that returns `suggestions`.
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }
}

impl Suggester for StaticSuggester {
    fn suggest(&self) -> BoxFuture<'_, Result<Vec<Suggestion>, SuggestError>> {
        Box::pin(async move { Ok(self.suggestions.clone()) })
    }
}
