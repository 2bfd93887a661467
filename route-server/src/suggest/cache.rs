//! Caching layer for suggestions.
//!
//! Generating suggestions is an external call. Page loads within the TTL
//! share one batch instead of asking again.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use moka::future::Cache as MokaCache;
use tracing::debug;

use super::{SuggestError, Suggester, Suggestion};

/// Default TTL for a batch of suggestions.
const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Suggester wrapper that caches successful batches.
///
/// Failures are not cached, so the next request retries.
pub struct CachedSuggester<S> {
    inner: S,
    batches: MokaCache<(), Arc<Vec<Suggestion>>>,
}

impl<S: Suggester> CachedSuggester<S> {
    /// Wrap `inner` with the default TTL.
    pub fn new(inner: S) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    /// Wrap `inner`, keeping each batch for `ttl`.
    pub fn with_ttl(inner: S, ttl: Duration) -> Self {
        let batches = MokaCache::builder()
            .time_to_live(ttl)
            .max_capacity(1)
            .build();

        Self { inner, batches }
    }

    /// Returns the wrapped suggester.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Suggester> Suggester for CachedSuggester<S> {
    fn suggest(&self) -> BoxFuture<'_, Result<Vec<Suggestion>, SuggestError>> {
        Box::pin(async move {
            if let Some(batch) = self.batches.get(&()).await {
                debug!("serving cached suggestions");
                return Ok(batch.as_ref().clone());
            }

            let fresh = self.inner.suggest().await?;
            self.batches.insert((), Arc::new(fresh.clone())).await;
            Ok(fresh)
        })
    }
}
