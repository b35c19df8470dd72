//! Process-lifetime cache of resolved ticker → CIK mappings

use crate::ticker::{Cik, Ticker};
use cached::{Cached, UnboundCache};
use tokio::sync::RwLock;

/// Append-only ticker → CIK cache
///
/// Lives as long as the process (or the test that created it). Entries are
/// never evicted and an insert never replaces an existing mapping, so two
/// callers racing on the same ticker converge on the first value written.
/// Share it between resolvers with `Arc<ResolutionCache>`.
pub struct ResolutionCache {
    entries: RwLock<UnboundCache<Ticker, Cik>>,
}

impl ResolutionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(UnboundCache::new()),
        }
    }

    /// Look up a ticker; readers share the lock
    pub async fn get(&self, ticker: &Ticker) -> Option<Cik> {
        let entries = self.entries.read().await;
        let hit = entries.get_store().get(ticker).cloned();

        if hit.is_some() {
            tracing::debug!(%ticker, "resolution cache hit");
        } else {
            tracing::debug!(%ticker, "resolution cache miss");
        }

        hit
    }

    /// Record a resolution; returns `false` if the ticker was already cached
    pub async fn insert(&self, ticker: Ticker, cik: Cik) -> bool {
        let mut entries = self.entries.write().await;

        if let Some(existing) = entries.get_store().get(&ticker) {
            if *existing != cik {
                tracing::warn!(
                    %ticker,
                    cached = %existing,
                    ignored = %cik,
                    "conflicting CIK for cached ticker, keeping the first"
                );
            }
            return false;
        }

        entries.cache_set(ticker, cik);
        true
    }

    /// Get the number of cached tickers
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.cache_size()
    }

    /// Check if the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionCache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = ResolutionCache::new();
        assert!(cache.is_empty().await);

        assert!(cache.insert(ticker("AAPL"), Cik::from_number(320_193).unwrap()).await);

        assert_eq!(
            cache.get(&ticker("aapl")).await,
            Some(Cik::from_number(320_193).unwrap())
        );
        assert_eq!(cache.get(&ticker("MSFT")).await, None);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_never_overwrites() {
        let cache = ResolutionCache::new();
        assert!(cache.insert(ticker("GME"), Cik::from_number(1_326_380).unwrap()).await);
        assert!(!cache.insert(ticker("GME"), Cik::from_number(1).unwrap()).await);

        assert_eq!(
            cache.get(&ticker("GME")).await,
            Some(Cik::from_number(1_326_380).unwrap())
        );
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookups_share_the_lock() {
        let cache = ResolutionCache::new();
        cache.insert(ticker("NVDA"), Cik::from_number(1_045_810).unwrap()).await;

        let _reader = cache.entries.read().await;
        let hit = tokio::time::timeout(std::time::Duration::from_secs(1), cache.get(&ticker("NVDA")))
            .await
            .expect("lookup blocked behind another reader");
        assert_eq!(hit, Some(Cik::from_number(1_045_810).unwrap()));
    }

    #[tokio::test]
    async fn test_concurrent_writers_converge() {
        let cache = Arc::new(ResolutionCache::new());

        let writers = (0..8).map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.insert(ticker("TSLA"), Cik::from_number(1_318_605).unwrap()).await })
        });

        let inserted = futures::future::join_all(writers)
            .await
            .into_iter()
            .filter(|r| matches!(r, Ok(true)))
            .count();

        assert_eq!(inserted, 1);
        assert_eq!(cache.len().await, 1);
    }
}
