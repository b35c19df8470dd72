//! Ticker → CIK resolution
//!
//! A ticker is looked up in the shared [`ResolutionCache`] first, then in an
//! ordered list of [`ResolverTier`] strategies (seed table, then the SEC
//! ticker directory). The first tier that answers wins and its answer is
//! written through to the cache, so a symbol only ever reaches the network
//! once per process.

mod directory;
mod seed;

pub use directory::DirectoryTier;
pub use seed::{SEED_CIKS, SeedTier, seed_cik, seed_len};

use crate::api::TickerDirectory;
use crate::cache::ResolutionCache;
use crate::error::{EdgarError, Result};
use crate::ticker::{Cik, Ticker};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Where a resolution came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Cache,
    Seed,
    Directory,
}

/// A successful ticker resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub ticker: Ticker,
    pub cik: Cik,
    pub source: ResolutionSource,
}

/// One strategy in the resolution chain
#[async_trait]
pub trait ResolverTier: Send + Sync {
    /// Label recorded on resolutions this tier produces
    fn source(&self) -> ResolutionSource;

    /// Try to resolve; `None` passes the ticker on to the next tier
    async fn attempt(&self, ticker: &Ticker) -> Option<Cik>;
}

/// Layered ticker → CIK resolver
pub struct CikResolver {
    cache: Arc<ResolutionCache>,
    tiers: Vec<Box<dyn ResolverTier>>,
}

impl CikResolver {
    /// Resolver with an explicit tier list, consulted in order after the cache
    pub fn new(cache: Arc<ResolutionCache>, tiers: Vec<Box<dyn ResolverTier>>) -> Self {
        Self { cache, tiers }
    }

    /// Standard chain: cache, seed table, then the SEC ticker directory
    pub fn with_directory(cache: Arc<ResolutionCache>, directory: Arc<dyn TickerDirectory>) -> Self {
        Self::new(
            cache,
            vec![Box::new(SeedTier), Box::new(DirectoryTier::new(directory))],
        )
    }

    /// The cache this resolver writes to
    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    /// Resolve a caller-supplied ticker
    pub async fn resolve(&self, raw: &str) -> Result<Resolution> {
        let Ok(ticker) = Ticker::parse(raw) else {
            tracing::debug!(ticker = raw, "rejecting malformed ticker");
            return Err(not_found(raw));
        };

        if let Some(cik) = self.cache.get(&ticker).await {
            return Ok(Resolution {
                ticker,
                cik,
                source: ResolutionSource::Cache,
            });
        }

        for tier in &self.tiers {
            if let Some(cik) = tier.attempt(&ticker).await {
                let source = tier.source();
                tracing::info!(%ticker, %cik, ?source, "resolved CIK");

                self.cache.insert(ticker.clone(), cik.clone()).await;
                return Ok(Resolution { ticker, cik, source });
            }
        }

        tracing::warn!(ticker = raw, "CIK lookup exhausted all tiers");
        Err(not_found(raw))
    }

    /// Resolve and return only the CIK
    pub async fn resolve_cik(&self, raw: &str) -> Result<Cik> {
        self.resolve(raw).await.map(|resolution| resolution.cik)
    }
}

fn not_found(raw: &str) -> EdgarError {
    let shown = raw.trim().to_uppercase();
    EdgarError::CikNotFound {
        ticker: raw.to_string(),
        suggestion: format!("Verify '{shown}' is a valid US stock ticker symbol"),
        note: format!(
            "Resolved from a built-in table of {} common tickers and the SEC company ticker directory",
            seed_len()
        ),
    }
}
