//! Resolution tier backed by the bulk SEC ticker directory

use super::{ResolutionSource, ResolverTier};
use crate::api::TickerDirectory;
use crate::ticker::{Cik, Ticker};
use async_trait::async_trait;
use std::sync::Arc;

/// Scans the full SEC company ticker list for a symbol
pub struct DirectoryTier {
    directory: Arc<dyn TickerDirectory>,
}

impl DirectoryTier {
    pub fn new(directory: Arc<dyn TickerDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl ResolverTier for DirectoryTier {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Directory
    }

    async fn attempt(&self, ticker: &Ticker) -> Option<Cik> {
        let entries = match self.directory.fetch_directory().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(%ticker, error = %e, "ticker directory unavailable, treating as miss");
                return None;
            }
        };

        tracing::debug!(%ticker, entries = entries.len(), "scanning ticker directory");

        entries
            .into_iter()
            .find(|entry| entry.ticker.trim().eq_ignore_ascii_case(ticker.as_str()))
            .map(|entry| entry.cik)
    }
}
