//! Decide whether a filing document is small enough to inline in a response

use crate::api::SizeProbe;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Documents at or above this many bytes are linked instead of inlined
pub const FILING_SIZE_THRESHOLD: u64 = 1_000_000;

/// What the advisory note talks about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingSubject {
    pub company: String,
    pub form_type: String,
}

impl FilingSubject {
    pub fn new(company: impl Into<String>, form_type: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            form_type: form_type.into(),
        }
    }
}

/// Inline-or-link decision for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingSizeDecision {
    pub filing_url: String,
    pub size_bytes: Option<u64>,
    pub too_large: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory_note: Option<String>,
}

impl FilingSizeDecision {
    pub fn inline(&self) -> bool {
        !self.too_large
    }
}

/// Measures documents with a HEAD request before anything is downloaded
#[derive(Clone)]
pub struct FilingSizer {
    probe: Arc<dyn SizeProbe>,
}

impl FilingSizer {
    pub fn new(probe: Arc<dyn SizeProbe>) -> Self {
        Self { probe }
    }

    /// Decide whether the document at `filing_url` can be inlined
    ///
    /// Never fails. When the size cannot be determined the document is
    /// treated as too large.
    pub async fn decide(&self, filing_url: &str, subject: &FilingSubject) -> FilingSizeDecision {
        let size = match Url::parse(filing_url) {
            Ok(url) => match self.probe.probe_size(&url).await {
                Ok(size) => size,
                Err(e) => {
                    tracing::warn!(url = filing_url, error = %e, "size check failed");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(url = filing_url, error = %e, "unparseable filing URL");
                None
            }
        };

        let decision = match size {
            Some(bytes) if bytes < FILING_SIZE_THRESHOLD => FilingSizeDecision {
                filing_url: filing_url.to_string(),
                size_bytes: Some(bytes),
                too_large: false,
                advisory_note: None,
            },
            Some(bytes) => FilingSizeDecision {
                filing_url: filing_url.to_string(),
                size_bytes: Some(bytes),
                too_large: true,
                advisory_note: Some(format!(
                    "The {} filing for {} is {} ({bytes} bytes), over the {} inline limit. \
                     Ask a human to download it manually from {filing_url}",
                    subject.form_type,
                    subject.company,
                    format_size(bytes),
                    format_size(FILING_SIZE_THRESHOLD),
                )),
            },
            None => FilingSizeDecision {
                filing_url: filing_url.to_string(),
                size_bytes: None,
                too_large: true,
                advisory_note: Some(format!(
                    "Could not determine the size of the {} filing for {}, so it was not inlined. \
                     Ask a human to download it manually from {filing_url}",
                    subject.form_type, subject.company,
                )),
            },
        };

        tracing::debug!(
            url = filing_url,
            size = ?decision.size_bytes,
            too_large = decision.too_large,
            "filing size decision"
        );

        decision
    }
}

/// Human-readable byte count using decimal units
pub fn format_size(bytes: u64) -> String {
    // Switch units where one-decimal KB would round up to "1000.0 KB"
    match bytes {
        0..1_000 => format!("{bytes} B"),
        1_000..999_950 => format!("{:.1} KB", bytes as f64 / 1_000.0),
        _ => format!("{:.2} MB", bytes as f64 / 1_000_000.0),
    }
}
