//! Filings: form types, archive URLs, document sizing and text extraction

pub mod forms;
pub mod sizer;
pub mod text;

pub use forms::FilingType;
pub use sizer::{FILING_SIZE_THRESHOLD, FilingSizeDecision, FilingSizer, FilingSubject, format_size};
pub use text::extract_text;

use crate::api::RecentFilings;
use crate::ticker::Cik;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const ARCHIVES_BASE_URL: &str = "https://www.sec.gov/Archives/edgar/data";

/// One entry from a company's recent filing index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filing {
    pub form: String,
    pub description: String,
    pub filing_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<NaiveDate>,
    pub accession_number: String,
    pub primary_document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub filing_url: String,
}

impl Filing {
    /// Rows of the submissions index, newest first as SEC lists them
    ///
    /// Rows with an unparseable filing date are dropped.
    pub fn from_recent(cik: &Cik, recent: &RecentFilings) -> Vec<Filing> {
        let rows = recent
            .form
            .len()
            .min(recent.filing_date.len())
            .min(recent.accession_number.len());

        (0..rows)
            .filter_map(|i| {
                let Ok(filing_date) = NaiveDate::parse_from_str(&recent.filing_date[i], "%Y-%m-%d")
                else {
                    tracing::debug!(%cik, row = i, "skipping filing with bad date");
                    return None;
                };

                let form = recent.form[i].clone();
                let accession_number = recent.accession_number[i].clone();
                let primary_document = recent.primary_document.get(i).cloned().unwrap_or_default();

                Some(Filing {
                    description: FilingType::describe(&form).to_string(),
                    filing_url: archive_url(cik, &accession_number, &primary_document),
                    report_date: recent
                        .report_date
                        .get(i)
                        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()),
                    size: recent.size.get(i).copied().filter(|size| *size > 0),
                    form,
                    filing_date,
                    accession_number,
                    primary_document,
                })
            })
            .collect()
    }
}

/// Archive URL of a filing document
pub fn archive_url(cik: &Cik, accession_number: &str, document: &str) -> String {
    format!(
        "{ARCHIVES_BASE_URL}/{}/{}/{document}",
        cik.as_number(),
        accession_number.replace('-', ""),
    )
}
