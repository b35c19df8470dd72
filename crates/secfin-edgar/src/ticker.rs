//! Ticker symbols and SEC company identifiers

use crate::error::{EdgarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_TICKER_LEN: usize = 10;

/// A normalized stock ticker: trimmed, uppercase, 1-10 chars of `[A-Z0-9.-]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize and validate a caller-supplied symbol
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_uppercase();

        if normalized.is_empty() || normalized.len() > MAX_TICKER_LEN {
            return Err(EdgarError::InvalidInput(format!(
                "ticker must be 1-{MAX_TICKER_LEN} characters, got '{raw}'"
            )));
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(EdgarError::InvalidInput(format!(
                "invalid ticker symbol format: '{raw}'"
            )));
        }

        Ok(Self(normalized))
    }

    /// The normalized symbol
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = EdgarError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// Central Index Key: the SEC's 10-digit, zero-padded filer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cik(String);

impl Cik {
    /// Parse a padded or unpadded CIK; non-digit characters are ignored
    pub fn parse(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        Self::from_digits(&digits).ok_or_else(|| invalid_cik(raw))
    }

    /// Build from the numeric form the SEC ticker directory uses
    pub fn from_number(number: u64) -> Result<Self> {
        Self::from_digits(&number.to_string()).ok_or_else(|| invalid_cik(&number.to_string()))
    }

    fn from_digits(digits: &str) -> Option<Self> {
        let significant = digits.trim_start_matches('0');
        if digits.is_empty() || significant.len() > 10 {
            return None;
        }
        Some(Self(format!("{significant:0>10}")))
    }

    /// The 10-digit zero-padded form used by data.sec.gov
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The unpadded form used in archive URLs
    pub fn as_number(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }
}

fn invalid_cik(raw: &str) -> EdgarError {
    EdgarError::InvalidInput(format!("invalid CIK format: '{raw}'"))
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Cik {
    type Error = EdgarError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Cik> for String {
    fn from(cik: Cik) -> Self {
        cik.0
    }
}
