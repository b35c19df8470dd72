//! SEC form types

use crate::error::EdgarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SEC filing type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingType {
    /// Annual report
    #[serde(rename = "10-K")]
    Form10K,
    #[serde(rename = "10-K/A")]
    Form10KA,
    /// Quarterly report
    #[serde(rename = "10-Q")]
    Form10Q,
    #[serde(rename = "10-Q/A")]
    Form10QA,
    /// Current report (material events)
    #[serde(rename = "8-K")]
    Form8K,
    #[serde(rename = "8-K/A")]
    Form8KA,
    /// Proxy statement
    #[serde(rename = "DEF 14A")]
    DefProxy,
    /// Registration statements
    #[serde(rename = "S-1")]
    FormS1,
    #[serde(rename = "S-3")]
    FormS3,
    #[serde(rename = "S-4")]
    FormS4,
    /// Insider ownership statements
    #[serde(rename = "3")]
    Form3,
    #[serde(rename = "4")]
    Form4,
    #[serde(rename = "5")]
    Form5,
    /// Beneficial ownership schedules
    #[serde(rename = "SC 13D")]
    Schedule13D,
    #[serde(rename = "SC 13G")]
    Schedule13G,
    /// Institutional holdings
    #[serde(rename = "13F-HR")]
    Form13F,
}

impl FilingType {
    pub const ALL: [FilingType; 16] = [
        FilingType::Form10K,
        FilingType::Form10KA,
        FilingType::Form10Q,
        FilingType::Form10QA,
        FilingType::Form8K,
        FilingType::Form8KA,
        FilingType::DefProxy,
        FilingType::FormS1,
        FilingType::FormS3,
        FilingType::FormS4,
        FilingType::Form3,
        FilingType::Form4,
        FilingType::Form5,
        FilingType::Schedule13D,
        FilingType::Schedule13G,
        FilingType::Form13F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilingType::Form10K => "10-K",
            FilingType::Form10KA => "10-K/A",
            FilingType::Form10Q => "10-Q",
            FilingType::Form10QA => "10-Q/A",
            FilingType::Form8K => "8-K",
            FilingType::Form8KA => "8-K/A",
            FilingType::DefProxy => "DEF 14A",
            FilingType::FormS1 => "S-1",
            FilingType::FormS3 => "S-3",
            FilingType::FormS4 => "S-4",
            FilingType::Form3 => "3",
            FilingType::Form4 => "4",
            FilingType::Form5 => "5",
            FilingType::Schedule13D => "SC 13D",
            FilingType::Schedule13G => "SC 13G",
            FilingType::Form13F => "13F-HR",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            FilingType::Form10K => "Annual Report",
            FilingType::Form10KA => "Annual Report Amendment",
            FilingType::Form10Q => "Quarterly Report",
            FilingType::Form10QA => "Quarterly Report Amendment",
            FilingType::Form8K => "Current Report",
            FilingType::Form8KA => "Current Report Amendment",
            FilingType::DefProxy => "Proxy Statement",
            FilingType::FormS1 | FilingType::FormS3 | FilingType::FormS4 => {
                "Registration Statement"
            }
            FilingType::Form3 => "Initial Statement of Beneficial Ownership",
            FilingType::Form4 => "Statement of Changes in Beneficial Ownership",
            FilingType::Form5 => "Annual Statement of Changes in Beneficial Ownership",
            FilingType::Schedule13D => "Schedule 13D",
            FilingType::Schedule13G => "Schedule 13G",
            FilingType::Form13F => "Institutional Investment Manager Holdings Report",
        }
    }

    /// Whether a raw submissions form is a Schedule 13D or 13G, amendments included
    ///
    /// EDGAR lists these as `SC 13D` and `SC 13G`, and as `SCHEDULE 13D` and
    /// `SCHEDULE 13G` for filings made in the structured format.
    pub fn is_beneficial_ownership(form: &str) -> bool {
        let base = form.trim().trim_end_matches("/A");
        matches!(base, "SC 13D" | "SC 13G" | "SCHEDULE 13D" | "SCHEDULE 13G")
    }

    /// Description for a raw form string as it appears in submissions
    ///
    /// Amendments of forms without their own variant fall back to the base form.
    pub fn describe(form: &str) -> &'static str {
        form.parse::<FilingType>()
            .or_else(|_| form.trim().trim_end_matches("/A").parse())
            .map_or("Unknown Form Type", |filing_type| filing_type.description())
    }
}

impl fmt::Display for FilingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilingType {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        let normalized = match normalized.as_str() {
            "13D" | "SCHEDULE 13D" => "SC 13D",
            "13G" | "SCHEDULE 13G" => "SC 13G",
            other => other,
        };

        FilingType::ALL
            .into_iter()
            .find(|filing_type| filing_type.as_str() == normalized)
            .ok_or_else(|| {
                let supported: Vec<&str> = FilingType::ALL.iter().map(FilingType::as_str).collect();
                EdgarError::InvalidInput(format!(
                    "unsupported form type: {s}. Supported types: {}",
                    supported.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filing_type() {
        assert_eq!(FilingType::Form10K.as_str(), "10-K");
        assert_eq!(FilingType::Form10Q.as_str(), "10-Q");
        assert_eq!(FilingType::Form8K.as_str(), "8-K");
        assert_eq!(FilingType::DefProxy.to_string(), "DEF 14A");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("10-k".parse::<FilingType>().unwrap(), FilingType::Form10K);
        assert_eq!(" def 14a ".parse::<FilingType>().unwrap(), FilingType::DefProxy);
        assert_eq!("13g".parse::<FilingType>().unwrap(), FilingType::Schedule13G);
        assert_eq!("10-q/a".parse::<FilingType>().unwrap(), FilingType::Form10QA);
    }

    #[test]
    fn test_unsupported_form() {
        let err = "10-X".parse::<FilingType>().unwrap_err();
        assert!(err.to_string().contains("Supported types"));
    }

    #[test]
    fn test_beneficial_ownership_forms() {
        for form in ["SC 13D", "SC 13D/A", "SC 13G", "SC 13G/A", "SCHEDULE 13G", "SCHEDULE 13D/A"] {
            assert!(FilingType::is_beneficial_ownership(form), "{form}");
        }
        for form in ["13F-HR", "4", "10-K", "SC TO-T", ""] {
            assert!(!FilingType::is_beneficial_ownership(form), "{form}");
        }
        assert_eq!("schedule 13d".parse::<FilingType>().unwrap(), FilingType::Schedule13D);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(FilingType::describe("10-K"), "Annual Report");
        assert_eq!(FilingType::describe("4"), "Statement of Changes in Beneficial Ownership");
        assert_eq!(FilingType::describe("424B2"), "Unknown Form Type");
        assert_eq!(FilingType::describe("SC 13G/A"), "Schedule 13G");
        assert_eq!(FilingType::describe("SCHEDULE 13D"), "Schedule 13D");
    }

    #[test]
    fn test_serde_uses_sec_names() {
        assert_eq!(serde_json::to_string(&FilingType::Form13F).unwrap(), "\"13F-HR\"");
        let parsed: FilingType = serde_json::from_str("\"SC 13D\"").unwrap();
        assert_eq!(parsed, FilingType::Schedule13D);
    }
}
