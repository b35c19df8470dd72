//! One concept's USD history, split into annual and quarterly series

use super::catalog::{MetricCategory, category_of};
use super::facts::{CompanyFacts, MetricFact};
use serde::Serialize;

/// Most recent annual values kept
pub const ANNUAL_VALUES: usize = 5;

/// Most recent quarterly values kept
pub const QUARTERLY_VALUES: usize = 8;

const HISTORY_UNIT: &str = "USD";
const ANNUAL_FORMS: [&str; 2] = ["10-K", "10-K/A"];
const QUARTERLY_FORMS: [&str; 2] = ["10-Q", "10-Q/A"];

/// Annual and quarterly values of a concept, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptHistory {
    pub concept: String,
    pub taxonomy: String,
    pub label: String,
    pub description: String,
    pub category: MetricCategory,
    pub unit: &'static str,
    pub annual_data: Vec<MetricFact>,
    pub quarterly_data: Vec<MetricFact>,
}

/// Split a concept's USD facts by the form that reported them
///
/// `None` when the company does not report the concept in USD. Values from
/// other forms (8-K, S-1, ...) are left out of both series.
pub fn concept_history(facts: &CompanyFacts, concept: &str) -> Option<ConceptHistory> {
    let reported = facts.concept(concept)?;
    let usd = reported.units.iter().find(|unit| unit.unit == HISTORY_UNIT)?;

    let mut newest_first: Vec<&MetricFact> = usd.facts.iter().collect();
    newest_first.sort_by(|a, b| b.end.cmp(&a.end));

    let series = |forms: &[&str], keep: usize| -> Vec<MetricFact> {
        newest_first
            .iter()
            .filter(|fact| fact.form.as_deref().is_some_and(|form| forms.contains(&form)))
            .take(keep)
            .map(|&fact| fact.clone())
            .collect()
    };

    Some(ConceptHistory {
        concept: reported.name.clone(),
        taxonomy: reported.taxonomy.clone(),
        label: reported.label.clone().unwrap_or_else(|| reported.name.clone()),
        description: reported.description.clone().unwrap_or_default(),
        category: category_of(&reported.name),
        unit: HISTORY_UNIT,
        annual_data: series(&ANNUAL_FORMS, ANNUAL_VALUES),
        quarterly_data: series(&QUARTERLY_FORMS, QUARTERLY_VALUES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn quarter(end: &str, form: &str, val: u64) -> Value {
        json!({"end": end, "val": val, "form": form})
    }

    fn facts() -> CompanyFacts {
        let mut usd = Vec::new();
        for year in 2015..2024 {
            usd.push(quarter(&format!("{year}-12-31"), "10-K", 100));
            for month in ["03-31", "06-30", "09-30"] {
                usd.push(quarter(&format!("{year}-{month}"), "10-Q", 10));
            }
        }
        usd.push(quarter("2024-03-31", "10-Q/A", 11));
        usd.push(quarter("2024-05-15", "8-K", 1));

        CompanyFacts::from_value(&json!({
            "cik": 1_318_605,
            "entityName": "Tesla, Inc.",
            "facts": {"us-gaap": {
                "Revenues": {
                    "label": "Revenues",
                    "description": "Amount of revenue recognized.",
                    "units": {"USD": usd}
                },
                "EarningsPerShareBasic": {"units": {"USD/shares": [quarter("2023-12-31", "10-K", 4)]}}
            }}
        }))
        .unwrap()
    }

    #[test]
    fn test_splits_annual_and_quarterly() {
        let history = concept_history(&facts(), "Revenues").unwrap();

        assert_eq!(history.annual_data.len(), ANNUAL_VALUES);
        assert_eq!(history.quarterly_data.len(), QUARTERLY_VALUES);
        assert!(history.annual_data.iter().all(|f| f.form.as_deref() == Some("10-K")));
        assert_eq!(history.annual_data[0].end.to_string(), "2023-12-31");
        assert_eq!(history.annual_data[4].end.to_string(), "2019-12-31");

        // the amended quarter leads and the 8-K value is dropped
        assert_eq!(history.quarterly_data[0].form.as_deref(), Some("10-Q/A"));
        assert_eq!(history.quarterly_data[1].end.to_string(), "2023-09-30");
    }

    #[test]
    fn test_carries_catalog_metadata() {
        let history = concept_history(&facts(), "Revenues").unwrap();
        assert_eq!(history.taxonomy, "us-gaap");
        assert_eq!(history.description, "Amount of revenue recognized.");
        assert_eq!(history.category, MetricCategory::IncomeStatement);
        assert_eq!(history.unit, "USD");
    }

    #[test]
    fn test_requires_usd_series() {
        assert!(concept_history(&facts(), "EarningsPerShareBasic").is_none());
        assert!(concept_history(&facts(), "NetIncomeLoss").is_none());
        assert!(concept_history(&facts(), "revenues").is_none());
    }
}
