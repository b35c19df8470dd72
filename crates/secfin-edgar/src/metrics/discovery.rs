//! Metric discovery: what a company reports, grouped by statement

use super::catalog::{MetricCategory, category_of};
use super::facts::CompanyFacts;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Every concept a company reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDiscovery {
    pub total_available: usize,
    pub all_concepts: Vec<String>,
    /// All four categories are always present, possibly empty
    pub categories: BTreeMap<MetricCategory, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Concepts containing the search term, case-insensitively
    #[serde(rename = "filtered_metrics", skip_serializing_if = "Option::is_none")]
    pub matched: Option<Vec<String>>,
}

/// List and categorize a company's concepts, optionally filtered by a search term
pub fn discover_metrics(facts: &CompanyFacts, search_term: Option<&str>) -> MetricDiscovery {
    let mut seen = HashSet::new();
    let all_concepts: Vec<String> = facts
        .concept_names()
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect();

    let mut categories: BTreeMap<MetricCategory, Vec<String>> = MetricCategory::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();
    for concept in &all_concepts {
        categories
            .entry(category_of(concept))
            .or_default()
            .push(concept.clone());
    }

    let search_term = search_term
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string);

    let matched = search_term.as_ref().map(|term| {
        let needle = term.to_lowercase();
        all_concepts
            .iter()
            .filter(|concept| concept.to_lowercase().contains(&needle))
            .cloned()
            .collect::<Vec<_>>()
    });

    tracing::debug!(
        cik = %facts.cik,
        total = all_concepts.len(),
        matched = matched.as_ref().map(Vec::len),
        "discovered metrics"
    );

    MetricDiscovery {
        total_available: all_concepts.len(),
        all_concepts,
        categories,
        search_term,
        matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn facts() -> CompanyFacts {
        let usd = json!({"units": {"USD": [{"end": "2024-09-28", "val": 1}]}});
        CompanyFacts::from_value(&json!({
            "cik": 320193,
            "entityName": "Apple Inc.",
            "facts": {
                "dei": {"EntityPublicFloat": usd},
                "us-gaap": {
                    "Revenues": usd,
                    "NetIncomeLoss": usd,
                    "Assets": usd,
                    "DepreciationDepletionAndAmortization": usd,
                    "AccumulatedDepreciationDepletionAndAmortizationPropertyPlantAndEquipment": usd,
                    "AppleSpecificConcept": usd,
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_all_categories_present() {
        let discovery = discover_metrics(&facts(), None);

        assert_eq!(discovery.total_available, 7);
        assert_eq!(discovery.categories.len(), 4);
        assert_eq!(
            discovery.categories[&MetricCategory::IncomeStatement],
            vec!["Revenues", "NetIncomeLoss"]
        );
        assert_eq!(discovery.categories[&MetricCategory::BalanceSheet], vec!["Assets"]);
        assert_eq!(
            discovery.categories[&MetricCategory::Other],
            vec![
                "EntityPublicFloat",
                "AccumulatedDepreciationDepletionAndAmortizationPropertyPlantAndEquipment",
                "AppleSpecificConcept",
            ]
        );
        assert!(discovery.matched.is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let discovery = discover_metrics(&facts(), Some("depreciationdepletion"));
        assert_eq!(
            discovery.matched.unwrap(),
            vec![
                "DepreciationDepletionAndAmortization",
                "AccumulatedDepreciationDepletionAndAmortizationPropertyPlantAndEquipment",
            ]
        );
    }

    #[test]
    fn test_search_with_no_hits_is_empty() {
        let discovery = discover_metrics(&facts(), Some("Goodwill"));
        assert_eq!(discovery.matched, Some(vec![]));
        assert_eq!(discovery.search_term.as_deref(), Some("Goodwill"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let discovery = discover_metrics(&facts(), Some("   "));
        assert!(discovery.search_term.is_none());
        assert!(discovery.matched.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(discover_metrics(&facts(), Some("Assets"))).unwrap();
        assert_eq!(json["total_available"], 7);
        assert!(json["categories"]["cash_flow"].is_array());
        assert_eq!(json["filtered_metrics"], json!(["Assets"]));
    }
}
