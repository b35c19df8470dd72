//! Dual-mode metric selection
//!
//! Company facts routinely run to several megabytes. An assistant either asks
//! for nothing in particular, in which case it gets the essential concepts,
//! or names the exact concepts it needs. Either way each unit keeps only its
//! most recent values so the response stays small.

use super::catalog::{ESSENTIAL_METRICS, MetricCategory, category_of};
use super::facts::{CompanyFacts, MetricFact, UnitFacts};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Values kept per unit of every selected concept
pub const VALUES_PER_METRIC: usize = 5;

/// Which concepts to return
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MetricRequest {
    /// The essential concepts
    #[default]
    Generic,
    /// Exactly these concepts, in this order
    Specific(Vec<String>),
}

impl MetricRequest {
    /// Interpret an optional caller-supplied concept list
    ///
    /// `None`, an empty list or a list of blanks selects generic mode. Blank
    /// entries are dropped and repeats keep their first position.
    pub fn from_concepts(concepts: Option<Vec<String>>) -> Self {
        let mut seen = HashSet::new();
        let concepts: Vec<String> = concepts
            .unwrap_or_default()
            .into_iter()
            .map(|concept| concept.trim().to_string())
            .filter(|concept| !concept.is_empty())
            .filter(|concept| seen.insert(concept.clone()))
            .collect();

        if concepts.is_empty() {
            Self::Generic
        } else {
            Self::Specific(concepts)
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Generic => SelectionMode::Generic,
            Self::Specific(_) => SelectionMode::Specific,
        }
    }

    /// Concepts to look for, in response order
    pub fn concepts(&self) -> Vec<&str> {
        match self {
            Self::Generic => ESSENTIAL_METRICS.to_vec(),
            Self::Specific(concepts) => concepts.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Generic,
    Specific,
}

/// One returned concept, trimmed to its most recent values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub category: MetricCategory,
    #[serde(serialize_with = "serialize_units")]
    pub units: Vec<UnitFacts>,
}

impl SelectedMetric {
    /// Values kept for one unit
    pub fn unit(&self, unit: &str) -> Option<&[MetricFact]> {
        self.units
            .iter()
            .find(|u| u.unit == unit)
            .map(|u| u.facts.as_slice())
    }
}

/// Outcome of a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSelectionResult {
    pub mode: SelectionMode,
    pub metrics_returned: usize,
    pub values_per_metric: usize,
    #[serde(rename = "financial_metrics", serialize_with = "serialize_metrics")]
    pub metrics: Vec<(String, SelectedMetric)>,
    /// Requested concepts the company does not report
    pub missing: Vec<String>,
}

impl MetricSelectionResult {
    pub fn metric(&self, concept: &str) -> Option<&SelectedMetric> {
        self.metrics
            .iter()
            .find(|(name, _)| name == concept)
            .map(|(_, metric)| metric)
    }

    /// Returned concept names, in response order
    pub fn concept_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|(name, _)| name.as_str())
    }
}

/// Select concepts from a company's facts
///
/// Never fails: requested concepts the company does not report are listed
/// in `missing` and left out of the counts.
pub fn select_metrics(facts: &CompanyFacts, request: &MetricRequest) -> MetricSelectionResult {
    let mut metrics = Vec::new();
    let mut missing = Vec::new();

    for concept in request.concepts() {
        let Some(source) = facts.concept(concept) else {
            missing.push(concept.to_string());
            continue;
        };

        let units = source
            .units
            .iter()
            .map(|unit| UnitFacts {
                unit: unit.unit.clone(),
                facts: most_recent(&unit.facts),
            })
            .collect();

        metrics.push((
            concept.to_string(),
            SelectedMetric {
                label: source.label.clone(),
                category: category_of(concept),
                units,
            },
        ));
    }

    let values_per_metric = metrics
        .iter()
        .flat_map(|(_, metric)| metric.units.iter().map(|unit| unit.facts.len()))
        .max()
        .unwrap_or(0);

    let result = MetricSelectionResult {
        mode: request.mode(),
        metrics_returned: metrics.len(),
        values_per_metric,
        metrics,
        missing,
    };

    tracing::info!(
        cik = %facts.cik,
        mode = ?result.mode,
        returned = result.metrics_returned,
        missing = result.missing.len(),
        "selected metrics"
    );

    result
}

fn most_recent(facts: &[MetricFact]) -> Vec<MetricFact> {
    let mut sorted = facts.to_vec();
    sorted.sort_by(|a, b| b.end.cmp(&a.end));
    sorted.truncate(VALUES_PER_METRIC);
    sorted
}

fn serialize_units<S: Serializer>(units: &[UnitFacts], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(units.iter().map(|unit| (&unit.unit, &unit.facts)))
}

fn serialize_metrics<S: Serializer>(
    metrics: &[(String, SelectedMetric)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(metrics.len()))?;
    for (name, metric) in metrics {
        map.serialize_entry(name, metric)?;
    }
    map.end()
}
