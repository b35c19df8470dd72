//! XBRL company facts as published by `data.sec.gov/api/xbrl/companyfacts`

use crate::error::{EdgarError, Result};
use crate::ticker::Cik;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A single reported value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricFact {
    #[serde(alias = "val")]
    pub value: f64,
    pub end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fy: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accn: Option<String>,
}

/// Facts reported in one unit of measure (`USD`, `shares`, `USD/shares`, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFacts {
    pub unit: String,
    pub facts: Vec<MetricFact>,
}

/// Everything reported for one concept
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptFacts {
    pub name: String,
    pub taxonomy: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub units: Vec<UnitFacts>,
}

/// All concepts reported by a company, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyFacts {
    pub cik: Cik,
    pub entity_name: String,
    pub concepts: Vec<ConceptFacts>,
}

impl CompanyFacts {
    /// Parse the companyfacts JSON document
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value)
    }

    /// Build from an already parsed companyfacts document
    ///
    /// Facts without a numeric value or a valid period end are skipped. A
    /// concept name that appears under several taxonomies keeps its first
    /// occurrence.
    pub fn from_value(value: &Value) -> Result<Self> {
        let cik = match value.get("cik") {
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|number| Cik::from_number(number).ok())
                .ok_or_else(|| EdgarError::Parse(format!("invalid cik: {n}")))?,
            Some(Value::String(s)) => Cik::parse(s)?,
            _ => return Err(EdgarError::Parse("companyfacts document has no cik".to_string())),
        };

        let entity_name = value
            .get("entityName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let mut concepts = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = 0_usize;

        let taxonomies = value.get("facts").and_then(Value::as_object);
        for (taxonomy, body) in taxonomies.into_iter().flatten() {
            let Some(body) = body.as_object() else {
                continue;
            };

            for (name, concept) in body {
                if !seen.insert(name.clone()) {
                    continue;
                }

                let units = concept
                    .get("units")
                    .and_then(Value::as_object)
                    .into_iter()
                    .flatten()
                    .map(|(unit, facts)| UnitFacts {
                        unit: unit.clone(),
                        facts: parse_facts(facts, &mut skipped),
                    })
                    .collect();

                concepts.push(ConceptFacts {
                    name: name.clone(),
                    taxonomy: taxonomy.clone(),
                    label: text_field(concept, "label"),
                    description: text_field(concept, "description"),
                    units,
                });
            }
        }

        if skipped > 0 {
            tracing::debug!(%cik, skipped, "skipped malformed facts");
        }

        Ok(Self {
            cik,
            entity_name,
            concepts,
        })
    }

    /// A company with no reported concepts
    pub fn empty(cik: Cik) -> Self {
        Self {
            cik,
            entity_name: String::new(),
            concepts: Vec::new(),
        }
    }

    /// Find a concept by exact name
    pub fn concept(&self, name: &str) -> Option<&ConceptFacts> {
        self.concepts.iter().find(|concept| concept.name == name)
    }

    /// Concept names in source order
    pub fn concept_names(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|concept| concept.name.as_str())
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn parse_facts(value: &Value, skipped: &mut usize) -> Vec<MetricFact> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match MetricFact::deserialize(item) {
            Ok(fact) => Some(fact),
            Err(_) => {
                *skipped += 1;
                None
            }
        })
        .collect()
}
