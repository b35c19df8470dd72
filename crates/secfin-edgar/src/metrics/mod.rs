//! XBRL metrics: the concept catalog, company facts, selection, discovery and
//! single-concept history

pub mod catalog;
pub mod concept;
pub mod discovery;
pub mod facts;
pub mod selector;

pub use catalog::{ESSENTIAL_METRICS, MetricCatalogEntry, MetricCategory, category_of, is_essential};
pub use concept::{ANNUAL_VALUES, ConceptHistory, QUARTERLY_VALUES, concept_history};
pub use discovery::{MetricDiscovery, discover_metrics};
pub use facts::{CompanyFacts, ConceptFacts, MetricFact, UnitFacts};
pub use selector::{
    MetricRequest, MetricSelectionResult, SelectedMetric, SelectionMode, VALUES_PER_METRIC,
    select_metrics,
};
