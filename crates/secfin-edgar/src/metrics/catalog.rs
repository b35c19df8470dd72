//! Static catalog of well-known us-gaap concepts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Financial statement a concept belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    Other,
}

impl MetricCategory {
    /// Every category, in display order
    pub const ALL: [MetricCategory; 4] = [
        MetricCategory::IncomeStatement,
        MetricCategory::BalanceSheet,
        MetricCategory::CashFlow,
        MetricCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::IncomeStatement => "income_statement",
            MetricCategory::BalanceSheet => "balance_sheet",
            MetricCategory::CashFlow => "cash_flow",
            MetricCategory::Other => "other",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog record for one concept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCatalogEntry {
    pub concept: &'static str,
    pub category: MetricCategory,
    pub essential: bool,
}

/// Concepts returned when the caller does not name any, in response order
pub const ESSENTIAL_METRICS: [&str; 13] = [
    "Revenues",
    "RevenueFromContractWithCustomerExcludingAssessedTax",
    "NetIncomeLoss",
    "Assets",
    "AssetsCurrent",
    "Liabilities",
    "LiabilitiesCurrent",
    "StockholdersEquity",
    "CashAndCashEquivalentsAtCarryingValue",
    "PropertyPlantAndEquipmentNet",
    "CommonStockSharesOutstanding",
    "EarningsPerShareBasic",
    "EarningsPerShareDiluted",
];

use MetricCategory::{BalanceSheet, CashFlow, IncomeStatement, Other};

const CATALOG: &[(&str, MetricCategory)] = &[
    // income statement
    ("Revenues", IncomeStatement),
    ("RevenueFromContractWithCustomerExcludingAssessedTax", IncomeStatement),
    ("SalesRevenueNet", IncomeStatement),
    ("CostOfRevenue", IncomeStatement),
    ("CostOfGoodsAndServicesSold", IncomeStatement),
    ("GrossProfit", IncomeStatement),
    ("ResearchAndDevelopmentExpense", IncomeStatement),
    ("SellingGeneralAndAdministrativeExpense", IncomeStatement),
    ("OperatingExpenses", IncomeStatement),
    ("OperatingIncomeLoss", IncomeStatement),
    ("InterestExpense", IncomeStatement),
    ("InvestmentIncomeInterest", IncomeStatement),
    ("NonoperatingIncomeExpense", IncomeStatement),
    ("IncomeLossFromContinuingOperationsBeforeIncomeTaxesExtraordinaryItemsNoncontrollingInterest", IncomeStatement),
    ("IncomeTaxExpenseBenefit", IncomeStatement),
    ("NetIncomeLoss", IncomeStatement),
    ("NetIncomeLossAttributableToNoncontrollingInterest", IncomeStatement),
    ("ComprehensiveIncomeNetOfTax", IncomeStatement),
    ("EarningsPerShareBasic", IncomeStatement),
    ("EarningsPerShareDiluted", IncomeStatement),
    ("WeightedAverageNumberOfSharesOutstandingBasic", IncomeStatement),
    ("WeightedAverageNumberOfDilutedSharesOutstanding", IncomeStatement),
    // balance sheet
    ("Assets", BalanceSheet),
    ("AssetsCurrent", BalanceSheet),
    ("AssetsNoncurrent", BalanceSheet),
    ("CashAndCashEquivalentsAtCarryingValue", BalanceSheet),
    ("MarketableSecuritiesCurrent", BalanceSheet),
    ("AccountsReceivableNetCurrent", BalanceSheet),
    ("InventoryNet", BalanceSheet),
    ("PropertyPlantAndEquipmentNet", BalanceSheet),
    ("Goodwill", BalanceSheet),
    ("IntangibleAssetsNetExcludingGoodwill", BalanceSheet),
    ("Liabilities", BalanceSheet),
    ("LiabilitiesCurrent", BalanceSheet),
    ("LiabilitiesNoncurrent", BalanceSheet),
    ("AccountsPayableCurrent", BalanceSheet),
    ("LongTermDebt", BalanceSheet),
    ("LongTermDebtNoncurrent", BalanceSheet),
    ("LongTermDebtCurrent", BalanceSheet),
    ("StockholdersEquity", BalanceSheet),
    ("RetainedEarningsAccumulatedDeficit", BalanceSheet),
    ("LiabilitiesAndStockholdersEquity", BalanceSheet),
    ("CommonStockSharesOutstanding", BalanceSheet),
    ("CommonStockSharesIssued", BalanceSheet),
    // cash flow
    ("NetCashProvidedByUsedInOperatingActivities", CashFlow),
    ("NetCashProvidedByUsedInInvestingActivities", CashFlow),
    ("NetCashProvidedByUsedInFinancingActivities", CashFlow),
    ("PaymentsToAcquirePropertyPlantAndEquipment", CashFlow),
    ("DepreciationDepletionAndAmortization", CashFlow),
    ("DepreciationAndAmortization", CashFlow),
    ("ShareBasedCompensation", CashFlow),
    ("PaymentsOfDividends", CashFlow),
    ("PaymentsForRepurchaseOfCommonStock", CashFlow),
    ("CashCashEquivalentsRestrictedCashAndRestrictedCashEquivalentsPeriodIncreaseDecreaseIncludingExchangeRateEffect", CashFlow),
    // other
    ("EntityCommonStockSharesOutstanding", Other),
    ("EntityPublicFloat", Other),
    ("CommonStockDividendsPerShareDeclared", Other),
];

/// Every catalogued concept
pub fn catalog() -> impl Iterator<Item = MetricCatalogEntry> {
    CATALOG.iter().map(|&(concept, category)| MetricCatalogEntry {
        concept,
        category,
        essential: is_essential(concept),
    })
}

/// Look up a catalogued concept
pub fn lookup(concept: &str) -> Option<MetricCatalogEntry> {
    catalog().find(|entry| entry.concept == concept)
}

/// Category of a concept; uncatalogued concepts are `Other`
pub fn category_of(concept: &str) -> MetricCategory {
    lookup(concept).map_or(MetricCategory::Other, |entry| entry.category)
}

pub fn is_essential(concept: &str) -> bool {
    ESSENTIAL_METRICS.contains(&concept)
}
