use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One income-statement period (quarter or fiscal year) with the line
/// items the frontend charts, plus their ratios to revenue.
///
/// Sequences are ordered most-recent-period-first: index 0 is the
/// latest quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatementPeriod {
    pub symbol: String,
    pub date: NaiveDate,
    pub fiscal_year: i32,
    pub period: String,
    pub revenue: f64,
    pub gross_profit: f64,
    pub operating_income: f64,
    pub net_income: f64,
    pub ebitda: f64,
    pub gross_profit_ratio: f64,
    pub operating_income_ratio: f64,
    pub net_income_ratio: f64,
    pub ebitda_ratio: f64,
}
