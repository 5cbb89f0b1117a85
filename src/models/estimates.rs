use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consensus analyst projection for one fiscal date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystEstimate {
    pub symbol: String,
    pub date: NaiveDate,
    pub revenue_avg: i64,
    pub net_income_avg: i64,
    pub eps_avg: f64,
    pub num_analysts_revenue: i32,
    pub num_analysts_eps: i32,
}

/// Historical period-over-period growth rates (fractional, not percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRecord {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
    pub revenue_growth: f64,
    pub net_income_growth: f64,
    pub eps_growth: f64,
}
