use serde::{Deserialize, Serialize};

/// Trailing-twelve-month ratio snapshot for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetricsSnapshot {
    pub symbol: String,
    pub market_cap: i64,
    pub pe_ratio: f64,
    pub peg_ratio: f64,
    pub return_on_equity: f64,
    pub return_on_assets: f64,
    pub current_ratio: f64,
    pub debt_to_equity: f64,
}

/// Composite risk scores with the balance-sheet aggregates the provider
/// reports alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealthScores {
    pub symbol: String,
    pub altman_z_score: f64,
    pub piotroski_score: i32,
    pub working_capital: i64,
    pub total_assets: i64,
    pub retained_earnings: i64,
    pub ebit: i64,
    pub total_liabilities: i64,
    pub revenue: i64,
    pub market_cap: i64,
}
