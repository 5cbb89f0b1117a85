use serde::{Deserialize, Serialize};

// Company profile as served to the frontend. Field names follow the
// upstream FMP wire shape (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub symbol: String,
    pub company_name: String,
    pub price: f64,
    pub changes: f64,
    pub changes_percentage: f64,
    pub currency: String,
    pub exchange_short_name: String,
    pub exchange: String,
    pub industry: String,
    pub sector: String,
    pub country: String,
    pub market_cap: i64,
    pub beta: f64,
    pub vol_avg: i64,
    pub last_div: f64,
    pub range: String,
    pub description: String,
    pub ceo: String,
    pub website: String,
    pub image: String,
}
