use serde::{Deserialize, Serialize};

// One row of the market-movers card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularStock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub changes_percentage: f64,
}
