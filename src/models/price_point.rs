use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One daily bar for a ticker. Series are served oldest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}
