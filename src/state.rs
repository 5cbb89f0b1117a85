use std::sync::Arc;

use crate::external::market_provider::MarketDataProvider;
use crate::services::generation::FetchLedger;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
    pub fetches: FetchLedger,
}
