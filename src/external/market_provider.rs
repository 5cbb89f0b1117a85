use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    AnalystEstimate, CompanyProfile, FinancialHealthScores, FinancialStatementPeriod,
    GrowthRecord, KeyMetricsSnapshot, PopularStock, PricePoint,
};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream returned HTTP {0}")]
    BadStatus(u16),

    #[error("upstream access forbidden - check API key")]
    Forbidden,

    #[error("rate limited by upstream provider")]
    RateLimited,

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("empty payload")]
    Empty,
}

/// Reporting window for statement-shaped endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    Annual,
    Quarter,
}

impl ReportingPeriod {
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Upstream market-data seam. One method per entity type; every method
/// performs exactly one request and reports empty list-shaped payloads
/// as an error so the facade can substitute sample data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn company_profile(&self, ticker: &str) -> Result<CompanyProfile, ProviderError>;

    async fn daily_prices(&self, ticker: &str, days: u32) -> Result<Vec<PricePoint>, ProviderError>;

    async fn quarterly_financials(
        &self,
        ticker: &str,
        limit: usize,
    ) -> Result<Vec<FinancialStatementPeriod>, ProviderError>;

    async fn key_metrics(&self, ticker: &str) -> Result<KeyMetricsSnapshot, ProviderError>;

    async fn financial_scores(&self, ticker: &str) -> Result<FinancialHealthScores, ProviderError>;

    async fn analyst_estimates(
        &self,
        ticker: &str,
        period: ReportingPeriod,
        limit: usize,
    ) -> Result<Vec<AnalystEstimate>, ProviderError>;

    async fn financial_growth(
        &self,
        ticker: &str,
        period: ReportingPeriod,
        limit: usize,
    ) -> Result<Vec<GrowthRecord>, ProviderError>;

    async fn most_active(&self) -> Result<Vec<PopularStock>, ProviderError>;
}
