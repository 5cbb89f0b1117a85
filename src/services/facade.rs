//! Fallback-driven fetch facade.
//!
//! Every operation makes exactly one upstream attempt. A response that
//! fails transport, status, parsing, or the non-empty check is replaced
//! by the sample catalog's output for that ticker, tagged so the
//! frontend can surface the advisory. These operations never return an
//! error; the caller always gets something renderable.

use futures::join;
use serde::Serialize;
use tracing::{info, warn};

use crate::external::market_provider::{MarketDataProvider, ProviderError, ReportingPeriod};
use crate::models::{
    AnalystEstimate, CompanyProfile, FinancialHealthScores, FinancialStatementPeriod,
    GrowthRecord, KeyMetricsSnapshot, PopularStock, PricePoint, Sourced,
};
use crate::sample;
use crate::services::generation::FetchLedger;

const POPULAR_COUNT: usize = 6;

fn fallback_notice(entity: &str, ticker: &str, err: &ProviderError) -> String {
    format!("Live {entity} data for {ticker} is unavailable ({err}); showing sample data.")
}

pub async fn company_profile(
    provider: &dyn MarketDataProvider,
    ticker: &str,
) -> Sourced<CompanyProfile> {
    match provider.company_profile(ticker).await {
        Ok(profile) => Sourced::live(profile),
        Err(e) => {
            warn!("Falling back to sample company profile for {}: {}", ticker, e);
            Sourced::sample(
                sample::company::company_profile(ticker),
                fallback_notice("company profile", ticker, &e),
            )
        }
    }
}

pub async fn daily_prices(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    days: u32,
) -> Sourced<Vec<PricePoint>> {
    match provider.daily_prices(ticker, days).await {
        Ok(points) => Sourced::live(points),
        Err(e) => {
            warn!("Falling back to sample price history for {}: {}", ticker, e);
            Sourced::sample(
                sample::prices::daily_prices(ticker),
                fallback_notice("price history", ticker, &e),
            )
        }
    }
}

pub async fn quarterly_financials(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    limit: usize,
) -> Sourced<Vec<FinancialStatementPeriod>> {
    match provider.quarterly_financials(ticker, limit).await {
        Ok(periods) => Sourced::live(periods),
        Err(e) => {
            warn!("Falling back to sample financials for {}: {}", ticker, e);
            Sourced::sample(
                sample::financials::quarterly_financials(ticker, limit),
                fallback_notice("financial statement", ticker, &e),
            )
        }
    }
}

pub async fn key_metrics(
    provider: &dyn MarketDataProvider,
    ticker: &str,
) -> Sourced<KeyMetricsSnapshot> {
    match provider.key_metrics(ticker).await {
        Ok(metrics) => Sourced::live(metrics),
        Err(e) => {
            warn!("Falling back to sample key metrics for {}: {}", ticker, e);
            Sourced::sample(
                sample::metrics::key_metrics(ticker),
                fallback_notice("key metrics", ticker, &e),
            )
        }
    }
}

pub async fn financial_scores(
    provider: &dyn MarketDataProvider,
    ticker: &str,
) -> Sourced<FinancialHealthScores> {
    match provider.financial_scores(ticker).await {
        Ok(scores) => Sourced::live(scores),
        Err(e) => {
            warn!("Falling back to sample financial scores for {}: {}", ticker, e);
            Sourced::sample(
                sample::metrics::financial_scores(ticker),
                fallback_notice("financial score", ticker, &e),
            )
        }
    }
}

pub async fn analyst_estimates(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    period: ReportingPeriod,
    limit: usize,
) -> Sourced<Vec<AnalystEstimate>> {
    match provider.analyst_estimates(ticker, period, limit).await {
        Ok(estimates) => Sourced::live(estimates),
        Err(e) => {
            warn!("Falling back to sample analyst estimates for {}: {}", ticker, e);
            Sourced::sample(
                sample::metrics::analyst_estimates(ticker, limit),
                fallback_notice("analyst estimate", ticker, &e),
            )
        }
    }
}

pub async fn financial_growth(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    period: ReportingPeriod,
    limit: usize,
) -> Sourced<Vec<GrowthRecord>> {
    match provider.financial_growth(ticker, period, limit).await {
        Ok(records) => Sourced::live(records),
        Err(e) => {
            warn!("Falling back to sample growth records for {}: {}", ticker, e);
            Sourced::sample(
                sample::financials::financial_growth(ticker, limit),
                fallback_notice("financial growth", ticker, &e),
            )
        }
    }
}

pub async fn popular_stocks(provider: &dyn MarketDataProvider) -> Sourced<Vec<PopularStock>> {
    match provider.most_active().await {
        Ok(mut stocks) => {
            stocks.truncate(POPULAR_COUNT);
            Sourced::live(stocks)
        }
        Err(e) => {
            warn!("Falling back to static popular stocks: {}", e);
            Sourced::sample(
                sample::popular::popular_stocks(),
                format!("Live market movers are unavailable ({e}); showing sample data."),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Bundled fan-out fetches
// ---------------------------------------------------------------------------

/// Metrics and scores fetched concurrently. Each half falls back
/// independently; charts are only flagged off when both halves fell
/// back at once. `stale` marks a response superseded by a newer fetch
/// for the same ticker, so the consumer can discard it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealthBundle {
    pub metrics: Sourced<KeyMetricsSnapshot>,
    pub scores: Sourced<FinancialHealthScores>,
    pub charts_disabled: bool,
    pub stale: bool,
}

pub async fn financial_health(
    provider: &dyn MarketDataProvider,
    fetches: &FetchLedger,
    ticker: &str,
) -> FinancialHealthBundle {
    let ticket = fetches.begin(&format!("financial-health:{ticker}"));

    let (metrics, scores) = join!(
        key_metrics(provider, ticker),
        financial_scores(provider, ticker)
    );

    let charts_disabled = metrics.is_sample() && scores.is_sample();
    let stale = !ticket.is_current();
    if stale {
        info!("Financial health fetch for {} superseded by a newer request", ticker);
    }

    FinancialHealthBundle {
        metrics,
        scores,
        charts_disabled,
        stale,
    }
}

/// Analyst estimates and historical growth fetched concurrently, with
/// the same independence and staleness semantics as the health bundle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthOutlookBundle {
    pub estimates: Sourced<Vec<AnalystEstimate>>,
    pub growth: Sourced<Vec<GrowthRecord>>,
    pub charts_disabled: bool,
    pub stale: bool,
}

pub async fn growth_outlook(
    provider: &dyn MarketDataProvider,
    fetches: &FetchLedger,
    ticker: &str,
    period: ReportingPeriod,
    limit: usize,
) -> GrowthOutlookBundle {
    let ticket = fetches.begin(&format!("growth-outlook:{ticker}"));

    let (estimates, growth) = join!(
        analyst_estimates(provider, ticker, period, limit),
        financial_growth(provider, ticker, period, limit)
    );

    let charts_disabled = estimates.is_sample() && growth.is_sample();
    let stale = !ticket.is_current();
    if stale {
        info!("Growth outlook fetch for {} superseded by a newer request", ticker);
    }

    GrowthOutlookBundle {
        estimates,
        growth,
        charts_disabled,
        stale,
    }
}
