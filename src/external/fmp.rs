use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::external::market_provider::{MarketDataProvider, ProviderError, ReportingPeriod};
use crate::models::{
    AnalystEstimate, CompanyProfile, FinancialHealthScores, FinancialStatementPeriod,
    GrowthRecord, KeyMetricsSnapshot, PopularStock, PricePoint,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Financial Modeling Prep client. Array-wrapped responses are
/// unwrapped to their first element where the endpoint is single-entity;
/// list endpoints must be non-empty to count as a valid response.
pub struct FmpProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FmpProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("FMP request: {}", endpoint);

        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        match status.as_u16() {
            403 => return Err(ProviderError::Forbidden),
            429 => return Err(ProviderError::RateLimited),
            s if !status.is_success() => return Err(ProviderError::BadStatus(s)),
            _ => {}
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        // FMP reports some failures inline as 200s with an error object.
        if text.contains("\"Error Message\"") {
            return Err(ProviderError::BadResponse(text));
        }

        serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))
    }

    fn first<T>(items: Vec<T>) -> Result<T, ProviderError> {
        items.into_iter().next().ok_or(ProviderError::Empty)
    }

    fn non_empty<T>(items: Vec<T>) -> Result<Vec<T>, ProviderError> {
        if items.is_empty() {
            Err(ProviderError::Empty)
        } else {
            Ok(items)
        }
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpProfile {
    symbol: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    change: f64,
    #[serde(default)]
    change_percentage: f64,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    exchange: String,
    #[serde(default)]
    exchange_full_name: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    sector: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    market_cap: i64,
    #[serde(default = "default_beta")]
    beta: f64,
    #[serde(default)]
    average_volume: i64,
    #[serde(default)]
    last_dividend: f64,
    #[serde(default)]
    range: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    ceo: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    image: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_beta() -> f64 {
    1.0
}

impl From<FmpProfile> for CompanyProfile {
    fn from(p: FmpProfile) -> Self {
        Self {
            symbol: p.symbol,
            company_name: p.company_name,
            price: p.price,
            changes: p.change,
            changes_percentage: p.change_percentage,
            currency: p.currency,
            exchange_short_name: p.exchange,
            exchange: p.exchange_full_name,
            industry: p.industry,
            sector: p.sector,
            country: p.country,
            market_cap: p.market_cap,
            beta: p.beta,
            vol_avg: p.average_volume,
            last_div: p.last_dividend,
            range: p.range,
            description: p.description,
            ceo: p.ceo,
            website: p.website,
            image: p.image,
        }
    }
}

// Price history comes object-wrapped with the daily rows nested.
#[derive(Debug, Deserialize)]
struct FmpPriceHistory {
    #[serde(default)]
    historical: Vec<FmpPriceRow>,
}

#[derive(Debug, Deserialize)]
struct FmpPriceRow {
    date: NaiveDate,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    volume: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpIncomeStatement {
    symbol: String,
    date: NaiveDate,
    #[serde(default)]
    period: String,
    #[serde(default)]
    revenue: f64,
    #[serde(default)]
    gross_profit: f64,
    #[serde(default)]
    operating_income: f64,
    #[serde(default)]
    net_income: f64,
    #[serde(default)]
    ebitda: f64,
}

impl From<FmpIncomeStatement> for FinancialStatementPeriod {
    fn from(s: FmpIncomeStatement) -> Self {
        let revenue = s.revenue;
        let ratio = move |part: f64| if revenue != 0.0 { part / revenue } else { 0.0 };
        Self {
            fiscal_year: s.date.year(),
            gross_profit_ratio: ratio(s.gross_profit),
            operating_income_ratio: ratio(s.operating_income),
            net_income_ratio: ratio(s.net_income),
            ebitda_ratio: ratio(s.ebitda),
            symbol: s.symbol,
            date: s.date,
            period: s.period,
            revenue: s.revenue,
            gross_profit: s.gross_profit,
            operating_income: s.operating_income,
            net_income: s.net_income,
            ebitda: s.ebitda,
        }
    }
}

// TTM endpoints suffix most field names; aliases keep both spellings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpKeyMetrics {
    symbol: String,
    #[serde(default, alias = "marketCapTTM")]
    market_cap: i64,
    #[serde(default, alias = "peRatioTTM")]
    pe_ratio: f64,
    #[serde(default, alias = "pegRatioTTM")]
    peg_ratio: f64,
    #[serde(default, alias = "returnOnEquityTTM")]
    return_on_equity: f64,
    #[serde(default, alias = "returnOnAssetsTTM")]
    return_on_assets: f64,
    #[serde(default, alias = "currentRatioTTM")]
    current_ratio: f64,
    #[serde(default, alias = "debtToEquityTTM")]
    debt_to_equity: f64,
}

impl From<FmpKeyMetrics> for KeyMetricsSnapshot {
    fn from(m: FmpKeyMetrics) -> Self {
        Self {
            symbol: m.symbol,
            market_cap: m.market_cap,
            pe_ratio: m.pe_ratio,
            peg_ratio: m.peg_ratio,
            return_on_equity: m.return_on_equity,
            return_on_assets: m.return_on_assets,
            current_ratio: m.current_ratio,
            debt_to_equity: m.debt_to_equity,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpFinancialScores {
    symbol: String,
    #[serde(default)]
    altman_z_score: f64,
    #[serde(default)]
    piotroski_score: i32,
    #[serde(default)]
    working_capital: i64,
    #[serde(default)]
    total_assets: i64,
    #[serde(default)]
    retained_earnings: i64,
    #[serde(default)]
    ebit: i64,
    #[serde(default)]
    total_liabilities: i64,
    #[serde(default)]
    revenue: i64,
    #[serde(default)]
    market_cap: i64,
}

impl From<FmpFinancialScores> for FinancialHealthScores {
    fn from(s: FmpFinancialScores) -> Self {
        Self {
            symbol: s.symbol,
            altman_z_score: s.altman_z_score,
            piotroski_score: s.piotroski_score,
            working_capital: s.working_capital,
            total_assets: s.total_assets,
            retained_earnings: s.retained_earnings,
            ebit: s.ebit,
            total_liabilities: s.total_liabilities,
            revenue: s.revenue,
            market_cap: s.market_cap,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpAnalystEstimate {
    symbol: String,
    date: NaiveDate,
    #[serde(default)]
    revenue_avg: i64,
    #[serde(default)]
    net_income_avg: i64,
    #[serde(default)]
    eps_avg: f64,
    #[serde(default)]
    num_analysts_revenue: i32,
    #[serde(default)]
    num_analysts_eps: i32,
}

impl From<FmpAnalystEstimate> for AnalystEstimate {
    fn from(e: FmpAnalystEstimate) -> Self {
        Self {
            symbol: e.symbol,
            date: e.date,
            revenue_avg: e.revenue_avg,
            net_income_avg: e.net_income_avg,
            eps_avg: e.eps_avg,
            num_analysts_revenue: e.num_analysts_revenue,
            num_analysts_eps: e.num_analysts_eps,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpGrowthRecord {
    symbol: String,
    date: NaiveDate,
    #[serde(default)]
    period: String,
    #[serde(default)]
    revenue_growth: f64,
    #[serde(default)]
    net_income_growth: f64,
    #[serde(default, alias = "epsgrowth")]
    eps_growth: f64,
}

impl From<FmpGrowthRecord> for GrowthRecord {
    fn from(g: FmpGrowthRecord) -> Self {
        Self {
            symbol: g.symbol,
            date: g.date,
            period: g.period,
            revenue_growth: g.revenue_growth,
            net_income_growth: g.net_income_growth,
            eps_growth: g.eps_growth,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpMostActive {
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    change: f64,
    #[serde(default)]
    changes_percentage: f64,
}

impl From<FmpMostActive> for PopularStock {
    fn from(m: FmpMostActive) -> Self {
        Self {
            symbol: m.symbol,
            name: m.name,
            price: m.price,
            change: m.change,
            changes_percentage: m.changes_percentage,
        }
    }
}

// ---------------------------------------------------------------------------
// Provider impl
// ---------------------------------------------------------------------------

#[async_trait]
impl MarketDataProvider for FmpProvider {
    async fn company_profile(&self, ticker: &str) -> Result<CompanyProfile, ProviderError> {
        let profiles: Vec<FmpProfile> = self
            .get("profile", &[("symbol", ticker.to_string())])
            .await?;
        Ok(Self::first(profiles)?.into())
    }

    async fn daily_prices(
        &self,
        ticker: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let to = Utc::now().date_naive();
        let from = to - chrono::Duration::days(days as i64);

        let history: FmpPriceHistory = self
            .get(
                "historical-price-eod/light",
                &[
                    ("symbol", ticker.to_string()),
                    ("from", from.format("%Y-%m-%d").to_string()),
                    ("to", to.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;

        // The light endpoint only carries one price per day; fetched
        // newest-first, served oldest-first.
        let mut points: Vec<PricePoint> = Self::non_empty(history.historical)?
            .into_iter()
            .map(|row| PricePoint {
                date: row.date,
                open: row.price,
                high: row.price,
                low: row.price,
                close: row.price,
                volume: row.volume,
            })
            .collect();
        points.sort_by_key(|p| p.date);
        Ok(points)
    }

    async fn quarterly_financials(
        &self,
        ticker: &str,
        limit: usize,
    ) -> Result<Vec<FinancialStatementPeriod>, ProviderError> {
        let statements: Vec<FmpIncomeStatement> = self
            .get(
                "income-statement",
                &[
                    ("symbol", ticker.to_string()),
                    ("period", "quarter".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(Self::non_empty(statements)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn key_metrics(&self, ticker: &str) -> Result<KeyMetricsSnapshot, ProviderError> {
        let metrics: Vec<FmpKeyMetrics> = self
            .get("key-metrics-ttm", &[("symbol", ticker.to_string())])
            .await?;
        Ok(Self::first(metrics)?.into())
    }

    async fn financial_scores(&self, ticker: &str) -> Result<FinancialHealthScores, ProviderError> {
        let scores: Vec<FmpFinancialScores> = self
            .get("financial-scores", &[("symbol", ticker.to_string())])
            .await?;
        Ok(Self::first(scores)?.into())
    }

    async fn analyst_estimates(
        &self,
        ticker: &str,
        period: ReportingPeriod,
        limit: usize,
    ) -> Result<Vec<AnalystEstimate>, ProviderError> {
        let estimates: Vec<FmpAnalystEstimate> = self
            .get(
                "analyst-estimates",
                &[
                    ("symbol", ticker.to_string()),
                    ("period", period.as_query().to_string()),
                    ("limit", limit.to_string()),
                    ("page", "0".to_string()),
                ],
            )
            .await?;
        Ok(Self::non_empty(estimates)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn financial_growth(
        &self,
        ticker: &str,
        period: ReportingPeriod,
        limit: usize,
    ) -> Result<Vec<GrowthRecord>, ProviderError> {
        let records: Vec<FmpGrowthRecord> = self
            .get(
                "financial-growth",
                &[
                    ("symbol", ticker.to_string()),
                    ("period", period.as_query().to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(Self::non_empty(records)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn most_active(&self) -> Result<Vec<PopularStock>, ProviderError> {
        let stocks: Vec<FmpMostActive> = self.get("most-actives", &[]).await?;
        Ok(Self::non_empty(stocks)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_wire_shape_maps_to_domain() {
        let json = r#"[{
            "symbol": "AAPL",
            "companyName": "Apple Inc.",
            "price": 189.84,
            "change": 1.35,
            "changePercentage": 0.72,
            "currency": "USD",
            "exchange": "NASDAQ",
            "exchangeFullName": "NASDAQ Global Select",
            "industry": "Consumer Electronics",
            "sector": "Technology",
            "country": "US",
            "marketCap": 2950000000000,
            "beta": 1.29,
            "averageVolume": 58310000,
            "lastDividend": 0.96,
            "range": "164.08-199.62",
            "description": "Apple Inc. designs smartphones.",
            "ceo": "Timothy D. Cook",
            "website": "https://www.apple.com",
            "image": "https://images.financialmodelingprep.com/symbol/AAPL.png"
        }]"#;

        let parsed: Vec<FmpProfile> = serde_json::from_str(json).expect("profile parses");
        let profile: CompanyProfile = FmpProvider::first(parsed).expect("non-empty").into();
        assert_eq!(profile.symbol, "AAPL");
        assert_eq!(profile.company_name, "Apple Inc.");
        assert_eq!(profile.changes, 1.35);
        assert_eq!(profile.exchange_short_name, "NASDAQ");
        assert_eq!(profile.exchange, "NASDAQ Global Select");
        assert_eq!(profile.vol_avg, 58_310_000);
    }

    #[test]
    fn profile_defaults_fill_missing_fields() {
        let json = r#"[{"symbol": "AAPL"}]"#;
        let parsed: Vec<FmpProfile> = serde_json::from_str(json).expect("sparse profile parses");
        let profile: CompanyProfile = FmpProvider::first(parsed).expect("non-empty").into();
        assert_eq!(profile.currency, "USD");
        assert_eq!(profile.beta, 1.0);
        assert_eq!(profile.price, 0.0);
    }

    #[test]
    fn price_history_is_object_wrapped_and_resorted_ascending() {
        let json = r#"{
            "symbol": "AAPL",
            "historical": [
                {"date": "2026-08-06", "price": 190.5, "volume": 51000000},
                {"date": "2026-08-05", "price": 189.1, "volume": 48000000}
            ]
        }"#;

        let parsed: FmpPriceHistory = serde_json::from_str(json).expect("history parses");
        let mut points: Vec<PricePoint> = parsed
            .historical
            .into_iter()
            .map(|row| PricePoint {
                date: row.date,
                open: row.price,
                high: row.price,
                low: row.price,
                close: row.price,
                volume: row.volume,
            })
            .collect();
        points.sort_by_key(|p| p.date);
        assert!(points[0].date < points[1].date);
        assert_eq!(points[0].close, 189.1);
        assert_eq!(points[0].open, points[0].close);
    }

    #[test]
    fn income_statement_ratios_are_derived_and_zero_guarded() {
        let json = r#"[{
            "symbol": "AAPL",
            "date": "2026-06-30",
            "period": "Q3",
            "revenue": 100000000000.0,
            "grossProfit": 44000000000.0,
            "operatingIncome": 30000000000.0,
            "netIncome": 25000000000.0,
            "ebitda": 33000000000.0
        }]"#;

        let parsed: Vec<FmpIncomeStatement> = serde_json::from_str(json).expect("statement parses");
        let period: FinancialStatementPeriod =
            parsed.into_iter().next().expect("one row").into();
        assert_eq!(period.fiscal_year, 2026);
        assert!((period.gross_profit_ratio - 0.44).abs() < 1e-9);
        assert!((period.net_income_ratio - 0.25).abs() < 1e-9);

        let empty = FmpIncomeStatement {
            symbol: "X".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 31).expect("valid date"),
            period: "Q1".into(),
            revenue: 0.0,
            gross_profit: 1.0,
            operating_income: 0.0,
            net_income: 0.0,
            ebitda: 0.0,
        };
        let converted: FinancialStatementPeriod = empty.into();
        assert_eq!(converted.gross_profit_ratio, 0.0);
    }

    #[test]
    fn key_metrics_accepts_ttm_suffixed_names() {
        let json = r#"[{
            "symbol": "AAPL",
            "marketCapTTM": 2950000000000,
            "peRatioTTM": 29.5,
            "pegRatioTTM": 2.41,
            "returnOnEquityTTM": 1.47,
            "returnOnAssetsTTM": 0.28,
            "currentRatioTTM": 0.99,
            "debtToEquityTTM": 1.79
        }]"#;

        let parsed: Vec<FmpKeyMetrics> = serde_json::from_str(json).expect("metrics parse");
        let metrics: KeyMetricsSnapshot = FmpProvider::first(parsed).expect("non-empty").into();
        assert_eq!(metrics.pe_ratio, 29.5);
        assert_eq!(metrics.market_cap, 2_950_000_000_000);
    }

    #[test]
    fn empty_list_payloads_are_rejected() {
        assert!(matches!(
            FmpProvider::non_empty(Vec::<PricePoint>::new()),
            Err(ProviderError::Empty)
        ));
        assert!(matches!(
            FmpProvider::first(Vec::<FmpProfile>::new()),
            Err(ProviderError::Empty)
        ));
    }
}
