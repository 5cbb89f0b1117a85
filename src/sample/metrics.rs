use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{AnalystEstimate, FinancialHealthScores, KeyMetricsSnapshot};
use crate::sample::catalog;

/// TTM metrics snapshot from the shared template table.
pub fn key_metrics(ticker: &str) -> KeyMetricsSnapshot {
    let template = catalog::metrics_template(ticker);
    KeyMetricsSnapshot {
        symbol: ticker.to_string(),
        market_cap: catalog::market_cap(ticker),
        pe_ratio: template.pe_ratio,
        peg_ratio: template.peg_ratio,
        return_on_equity: template.return_on_equity,
        return_on_assets: template.return_on_assets,
        current_ratio: template.current_ratio,
        debt_to_equity: template.debt_to_equity,
    }
}

/// Composite score row from the shared template table.
pub fn financial_scores(ticker: &str) -> FinancialHealthScores {
    let template = catalog::metrics_template(ticker);
    FinancialHealthScores {
        symbol: ticker.to_string(),
        altman_z_score: template.altman_z_score,
        piotroski_score: template.piotroski_score,
        working_capital: template.working_capital,
        total_assets: template.total_assets,
        retained_earnings: template.retained_earnings,
        ebit: template.ebit,
        total_liabilities: template.total_liabilities,
        revenue: template.revenue,
        market_cap: catalog::market_cap(ticker),
    }
}

/// Forward estimates projected from the financial base table, nearest
/// fiscal year first.
pub fn analyst_estimates(ticker: &str, limit: usize) -> Vec<AnalystEstimate> {
    let base = catalog::financial_base(ticker);
    let current_year = Utc::now().date_naive().year();

    let mut out = Vec::with_capacity(limit);
    for ahead in 1..=limit {
        let revenue_avg = base.annual_revenue * base.year_growth.powi(ahead as i32);
        let net_income_avg = revenue_avg * base.net_margin;

        out.push(AnalystEstimate {
            symbol: ticker.to_string(),
            date: fiscal_year_end(current_year + ahead as i32),
            revenue_avg: revenue_avg as i64,
            net_income_avg: net_income_avg as i64,
            eps_avg: net_income_avg / base.shares_outstanding,
            num_analysts_revenue: base.analysts,
            num_analysts_eps: base.analysts - 4,
        });
    }
    out
}

fn fiscal_year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{altman_band, piotroski_band};

    #[test]
    fn unknown_ticker_reuses_the_default_metrics_row() {
        let unknown = key_metrics("ZZZZ");
        let meta = key_metrics("META");
        assert_eq!(unknown.pe_ratio, meta.pe_ratio);
        assert_eq!(unknown.market_cap, meta.market_cap);
        assert_eq!(unknown.symbol, "ZZZZ");
    }

    #[test]
    fn sample_scores_land_in_sensible_bands() {
        let scores = financial_scores("AAPL");
        assert_eq!(altman_band(scores.altman_z_score), "safe");
        assert_eq!(piotroski_band(scores.piotroski_score), "strong");
    }

    #[test]
    fn estimates_are_forward_looking_and_growing() {
        let estimates = analyst_estimates("META", 5);
        assert_eq!(estimates.len(), 5);
        let this_year = Utc::now().date_naive().year();
        for (i, e) in estimates.iter().enumerate() {
            assert_eq!(e.date.year(), this_year + 1 + i as i32);
            assert!(e.eps_avg > 0.0);
            assert!(e.num_analysts_revenue > 0);
        }
        assert!(estimates[1].revenue_avg > estimates[0].revenue_avg);
    }
}
