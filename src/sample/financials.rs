use chrono::{Datelike, NaiveDate, Utc};

use crate::format::calculate_growth;
use crate::models::{FinancialStatementPeriod, GrowthRecord};
use crate::sample::catalog;

/// Synthetic quarterly income-statement periods, most recent first.
///
/// Each quarter's revenue is the base annual revenue scaled by that
/// quarter's share of the year, discounted by the per-year growth
/// multiplier for older years. Every other line item is a fixed
/// fraction of revenue.
pub fn quarterly_financials(ticker: &str, periods: usize) -> Vec<FinancialStatementPeriod> {
    let base = catalog::financial_base(ticker);
    let today = Utc::now().date_naive();
    let start_year = today.year();

    let mut year = start_year;
    let mut quarter = today.month0() / 3 + 1;

    let mut out = Vec::with_capacity(periods);
    for _ in 0..periods {
        let years_back = start_year - year;
        let revenue = base.annual_revenue * catalog::QUARTER_WEIGHTS[(quarter - 1) as usize]
            / base.year_growth.powi(years_back);

        out.push(FinancialStatementPeriod {
            symbol: ticker.to_string(),
            date: quarter_end(year, quarter),
            fiscal_year: year,
            period: format!("Q{quarter}"),
            revenue,
            gross_profit: revenue * base.gross_margin,
            operating_income: revenue * base.operating_margin,
            net_income: revenue * base.net_margin,
            ebitda: revenue * base.ebitda_margin,
            gross_profit_ratio: base.gross_margin,
            operating_income_ratio: base.operating_margin,
            net_income_ratio: base.net_margin,
            ebitda_ratio: base.ebitda_margin,
        });

        if quarter == 1 {
            quarter = 4;
            year -= 1;
        } else {
            quarter -= 1;
        }
    }
    out
}

/// Synthetic annual growth rows, most recent fiscal year first. Rates
/// are derived from consecutive synthetic revenue years so they stay
/// consistent with the quarterly generator's base table.
pub fn financial_growth(ticker: &str, limit: usize) -> Vec<GrowthRecord> {
    let base = catalog::financial_base(ticker);
    let current_year = Utc::now().date_naive().year();

    let mut out = Vec::with_capacity(limit);
    for back in 0..limit {
        let year = current_year - back as i32;
        let revenue = base.annual_revenue / base.year_growth.powi(back as i32);
        let prior_revenue = revenue / base.year_growth;
        let rate = calculate_growth(revenue, Some(prior_revenue)) / 100.0;
        let wobble = catalog::QUARTER_WEIGHTS[back % 4] / 0.25;

        out.push(GrowthRecord {
            symbol: ticker.to_string(),
            date: fiscal_year_end(year),
            period: "FY".to_string(),
            revenue_growth: rate * wobble,
            net_income_growth: rate * wobble * 1.12,
            eps_growth: rate * wobble * 1.18,
        });
    }
    out
}

fn quarter_end(year: i32, quarter: u32) -> NaiveDate {
    let (month, day) = match quarter {
        1 => (3, 31),
        2 => (6, 30),
        3 => (9, 30),
        _ => (12, 31),
    };
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn fiscal_year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_zero_is_the_latest_quarter() {
        let today = Utc::now().date_naive();
        let expected_quarter = today.month0() / 3 + 1;

        let periods = quarterly_financials("AAPL", 8);
        assert_eq!(periods.len(), 8);
        assert_eq!(periods[0].fiscal_year, today.year());
        assert_eq!(periods[0].period, format!("Q{expected_quarter}"));
        for pair in periods.windows(2) {
            assert!(pair[0].date > pair[1].date, "periods must be newest-first");
        }
    }

    #[test]
    fn eight_periods_span_two_years_of_quarters() {
        let periods = quarterly_financials("META", 8);
        let years: Vec<i32> = periods.iter().map(|p| p.fiscal_year).collect();
        let first = years[0];
        assert!(years.contains(&(first - 1)));
        assert!(years.iter().all(|y| *y == first || *y == first - 1 || *y == first - 2));
    }

    #[test]
    fn line_items_are_fixed_fractions_of_revenue() {
        let periods = quarterly_financials("TSLA", 4);
        for p in &periods {
            assert!((p.gross_profit - p.revenue * p.gross_profit_ratio).abs() < 1e-6);
            assert!((p.net_income - p.revenue * p.net_income_ratio).abs() < 1e-6);
            assert!((p.ebitda - p.revenue * p.ebitda_ratio).abs() < 1e-6);
        }
    }

    #[test]
    fn older_years_have_smaller_revenue() {
        let periods = quarterly_financials("META", 8);
        let latest_q = &periods[0];
        let same_quarter_last_year = periods
            .iter()
            .find(|p| p.period == latest_q.period && p.fiscal_year == latest_q.fiscal_year - 1)
            .expect("eight quarters include the same quarter one year back");
        assert!(latest_q.revenue > same_quarter_last_year.revenue);
    }

    #[test]
    fn growth_rows_are_newest_first_with_positive_rates() {
        let rows = financial_growth("AAPL", 5);
        assert_eq!(rows.len(), 5);
        for pair in rows.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
        for row in &rows {
            assert!(row.revenue_growth > 0.0);
            assert_eq!(row.period, "FY");
        }
    }

    #[test]
    fn unknown_ticker_uses_default_base() {
        let unknown = quarterly_financials("ZZZZ", 4);
        let meta = quarterly_financials("META", 4);
        assert_eq!(unknown[0].revenue, meta[0].revenue);
        assert_eq!(unknown[0].symbol, "ZZZZ");
    }
}
