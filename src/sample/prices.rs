use chrono::{Duration, Utc};

use crate::models::PricePoint;
use crate::sample::catalog;

const SERIES_DAYS: i64 = 30;
const DAILY_DRIFT: f64 = -0.0015;
const DAILY_NOISE: f64 = 0.02;
const BASE_VOLUME: i64 = 40_000_000;

/// Synthetic daily series: 30 sessions ending today, oldest first.
/// Each close drifts slightly down from the ticker's base price with a
/// bounded random perturbation; open/high/low are fixed multiples of
/// the close.
pub fn daily_prices(ticker: &str) -> Vec<PricePoint> {
    let today = Utc::now().date_naive();
    let mut close = catalog::base_price(ticker);

    let mut out = Vec::with_capacity(SERIES_DAYS as usize);
    for back in (0..SERIES_DAYS).rev() {
        close *= 1.0 + DAILY_DRIFT + (rand::random::<f64>() - 0.5) * DAILY_NOISE;
        let volume = BASE_VOLUME + (rand::random::<f64>() * 25_000_000.0) as i64;

        out.push(PricePoint {
            date: today - Duration::days(back),
            open: close * 0.998,
            high: close * 1.012,
            low: close * 0.988,
            close,
            volume,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_exactly_thirty_points_ending_today() {
        let points = daily_prices("AAPL");
        assert_eq!(points.len(), 30);
        assert_eq!(points[29].date, Utc::now().date_naive());
    }

    #[test]
    fn dates_are_strictly_increasing() {
        let points = daily_prices("META");
        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn ohlc_are_fixed_multiples_of_close() {
        for p in daily_prices("TSLA") {
            assert!((p.open - p.close * 0.998).abs() < 1e-9);
            assert!((p.high - p.close * 1.012).abs() < 1e-9);
            assert!((p.low - p.close * 0.988).abs() < 1e-9);
            assert!(p.low <= p.high);
        }
    }

    #[test]
    fn unknown_ticker_walks_from_the_default_base() {
        let points = daily_prices("ZZZZ");
        // One step away from the 200 default, bounded by drift + noise.
        assert!(points[0].close > catalog::DEFAULT_BASE_PRICE * 0.98);
        assert!(points[0].close < catalog::DEFAULT_BASE_PRICE * 1.02);
    }
}
