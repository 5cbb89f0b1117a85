use crate::models::PopularStock;
use crate::sample::catalog;

/// The static market-movers fallback list.
pub fn popular_stocks() -> Vec<PopularStock> {
    catalog::POPULAR_STOCKS
        .iter()
        .map(|(symbol, name, price, change, changes_percentage)| PopularStock {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price: *price,
            change: *change,
            changes_percentage: *changes_percentage,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_well_known_tickers() {
        let stocks = popular_stocks();
        assert_eq!(stocks.len(), 6);
        assert!(stocks.iter().any(|s| s.symbol == "AAPL" && s.price == 232.8));
        assert!(stocks.iter().any(|s| s.symbol == "NVDA"));
    }
}
