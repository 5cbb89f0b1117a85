//! The one shared template dataset behind every synthetic generator.
//!
//! All fallback surfaces draw from this module so the sample companies
//! stay consistent across endpoints. Unknown tickers reuse the default
//! (META-shaped) templates with the ticker substituted by the caller.

/// Static company profile template.
pub struct CompanyTemplate {
    pub symbol: &'static str,
    pub company_name: &'static str,
    pub price: f64,
    pub changes: f64,
    pub changes_percentage: f64,
    pub currency: &'static str,
    pub exchange_short_name: &'static str,
    pub exchange: &'static str,
    pub industry: &'static str,
    pub sector: &'static str,
    pub country: &'static str,
    pub market_cap: i64,
    pub beta: f64,
    pub vol_avg: i64,
    pub last_div: f64,
    pub range: &'static str,
    pub description: &'static str,
    pub ceo: &'static str,
    pub website: &'static str,
    pub image: &'static str,
}

/// Base annual income-statement tuple the quarterly generator scales.
pub struct FinancialBase {
    pub annual_revenue: f64,
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,
    pub ebitda_margin: f64,
    /// Year-over-year revenue multiplier; older years divide by it.
    pub year_growth: f64,
    pub shares_outstanding: f64,
    pub analysts: i32,
}

/// TTM ratio and score row for the metrics/scores fallbacks.
pub struct MetricsTemplate {
    pub pe_ratio: f64,
    pub peg_ratio: f64,
    pub return_on_equity: f64,
    pub return_on_assets: f64,
    pub current_ratio: f64,
    pub debt_to_equity: f64,
    pub altman_z_score: f64,
    pub piotroski_score: i32,
    pub working_capital: i64,
    pub total_assets: i64,
    pub retained_earnings: i64,
    pub ebit: i64,
    pub total_liabilities: i64,
    pub revenue: i64,
}

/// Revenue share of each calendar quarter, Q1..Q4.
pub const QUARTER_WEIGHTS: [f64; 4] = [0.23, 0.24, 0.26, 0.27];

pub const DEFAULT_BASE_PRICE: f64 = 200.0;

static META_PROFILE: CompanyTemplate = CompanyTemplate {
    symbol: "META",
    company_name: "Meta Platforms Inc.",
    price: 342.56,
    changes: 8.23,
    changes_percentage: 2.46,
    currency: "USD",
    exchange_short_name: "NASDAQ",
    exchange: "NASDAQ Global Select",
    industry: "Internet Content & Information",
    sector: "Communication Services",
    country: "US",
    market_cap: 878_000_000_000,
    beta: 1.21,
    vol_avg: 18_420_000,
    last_div: 2.00,
    range: "274.38-384.33",
    description: "Meta Platforms Inc. develops products that enable people to \
        connect and share with friends and family through mobile devices, \
        personal computers, virtual reality headsets, and wearables worldwide.",
    ceo: "Mark Zuckerberg",
    website: "https://www.meta.com",
    image: "https://images.financialmodelingprep.com/symbol/META.png",
};

static AAPL_PROFILE: CompanyTemplate = CompanyTemplate {
    symbol: "AAPL",
    company_name: "Apple Inc.",
    price: 189.84,
    changes: 1.35,
    changes_percentage: 0.72,
    currency: "USD",
    exchange_short_name: "NASDAQ",
    exchange: "NASDAQ Global Select",
    industry: "Consumer Electronics",
    sector: "Technology",
    country: "US",
    market_cap: 2_950_000_000_000,
    beta: 1.29,
    vol_avg: 58_310_000,
    last_div: 0.96,
    range: "164.08-199.62",
    description: "Apple Inc. designs, manufactures, and markets smartphones, \
        personal computers, tablets, wearables, and accessories worldwide, \
        together with a range of related services.",
    ceo: "Timothy D. Cook",
    website: "https://www.apple.com",
    image: "https://images.financialmodelingprep.com/symbol/AAPL.png",
};

static TSLA_PROFILE: CompanyTemplate = CompanyTemplate {
    symbol: "TSLA",
    company_name: "Tesla Inc.",
    price: 248.42,
    changes: 12.67,
    changes_percentage: 5.38,
    currency: "USD",
    exchange_short_name: "NASDAQ",
    exchange: "NASDAQ Global Select",
    industry: "Auto Manufacturers",
    sector: "Consumer Cyclical",
    country: "US",
    market_cap: 790_000_000_000,
    beta: 2.31,
    vol_avg: 112_650_000,
    last_div: 0.0,
    range: "152.37-299.29",
    description: "Tesla Inc. designs, develops, manufactures, leases, and \
        sells electric vehicles, and energy generation and storage systems \
        in the United States and internationally.",
    ceo: "Elon Musk",
    website: "https://www.tesla.com",
    image: "https://images.financialmodelingprep.com/symbol/TSLA.png",
};

static META_FINANCIALS: FinancialBase = FinancialBase {
    annual_revenue: 134_900_000_000.0,
    gross_margin: 0.81,
    operating_margin: 0.35,
    net_margin: 0.29,
    ebitda_margin: 0.49,
    year_growth: 1.16,
    shares_outstanding: 2_550_000_000.0,
    analysts: 42,
};

static AAPL_FINANCIALS: FinancialBase = FinancialBase {
    annual_revenue: 383_300_000_000.0,
    gross_margin: 0.44,
    operating_margin: 0.30,
    net_margin: 0.25,
    ebitda_margin: 0.33,
    year_growth: 1.06,
    shares_outstanding: 15_500_000_000.0,
    analysts: 38,
};

static TSLA_FINANCIALS: FinancialBase = FinancialBase {
    annual_revenue: 96_800_000_000.0,
    gross_margin: 0.18,
    operating_margin: 0.09,
    net_margin: 0.10,
    ebitda_margin: 0.14,
    year_growth: 1.19,
    shares_outstanding: 3_180_000_000.0,
    analysts: 34,
};

static META_METRICS: MetricsTemplate = MetricsTemplate {
    pe_ratio: 27.4,
    peg_ratio: 1.21,
    return_on_equity: 0.36,
    return_on_assets: 0.17,
    current_ratio: 2.67,
    debt_to_equity: 0.52,
    altman_z_score: 8.2,
    piotroski_score: 7,
    working_capital: 52_000_000_000,
    total_assets: 229_600_000_000,
    retained_earnings: 82_100_000_000,
    ebit: 47_200_000_000,
    total_liabilities: 76_500_000_000,
    revenue: 134_900_000_000,
};

static AAPL_METRICS: MetricsTemplate = MetricsTemplate {
    pe_ratio: 29.5,
    peg_ratio: 2.41,
    return_on_equity: 1.47,
    return_on_assets: 0.28,
    current_ratio: 0.99,
    debt_to_equity: 1.79,
    altman_z_score: 6.1,
    piotroski_score: 8,
    working_capital: -1_742_000_000,
    total_assets: 352_583_000_000,
    retained_earnings: -3_068_000_000,
    ebit: 114_301_000_000,
    total_liabilities: 290_437_000_000,
    revenue: 383_285_000_000,
};

static TSLA_METRICS: MetricsTemplate = MetricsTemplate {
    pe_ratio: 68.2,
    peg_ratio: 3.54,
    return_on_equity: 0.19,
    return_on_assets: 0.13,
    current_ratio: 1.73,
    debt_to_equity: 0.28,
    altman_z_score: 10.3,
    piotroski_score: 6,
    working_capital: 20_600_000_000,
    total_assets: 106_600_000_000,
    retained_earnings: 27_900_000_000,
    ebit: 8_900_000_000,
    total_liabilities: 43_000_000_000,
    revenue: 96_800_000_000,
};

/// Static market-movers fallback, the original hardcoded six.
pub static POPULAR_STOCKS: [(&str, &str, f64, f64, f64); 6] = [
    ("AAPL", "Apple Inc.", 232.8, 4.79, 2.10),
    ("TSLA", "Tesla Inc.", 248.42, 12.67, 5.38),
    ("META", "Meta Platforms Inc.", 342.56, 8.23, 2.46),
    ("GOOGL", "Alphabet Inc.", 138.21, -1.45, -1.04),
    ("AMZN", "Amazon.com Inc.", 145.86, 2.34, 1.63),
    ("NVDA", "NVIDIA Corporation", 875.28, 15.67, 1.82),
];

/// Template profile for a known ticker; `None` for everything else.
pub fn company_template(ticker: &str) -> Option<&'static CompanyTemplate> {
    match ticker {
        "META" => Some(&META_PROFILE),
        "AAPL" => Some(&AAPL_PROFILE),
        "TSLA" => Some(&TSLA_PROFILE),
        _ => None,
    }
}

/// The shape unknown tickers inherit.
pub fn default_template() -> &'static CompanyTemplate {
    &META_PROFILE
}

pub fn financial_base(ticker: &str) -> &'static FinancialBase {
    match ticker {
        "AAPL" => &AAPL_FINANCIALS,
        "TSLA" => &TSLA_FINANCIALS,
        _ => &META_FINANCIALS,
    }
}

pub fn metrics_template(ticker: &str) -> &'static MetricsTemplate {
    match ticker {
        "AAPL" => &AAPL_METRICS,
        "TSLA" => &TSLA_METRICS,
        _ => &META_METRICS,
    }
}

/// Market cap paired with the ticker's profile template (unknown
/// tickers share the default's).
pub fn market_cap(ticker: &str) -> i64 {
    company_template(ticker)
        .unwrap_or_else(default_template)
        .market_cap
}

pub fn base_price(ticker: &str) -> f64 {
    match ticker {
        "META" => 345.0,
        "AAPL" => 190.0,
        "TSLA" => 250.0,
        _ => DEFAULT_BASE_PRICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tickers_have_templates() {
        assert_eq!(company_template("AAPL").map(|t| t.company_name), Some("Apple Inc."));
        assert!(company_template("ZZZZ").is_none());
    }

    #[test]
    fn quarter_weights_cover_a_full_year() {
        let total: f64 = QUARTER_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_market_cap_is_meta_derived() {
        assert_eq!(market_cap("ZZZZ"), market_cap("META"));
    }
}
