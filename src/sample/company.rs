use crate::models::CompanyProfile;
use crate::sample::catalog::{self, CompanyTemplate};

/// Sample profile for a ticker: one of the three known templates, or
/// the default company shape with the ticker substituted into the name
/// and description.
pub fn company_profile(ticker: &str) -> CompanyProfile {
    match catalog::company_template(ticker) {
        Some(template) => to_profile(template),
        None => {
            let mut profile = to_profile(catalog::default_template());
            profile.symbol = ticker.to_string();
            profile.company_name = format!("{ticker} Corporation");
            profile.description = format!(
                "{ticker} Corporation is a publicly traded company. The \
                 figures shown are representative sample data."
            );
            profile.image = "/static/placeholder.png".to_string();
            profile
        }
    }
}

fn to_profile(template: &CompanyTemplate) -> CompanyProfile {
    CompanyProfile {
        symbol: template.symbol.to_string(),
        company_name: template.company_name.to_string(),
        price: template.price,
        changes: template.changes,
        changes_percentage: template.changes_percentage,
        currency: template.currency.to_string(),
        exchange_short_name: template.exchange_short_name.to_string(),
        exchange: template.exchange.to_string(),
        industry: template.industry.to_string(),
        sector: template.sector.to_string(),
        country: template.country.to_string(),
        market_cap: template.market_cap,
        beta: template.beta,
        vol_avg: template.vol_avg,
        last_div: template.last_div,
        range: template.range.to_string(),
        description: template.description.to_string(),
        ceo: template.ceo.to_string(),
        website: template.website.to_string(),
        image: template.image.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ticker_uses_its_template() {
        let profile = company_profile("AAPL");
        assert_eq!(profile.symbol, "AAPL");
        assert_eq!(profile.company_name, "Apple Inc.");
        assert_eq!(profile.price, 189.84);
    }

    #[test]
    fn unknown_ticker_gets_default_shape_with_substituted_name() {
        let profile = company_profile("ZZZZ");
        let default = company_profile("META");
        assert_eq!(profile.symbol, "ZZZZ");
        assert_eq!(profile.company_name, "ZZZZ Corporation");
        assert!(profile.description.contains("ZZZZ"));
        assert_eq!(profile.price, default.price);
        assert_eq!(profile.market_cap, default.market_cap);
        assert_eq!(profile.sector, default.sector);
    }
}
