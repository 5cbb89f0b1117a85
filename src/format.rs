//! Display formatting helpers used by the route layer when it attaches
//! human-readable fields to entity payloads.

/// Magnitude-scaled currency string: trillions, billions and millions
/// get a suffix, anything smaller a plain thousands-grouped number.
pub fn format_currency(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${}", group_thousands(value))
    }
}

/// Fractional rate to a percent string, e.g. 0.3612 -> "36.12%".
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Plain two-decimal ratio string.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// Period-over-period growth in percent. Yields 0 when the previous
/// value is absent or zero; the zero-guard is deliberate, not a
/// division fault.
pub fn calculate_growth(current: f64, previous: Option<f64>) -> f64 {
    match previous {
        Some(prev) if prev != 0.0 => (current - prev) / prev * 100.0,
        _ => 0.0,
    }
}

/// Altman Z-Score band: above 2.99 is safe, below 1.81 is distressed,
/// the range between is the grey zone.
pub fn altman_band(z_score: f64) -> &'static str {
    if z_score > 2.99 {
        "safe"
    } else if z_score >= 1.81 {
        "grey"
    } else {
        "distress"
    }
}

/// Piotroski score band over the 0-9 criteria count.
pub fn piotroski_band(score: i32) -> &'static str {
    match score {
        7..=9 => "strong",
        4..=6 => "moderate",
        _ => "weak",
    }
}

fn group_thousands(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (formatted, "00".to_string()),
    };

    let mut grouped: Vec<char> = Vec::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.into_iter().rev().collect();

    format!("{sign}{int_grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_selects_trillions_suffix() {
        assert_eq!(format_currency(2_950_000_000_000.0), "$2.95T");
        assert_eq!(format_currency(1e12), "$1.00T");
    }

    #[test]
    fn currency_selects_billions_suffix() {
        assert_eq!(format_currency(878_000_000_000.0), "$878.00B");
        assert_eq!(format_currency(1e9), "$1.00B");
        assert_eq!(format_currency(999_999_999_999.0), "$1000.00B");
    }

    #[test]
    fn currency_selects_millions_suffix() {
        assert_eq!(format_currency(134_900_000.0), "$134.90M");
        assert_eq!(format_currency(1e6), "$1.00M");
    }

    #[test]
    fn currency_below_a_million_is_grouped_plain() {
        assert_eq!(format_currency(189.84), "$189.84");
        assert_eq!(format_currency(999_999.0), "$999,999.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
    }

    #[test]
    fn percent_multiplies_and_fixes_decimals() {
        assert_eq!(format_percent(0.3612), "36.12%");
        assert_eq!(format_percent(-0.0104), "-1.04%");
    }

    #[test]
    fn ratio_fixes_two_decimals() {
        assert_eq!(format_ratio(2.666), "2.67");
        assert_eq!(format_ratio(0.5), "0.50");
    }

    #[test]
    fn growth_guards_zero_and_missing_previous() {
        assert_eq!(calculate_growth(123.4, Some(0.0)), 0.0);
        assert_eq!(calculate_growth(123.4, None), 0.0);
        assert_eq!(calculate_growth(-55.0, Some(0.0)), 0.0);
    }

    #[test]
    fn growth_is_percent_change() {
        assert!((calculate_growth(110.0, Some(100.0)) - 10.0).abs() < 1e-9);
        assert!((calculate_growth(90.0, Some(100.0)) + 10.0).abs() < 1e-9);
    }

    #[test]
    fn altman_bands_at_boundaries() {
        assert_eq!(altman_band(3.0), "safe");
        assert_eq!(altman_band(2.99), "grey");
        assert_eq!(altman_band(1.81), "grey");
        assert_eq!(altman_band(1.80), "distress");
    }

    #[test]
    fn piotroski_bands() {
        assert_eq!(piotroski_band(9), "strong");
        assert_eq!(piotroski_band(7), "strong");
        assert_eq!(piotroski_band(6), "moderate");
        assert_eq!(piotroski_band(4), "moderate");
        assert_eq!(piotroski_band(3), "weak");
        assert_eq!(piotroski_band(0), "weak");
    }
}
