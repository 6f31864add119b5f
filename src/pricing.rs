//! Legacy price-label parsing.
//!
//! Older listings store their price as free text such as `"300 - 400 Juta"`,
//! `"1 - 2 Miliar"`, or `"35 Juta / bulan"`. Filtering needs a comparable
//! number, so this module extracts the lower bound of such a label.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cost::round_unit;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)?").unwrap())
}

/// Extracts a numeric lower bound from a free-text price label.
///
/// The first number in the label is taken as the base, so a range like
/// `"300 - 400"` resolves to its low end. The base scales by a billion when
/// the label mentions "miliar" and by a million otherwise ("juta" assumed).
/// A monthly-rent suffix ("bulan") is informational and does not change the
/// scaling. Returns `0` when the label holds no numeric token; never fails.
pub fn parse_price_lower_bound(label: &str) -> Decimal {
    let normalized = label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let Some(token) = number_pattern().find(&normalized) else {
        return Decimal::ZERO;
    };

    // Labels write decimals either way: "1,5 Miliar" or "1.5 Miliar".
    let Ok(base) = token.as_str().replace(',', ".").parse::<Decimal>() else {
        return Decimal::ZERO;
    };

    let scale = if normalized.contains("miliar") {
        dec!(1_000_000_000)
    } else {
        dec!(1_000_000)
    };

    round_unit(base * scale)
}
