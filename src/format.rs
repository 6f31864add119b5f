//! Rupiah display formatting for calculator outputs.

use rust_decimal::prelude::ToPrimitive as _;
use rust_decimal::Decimal;

use crate::cost::round_unit;

/// Formats an amount as a thousands-separated rupiah string, e.g.
/// `"Rp388.500.000"`. The amount is rounded to whole units first.
pub fn format_rupiah(amount: Decimal) -> String {
    let units = round_unit(amount).to_i128().unwrap_or_default();
    let sign = if units < 0 { "-" } else { "" };
    let digits = units.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}Rp{grouped}")
}
