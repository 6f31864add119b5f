//! Resolution of effective financing terms for a listing.
//!
//! A listing may carry a partial financing record, or none at all. Every
//! field falls back independently to the defaults of the call site, so a
//! record that only overrides the interest rate still resolves completely.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::property::Financing;

/// Fallback financing terms of one call site.
///
/// The catalog modal and the property card historically ship different
/// defaults; both profiles are kept as plain values so either view wires
/// the same resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermDefaults {
    /// Down-payment percentage of the financed base.
    pub dp_percent: Decimal,
    /// Loan term in years.
    pub tenor_years: u32,
    /// Years during which the interest rate is held fixed.
    pub fixed_years: u32,
    /// Annual interest rate as a percentage.
    pub interest_rate: Decimal,
    /// Value-added tax percentage applied to the listing price.
    pub ppn_percent: Decimal,
    /// Fixed reservation fee credited against the down payment.
    pub booking_fee: Decimal,
}

impl TermDefaults {
    /// Defaults of the catalog detail/modal view.
    pub fn catalog() -> Self {
        Self {
            dp_percent: dec!(10),
            tenor_years: 20,
            fixed_years: 3,
            interest_rate: dec!(7),
            ppn_percent: dec!(11),
            booking_fee: dec!(15_000_000),
        }
    }

    /// Defaults of the property card view.
    pub fn card() -> Self {
        Self {
            dp_percent: dec!(5),
            tenor_years: 20,
            fixed_years: 1,
            interest_rate: dec!(5),
            ppn_percent: dec!(11),
            booking_fee: dec!(0),
        }
    }
}

/// Concrete financing terms after resolution, ready for the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingTerms {
    pub dp_percent: Decimal,
    pub tenor_years: u32,
    pub fixed_years: u32,
    pub interest_rate: Decimal,
    pub ppn_percent: Decimal,
    pub booking_fee: Decimal,
}

impl FinancingTerms {
    /// Resolves the effective terms of a listing.
    ///
    /// Each field falls back to `defaults` on its own; an absent financing
    /// record resolves to the defaults wholesale. User-editable percentages
    /// are clamped to `[0, 100]`. Never fails.
    pub fn resolve(financing: Option<&Financing>, defaults: &TermDefaults) -> Self {
        let field = |pick: fn(&Financing) -> Option<Decimal>, fallback: Decimal| {
            financing.and_then(pick).unwrap_or(fallback)
        };

        Self {
            dp_percent: clamp_percent(field(|f| f.dp_percent, defaults.dp_percent)),
            tenor_years: financing
                .and_then(|f| f.tenor_years)
                .unwrap_or(defaults.tenor_years),
            fixed_years: financing
                .and_then(|f| f.fixed_years)
                .unwrap_or(defaults.fixed_years),
            interest_rate: field(|f| f.interest_rate, defaults.interest_rate),
            ppn_percent: clamp_percent(field(|f| f.ppn_percent, defaults.ppn_percent)),
            booking_fee: field(|f| f.booking_fee, defaults.booking_fee),
        }
    }
}

fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}
