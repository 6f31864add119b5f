//! Cost breakdown of a financed listing purchase.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::terms::FinancingTerms;

/// Base amount the down payment is computed from.
///
/// The catalog view percentages off the tax-inclusive price, the card view
/// off the raw listing price. The base is an explicit parameter so both
/// call sites share one calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownPaymentBase {
    /// Down payment as a share of `price + ppn_amount`.
    PriceWithTax,
    /// Down payment as a share of the raw listing price.
    ListPrice,
}

/// Upfront and financed amounts of a purchase, in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Value-added tax on the listing price.
    pub ppn_amount: Decimal,
    /// Listing price plus tax.
    pub price_with_tax: Decimal,
    /// Down payment owed upfront.
    pub down_payment: Decimal,
    /// Down payment still due after crediting the booking fee, floored at zero.
    pub remaining_down_payment: Decimal,
    /// Amount left to finance after the down payment.
    pub principal: Decimal,
}

/// Computes the cost breakdown of a listing at `price` under `terms`.
///
/// Total for every `price >= 0`; there is no division, so no failure mode.
/// Every output is rounded to the nearest whole currency unit.
pub fn cost_breakdown(
    price: Decimal,
    terms: &FinancingTerms,
    dp_base: DownPaymentBase,
) -> CostBreakdown {
    let ppn_amount = round_unit(price * terms.ppn_percent / dec!(100));
    let price_with_tax = price + ppn_amount;

    let base = match dp_base {
        DownPaymentBase::PriceWithTax => price_with_tax,
        DownPaymentBase::ListPrice => price,
    };
    let down_payment = round_unit(base * terms.dp_percent / dec!(100));

    CostBreakdown {
        ppn_amount,
        price_with_tax,
        down_payment,
        remaining_down_payment: (down_payment - terms.booking_fee).max(Decimal::ZERO),
        principal: price_with_tax - down_payment,
    }
}

/// Rounds to the nearest whole currency unit, halves away from zero.
pub(crate) fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::terms::TermDefaults;

    fn catalog_terms() -> FinancingTerms {
        FinancingTerms::resolve(None, &TermDefaults::catalog())
    }

    #[test]
    fn catalog_scenario() {
        let costs = cost_breakdown(
            dec!(350_000_000),
            &catalog_terms(),
            DownPaymentBase::PriceWithTax,
        );

        assert_eq!(costs.ppn_amount, dec!(38_500_000));
        assert_eq!(costs.price_with_tax, dec!(388_500_000));
        assert_eq!(costs.down_payment, dec!(38_850_000));
        assert_eq!(costs.remaining_down_payment, dec!(23_850_000));
        assert_eq!(costs.principal, dec!(349_650_000));
    }

    #[test]
    fn card_scenario_takes_dp_off_list_price() {
        let terms = FinancingTerms::resolve(None, &TermDefaults::card());
        let costs = cost_breakdown(dec!(100_000_000), &terms, DownPaymentBase::ListPrice);

        assert_eq!(costs.down_payment, dec!(5_000_000));
        // Card profile carries no booking fee, so nothing is credited.
        assert_eq!(costs.remaining_down_payment, dec!(5_000_000));
    }

    #[test]
    fn price_with_tax_never_drops_below_price() {
        for price in [dec!(0), dec!(1), dec!(999_999), dec!(350_000_000)] {
            let costs =
                cost_breakdown(price, &catalog_terms(), DownPaymentBase::PriceWithTax);
            assert!(costs.price_with_tax >= price);
        }
    }

    #[test]
    fn booking_fee_never_pushes_remaining_dp_negative() {
        // Booking fee exceeds the down payment on a cheap listing.
        let costs = cost_breakdown(
            dec!(10_000_000),
            &catalog_terms(),
            DownPaymentBase::PriceWithTax,
        );

        assert!(costs.down_payment < dec!(15_000_000));
        assert_eq!(costs.remaining_down_payment, dec!(0));
    }

    #[test]
    fn breakdown_is_pure() {
        let terms = catalog_terms();
        let first = cost_breakdown(dec!(350_000_000), &terms, DownPaymentBase::PriceWithTax);
        let second = cost_breakdown(dec!(350_000_000), &terms, DownPaymentBase::PriceWithTax);

        assert_eq!(first, second);
    }

    #[test]
    fn zero_price_yields_all_zeroes() {
        let costs = cost_breakdown(dec!(0), &catalog_terms(), DownPaymentBase::PriceWithTax);

        assert_eq!(costs.ppn_amount, dec!(0));
        assert_eq!(costs.price_with_tax, dec!(0));
        assert_eq!(costs.down_payment, dec!(0));
        assert_eq!(costs.remaining_down_payment, dec!(0));
        assert_eq!(costs.principal, dec!(0));
    }

    #[rstest]
    #[case(dec!(0.4), dec!(0))]
    #[case(dec!(0.5), dec!(1))]
    #[case(dec!(1.5), dec!(2))]
    #[case(dec!(2.5), dec!(3))]
    #[case(dec!(-1.5), dec!(-2))]
    fn rounding_is_half_away_from_zero(#[case] value: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_unit(value), expected);
    }
}
