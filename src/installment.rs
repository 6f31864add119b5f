//! Fixed monthly installment of an amortizing loan (Price table).
//!
//! The formula is `PMT = P * i(1 + i)^n / ((1 + i)^n - 1)` with
//! `i = annual_rate_percent / 100 / 12` and `n = tenor_years * 12`.
//! The denominator vanishes when the rate is zero, so non-positive
//! principal, rate, or term all short-circuit to a zero installment
//! instead of producing an error or a non-finite value.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::cost::round_unit;

/// Payment details for a single month of the loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayment {
    /// Remaining balance after this month's payment, floored at zero.
    pub balance: Decimal,
    /// Portion of the payment reducing the principal.
    pub amortization: Decimal,
    /// Portion of the payment covering interest.
    pub interest: Decimal,
}

/// Computes the fixed monthly payment, rounded to the whole currency unit.
///
/// Returns `0` when `principal <= 0`, `tenor_years == 0`, or
/// `annual_rate_percent <= 0`.
pub fn monthly_installment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenor_years: u32,
) -> Decimal {
    match fixed_payment(principal, annual_rate_percent, tenor_years) {
        Some((payment, _, _)) => round_unit(payment),
        None => Decimal::ZERO,
    }
}

/// Computes the month-by-month amortization curve behind the fixed payment.
///
/// Entries are rounded to whole currency units for display; the running
/// balance is carried unrounded so the final entry reaches zero. Empty under
/// the same guard conditions as [`monthly_installment`].
pub fn installment_schedule(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenor_years: u32,
) -> Vec<MonthlyPayment> {
    let Some((payment, monthly_rate, total_months)) =
        fixed_payment(principal, annual_rate_percent, tenor_years)
    else {
        return Vec::new();
    };

    let mut balance = principal;
    let mut curve = Vec::with_capacity(total_months as usize);

    for _ in 0..total_months {
        let interest = balance * monthly_rate;
        let amortization = payment - interest;
        balance -= amortization;
        curve.push(MonthlyPayment {
            balance: round_unit(balance.max(Decimal::ZERO)),
            amortization: round_unit(amortization),
            interest: round_unit(interest),
        });
    }

    curve
}

/// Unrounded fixed payment with the derived rate and term, or `None` when
/// the inputs fall under the zero guard.
fn fixed_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenor_years: u32,
) -> Option<(Decimal, Decimal, u32)> {
    let monthly_rate = annual_rate_percent / dec!(100) / dec!(12);
    let total_months = tenor_years * 12;

    if principal <= Decimal::ZERO || total_months == 0 || monthly_rate <= Decimal::ZERO {
        return None;
    }

    let growth = (dec!(1) + monthly_rate).powu(total_months.into());
    let payment = principal * monthly_rate * growth / (growth - dec!(1));

    Some((payment, monthly_rate, total_months))
}
