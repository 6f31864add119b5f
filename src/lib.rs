//! `kpr_financing` is a Rust library for calculating real estate listing
//! financing (KPR) in Indonesia.
//!
//! It provides the pure calculation routines a listing catalog needs to show
//! a financing panel for a property:
//! - **Terms resolution**: effective down-payment percent, tenor, fixed-rate
//!   period, interest rate, tax percent and booking fee, with per-field
//!   fallbacks when the listing carries no explicit financing record.
//! - **Cost breakdown**: tax amount, tax-inclusive price, down payment,
//!   remaining down payment after the booking fee, and the principal left
//!   to finance.
//! - **Installment**: the fixed monthly payment of the amortizing loan
//!   (Price table), plus the month-by-month amortization curve.
//! - **Legacy price parsing**: a numeric lower bound extracted from
//!   free-text price labels such as `"300 - 400 Juta"`.
//!
//! ## Usage
//!
//! Add `kpr_financing` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kpr_financing = "0.1.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then resolve the terms for a listing and derive its financing quote:
//!
//! ```rust
//! use kpr_financing::{
//!     cost_breakdown, monthly_installment, DownPaymentBase, FinancingTerms,
//!     TermDefaults,
//! };
//! use rust_decimal_macros::dec;
//!
//! let terms = FinancingTerms::resolve(None, &TermDefaults::catalog());
//! let costs = cost_breakdown(
//!     dec!(350_000_000),
//!     &terms,
//!     DownPaymentBase::PriceWithTax,
//! );
//! assert_eq!(costs.ppn_amount, dec!(38_500_000));
//! assert_eq!(costs.price_with_tax, dec!(388_500_000));
//! assert_eq!(costs.down_payment, dec!(38_850_000));
//! assert_eq!(costs.remaining_down_payment, dec!(23_850_000));
//! assert_eq!(costs.principal, dec!(349_650_000));
//!
//! let installment =
//!     monthly_installment(costs.principal, terms.interest_rate, terms.tenor_years);
//! assert!(installment > dec!(0));
//! ```

mod cost;
mod format;
mod installment;
mod pricing;
mod property;
mod terms;

pub use cost::{cost_breakdown, CostBreakdown, DownPaymentBase};
pub use format::format_rupiah;
pub use installment::{installment_schedule, monthly_installment, MonthlyPayment};
pub use pricing::parse_price_lower_bound;
pub use property::{Financing, FinancingQuote, ListingStatus, Property};
pub use terms::{FinancingTerms, TermDefaults};
