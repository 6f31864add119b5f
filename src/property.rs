//! Read model of a listed property, limited to the attributes the financing
//! calculators consume. The persistence layer owns the full record; this
//! model only rides along on the wire format.

use anyhow::Context as _;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cost::{cost_breakdown, CostBreakdown, DownPaymentBase};
use crate::installment::monthly_installment;
use crate::terms::{FinancingTerms, TermDefaults};

/// A listed property as the catalog API serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Base listing price in whole currency units.
    pub price: Decimal,

    /// Financing record set by an administrator, absent on most listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<Financing>,

    /// Listing status; only for-sale listings show a financing panel.
    pub status: ListingStatus,
}

/// Embedded financing record of a listing. Every field is optional so the
/// resolver can fall back per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Financing {
    pub dp_percent: Option<Decimal>,
    pub tenor_years: Option<u32>,
    pub fixed_years: Option<u32>,
    pub interest_rate: Option<Decimal>,
    pub ppn_percent: Option<Decimal>,
    pub booking_fee: Option<Decimal>,
}

/// Status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// For sale ("dijual").
    #[serde(rename = "dijual")]
    ForSale,

    /// For rent ("disewakan").
    #[serde(rename = "disewakan")]
    ForRent,

    /// Already sold ("terjual").
    #[serde(rename = "terjual")]
    Sold,
}

/// Fully derived financing view of one listing: resolved terms, cost
/// breakdown, and the monthly installment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingQuote {
    pub terms: FinancingTerms,
    pub costs: CostBreakdown,
    pub installment: Decimal,
}

impl Property {
    /// Deserializes a property record from the catalog API's JSON.
    pub fn from_json(payload: &str) -> Result<Self, anyhow::Error> {
        serde_json::from_str(payload).context("invalid property record")
    }

    /// Whether this listing displays a financing panel.
    pub fn offers_financing(&self) -> bool {
        self.status == ListingStatus::ForSale
    }

    /// Resolves terms and derives the full financing quote in one call.
    pub fn quote(&self, defaults: &TermDefaults, dp_base: DownPaymentBase) -> FinancingQuote {
        let terms = FinancingTerms::resolve(self.financing.as_ref(), defaults);
        let costs = cost_breakdown(self.price, &terms, dp_base);
        let installment =
            monthly_installment(costs.principal, terms.interest_rate, terms.tenor_years);

        FinancingQuote {
            terms,
            costs,
            installment,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn deserializes_a_bare_listing() {
        let property =
            Property::from_json(r#"{"price": 350000000, "status": "dijual"}"#).unwrap();

        assert_eq!(property.price, dec!(350_000_000));
        assert!(property.financing.is_none());
        assert!(property.offers_financing());
    }

    #[test]
    fn deserializes_an_embedded_financing_record() {
        let property = Property::from_json(
            r#"{
                "price": 350000000,
                "status": "dijual",
                "financing": {"dpPercent": 15, "interestRate": 6.5}
            }"#,
        )
        .unwrap();

        let financing = property.financing.unwrap();
        assert_eq!(financing.dp_percent, Some(dec!(15)));
        assert_eq!(financing.interest_rate, Some(dec!(6.5)));
        assert_eq!(financing.tenor_years, None);
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(Property::from_json(r#"{"status": "dijual"}"#).is_err());
        assert!(Property::from_json("not json").is_err());
    }

    #[test]
    fn only_for_sale_listings_offer_financing() {
        for (status, expected) in [
            (ListingStatus::ForSale, true),
            (ListingStatus::ForRent, false),
            (ListingStatus::Sold, false),
        ] {
            let property = Property {
                price: dec!(100_000_000),
                financing: None,
                status,
            };
            assert_eq!(property.offers_financing(), expected);
        }
    }

    #[test]
    fn quote_wires_resolver_breakdown_and_installment() {
        let property = Property {
            price: dec!(350_000_000),
            financing: None,
            status: ListingStatus::ForSale,
        };

        let quote = property.quote(&TermDefaults::catalog(), DownPaymentBase::PriceWithTax);

        assert_eq!(quote.costs.principal, dec!(349_650_000));
        assert_eq!(
            quote.installment,
            monthly_installment(dec!(349_650_000), dec!(7), 20),
        );
    }

    #[test]
    fn property_round_trips_through_json() {
        let property = Property {
            price: dec!(350_000_000),
            financing: Some(Financing {
                dp_percent: Some(dec!(10)),
                ..Financing::default()
            }),
            status: ListingStatus::ForSale,
        };

        let payload = serde_json::to_string(&property).unwrap();
        assert_eq!(Property::from_json(&payload).unwrap(), property);
    }
}
