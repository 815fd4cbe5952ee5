use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::shared::validation::FieldViolation;

/// Decimal places kept on a converted price.
pub const CONVERTED_PRICE_SCALE: u32 = 2;

/// ISO-4217 style code: three ASCII letters, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(raw: &str) -> Result<Self, FieldViolation> {
        let code = raw.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FieldViolation::new(
                "currencyCode",
                "The currency code must have exactly three letters (e.g. USD)",
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product price expressed in another currency. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuotation {
    pub product_id: i64,
    pub product_name: String,
    pub original_price: Decimal,
    pub converted_price: Decimal,
    pub currency_code: CurrencyCode,
}

/// Multiplies `price` by `rate`, rounding half away from zero to
/// `CONVERTED_PRICE_SCALE` places. Returns `None` on overflow.
pub fn convert_price(price: Decimal, rate: Decimal) -> Option<Decimal> {
    price.checked_mul(rate).map(|amount| {
        amount.round_dp_with_strategy(
            CONVERTED_PRICE_SCALE,
            RoundingStrategy::MidpointAwayFromZero,
        )
    })
}
