//! Prices in whole currency units.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Unit price of a product, in whole currency units (e.g. pesos).
///
/// Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Price(u32);

impl Price {
    pub fn new(amount: u32) -> Result<Self, DomainError> {
        if amount == 0 {
            return Err(DomainError::validation("price must be positive"));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> u32 {
        self.0
    }

    /// Total for `quantity` units.
    pub fn times(self, quantity: u32) -> u64 {
        u64::from(self.0) * u64::from(quantity)
    }
}

impl ValueObject for Price {}

impl TryFrom<u32> for Price {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for u32 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_rejected() {
        assert_eq!(
            Price::new(0),
            Err(DomainError::validation("price must be positive"))
        );
    }

    #[test]
    fn times_does_not_overflow_u32() {
        let price = Price::new(u32::MAX).unwrap();
        assert_eq!(price.times(2), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn display_uses_dollar_sign() {
        assert_eq!(Price::new(120).unwrap().to_string(), "$120");
    }
}
