use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("name is required".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    const MAX_CENTS: i64 = 100_000_000_000;

    pub fn from_cents(cents: i64) -> DomainResult<Self> {
        if cents < 0 {
            return Err(DomainError::Validation("price cannot be negative".into()));
        }
        if cents > Self::MAX_CENTS {
            return Err(DomainError::Validation("price is out of range".into()));
        }
        Ok(Self(cents))
    }

    /// Converts a two-decimal amount as typed into a form (`12.5` -> 1250 cents).
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::Validation("price must be a number".into()));
        }
        if amount < 0.0 {
            return Err(DomainError::Validation("price cannot be negative".into()));
        }
        let cents = (amount * 100.0).round();
        if cents > Self::MAX_CENTS as f64 {
            return Err(DomainError::Validation("price is out of range".into()));
        }
        Self::from_cents(cents as i64)
    }

    pub fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stock(i32);

impl Stock {
    pub fn new(units: i32) -> DomainResult<Self> {
        if units < 0 {
            Err(DomainError::Validation("stock cannot be negative".into()))
        } else {
            Ok(Self(units))
        }
    }

    pub fn units(self) -> i32 {
        self.0
    }

    pub fn in_stock(self) -> bool {
        self.0 > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_price_rounds_to_cents() {
        assert_eq!(Price::from_decimal(12.5).unwrap().cents(), 1250);
        assert_eq!(Price::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Price::from_decimal(0.0).unwrap().cents(), 0);
    }

    #[test]
    fn negative_or_nan_price_is_rejected() {
        assert!(Price::from_decimal(-0.01).is_err());
        assert!(Price::from_decimal(f64::NAN).is_err());
        assert!(Price::from_cents(-1).is_err());
    }

    #[test]
    fn price_displays_two_decimals() {
        assert_eq!(Price::from_cents(1205).unwrap().to_string(), "12.05");
        assert_eq!(Price::from_cents(7).unwrap().to_string(), "0.07");
    }

    #[test]
    fn stock_must_not_be_negative() {
        assert!(Stock::new(-1).is_err());
        assert!(!Stock::new(0).unwrap().in_stock());
        assert!(Stock::new(3).unwrap().in_stock());
    }
}
