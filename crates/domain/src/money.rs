// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

/// A non-negative monetary amount held as whole cents.
///
/// Amounts are rendered with exactly two decimals (`170.00`) and serialized
/// as that string, matching the stored ledger format. Deserialization also
/// accepts a bare JSON number so catalog files can write `"price": 85`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct Money {
    cents: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Text(String),
    Number(f64),
}

impl Money {
    /// Creates an amount from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self {
            cents: units.saturating_mul(100),
        }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Parses a positive decimal amount such as `"85"` or `"85.5"`.
    ///
    /// Surrounding whitespace is ignored. Values are rounded to the nearest
    /// cent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is not a finite
    /// number, is not positive, or rounds to zero cents.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let parsed: f64 = value
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidPrice {
                value: value.to_string(),
            })?;

        Self::from_decimal(parsed).ok_or_else(|| DomainError::InvalidPrice {
            value: value.to_string(),
        })
    }

    /// Converts a decimal amount to cents, rejecting non-finite, non-positive,
    /// and sub-cent values.
    fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let cents: u64 = (value * 100.0).round().to_u64()?;
        if cents == 0 {
            return None;
        }
        Some(Self { cents })
    }

    /// Multiplies the amount by a whole quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not fit.
    pub fn checked_mul(self, quantity: u32) -> Result<Self, DomainError> {
        self.cents
            .checked_mul(u64::from(quantity))
            .map(Self::from_cents)
            .ok_or_else(|| DomainError::PriceArithmeticOverflow {
                operation: format!("multiplying {self} by {quantity}"),
            })
    }

    /// Renders the amount with trailing fractional zeros dropped: `85`,
    /// `85.5`, `85.05`. Used for catalog prices shown to guests.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        let units: u64 = self.cents / 100;
        let fraction: u64 = self.cents % 100;
        if fraction == 0 {
            format!("{units}")
        } else if fraction % 10 == 0 {
            format!("{units}.{}", fraction / 10)
        } else {
            format!("{units}.{fraction:02}")
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed: Result<Self, DomainError> = match MoneyRepr::deserialize(deserializer)? {
            MoneyRepr::Text(text) => Self::parse(&text),
            MoneyRepr::Number(number) => {
                Self::from_decimal(number).ok_or_else(|| DomainError::InvalidPrice {
                    value: number.to_string(),
                })
            }
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
