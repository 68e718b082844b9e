//! Monetary amounts held as integer cents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::ModelError;

/// An amount of money in cents.
///
/// Encoded on the wire as a decimal number (`50.5`), summed exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Rounds a decimal amount to the nearest cent.
    #[must_use]
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    #[must_use]
    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.cents < 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.cents > 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.cents = self.cents.saturating_add(rhs.cents);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Formats as `$100.00`, or `-$5.25` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let digits = rest.strip_prefix('$').unwrap_or(rest);
        let value: f64 = digits
            .parse()
            .map_err(|_| ModelError::InvalidAmount(s.to_string()))?;
        if !value.is_finite() {
            return Err(ModelError::InvalidAmount(s.to_string()));
        }
        let money = Money::from_decimal(value);
        Ok(if negative {
            Money::from_cents(-money.cents)
        } else {
            money
        })
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Money::from_decimal(value)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Money::from_cents(10_000).to_string(), "$100.00");
        assert_eq!(Money::from_cents(5_050).to_string(), "$50.50");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::from_cents(-525).to_string(), "-$5.25");
    }

    #[test]
    fn parses_plain_and_dollar_amounts() {
        assert_eq!("50.5".parse::<Money>(), Ok(Money::from_cents(5_050)));
        assert_eq!("$12".parse::<Money>(), Ok(Money::from_cents(1_200)));
        assert!("twelve".parse::<Money>().is_err());
    }

    #[test]
    fn sums_exactly() {
        let total: Money = [0.1, 0.2, 0.7]
            .into_iter()
            .map(Money::from_decimal)
            .sum();
        assert_eq!(total, Money::from_cents(100));
    }

    #[test]
    fn huge_amounts_saturate_instead_of_overflowing() {
        let huge = Money::from_decimal(1e30);
        assert_eq!(huge + huge, Money::from_cents(i64::MAX));

        let mut total = huge;
        total += Money::from_cents(1);
        assert_eq!(total, Money::from_cents(i64::MAX));
    }
}
