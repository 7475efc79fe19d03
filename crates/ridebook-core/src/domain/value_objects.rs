//! Small immutable values used around fares.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Fixed price per kilometre, currency-agnostic.
pub const RATE_PER_KM: f64 = 2.5;

/// A fare amount. Derived on demand, never stored on a ride.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Fare(f64);

impl Fare {
    /// `distance_km * RATE_PER_KM`, with no guard on the sign of the input.
    pub fn for_distance(distance_km: f64) -> Self {
        Self(distance_km * RATE_PER_KM)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Two decimal places behind a currency prefix, e.g. `R$ 25.00`.
    pub fn display_with(self, currency_prefix: &str) -> String {
        if currency_prefix.is_empty() {
            format!("{:.2}", self.0)
        } else {
            format!("{currency_prefix} {:.2}", self.0)
        }
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A distance typed in by the operator.
///
/// Invariant: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Distance(f64);

impl Distance {
    pub fn new(km: f64) -> Result<Self, DomainError> {
        if km.is_finite() && km > 0.0 {
            Ok(Self(km))
        } else {
            Err(DomainError::InvalidDistance)
        }
    }

    /// Parse operator input. Surrounding whitespace is ignored; anything
    /// that is not a plain number is rejected.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        input.parse()
    }

    pub fn km(self) -> f64 {
        self.0
    }

    pub fn fare(self) -> Fare {
        Fare::for_distance(self.0)
    }
}

impl FromStr for Distance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let km: f64 = s.trim().parse().map_err(|_| DomainError::InvalidDistance)?;
        Self::new(km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_formula() {
        assert_eq!(Fare::for_distance(10.0).amount(), 25.0);
        assert_eq!(Fare::for_distance(0.0).amount(), 0.0);
        assert_eq!(Fare::for_distance(-2.0).amount(), -5.0);
    }

    #[test]
    fn fare_display_has_two_decimals() {
        assert_eq!(Fare::for_distance(10.0).display_with("R$"), "R$ 25.00");
        assert_eq!(Fare::for_distance(1.2).display_with("$"), "$ 3.00");
        assert_eq!(Fare::for_distance(3.0).display_with(""), "7.50");
        assert_eq!(Fare::for_distance(3.0).to_string(), "7.50");
    }

    #[test]
    fn distance_accepts_positive_numbers() {
        assert_eq!(Distance::parse("10").unwrap().km(), 10.0);
        assert_eq!(Distance::parse(" 2.5 ").unwrap().km(), 2.5);
        assert_eq!(Distance::parse("1e1").unwrap().fare().amount(), 25.0);
    }

    #[test]
    fn distance_rejects_bad_input() {
        for input in ["", "   ", "abc", "0", "-3", "0.0", "NaN", "inf", "12km"] {
            assert_eq!(
                Distance::parse(input),
                Err(DomainError::InvalidDistance),
                "accepted: {input:?}"
            );
        }
    }
}
