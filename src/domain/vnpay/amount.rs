//! Monetary amounts in the gateway's hundredths unit.

use std::fmt;

/// Gateway units per major currency unit.
pub const GATEWAY_SCALE: u64 = 100;

/// Largest minor-unit value that round-trips exactly through an `f64`.
const MAX_EXACT_MINOR: f64 = 9_007_199_254_740_991.0;

/// A strictly positive amount, stored in gateway units (major × 100).
///
/// VND has no minor unit of its own; the ×100 scaling is the gateway's
/// wire convention, so `vnp_Amount=25000000` means 250 000 VND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    minor: u64,
}

impl Amount {
    /// Whole major units. `None` for zero or overflow.
    pub fn from_major(major: u64) -> Option<Self> {
        major
            .checked_mul(GATEWAY_SCALE)
            .and_then(Self::from_gateway_units)
    }

    /// Major units as a decimal with at most two fractional digits.
    ///
    /// Rejects zero, negatives, NaN, infinities and values with more
    /// precision than the gateway can carry.
    pub fn from_decimal(major: f64) -> Option<Self> {
        if !major.is_finite() || major <= 0.0 {
            return None;
        }

        let scaled = major * GATEWAY_SCALE as f64;
        let rounded = scaled.round();
        if rounded > MAX_EXACT_MINOR || (scaled - rounded).abs() > 1e-6 {
            return None;
        }

        Self::from_gateway_units(rounded as u64)
    }

    /// Raw `vnp_Amount` value. `None` for zero.
    pub fn from_gateway_units(minor: u64) -> Option<Self> {
        (minor > 0).then_some(Self { minor })
    }

    /// Parses the `vnp_Amount` field of a callback.
    pub fn parse_gateway_units(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().and_then(Self::from_gateway_units)
    }

    /// Value sent as `vnp_Amount`.
    pub fn gateway_units(&self) -> u64 {
        self.minor
    }

    /// Value in major currency units.
    pub fn major(&self) -> f64 {
        self.minor as f64 / GATEWAY_SCALE as f64
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.minor / GATEWAY_SCALE;
        let fraction = self.minor % GATEWAY_SCALE;
        if fraction == 0 {
            write!(f, "{}", whole)
        } else {
            write!(f, "{}.{:02}", whole, fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_units_scale_by_one_hundred() {
        let amount = Amount::from_major(250_000).unwrap();
        assert_eq!(amount.gateway_units(), 25_000_000);
        assert_eq!(amount.major(), 250_000.0);
    }

    #[test]
    fn decimal_with_two_places_is_accepted() {
        let amount = Amount::from_decimal(10.55).unwrap();
        assert_eq!(amount.gateway_units(), 1055);
    }

    #[test]
    fn decimal_with_three_places_is_rejected() {
        assert!(Amount::from_decimal(10.555).is_none());
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert!(Amount::from_major(0).is_none());
        assert!(Amount::from_decimal(0.0).is_none());
        assert!(Amount::from_decimal(-5.0).is_none());
        assert!(Amount::from_decimal(f64::NAN).is_none());
        assert!(Amount::from_decimal(f64::INFINITY).is_none());
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(Amount::from_major(u64::MAX).is_none());
        assert!(Amount::from_decimal(1e300).is_none());
    }

    #[test]
    fn parses_callback_amount() {
        assert_eq!(
            Amount::parse_gateway_units("25000000"),
            Amount::from_major(250_000)
        );
        assert!(Amount::parse_gateway_units("").is_none());
        assert!(Amount::parse_gateway_units("12.5").is_none());
        assert!(Amount::parse_gateway_units("-100").is_none());
    }

    #[test]
    fn display_omits_zero_fraction() {
        assert_eq!(Amount::from_major(1500).unwrap().to_string(), "1500");
        assert_eq!(Amount::from_gateway_units(1505).unwrap().to_string(), "15.05");
    }
}
