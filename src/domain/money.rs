use std::str::FromStr;

use rust_decimal::Decimal;

/// Currency amount held by an account or entered at a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    pub const DISPLAY_DECIMALS: u32 = 2;

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// True when the amount carries more fractional digits than are displayed.
    pub fn has_sub_cent_digits(&self) -> bool {
        self.0.normalize().scale() > Self::DISPLAY_DECIMALS
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Parses a plain decimal token such as `100` or `12.50`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        // digit separators are not valid amounts at the prompt
        if s.is_empty() || s.contains('_') {
            return None;
        }
        Decimal::from_str(s).ok().map(Money)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rounded = self.0.round_dp(Self::DISPLAY_DECIMALS);
        write!(f, "{:.2}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn parses_integers_and_fractions() {
        assert_eq!(Money::parse("100").unwrap().to_string(), "100.00");
        assert_eq!(Money::parse(" 12.5 ").unwrap().to_string(), "12.50");
        assert_eq!(Money::parse("-3").unwrap().to_string(), "-3.00");
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(Money::parse("abc").is_none());
        assert!(Money::parse("").is_none());
        assert!(Money::parse("1.2.3").is_none());
        assert!(Money::parse("1_000").is_none());
        assert!(Money::parse("_5").is_none());
    }

    #[test]
    fn display_rounds_to_cents() {
        assert_eq!(Money::parse("0.125").unwrap().to_string(), "0.12");
        assert_eq!(Money::parse("0.135").unwrap().to_string(), "0.14");
    }

    #[test]
    fn sub_cent_digits_are_detected() {
        assert!(Money::parse("0.001").unwrap().has_sub_cent_digits());
        assert!(Money::parse("12.345").unwrap().has_sub_cent_digits());
        assert!(!Money::parse("12.34").unwrap().has_sub_cent_digits());
        assert!(!Money::parse("12.300").unwrap().has_sub_cent_digits());
        assert!(!Money::parse("100").unwrap().has_sub_cent_digits());
    }

    #[test]
    fn positivity_excludes_zero() {
        assert!(Money::parse("0.01").unwrap().is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::parse("-0").unwrap().is_positive());
        assert!(!Money::parse("-5").unwrap().is_positive());
    }

    #[test]
    fn decimal_arithmetic_has_no_drift() {
        let tenth = Money::parse("0.1").unwrap();
        let sum = tenth.checked_add(Money::parse("0.2").unwrap()).unwrap();
        assert_eq!(sum, Money::parse("0.3").unwrap());
    }
}
