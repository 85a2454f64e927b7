use serde::{Deserialize, Serialize};

use famfin_core::ValueObject;

use crate::rates::RateTable;

/// An integer amount in a currency.
///
/// Immutable: arithmetic and conversion return new values. The currency code
/// is always stored upper-cased and is not otherwise validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoneyRepr")]
pub struct Money {
    amount: i64,
    currency: String,
}

#[derive(Deserialize)]
struct MoneyRepr {
    amount: i64,
    currency: String,
}

impl From<MoneyRepr> for Money {
    fn from(repr: MoneyRepr) -> Self {
        Money::new(repr.amount, repr.currency)
    }
}

impl ValueObject for Money {}

impl Money {
    pub fn new(amount: i64, currency: impl AsRef<str>) -> Self {
        Self {
            amount,
            currency: currency.as_ref().to_uppercase(),
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Convert into `target` using the standard rate table.
    ///
    /// If either currency is missing from the table the result is zero in
    /// `target`. Fractional results are truncated toward zero.
    pub fn convert(&self, target: &str) -> Money {
        self.convert_with(RateTable::standard(), target)
    }

    /// Convert into `target` using a caller-supplied rate table.
    pub fn convert_with(&self, rates: &RateTable, target: &str) -> Money {
        let target = target.to_uppercase();
        let (Some(from), Some(to)) = (rates.rate(&self.currency), rates.rate(&target)) else {
            tracing::debug!(
                from = %self.currency,
                to = %target,
                amount = self.amount,
                "no exchange rate, converting to zero"
            );
            return Money::new(0, target);
        };

        if self.currency == target {
            return self.clone();
        }

        let usd = self.amount as f64 / from;
        // `as` truncates toward zero and saturates at the i64 bounds.
        let converted = (usd * to) as i64;
        Money {
            amount: converted,
            currency: target,
        }
    }

    /// Sum with `other`.
    ///
    /// With differing currencies, `self` is converted into `other`'s currency
    /// first and the result is in `other`'s currency.
    pub fn add(&self, other: &Money) -> Money {
        self.combine(other, i64::saturating_add)
    }

    /// Difference with `other`; may be negative. Currency handling as in
    /// [`Money::add`].
    pub fn subtract(&self, other: &Money) -> Money {
        self.combine(other, i64::saturating_sub)
    }

    fn combine(&self, other: &Money, op: fn(i64, i64) -> i64) -> Money {
        let lhs = if self.currency == other.currency {
            self.amount
        } else {
            self.convert(&other.currency).amount
        };
        Money {
            amount: op(lhs, other.amount),
            currency: other.currency.clone(),
        }
    }
}

impl core::ops::Add<&Money> for &Money {
    type Output = Money;

    fn add(self, rhs: &Money) -> Money {
        Money::add(self, rhs)
    }
}

impl core::ops::Sub<&Money> for &Money {
    type Output = Money;

    fn sub(self, rhs: &Money) -> Money {
        Money::subtract(self, rhs)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KNOWN: [&str; 4] = ["USD", "GBP", "EUR", "CAN"];

    #[test]
    fn currency_is_upper_cased() {
        let m = Money::new(5, "eur");
        assert_eq!(m.currency(), "EUR");
        assert_eq!(m.amount(), 5);
        assert_eq!(Money::new(1, "zzz").currency(), "ZZZ");
    }

    #[test]
    fn usd_converts_through_fixed_rates() {
        let usd = Money::new(100, "USD");
        assert_eq!(usd.convert("EUR"), Money::new(150, "EUR"));
        assert_eq!(usd.convert("GBP"), Money::new(50, "GBP"));
        assert_eq!(usd.convert("can"), Money::new(125, "CAN"));
    }

    #[test]
    fn converts_back_into_usd() {
        assert_eq!(Money::new(150, "EUR").convert("USD").amount(), 100);
        assert_eq!(Money::new(125, "CAN").convert("USD").amount(), 100);
        assert_eq!(Money::new(50, "GBP").convert("EUR").amount(), 150);
    }

    #[test]
    fn conversion_truncates_toward_zero() {
        assert_eq!(Money::new(3, "USD").convert("GBP").amount(), 1);
        assert_eq!(Money::new(-3, "USD").convert("GBP").amount(), -1);
        assert_eq!(Money::new(1, "GBP").convert("CAN").amount(), 2);
    }

    #[test]
    fn unknown_currency_converts_to_zero() {
        let from_unknown = Money::new(10, "ZZZ").convert("USD");
        assert_eq!(from_unknown, Money::new(0, "USD"));

        let to_unknown = Money::new(10, "USD").convert("yen");
        assert_eq!(to_unknown, Money::new(0, "YEN"));

        // Unknown to itself still has no rate.
        assert_eq!(Money::new(10, "ZZZ").convert("zzz"), Money::new(0, "ZZZ"));
    }

    #[test]
    fn convert_with_custom_table() {
        let rates = RateTable::new().with_rate("USD", 1.0).with_rate("JPY", 150.0);
        assert_eq!(
            Money::new(2, "USD").convert_with(&rates, "jpy"),
            Money::new(300, "JPY")
        );
        assert_eq!(Money::new(2, "USD").convert_with(&rates, "EUR").amount(), 0);
    }

    #[test]
    fn add_with_mixed_currencies_converts_self_into_other() {
        let sum = Money::new(100, "USD").add(&Money::new(10, "GBP"));
        assert_eq!(sum, Money::new(60, "GBP"));

        let reversed = Money::new(10, "GBP").add(&Money::new(100, "USD"));
        assert_eq!(reversed, Money::new(120, "USD"));
    }

    #[test]
    fn subtract_with_mixed_currencies_may_go_negative() {
        let diff = Money::new(100, "usd").subtract(&Money::new(10, "EUR"));
        assert_eq!(diff, Money::new(140, "EUR"));

        let negative = Money::new(10, "USD").subtract(&Money::new(100, "GBP"));
        assert_eq!(negative, Money::new(-95, "GBP"));
    }

    #[test]
    fn add_with_unknown_currency_uses_zero_for_self() {
        let sum = Money::new(500, "ZZZ").add(&Money::new(7, "USD"));
        assert_eq!(sum, Money::new(7, "USD"));
    }

    #[test]
    fn operators_match_named_methods() {
        let a = Money::new(100, "USD");
        let b = Money::new(10, "GBP");
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, a.subtract(&b));
    }

    #[test]
    fn operations_leave_operands_untouched() {
        let a = Money::new(100, "USD");
        let _ = a.add(&Money::new(1, "USD"));
        let _ = a.convert("EUR");
        assert_eq!(a, Money::new(100, "USD"));
    }

    #[test]
    fn displays_amount_then_code() {
        assert_eq!(Money::new(-42, "cad").to_string(), "-42 CAD");
    }

    #[test]
    fn deserializing_upper_cases_currency() {
        let m: Money = serde_json::from_str(r#"{"amount": 12, "currency": "gbp"}"#).unwrap();
        assert_eq!(m, Money::new(12, "GBP"));
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"amount":12,"currency":"GBP"}"#
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: converting into the same known currency is exact.
        #[test]
        fn same_currency_conversion_is_exact(
            amount in -1_000_000_000_000i64..1_000_000_000_000i64,
            idx in 0usize..KNOWN.len(),
        ) {
            let code = KNOWN[idx];
            let m = Money::new(amount, code);
            prop_assert_eq!(m.convert(&code.to_lowercase()), m);
        }

        /// Property: matching currencies behave as plain integer arithmetic.
        #[test]
        fn matching_currency_arithmetic_is_integer_arithmetic(
            a in -1_000_000_000i64..1_000_000_000i64,
            b in -1_000_000_000i64..1_000_000_000i64,
            code in "[A-Za-z]{3}",
        ) {
            let lhs = Money::new(a, &code);
            let rhs = Money::new(b, &code);
            let sum = lhs.add(&rhs);
            let diff = lhs.subtract(&rhs);
            prop_assert_eq!(sum.amount(), a + b);
            prop_assert_eq!(diff.amount(), a - b);
            prop_assert_eq!(sum.currency(), code.to_uppercase());
            prop_assert_eq!(diff.currency(), code.to_uppercase());
        }

        /// Property: unknown source currencies always convert to zero.
        #[test]
        fn unknown_source_converts_to_zero(
            amount in any::<i64>(),
            idx in 0usize..KNOWN.len(),
        ) {
            let converted = Money::new(amount, "XXX").convert(KNOWN[idx]);
            prop_assert_eq!(converted.amount(), 0);
            prop_assert_eq!(converted.currency(), KNOWN[idx]);
        }
    }
}
