//! Properties that hold for all fractions, checked on generated values.
use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;
use rust_decimal::Decimal;

use exact_fraction::{Fraction, RoundingMode, round};

fn fraction() -> impl Strategy<Value = Fraction> {
    (any::<i64>(), any::<i64>().prop_filter("nonzero denominator", |d| *d != 0))
        .prop_map(|(numerator, denominator)| Fraction::new(numerator, denominator).unwrap())
}

fn nonzero_fraction() -> impl Strategy<Value = Fraction> {
    fraction().prop_filter("nonzero value", |f| !f.is_zero())
}

/// A decimal with at most eighteen digits, of which at most eight after the point.
fn decimal() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000_000_000_i64..1_000_000_000_000_000_000, 0_u32..=8)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn power_of_ten(exponent: u32) -> BigInt {
    BigInt::from(10).pow(exponent)
}

proptest! {
    #[test]
    fn canonical_form(numerator in any::<i64>(), denominator in any::<i64>().prop_filter("nonzero", |d| *d != 0)) {
        let value = Fraction::new(numerator, denominator).unwrap();
        let (n, d) = value.clone().into_parts();

        prop_assert!(d.is_positive());
        prop_assert!(d.is_one() || n.gcd(&d).is_one());
        if numerator == 0 {
            prop_assert!(d.is_one());
        }
        prop_assert_eq!(
            BigInt::from(numerator) * &d,
            BigInt::from(denominator) * &n,
        );
    }

    #[test]
    fn text_round_trip(value in fraction()) {
        let text = value.to_string();
        prop_assert_eq!(text.parse::<Fraction>(), Ok(value));
    }

    #[test]
    fn additive(value in fraction(), other in fraction()) {
        prop_assert_eq!(&value + Fraction::zero(), value.clone());
        prop_assert_eq!(&value + -&value, Fraction::zero());
        prop_assert_eq!(&value + &other, &other + &value);
        prop_assert_eq!(&value - &other, -(&other - &value));
        prop_assert_eq!((&value + &other) - &other, value);
    }

    #[test]
    fn multiplicative(value in nonzero_fraction(), other in nonzero_fraction()) {
        prop_assert_eq!(&value * Fraction::one(), value.clone());
        prop_assert_eq!(&value * value.invert().unwrap(), Fraction::one());
        prop_assert_eq!(&value * &other, &other * &value);
        prop_assert_eq!(value.checked_div(&other).unwrap() * &other, value);
    }

    #[test]
    fn increment_matches_addition(value in fraction(), n in any::<i32>()) {
        prop_assert_eq!(value.increment_by(n), &value + Fraction::from(n));
        prop_assert_eq!(value.decrement_by(n), &value - Fraction::from(n));
    }

    #[test]
    fn trichotomy(value in fraction(), other in fraction()) {
        let holding = [value < other, value == other, value > other]
            .into_iter()
            .filter(|holds| *holds)
            .count();
        prop_assert_eq!(holding, 1);

        let expected = match (&other - &value).sign() {
            1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        };
        prop_assert_eq!(value.cmp(&other), expected);
    }

    #[test]
    fn decimal_agreement(left in decimal(), right in decimal()) {
        let (a, b) = (Fraction::from(left), Fraction::from(right));

        prop_assert_eq!(a.to_decimal(), Ok(left));
        prop_assert_eq!(a.cmp(&b), left.cmp(&right));
        prop_assert_eq!((&a + &b).to_decimal(), Ok(left + right));
    }

    #[test]
    fn floor_and_remainder(value in fraction()) {
        let floor = value.floor();
        let ceiling = value.ceil();
        prop_assert!(floor <= value && value < floor.increment());
        prop_assert!(ceiling >= value && value > ceiling.decrement());

        let (quotient, remainder) = value.quotient_and_remainder();
        prop_assert!(quotient.is_whole());
        prop_assert!(remainder.abs() < Fraction::one());
        prop_assert_eq!(quotient + remainder, value);
    }

    #[test]
    fn logarithmic_fallback(
        numerator in 1_i64..1_000_000,
        denominator in 1_i64..1_000_000,
        extra in 0_u32..200,
        negative in any::<bool>(),
    ) {
        // Both parts are far beyond the range of an f64, their quotient is not.
        let scale = power_of_ten(320 + extra);
        let signed = if negative { -numerator } else { numerator };
        let value = Fraction::new(BigInt::from(signed) * &scale, BigInt::from(denominator) * &scale + 1).unwrap();

        let expected = signed as f64 / denominator as f64;
        let converted = value.to_f64();
        prop_assert!(converted.is_finite());
        prop_assert_eq!(converted.is_sign_negative(), negative);
        prop_assert!(((converted - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn rounding_bounds(value in decimal(), digits in 0_u32..6) {
        let unit = Decimal::new(1, digits);
        let half = unit / Decimal::from(2);

        for mode in RoundingMode::ALL {
            let rounded = round(value, digits, mode).unwrap();
            prop_assert!((rounded - value).abs() < unit);
            prop_assert!((rounded * Decimal::from(10_i64.pow(digits))).fract().is_zero());

            match mode {
                RoundingMode::Ceiling => prop_assert!(rounded >= value),
                RoundingMode::Floor => prop_assert!(rounded <= value),
                RoundingMode::Up => prop_assert!(rounded.abs() >= value.abs()),
                RoundingMode::Down => prop_assert!(rounded.abs() <= value.abs()),
                _ => prop_assert!((rounded - value).abs() <= half),
            }
        }
    }
}
