//! Known values, computed through the public interface only.
use std::str::FromStr;

use rust_decimal::Decimal;

use exact_fraction::{ArithmeticError, Fraction, One, Round, RoundingMode, Zero, over, round};

#[test]
fn arithmetic() {
    assert_eq!(Fraction::new(5, 10), Fraction::new(1, 2));
    assert_eq!(over(1, 5) + over(3, 10), over(1, 2));
    assert_eq!(over(1, 3) / over(1, 5), over(5, 3));
    assert_eq!(Fraction::from(5).pow(-1), Ok(over(1, 5)));
    assert!(matches!(Fraction::zero().pow(0), Err(ArithmeticError::Domain(_))));
    assert_eq!(1_i32 - Fraction::from(3), Fraction::from(-2));
    assert_eq!(5_i64 / over(1, 3), Fraction::from(15));
}

#[test]
fn floor() {
    assert_eq!(over(8, 10).floor(), Fraction::zero());
    assert_eq!(over(-8, 10).floor(), Fraction::from(-1));
    assert_eq!(over(-8, 10).int_floor(), Ok(-1));
}

#[test]
fn literals() {
    assert_eq!(Fraction::from_str("0.3"), Ok(over(3, 10)));
    assert_eq!(Fraction::from_str("1"), Ok(Fraction::one()));
    assert_eq!(Fraction::from_str("0.0"), Ok(Fraction::zero()));
    assert_eq!(Fraction::from_str("25E-2"), Ok(over(1, 4)));
    assert!(matches!(Fraction::from_str("25E2"), Err(ArithmeticError::Parse(_))));
    assert_eq!(Fraction::from_f64(45.89), Ok(over(4589, 100)));
    assert_eq!(Fraction::from(Decimal::new(20, 2)), over(1, 5));
}

#[test]
fn rounding() {
    let value = Decimal::from_str("2.135").unwrap();
    assert_eq!(round(value, 2, RoundingMode::HalfUp), Ok(Decimal::from_str("2.14").unwrap()));
    assert_eq!(
        Decimal::from_str("2.131").unwrap().round_to(2, RoundingMode::HalfUp),
        Ok(Decimal::from_str("2.13").unwrap()),
    );
    assert_eq!(
        Decimal::from_str("2.138").unwrap().round_to(2, RoundingMode::HalfUp),
        Ok(Decimal::from_str("2.14").unwrap()),
    );

    let converted = over(2135, 1000).to_f64_rounded(2).unwrap();
    assert!((converted - 2.14).abs() < 1e-12);
}

#[test]
fn undefined_reads_as_zero() {
    let undefined = Fraction::default();
    assert!(undefined.is_undefined());
    assert_eq!(undefined.clone() + Fraction::one(), Fraction::one());
    assert_eq!(undefined.to_decimal(), Ok(Decimal::ZERO));
    assert_eq!(undefined.to_string(), "0/1");
}
