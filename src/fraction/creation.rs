//! # Creation
//!
//! Constructing fractions from text, decimals and primitive numbers.
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::error::{ArithmeticError, ArithmeticResult, ParseError};
use crate::fraction::Fraction;
use crate::fraction::parse::{parse_integer, parse_literal};

impl Fraction {
    /// Create a fraction from the text of its numerator and denominator.
    ///
    /// Meant for values that don't fit a primitive integer. Both texts are read as decimal integers
    /// with an optional sign.
    ///
    /// # Errors
    ///
    /// A `Parse` error if either text is not an integer, `DivisionByZero` if the denominator is zero.
    pub fn from_strings(numerator: &str, denominator: &str) -> ArithmeticResult<Self> {
        let numerator = parse_integer(numerator)
            .map_err(|error| ParseError::with_cause("could not read numerator", error))?;
        let denominator = parse_integer(denominator)
            .map_err(|error| ParseError::with_cause("could not read denominator", error))?;

        Self::new(numerator, denominator)
    }

    /// Create the fraction that is exactly equal to a decimal.
    pub fn from_decimal(value: Decimal) -> Self {
        if value.fract().is_zero() {
            // A whole decimal has at most 96 bits, so it always fits.
            if let Some(integer) = value.trunc().to_i128() {
                return Self::from_integer(integer);
            }
        }

        // The mantissa and scale are the digits and the position of the point in its text.
        let denominator = BigInt::from(10).pow(value.scale());
        Self::canonical(BigInt::from(value.mantissa()), denominator)
    }

    /// Create the fraction that is exactly equal to the shortest decimal text that reads back as
    /// the given float.
    ///
    /// Prefer the integer or text constructors; `0.1_f64` yields `1/10`, while the binary value is
    /// slightly different.
    ///
    /// # Errors
    ///
    /// A `Parse` error when the value is not finite.
    pub fn from_f64(value: f64) -> ArithmeticResult<Self> {
        if !value.is_finite() {
            return Err(ParseError::new(format!("{} has no fraction representation", value)).into());
        }

        if value.fract() == 0_f64 {
            // Whole floats are integers exactly, however large.
            if let Some(integer) = BigInt::from_f64(value) {
                return Ok(Self::from_integer(integer));
            }
        }

        parse_literal(&value.to_string())
    }
}

/// Create `numerator / denominator`, reading a zero denominator as zero.
///
/// Use [`Fraction::new`] to have a zero denominator reported instead.
pub fn over(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(numerator, denominator).unwrap_or_else(|_| Fraction::zero())
}

impl FromStr for Fraction {
    type Err = ArithmeticError;

    /// Read either the `numerator/denominator` form written by `Display`, or a decimal literal.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.split_once('/') {
            Some((numerator, denominator)) => Self::from_strings(numerator, denominator),
            None => parse_literal(text),
        }
    }
}

impl From<Decimal> for Fraction {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&Fraction> for Fraction {
    fn from(value: &Fraction) -> Self {
        value.clone()
    }
}

impl TryFrom<f64> for Fraction {
    type Error = ArithmeticError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    /// Reads the shortest text of the `f32` itself, so `0.1_f32` yields `1/10`.
    fn from_f32(n: f32) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        if n.fract() == 0_f32 {
            return BigInt::from_f32(n).map(Self::from_integer);
        }

        parse_literal(&n.to_string()).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_f64(n).ok()
    }
}
