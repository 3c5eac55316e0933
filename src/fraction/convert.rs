//! # Conversion to fixed precision
//!
//! Reading a fraction out as a `Decimal` or an `f64`. Both targets have a limited range, while the
//! parts of a fraction do not. When a part doesn't fit, but the value it describes might, the
//! quotient is approximated through logarithms.
use std::f64::consts::LN_2;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ArithmeticError, ArithmeticResult};
use crate::fraction::Fraction;
use crate::rounding::{RoundingMode, round};

impl Fraction {
    /// Convert to the closest `Decimal`.
    ///
    /// Precision is lost when the value has more digits than a `Decimal` can hold, or when the
    /// parts are too large to be widened and the approximation is used.
    ///
    /// # Errors
    ///
    /// `Overflow` when the value itself is outside of the range of a `Decimal`.
    pub fn to_decimal(&self) -> ArithmeticResult<Decimal> {
        let (numerator, denominator) = self.parts();

        if denominator.is_one() {
            return widen_to_decimal(numerator)
                .ok_or(ArithmeticError::Overflow("integer is outside of the decimal range"));
        }
        if numerator.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let exact = widen_to_decimal(numerator)
            .zip(widen_to_decimal(denominator))
            .and_then(|(numerator, denominator)| numerator.checked_div(denominator));

        match exact {
            Some(value) => Ok(value),
            None => {
                debug!(fraction = %self, "parts exceed the decimal range, approximating the quotient");
                Decimal::from_f64(self.logarithmic_quotient())
                    .ok_or(ArithmeticError::Overflow("value is outside of the decimal range"))
            },
        }
    }

    /// Convert to the closest `f64`.
    ///
    /// Values beyond the range of an `f64` become infinite, values too close to zero become zero.
    /// Large parts describing a moderate value are approximated, the result is finite and has the
    /// right sign.
    pub fn to_f64(&self) -> f64 {
        let (numerator, denominator) = self.parts();

        if denominator.is_one() {
            return numerator.to_f64().unwrap_or(f64::NAN);
        }
        if numerator.is_zero() {
            return 0_f64;
        }

        match (numerator.to_f64(), denominator.to_f64()) {
            (Some(numerator), Some(denominator)) if numerator.is_finite() && denominator.is_finite() => {
                numerator / denominator
            },
            _ => {
                debug!(fraction = %self, "parts exceed the f64 range, approximating the quotient");
                self.logarithmic_quotient()
            },
        }
    }

    /// Convert to an `f64` after rounding half away from zero at `digits` decimals.
    ///
    /// # Errors
    ///
    /// `Overflow` when the value can't be represented as a `Decimal`.
    pub fn to_f64_rounded(&self, digits: u32) -> ArithmeticResult<f64> {
        round(self.to_decimal()?, digits, RoundingMode::HalfUp)?
            .to_f64()
            .ok_or(ArithmeticError::Overflow("rounded value is outside of the f64 range"))
    }

    /// Compute `sign · exp(ln|numerator| - ln|denominator|)`.
    ///
    /// Should only be called for a nonzero value.
    fn logarithmic_quotient(&self) -> f64 {
        let (numerator, denominator) = self.parts();
        let magnitude = (ln_magnitude(numerator) - ln_magnitude(denominator)).exp();

        f64::from(self.sign()) * magnitude
    }
}

/// Widen an integer to a `Decimal`, if it fits the 96 bits of its mantissa.
fn widen_to_decimal(value: &BigInt) -> Option<Decimal> {
    value.to_i128().and_then(Decimal::from_i128)
}

/// Natural logarithm of the absolute value of a nonzero integer of any size.
///
/// Only the leading 64 bits are used; the remaining bits contribute a power of two.
fn ln_magnitude(value: &BigInt) -> f64 {
    let magnitude = value.magnitude();
    let bits = magnitude.bits();

    if bits <= 64 {
        magnitude.to_f64().map_or(f64::NAN, f64::ln)
    } else {
        let shift = bits - 64;
        let leading = (magnitude >> shift).to_f64().map_or(f64::NAN, f64::ln);
        leading + shift as f64 * LN_2
    }
}

impl ToPrimitive for Fraction {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        let (numerator, denominator) = self.parts();
        (numerator / denominator).to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        let (numerator, denominator) = self.parts();
        (numerator / denominator).to_i128()
    }

    /// Truncates toward zero.
    fn to_u64(&self) -> Option<u64> {
        let (numerator, denominator) = self.parts();
        (numerator / denominator).to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        let (numerator, denominator) = self.parts();
        (numerator / denominator).to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(self))
    }
}

impl fmt::Display for Fraction {
    /// Written as `numerator/denominator`, also for whole numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numerator, denominator) = self.parts();
        write!(f, "{}/{}", numerator, denominator)
    }
}
