//! # An exact fraction type
//!
//! A rational number stored as a numerator and denominator of arbitrary size. Every value that can
//! be observed is in lowest terms with a positive denominator, which makes the representation of a
//! number unique: two fractions are equal exactly when their parts are equal.
//!
//! The only exception is a default constructed fraction. It has a zero denominator and is called
//! "undefined". It can be detected with [`Fraction::is_undefined`], and every other operation reads
//! it as zero.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{ArithmeticError, ArithmeticResult};

pub use creation::over;
pub use parse::parse_literal;

mod creation;
mod convert;
mod field;
mod macros;
mod parse;
#[cfg(feature = "serde")]
mod serialization;
mod special;
mod with_integer;

/// Denominator used to read an undefined fraction as zero.
static ONE: LazyLock<BigInt> = LazyLock::new(BigInt::one);

/// An arbitrary precision rational number in canonical form.
///
/// The `Default` value is the undefined fraction `0/0`; use `Fraction::zero()` for zero.
#[derive(Clone, Debug, Default)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a new instance, reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the denominator is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> ArithmeticResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self::canonical(numerator.into(), denominator))
    }

    /// Create a whole number.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self { numerator: value.into(), denominator: BigInt::one(), }
    }

    /// Reduce a numerator and a nonzero denominator to canonical form.
    pub(crate) fn canonical(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        // All forms of zero are alike, and the gcd with zero is not taken.
        if numerator.is_zero() {
            return Self::zero();
        }
        if numerator == denominator {
            return Self::one();
        }

        if !denominator.is_one() {
            let gcd = numerator.gcd(&denominator);
            if !gcd.is_one() {
                numerator /= &gcd;
                denominator /= &gcd;
            }
        }

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self { numerator, denominator, }
    }

    /// The numerator and denominator this value computes with.
    ///
    /// An undefined fraction reads as `0/1`.
    pub(crate) fn parts(&self) -> (&BigInt, &BigInt) {
        if self.denominator.is_zero() {
            (&self.numerator, &*ONE)
        } else {
            (&self.numerator, &self.denominator)
        }
    }

    /// Replace an undefined fraction by zero.
    pub(crate) fn into_defined(self) -> Self {
        if self.denominator.is_zero() {
            Self::zero()
        } else {
            self
        }
    }

    /// The numerator, carrying the sign of the value.
    pub fn numerator(&self) -> &BigInt {
        self.parts().0
    }

    /// The denominator, always positive.
    pub fn denominator(&self) -> &BigInt {
        self.parts().1
    }

    /// Split into numerator and denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        let Self { numerator, denominator } = self.into_defined();
        (numerator, denominator)
    }

    /// Whether the denominator is zero.
    ///
    /// Only a default constructed value is undefined; no constructor or operation produces one.
    pub fn is_undefined(&self) -> bool {
        self.denominator.is_zero()
    }

    /// Whether this value is an integer. The integer may be larger than any primitive type.
    pub fn is_whole(&self) -> bool {
        self.parts().1.is_one()
    }

    /// The sign of the value: -1, 0 or 1.
    pub fn sign(&self) -> i32 {
        match self.numerator.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        let (numerator, denominator) = self.parts();
        Self { numerator: numerator.abs(), denominator: denominator.clone(), }
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when this value is zero.
    pub fn invert(&self) -> ArithmeticResult<Self> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let (numerator, denominator) = self.parts();
        // The sign moves along with the numerator.
        Ok(if numerator.is_negative() {
            Self { numerator: -denominator, denominator: -numerator, }
        } else {
            Self { numerator: denominator.clone(), denominator: numerator.clone(), }
        })
    }

    /// Raise to an integer power.
    ///
    /// Numerator and denominator are raised independently; powers of coprime numbers are coprime,
    /// so no reduction is needed.
    ///
    /// # Errors
    ///
    /// `Domain` for `0^0` and for zero raised to a negative power.
    pub fn pow(&self, exponent: i32) -> ArithmeticResult<Self> {
        if exponent == 0 {
            return if self.is_zero() {
                Err(ArithmeticError::Domain("cannot compute 0^0"))
            } else {
                Ok(Self::one())
            };
        }
        if self.is_zero() && exponent < 0 {
            return Err(ArithmeticError::Domain("cannot raise zero to a negative power"));
        }
        if self.is_zero() || self.is_one() || exponent == 1 {
            return Ok(self.clone().into_defined());
        }

        let base = if exponent < 0 { self.invert()? } else { self.clone() };
        let exponent = exponent.unsigned_abs();

        Ok(Self {
            numerator: base.numerator.pow(exponent),
            denominator: base.denominator.pow(exponent),
        })
    }

    /// Add one.
    pub fn increment(&self) -> Self {
        self.increment_by(1)
    }

    /// Add an integer, as `(a + n·b) / b`.
    pub fn increment_by(&self, n: impl Into<BigInt>) -> Self {
        let n: BigInt = n.into();
        let (numerator, denominator) = self.parts();
        Self::canonical(numerator + denominator * n, denominator.clone())
    }

    /// Subtract one.
    pub fn decrement(&self) -> Self {
        self.decrement_by(1)
    }

    /// Subtract an integer, as `(a - n·b) / b`.
    pub fn decrement_by(&self, n: impl Into<BigInt>) -> Self {
        let n: BigInt = n.into();
        let (numerator, denominator) = self.parts();
        Self::canonical(numerator - denominator * n, denominator.clone())
    }

    /// The largest whole number not greater than this value.
    pub fn floor(&self) -> Self {
        let (numerator, denominator) = self.parts();
        Self::from_integer(numerator.div_floor(denominator))
    }

    /// The smallest whole number not less than this value.
    pub fn ceil(&self) -> Self {
        Self::from_integer(self.ceil_integer())
    }

    fn ceil_integer(&self) -> BigInt {
        let (numerator, denominator) = self.parts();
        -(-numerator).div_floor(denominator)
    }

    /// The floor as a primitive integer.
    ///
    /// # Errors
    ///
    /// `Overflow` if the floor is outside of the range of an `i64`.
    pub fn int_floor(&self) -> ArithmeticResult<i64> {
        let (numerator, denominator) = self.parts();
        numerator.div_floor(denominator)
            .to_i64()
            .ok_or(ArithmeticError::Overflow("floor does not fit into an i64"))
    }

    /// The ceiling as a primitive integer.
    ///
    /// # Errors
    ///
    /// `Overflow` if the ceiling is outside of the range of an `i64`.
    pub fn int_ceiling(&self) -> ArithmeticResult<i64> {
        self.ceil_integer()
            .to_i64()
            .ok_or(ArithmeticError::Overflow("ceiling does not fit into an i64"))
    }

    /// Integer division of numerator by denominator.
    ///
    /// The quotient is truncated toward zero and the remainder has the sign of this value, such
    /// that `quotient + remainder == self` and `|remainder| < 1`.
    pub fn quotient_and_remainder(&self) -> (Self, Self) {
        let (numerator, denominator) = self.parts();
        let (quotient, remainder) = numerator.div_rem(denominator);

        (Self::from_integer(quotient), Self::canonical(remainder, denominator.clone()))
    }

    /// Approximation of π, accurate to about 1e-28.
    pub fn pi() -> Self {
        Self::canonical(
            BigInt::from(2_646_693_125_139_304_345_i64),
            BigInt::from(842_468_587_426_513_207_i64),
        )
    }

    /// Approximation of e, accurate to about 1e-38.
    pub fn e() -> Self {
        let numerator = BigInt::from(10_873_127_313_836_180_941_441_149_885_410_649_991_u128);
        let denominator = BigInt::from(4_u128) * BigInt::from(10_u32).pow(36);
        Self::canonical(numerator, denominator)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.parts() == other.parts()
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts().hash(state);
    }
}

impl Ord for Fraction {
    /// Compare by cross multiplication, without converting to a floating point type.
    ///
    /// Both denominators are positive, so the order of the products is the order of the values.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.parts();
        let (c, d) = other.parts();

        if b == d {
            a.cmp(c)
        } else {
            (a * d).cmp(&(b * c))
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
