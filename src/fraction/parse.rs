//! # Literal parsing
//!
//! Reading fractions from decimal text such as `12`, `-0.004` or `4.5E-7`.
//!
//! An exponent is only accepted when it is negative. Whole numbers never need one, because they
//! are read as integers before they would be written in scientific notation.
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::trace;

use crate::error::{ArithmeticResult, ParseError};
use crate::fraction::Fraction;

/// The largest exponent magnitude accepted in a literal. The denominator of `1E-k` is followed by `k` zeros.
const MAX_EXPONENT: u32 = 100_000;

/// Read a decimal literal into a fraction, without loss of precision.
///
/// # Errors
///
/// A `Parse` error when the text is empty, contains something other than digits, a single point,
/// an optional sign and a negative exponent, or when the exponent is positive or exceeds
/// `100 000` in magnitude.
pub fn parse_literal(text: &str) -> ArithmeticResult<Fraction> {
    let raw = Raw::try_from(text).inspect_err(|error| trace!(literal = text, %error, "rejected literal"))?;

    Ok(raw.into())
}

/// Read a decimal integer with an optional sign.
pub(crate) fn parse_integer(text: &str) -> Result<BigInt, ParseError> {
    let (sign, digits) = split_sign(text);
    let magnitude = parse_digits(digits, text)?;

    Ok(match sign {
        Sign::Positive => magnitude,
        Sign::Negative => -magnitude,
    })
}

impl From<Raw> for Fraction {
    fn from(value: Raw) -> Self {
        let Raw { sign, digits, decimal_steps_from_right } = value;

        if digits.is_zero() {
            return Self::zero();
        }

        let signed_numerator = match sign {
            Sign::Positive => digits,
            Sign::Negative => -digits,
        };
        let denominator = BigInt::from(10).pow(decimal_steps_from_right);

        Self::canonical(signed_numerator, denominator)
    }
}

/// Intermediate form of a read number: `sign · digits / 10^decimal_steps_from_right`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub(crate) struct Raw {
    sign: Sign,
    digits: BigInt,
    decimal_steps_from_right: u32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl TryFrom<&str> for Raw {
    type Error = ParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        if text.is_empty() {
            return Err(ParseError::new("empty text is not a number"));
        }

        let (sign, unsigned) = split_sign(text);

        let (mantissa, exponent) = match unsigned.find(['E', 'e']) {
            None => (unsigned, 0),
            Some(index) => (&unsigned[..index], parse_exponent(&unsigned[(index + 1)..], text)?),
        };

        let (integer_part, fractional_part) = match mantissa.find('.') {
            None => (mantissa, ""),
            Some(index) => (&mantissa[..index], &mantissa[(index + 1)..]),
        };
        if integer_part.is_empty() && fractional_part.is_empty() {
            return Err(ParseError::with_literal("there are no digits", text));
        }

        // The point is dropped: all digits together form the numerator.
        let digits = parse_digits(&[integer_part, fractional_part].concat(), text)?;

        let decimal_steps_from_right = u32::try_from(fractional_part.len()).ok()
            .and_then(|from_right| from_right.checked_add(exponent))
            .ok_or_else(|| ParseError::with_literal("too many decimals", text))?;

        Ok(Self { sign, digits, decimal_steps_from_right, })
    }
}

fn split_sign(text: &str) -> (Sign, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (Sign::Negative, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (Sign::Positive, rest)
    } else {
        (Sign::Positive, text)
    }
}

/// Read unsigned decimal digits.
///
/// Leading zeros are not significant; in particular, they don't indicate an octal number.
fn parse_digits(digits: &str, literal: &str) -> Result<BigInt, ParseError> {
    if digits.is_empty() {
        return Err(ParseError::with_literal("expected digits", literal));
    }
    if let Some(unexpected) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseError::with_literal(format!("unexpected character '{}'", unexpected), literal));
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(BigInt::zero());
    }

    BigInt::parse_bytes(significant.as_bytes(), 10)
        .ok_or_else(|| ParseError::with_literal("digits could not be read", literal))
}

/// Read the text after the exponent marker, which has to be a negative integer of magnitude at
/// most `MAX_EXPONENT`.
///
/// # Return value
///
/// The magnitude of the exponent.
fn parse_exponent(text: &str, literal: &str) -> Result<u32, ParseError> {
    let digits = text.strip_prefix('-')
        .ok_or_else(|| ParseError::with_literal("only a negative exponent is supported", literal))?;

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::with_literal("malformed exponent", literal));
    }

    digits.parse().ok()
        .filter(|&exponent| exponent <= MAX_EXPONENT)
        .ok_or_else(|| ParseError::with_literal("exponent is too large", literal))
}
