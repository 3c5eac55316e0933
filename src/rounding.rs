//! # Rounding decimals
//!
//! Rounding a `Decimal` to a number of fractional digits. All modes are built from two primitives,
//! one rounding the magnitude up and one rounding it down. Which of the two is applied depends on
//! the sign of the value, or, for the "half" modes, on the discarded part.
use std::fmt;
use std::str::FromStr;

use num_traits::{FromPrimitive, Signed};
use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ArithmeticError, ArithmeticResult};

/// The largest number of fractional digits a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// How to choose between the two candidates closest to a value.
///
/// Each mode has a stable numeric tag, which is the discriminant, and a stable name, which is
/// the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward positive infinity, never decreasing the value.
    Ceiling = 0,
    /// Toward negative infinity, never increasing the value.
    Floor = 1,
    /// Toward zero, truncating the discarded digits.
    Down = 2,
    /// Away from zero, whenever a nonzero part is discarded.
    Up = 3,
    /// To the nearest neighbor, toward zero when both are equally close.
    HalfDown = 4,
    /// To the nearest neighbor, away from zero when both are equally close.
    HalfUp = 5,
    /// To the nearest neighbor, to the even one when both are equally close.
    HalfEven = 6,
    /// To the nearest neighbor, to the odd one when both are equally close.
    HalfOdd = 7,
}

impl RoundingMode {
    /// All modes, ordered by tag.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::HalfDown,
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
    ];

    /// The numeric tag.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// The textual name.
    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::Ceiling => "Ceiling",
            RoundingMode::Floor => "Floor",
            RoundingMode::Down => "Down",
            RoundingMode::Up => "Up",
            RoundingMode::HalfDown => "HalfDown",
            RoundingMode::HalfUp => "HalfUp",
            RoundingMode::HalfEven => "HalfEven",
            RoundingMode::HalfOdd => "HalfOdd",
        }
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = ArithmeticError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(tag))
            .copied()
            .ok_or_else(|| ArithmeticError::UnrecognizedRoundingMode(tag.to_string()))
    }
}

impl FromStr for RoundingMode {
    type Err = ArithmeticError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| ArithmeticError::UnrecognizedRoundingMode(name.to_string()))
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extension of `Decimal` with all rounding modes.
pub trait Round: Sized {
    /// Round to `digits` fractional digits.
    ///
    /// See [`round`].
    fn round_to(self, digits: u32, mode: RoundingMode) -> ArithmeticResult<Self>;
}

impl Round for Decimal {
    fn round_to(self, digits: u32, mode: RoundingMode) -> ArithmeticResult<Self> {
        round(self, digits, mode)
    }
}

/// Round a value to a number of fractional digits.
///
/// # Arguments
///
/// * `value`: Value to round.
/// * `digits`: Number of digits after the point to keep. A value that has no more digits than
/// that, which includes any request beyond what a `Decimal` can hold, is returned unchanged.
/// * `mode`: How to pick between the candidates.
///
/// # Errors
///
/// `Overflow` when shifting the point `digits` positions to the right exceeds the range of a
/// `Decimal`. Only values with discarded digits are shifted, and those always fit.
pub fn round(value: Decimal, digits: u32, mode: RoundingMode) -> ArithmeticResult<Decimal> {
    if digits > MAX_SCALE || value.scale() <= digits {
        return Ok(value);
    }

    let factor = power_of_ten(digits)?;
    let rounded = match mode {
        RoundingMode::Ceiling => if value.is_sign_negative() {
            round_down(value, factor)
        } else {
            round_up(value, factor)
        },
        RoundingMode::Floor => if value.is_sign_negative() {
            round_up(value, factor)
        } else {
            round_down(value, factor)
        },
        RoundingMode::Up => round_up(value, factor),
        RoundingMode::Down => round_down(value, factor),
        RoundingMode::HalfUp | RoundingMode::HalfDown => {
            let discarded = shifted(value, factor)?.fract();
            let half = Decimal::new(5, 1);
            let away_from_zero = match mode {
                RoundingMode::HalfUp => discarded >= half,
                _ => discarded > half,
            };

            if away_from_zero {
                round_up(value, factor)
            } else {
                round_down(value, factor)
            }
        },
        RoundingMode::HalfEven | RoundingMode::HalfOdd => {
            let kept_is_even = (shifted(value, factor)?.floor() % Decimal::from(2)).is_zero();
            let tie_toward_zero = match mode {
                RoundingMode::HalfEven => kept_is_even,
                _ => !kept_is_even,
            };
            let tie_mode = if tie_toward_zero { RoundingMode::HalfDown } else { RoundingMode::HalfUp };

            round(value, digits, tie_mode)
        },
    }?;

    trace!(%value, digits, %mode, %rounded, "rounded");
    Ok(rounded)
}

/// `10^digits` as a decimal, for at most `MAX_SCALE` digits.
fn power_of_ten(digits: u32) -> ArithmeticResult<Decimal> {
    10_i128.checked_pow(digits)
        .and_then(Decimal::from_i128)
        .ok_or(ArithmeticError::Overflow("rounding factor is outside of the decimal range"))
}

/// The absolute value with the point moved to the right by the number of digits in `factor`.
fn shifted(value: Decimal, factor: Decimal) -> ArithmeticResult<Decimal> {
    value.abs()
        .checked_mul(factor)
        .ok_or(ArithmeticError::Overflow("value is too large to round at this many digits"))
}

/// Round the magnitude up, away from zero.
fn round_up(value: Decimal, factor: Decimal) -> ArithmeticResult<Decimal> {
    unshift(value, shifted(value, factor)?.ceil(), factor)
}

/// Round the magnitude down, toward zero.
fn round_down(value: Decimal, factor: Decimal) -> ArithmeticResult<Decimal> {
    unshift(value, shifted(value, factor)?.floor(), factor)
}

/// Move the point back and restore the sign.
fn unshift(value: Decimal, magnitude: Decimal, factor: Decimal) -> ArithmeticResult<Decimal> {
    magnitude.checked_div(factor)
        .map(|unsigned| value.signum() * unsigned)
        .ok_or(ArithmeticError::Overflow("rounded value is outside of the decimal range"))
}
