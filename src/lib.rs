//! # Exact rational arithmetic
//!
//! Fractions of arbitrary precision integers, kept in lowest terms. Arithmetic and comparison
//! between them is exact. Results can be read out as a `Decimal` or an `f64`, and decimals can
//! be rounded to a number of fractional digits with one of several rounding modes.
#![warn(missing_docs)]

pub use num_traits::{One, Zero};

pub use error::{ArithmeticError, ArithmeticResult, ParseError};
pub use fraction::{Fraction, over, parse_literal};
pub use rounding::{Round, RoundingMode, round};

pub mod error;
pub mod fraction;
pub mod rounding;
