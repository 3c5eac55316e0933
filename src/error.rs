//! # Error reporting for exact arithmetic
//!
//! A collection of enums and structures describing the problems that can be encountered while
//! constructing, combining, converting or rounding numbers.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Result type of all fallible operations in this crate.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// An `ArithmeticError` is created when an operation has no well defined result.
///
/// It is the highest error in the error hierarchy. None of the variants are fatal; they are
/// reported to the caller, and no partially constructed value is ever observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A zero denominator was supplied, a value was divided by zero or zero was inverted.
    DivisionByZero,
    /// The operation is not defined for its arguments, such as `0^0`.
    ///
    /// The contained `&str` is a message for the end user.
    Domain(&'static str),
    /// Text or a primitive value could not be read as a number.
    Parse(ParseError),
    /// A fixed width target type can't represent the magnitude of the result.
    ///
    /// This is never caused by arithmetic between arbitrary precision values, only by a
    /// conversion into a bounded type such as `i64` or `Decimal`.
    Overflow(&'static str),
    /// A rounding mode tag or name is not one of the known modes.
    UnrecognizedRoundingMode(String),
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
            ArithmeticError::Domain(message) => write!(f, "domain error: {}", message),
            ArithmeticError::Parse(error) => error.fmt(f),
            ArithmeticError::Overflow(message) => write!(f, "overflow: {}", message),
            ArithmeticError::UnrecognizedRoundingMode(mode) => {
                write!(f, "rounding mode \"{}\" is not recognized", mode)
            },
        }
    }
}

impl Error for ArithmeticError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArithmeticError::Parse(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ParseError> for ArithmeticError {
    fn from(error: ParseError) -> Self {
        ArithmeticError::Parse(error)
    }
}

/// Text that could not be read as a number.
///
/// Errors are layered: a caller can wrap the error of a lower level reader with a description of
/// what it was trying to read. The innermost error usually remembers the offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    description: String,
    cause: Option<Cause>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cause {
    Text(String),
    Inner(Box<ParseError>),
}

impl ParseError {
    /// An error without further context.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), cause: None, }
    }

    /// An error about a specific piece of text.
    ///
    /// # Arguments
    ///
    /// * `description`: What is wrong with the text.
    /// * `text`: The complete text that was being read.
    pub fn with_literal(description: impl Into<String>, text: &str) -> Self {
        Self { description: description.into(), cause: Some(Cause::Text(text.to_string())), }
    }

    /// Add context to an error of a lower level reader.
    ///
    /// # Arguments
    ///
    /// * `description`: What was being read.
    /// * `inner`: Why that failed.
    pub fn with_cause(description: impl Into<String>, inner: ParseError) -> Self {
        Self { description: description.into(), cause: Some(Cause::Inner(Box::new(inner))), }
    }

    /// The description of this layer only.
    pub fn description(&self) -> &str {
        &self.description
    }

    fn write_layers(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.description)?;

        match &self.cause {
            None => Ok(()),
            Some(Cause::Text(text)) => write!(f, ": while reading \"{}\"", text),
            Some(Cause::Inner(inner)) => {
                f.write_str(": ")?;
                inner.write_layers(f)
            },
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ParseError: ")?;
        self.write_layers(f)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(Cause::Inner(inner)) => Some(inner.as_ref()),
            _ => None,
        }
    }
}
