//! Error types for the engine boundaries.
//!
//! Numeric and dimensional failures are *values* (NaN quantities), not
//! errors; only malformed input and out-of-range display requests are
//! reported through `Result`.

use thiserror::Error;

/// Failure while parsing a numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The literal was empty or contained only a sign.
    #[error("empty numeric literal")]
    Empty,

    /// A character that is not valid in this position.
    #[error("invalid character {0:?} in numeric literal")]
    InvalidChar(char),

    /// Structurally broken literal (e.g. dangling exponent marker).
    #[error("malformed numeric literal {0:?}")]
    Malformed(String),

    /// Radix outside the supported 2..=36 range.
    #[error("unsupported radix {0}, expected 2..=36")]
    InvalidRadix(u32),
}

/// Failure while validating a formatting request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Unknown format character.
    #[error("unknown format character {0:?}")]
    UnknownFormat(char),

    /// Requested precision exceeds the supported maximum.
    #[error("precision {0} exceeds the maximum of {1} fractional digits")]
    PrecisionOverflow(i32, i32),

    /// Radix outside the supported 2..=36 range.
    #[error("unsupported radix {0}, expected 2..=36")]
    RadixOutOfRange(u32),
}
