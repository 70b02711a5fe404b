//! dimr-core: dimensional arbitrary-precision numeric engine
//!
//! This crate provides the pure calculation layer for a unit-aware
//! calculator: arbitrary-precision real and complex arithmetic, a rational
//! exponent vector over the seven SI base dimensions, a unit catalog, and
//! radix-aware formatting. It has no UI dependencies.
//!
//! Undefined operations (division by zero, incompatible dimensions,
//! dimensioned input to a dimensionless-only function) produce NaN-valued
//! quantities that flow through subsequent arithmetic; only malformed
//! literals and out-of-range display requests are reported as errors.
//!
//! # Example
//!
//! ```
//! use dimr_core::{format, units, MathContext, Quantity};
//!
//! let area = units::meter() * units::meter();
//! assert_eq!(format(&area, 'f', -1).unwrap(), "1 meter²");
//!
//! let ctx = MathContext::new();
//! let root = ctx.sqrt(&(Quantity::from(36) * units::second()));
//! assert_eq!(format(&root, 'f', -1).unwrap(), "6 second^(1/2)");
//!
//! // incompatible dimensions are NaN, not a fault
//! let bad = units::candela() + units::second();
//! assert_eq!(format(&bad, 'f', -1).unwrap(), "NaN");
//! ```

pub mod complex;
pub mod dimension;
pub mod error;
pub mod format;
pub mod math;
pub mod quantity;
pub mod rational;
pub mod real;
pub mod settings;
pub mod units;

pub use complex::Complex;
pub use dimension::{BaseDimension, Dimension, BASE_DIMENSIONS};
pub use error::{FormatError, ParseError};
pub use format::{format, format_radix, MAX_PRECISION};
pub use math::MathContext;
pub use quantity::{DisplayUnit, Quantity};
pub use rational::Rational;
pub use real::{Real, WORKING_DIGITS};
pub use settings::{AngleMode, Settings};
